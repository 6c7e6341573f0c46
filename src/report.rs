use std::fmt;

use crate::simulation::policy::Policy;
use crate::simulation::runner::run_trials;

/// One labeled line of the aggregate report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub label: String,
    pub average: f64,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.average)
    }
}

/// Run every report policy for `trials` rounds each and collect the lines
/// in print order: hand size, score, then banking after 1..=6 cards.
pub fn run_report(trials: usize, seed: Option<u64>) -> Vec<ReportLine> {
    Policy::report_set()
        .into_iter()
        .map(|policy| ReportLine {
            label: policy.label(),
            average: run_trials(policy, trials, seed),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_display() {
        let line = ReportLine {
            label: "Average hand size BEFORE busting or 7 unique".to_string(),
            average: 3.5,
        };
        assert_eq!(
            line.to_string(),
            "Average hand size BEFORE busting or 7 unique: 3.5"
        );
    }

    #[test]
    fn test_report_has_one_line_per_policy() {
        let lines = run_report(10, Some(1));
        assert_eq!(lines.len(), 8);
    }
}
