use std::str::FromStr;

use thiserror::Error;

use crate::rng::SimRng;
use crate::simulation::engine::{
    simulate_banking_after_n, simulate_score_before_duplicate, simulate_unique_flips,
};

/// Drawing strategy for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Count unique cards in hand before a bust or a full unique set.
    UniqueFlips,
    /// Sum unique card values in hand before a bust or a full unique set.
    ScoreBeforeDuplicate,
    /// Bank voluntarily after n unique cards, unless a bust or a completed
    /// set comes first.
    BankingAfter(u32),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyParseError {
    #[error("unknown policy '{0}', expected 'flips', 'score', or 'bank:N'")]
    Unknown(String),
    #[error("'{0}' is not a valid bank target")]
    InvalidBankTarget(String),
    #[error("bank target must be between 1 and 6, got {0}")]
    BankTargetOutOfRange(u32),
}

impl Policy {
    /// Simulate one round under this policy.
    pub fn simulate(&self, rng: &mut SimRng) -> u32 {
        match self {
            Policy::UniqueFlips => simulate_unique_flips(rng),
            Policy::ScoreBeforeDuplicate => simulate_score_before_duplicate(rng),
            Policy::BankingAfter(n) => simulate_banking_after_n(rng, *n),
        }
    }

    /// Label used for this policy's report line.
    pub fn label(&self) -> String {
        match self {
            Policy::UniqueFlips => "Average hand size BEFORE busting or 7 unique".to_string(),
            Policy::ScoreBeforeDuplicate => "Average score BEFORE busting or 7 unique".to_string(),
            Policy::BankingAfter(n) => {
                format!("Average score when planning to bank after {} card(s) drawn", n)
            }
        }
    }

    /// The eight policies of the full report, in print order.
    pub fn report_set() -> Vec<Policy> {
        let mut policies = vec![Policy::UniqueFlips, Policy::ScoreBeforeDuplicate];
        policies.extend((1..=6).map(Policy::BankingAfter));
        policies
    }
}

impl FromStr for Policy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flips" => Ok(Policy::UniqueFlips),
            "score" => Ok(Policy::ScoreBeforeDuplicate),
            other => match other.strip_prefix("bank:") {
                Some(target) => {
                    let n: u32 = target
                        .parse()
                        .map_err(|_| PolicyParseError::InvalidBankTarget(target.to_string()))?;
                    if !(1..=6).contains(&n) {
                        return Err(PolicyParseError::BankTargetOutOfRange(n));
                    }
                    Ok(Policy::BankingAfter(n))
                }
                None => Err(PolicyParseError::Unknown(other.to_string())),
            },
        }
    }
}
