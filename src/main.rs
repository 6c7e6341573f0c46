mod deck;
mod report;
mod rng;
mod simulation;

use clap::{Parser, Subcommand};
use report::{run_report, ReportLine};
use simulation::policy::Policy;
use simulation::runner::run_trials;

#[derive(Parser)]
#[command(name = "flip7-sim")]
#[command(about = "Flip 7 Monte Carlo Simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of simulated rounds per policy
    #[arg(short, long, default_value = "10000")]
    trials: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single policy instead of the full report
    Run {
        /// Policy to simulate: "flips", "score", or "bank:N" (N in 1..=6)
        #[arg(short, long)]
        policy: String,

        /// Number of simulated rounds
        #[arg(short, long, default_value = "10000")]
        trials: usize,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { policy, trials, seed }) => {
            let policy: Policy = match policy.parse() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("✗ {}", e);
                    std::process::exit(1);
                }
            };
            run_single_policy(policy, trials, seed);
        }
        None => print_full_report(cli.trials, cli.seed),
    }
}

fn print_full_report(trials: usize, seed: Option<u64>) {
    eprintln!("Rounds per policy: {}", trials);
    if let Some(s) = seed {
        eprintln!("Seed: {}", s);
    }

    let start = std::time::Instant::now();
    let lines = run_report(trials, seed);
    let elapsed = start.elapsed();

    for line in &lines {
        println!("{}", line);
    }

    let total_rounds = trials * lines.len();
    eprintln!(
        "Simulation completed in {:.2?} ({:.0} rounds/sec)",
        elapsed,
        total_rounds as f64 / elapsed.as_secs_f64()
    );
}

fn run_single_policy(policy: Policy, trials: usize, seed: Option<u64>) {
    let line = ReportLine {
        label: policy.label(),
        average: run_trials(policy, trials, seed),
    };
    println!("{}", line);
}
