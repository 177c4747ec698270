//! probability-sim: Monte Carlo estimate of the matching problem.
//!
//! Shuffles a deck of numbered cards many times and estimates the chance that
//! at least one card lands on its own position, then compares the estimate
//! with the exact value (about `1 - 1/e`).
//!
//! ```bash
//! probability-sim --seed 42 --cards 100 --trials 10000
//! probability-sim --seed 42 --no-report --export
//! ```

mod config;
mod matching;
mod report;
mod simulation;

use config::{Command, Config, Verbosity};
use matching::MatchingProblem;
use report::Report;
use simulation::Simulation;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            config::print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    setup_logging(config.verbosity);

    if config.print_config {
        config.print();
    }

    info!(
        seed = config.seed,
        cards = config.cards,
        trials = config.trials,
        "starting simulation"
    );

    let mut sim = MatchingProblem::seeded(config.cards, config.trials, config.seed);
    let report = match run(&mut sim) {
        Ok(report) => report,
        Err(e) => {
            error!("simulation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Estimated probability: {}", report.probability());
    info!("Expected (1 - 1/e): {}", 1.0 - (-1.0_f64).exp());

    if config.print_report {
        report.print_summary();
    }
    if config.export {
        print!("{}", report.export_text());
    }

    ExitCode::SUCCESS
}

fn run(sim: &mut dyn Simulation) -> probability_core::Result<Report> {
    let mut report = Report::start(sim.name(), sim.expected());
    let estimate = sim.run()?;
    report.complete(estimate);
    Ok(report)
}

fn setup_logging(verbosity: Verbosity) {
    let level = match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "info",
        Verbosity::Verbose => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
