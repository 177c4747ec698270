//! Configuration for the simulation driver.
//!
//! Handles parsing command-line arguments and filling in defaults.
//!
//! # Philosophy
//!
//! The tool should work with ZERO arguments. When no seed is given one is
//! derived from the clock and printed, so any run can be reproduced.

use std::time::{SystemTime, UNIX_EPOCH};

/// Default number of cards per trial.
pub const DEFAULT_CARDS: usize = 100;

/// Default number of trials.
pub const DEFAULT_TRIALS: usize = 10_000;

/// How much the driver logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// Complete configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // === Simulation ===
    /// Cards shuffled per trial
    pub cards: usize,

    /// Number of independent trials
    pub trials: usize,

    /// Random seed for the sampler
    pub seed: u64,

    // === Behavior ===
    /// Whether to print the resolved configuration
    pub print_config: bool,

    /// Whether to print the run report
    pub print_report: bool,

    /// Whether to print the report as `key=value` lines
    pub export: bool,

    /// Log level selection
    pub verbosity: Verbosity,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    ///
    /// If --seed is provided, the whole run is deterministic.
    pub fn from_args(args: &[String]) -> Result<Command, String> {
        let mut cards: Option<usize> = None;
        let mut trials: Option<usize> = None;
        let mut seed: Option<u64> = None;
        let mut print_config = false;
        let mut print_report = true;
        let mut export = false;
        let mut verbosity = Verbosity::Normal;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--cards" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--cards requires a number".to_string());
                    }
                    cards = Some(args[i].parse().map_err(|_| "invalid cards")?);
                }
                "--trials" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--trials requires a number".to_string());
                    }
                    trials = Some(args[i].parse().map_err(|_| "invalid trials")?);
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--print-config" => {
                    print_config = true;
                }
                "--no-report" => {
                    print_report = false;
                }
                "--export" => {
                    export = true;
                }
                "--verbose" | "-v" => {
                    verbosity = Verbosity::Verbose;
                }
                "--quiet" | "-q" => {
                    verbosity = Verbosity::Quiet;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let cards = cards.unwrap_or(DEFAULT_CARDS);
        if cards == 0 {
            return Err("--cards must be positive".to_string());
        }
        let trials = trials.unwrap_or(DEFAULT_TRIALS);
        if trials == 0 {
            return Err("--trials must be positive".to_string());
        }

        Ok(Command::Run(Config {
            cards,
            trials,
            seed: seed.unwrap_or_else(clock_seed),
            print_config,
            print_report,
            export,
            verbosity,
        }))
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        println!("Seed:   {}", self.seed);
        println!("Cards:  {}", self.cards);
        println!("Trials: {}", self.trials);
        println!();
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Print usage.
pub fn print_help() {
    println!("probability-sim: Monte Carlo estimate of the matching (hat-check) problem");
    println!();
    println!("USAGE:");
    println!("    probability-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --cards <N>       Cards per trial (default: {DEFAULT_CARDS})");
    println!("    --trials <N>      Number of trials (default: {DEFAULT_TRIALS})");
    println!("    --seed <N>        Random seed for determinism (default: from clock)");
    println!();
    println!("    --print-config    Print resolved configuration");
    println!("    --no-report       Don't print the run report");
    println!("    --export          Print the report as key=value lines");
    println!("    --verbose, -v     Debug logging");
    println!("    --quiet, -q       Errors only");
    println!("    --help, -h        Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    probability-sim                          # 100 cards, 10000 trials");
    println!("    probability-sim --seed 42                # Deterministic run");
    println!("    probability-sim --cards 5 --trials 1000  # Small deck");
    println!();
}
