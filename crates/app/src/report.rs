//! Run report for a simulation.
//!
//! Collects timing, the estimate and the analytic answer so a run can be
//! summarized for a human or exported as `key=value` lines for scripts.

use crate::simulation::Estimate;
use std::time::{Duration, Instant};

/// Number of distribution bins shown in the summary.
const SUMMARY_BINS: usize = 6;

/// Everything worth reporting about one simulation run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Simulation name
    pub name: &'static str,

    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    /// Outcome, once the run has finished
    pub estimate: Option<Estimate>,

    /// Analytic probability, if known
    pub expected: Option<f64>,
}

impl Report {
    /// Start a report with the clock running.
    pub fn start(name: &'static str, expected: Option<f64>) -> Self {
        Self {
            name,
            start_time: Instant::now(),
            end_time: None,
            estimate: None,
            expected,
        }
    }

    /// Record the outcome and stop the clock.
    pub fn complete(&mut self, estimate: Estimate) {
        self.estimate = Some(estimate);
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Estimated probability; 0.0 before completion.
    pub fn probability(&self) -> f64 {
        self.estimate.as_ref().map_or(0.0, Estimate::probability)
    }

    /// |estimate - expected|, when both are known.
    pub fn absolute_error(&self) -> Option<f64> {
        let estimate = self.estimate.as_ref()?;
        self.expected.map(|e| (estimate.probability() - e).abs())
    }

    /// Compute trial throughput in trials/second.
    pub fn trials_per_sec(&self) -> f64 {
        let secs = self.duration().as_secs_f64();
        match &self.estimate {
            Some(estimate) if secs > 0.0 => estimate.trials as f64 / secs,
            _ => 0.0,
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== {} ===", self.name);
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        let Some(estimate) = &self.estimate else {
            println!("(no result)");
            return;
        };

        println!("Trials:   {}", estimate.trials);
        println!("Hits:     {}", estimate.hits);
        println!("Estimate: {:.4}", estimate.probability());
        if let Some(expected) = self.expected {
            println!("Expected: {:.4}", expected);
        }
        if let Some(error) = self.absolute_error() {
            println!("Error:    {:.4}", error);
        }
        println!();

        println!("=== Distribution ===");
        for (j, count) in estimate.distribution.iter().take(SUMMARY_BINS).enumerate() {
            println!(
                "{:>2}: {:>8} ({:.2}%)",
                j,
                count,
                count / estimate.trials as f64 * 100.0
            );
        }
        let rest: f64 = estimate.distribution.iter().skip(SUMMARY_BINS).sum();
        if rest > 0.0 {
            println!("{:>2}+: {:>7}", SUMMARY_BINS, rest);
        }
        println!("Mean: {:.4}", estimate.mean_statistic());
        println!();

        println!("=== Performance ===");
        println!("Throughput: {:.0} trials/s", self.trials_per_sec());
        println!();
    }

    /// Export the report as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        let (trials, hits) = self
            .estimate
            .as_ref()
            .map_or((0, 0), |e| (e.trials, e.hits));
        let mut text = format!(
            "name={}\n\
             duration_ms={}\n\
             trials={}\n\
             hits={}\n\
             estimate={:.4}\n",
            self.name,
            self.duration().as_millis(),
            trials,
            hits,
            self.probability(),
        );
        if let Some(expected) = self.expected {
            text.push_str(&format!("expected={:.4}\n", expected));
        }
        if let Some(error) = self.absolute_error() {
            text.push_str(&format!("abs_error={:.4}\n", error));
        }
        text
    }
}
