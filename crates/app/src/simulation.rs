//! Monte Carlo simulation capability.

use probability_core::{Result, Vector};

/// A repeatable experiment estimating the probability of an event.
pub trait Simulation {
    /// Short human-readable name.
    fn name(&self) -> &'static str;

    /// Analytic probability, when one is known.
    fn expected(&self) -> Option<f64> {
        None
    }

    /// Run every trial and report the outcome.
    fn run(&mut self) -> Result<Estimate>;
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Trials performed
    pub trials: usize,

    /// Trials in which the event occurred
    pub hits: usize,

    /// Per-trial statistic histogram; bin `j` counts trials whose statistic
    /// was `j - 1`
    pub distribution: Vector,
}

impl Estimate {
    /// Fraction of trials in which the event occurred.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.hits as f64 / self.trials as f64
        }
    }

    /// Mean of the per-trial statistic recorded in `distribution`.
    pub fn mean_statistic(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        let weighted: f64 = self
            .distribution
            .iter()
            .enumerate()
            .map(|(j, count)| j as f64 * count)
            .sum();
        weighted / self.trials as f64
    }
}
