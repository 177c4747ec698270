//! The matching problem (hat-check problem).
//!
//! `n` cards numbered 1..=n are shuffled and dealt into positions 1..=n. A
//! trial is a hit when at least one card lands on its own position. As `n`
//! grows the probability converges to `1 - 1/e ≈ 0.632`.
//!
//! Besides the hit rate, each run tabulates how many cards matched per trial;
//! that count is approximately Poisson(1), with mean exactly 1.

use crate::simulation::{Estimate, Simulation};
use probability_core::random::SeededRng;
use probability_core::{RandomSource, Result, Sampler, Vector};
use tracing::debug;

/// Matching-problem simulation over a seeded sampler.
pub struct MatchingProblem<R> {
    cards: usize,
    trials: usize,
    sampler: Sampler<R>,
}

impl MatchingProblem<SeededRng> {
    /// Create a deterministic simulation.
    pub fn seeded(cards: usize, trials: usize, seed: u64) -> Self {
        Self::new(cards, trials, Sampler::seeded(seed))
    }
}

impl<R: RandomSource> MatchingProblem<R> {
    /// Create a simulation driven by an existing sampler.
    pub fn new(cards: usize, trials: usize, sampler: Sampler<R>) -> Self {
        Self {
            cards,
            trials,
            sampler,
        }
    }

    /// Exact probability that a uniform permutation of `n` has a fixed point.
    ///
    /// `1 - sum_{j=0..=n} (-1)^j / j!`
    pub fn exact_probability(n: usize) -> f64 {
        let mut term = 1.0;
        let mut derangements = 1.0;
        for j in 1..=n {
            term *= -1.0 / j as f64;
            derangements += term;
        }
        1.0 - derangements
    }

    /// Number of cards that landed on their own 1-based position.
    fn fixed_points(&mut self) -> Result<usize> {
        let deal = self.sampler.permutation(self.cards)?;
        Ok(deal
            .iter()
            .enumerate()
            .filter(|&(position, &card)| card == position + 1)
            .count())
    }
}

impl<R: RandomSource> Simulation for MatchingProblem<R> {
    fn name(&self) -> &'static str {
        "matching problem"
    }

    fn expected(&self) -> Option<f64> {
        Some(Self::exact_probability(self.cards))
    }

    fn run(&mut self) -> Result<Estimate> {
        let mut per_trial = Vec::with_capacity(self.trials);
        for _ in 0..self.trials {
            per_trial.push(self.fixed_points()?);
        }

        let hits = per_trial.iter().filter(|&&matched| matched > 0).count();
        debug!(
            cards = self.cards,
            trials = self.trials,
            hits,
            "matching simulation finished"
        );

        // Shift by one so that zero matches still lands in a bin.
        let distribution = Vector::new(per_trial.iter().map(|&m| (m + 1) as f64)).tabulate()?;

        Ok(Estimate {
            trials: self.trials,
            hits,
            distribution,
        })
    }
}
