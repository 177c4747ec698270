//! Sampling with and without replacement, and random permutations.
//!
//! A [`Sampler`] is bound to one [`RandomSource`] for its lifetime. It keeps
//! no state of its own between calls; each call only advances the generator.
//!
//! # Algorithm
//!
//! Every without-replacement operation materializes the whole population,
//! shuffles all of it with the Fisher-Yates (Durstenfeld) shuffle and keeps the
//! first `k` elements. This costs O(n) time and space even for small `k`, and
//! the output order for a given generator state depends only on `n`, not `k`.
//!
//! # Thread Safety
//! Not thread-safe; use one sampler (or generator) per thread.

use crate::error::{Result, SamplerError};
use crate::random::{seeded_rng, RandomSource, SeededRng};
use tracing::trace;

/// The 26 lowercase ASCII letters, in order.
pub const LETTERS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Sampling engine driven by a single random source.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
}

impl Sampler<SeededRng> {
    /// Create a sampler over a fresh ChaCha8 generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(seeded_rng(seed))
    }
}

impl<R: RandomSource> Sampler<R> {
    /// Create a sampler over the given source.
    ///
    /// Pass `&mut rng` to keep ownership of the generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the underlying source.
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draw `k` integers uniformly from `[1, n]`, duplicates allowed.
    ///
    /// # Errors
    /// `n == 0`.
    pub fn sample_with_replacement(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        validate_n(n)?;
        trace!(n, k, "sampling range with replacement");
        Ok((0..k).map(|_| self.rng.next_int(n) + 1).collect())
    }

    /// Draw `k` elements uniformly from `xs`, duplicates allowed.
    ///
    /// `k == 0` always succeeds, even for an empty `xs`.
    ///
    /// # Errors
    /// `k > 0` and `xs` is empty.
    pub fn sample_from_with_replacement<T: Clone>(&mut self, xs: &[T], k: usize) -> Result<Vec<T>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if xs.is_empty() {
            return Err(SamplerError::EmptyPopulation.into());
        }
        trace!(size = xs.len(), k, "sampling collection with replacement");
        Ok((0..k)
            .map(|_| xs[self.rng.next_int(xs.len())].clone())
            .collect())
    }

    /// Draw `k` distinct integers from `[1, n]` in random order.
    ///
    /// # Errors
    /// `n == 0` or `k > n`.
    pub fn sample_without_replacement(&mut self, n: usize, k: usize) -> Result<Vec<usize>> {
        validate_n(n)?;
        if k > n {
            return Err(SamplerError::SampleExceedsRange { k, n }.into());
        }
        trace!(n, k, "sampling range without replacement");
        let mut values = self.shuffled_range(n);
        values.truncate(k);
        Ok(values)
    }

    /// Draw `k` elements from distinct positions of `xs` in random order.
    ///
    /// `k == 0` always succeeds, even for an empty `xs`.
    ///
    /// # Errors
    /// `k > 0` and `xs` is empty, or `k > xs.len()`.
    pub fn sample_from_without_replacement<T: Clone>(
        &mut self,
        xs: &[T],
        k: usize,
    ) -> Result<Vec<T>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        if xs.is_empty() {
            return Err(SamplerError::EmptyPopulation.into());
        }
        if k > xs.len() {
            return Err(SamplerError::SampleExceedsCollection { k, size: xs.len() }.into());
        }
        trace!(size = xs.len(), k, "sampling collection without replacement");
        let mut values = xs.to_vec();
        self.shuffle(&mut values);
        values.truncate(k);
        Ok(values)
    }

    /// Return `1..=n` in uniformly random order.
    ///
    /// # Errors
    /// `n == 0`.
    pub fn permutation(&mut self, n: usize) -> Result<Vec<usize>> {
        validate_n(n)?;
        trace!(n, "drawing permutation");
        Ok(self.shuffled_range(n))
    }

    /// Fisher-Yates (Durstenfeld) in-place shuffle.
    ///
    /// Walks from the last position down to the second, swapping each with a
    /// uniformly chosen position at or before it. Every one of the `m!`
    /// orderings is equally likely when the source is uniform.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_int(i + 1);
            slice.swap(i, j);
        }
    }

    fn shuffled_range(&mut self, n: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (1..=n).collect();
        self.shuffle(&mut values);
        values
    }
}

fn validate_n(n: usize) -> Result<()> {
    if n == 0 {
        return Err(SamplerError::NonPositivePopulation { n }.into());
    }
    Ok(())
}
