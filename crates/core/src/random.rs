//! Uniform integer source used by the sampler.
//!
//! Sampling algorithms only ever need bounded uniform integer draws, so they
//! depend on the small [`RandomSource`] capability instead of a concrete
//! generator. Every [`rand::Rng`] satisfies it, including `&mut R`, which lets a
//! caller lend a generator to a [`Sampler`](crate::sampler::Sampler) and keep
//! using it afterwards.
//!
//! # Determinism
//!
//! [`seeded_rng`] returns a ChaCha8 generator. Given the same seed and the same
//! sequence of calls, outputs are bit-identical across runs and platforms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw uniformly from `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn next_int(&mut self, bound: usize) -> usize;

    /// Draw uniformly from `[origin, bound)`.
    ///
    /// Callers guarantee `origin < bound`.
    fn next_int_in(&mut self, origin: usize, bound: usize) -> usize {
        origin + self.next_int(bound - origin)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }

    fn next_int_in(&mut self, origin: usize, bound: usize) -> usize {
        self.gen_range(origin..bound)
    }
}

/// The default deterministic generator.
pub type SeededRng = ChaCha8Rng;

/// Create the default deterministic generator for a seed.
pub fn seeded_rng(seed: u64) -> SeededRng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cycles through a fixed script of raw draws, reduced modulo the bound.
    struct Scripted {
        script: Vec<usize>,
        pos: usize,
    }

    impl RandomSource for Scripted {
        fn next_int(&mut self, bound: usize) -> usize {
            let v = self.script[self.pos % self.script.len()];
            self.pos += 1;
            v % bound
        }
    }

    #[test]
    fn test_seeded_rng_deterministic() {
        let mut rng1 = seeded_rng(42);
        let mut rng2 = seeded_rng(42);
        let vals1: Vec<usize> = (0..20).map(|_| rng1.next_int(1000)).collect();
        let vals2: Vec<usize> = (0..20).map(|_| rng2.next_int(1000)).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_next_int_bounds() {
        let mut rng = seeded_rng(7);
        for _ in 0..1000 {
            assert!(rng.next_int(3) < 3);
            let v = rng.next_int_in(5, 8);
            assert!((5..8).contains(&v));
        }
        assert_eq!(rng.next_int(1), 0);
    }

    #[test]
    fn test_borrowed_rng_is_a_source() {
        let mut rng = seeded_rng(1);
        let borrowed = &mut rng;
        let v = borrowed.next_int(10);
        assert!(v < 10);
    }

    #[test]
    fn test_default_next_int_in_offsets_origin() {
        let mut src = Scripted {
            script: vec![0, 1, 2],
            pos: 0,
        };
        assert_eq!(src.next_int_in(10, 13), 10);
        assert_eq!(src.next_int_in(10, 13), 11);
        assert_eq!(src.next_int_in(10, 13), 12);
    }
}
