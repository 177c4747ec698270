//! probability-core: small statistical utilities in the style of R
//!
//! This library provides:
//! - Sampling with and without replacement, over integer ranges or slices
//! - Uniform random permutations via a Fisher-Yates shuffle
//! - An immutable numeric vector with 1-based indexing and recycling arithmetic
//! - Factorials and binomial coefficients, exact and logarithmic
//! - Sequence helpers (`from:to`, `seq`, `rep`, `c`)
//!
//! # Architecture
//!
//! - `random`: the `RandomSource` capability and the seeded default generator
//! - `sampler`: sampling and permutations driven by a `RandomSource`
//! - `vector`: the `Vector` type
//! - `combinatorics`, `sequence`: stateless helpers
//! - `error`: structured errors for every precondition
//!
//! # Design Principles
//!
//! - **No panics on bad input**: every precondition is checked up front
//! - **Immutable values**: vector operations return new vectors
//! - **Deterministic**: a seeded source reproduces every draw
//!
//! # Example
//! ```
//! use probability_core::{Sampler, Vector};
//!
//! let mut sampler = Sampler::seeded(7);
//! let rolls = sampler.sample_with_replacement(6, 600).unwrap();
//! let counts = Vector::new(rolls.iter().map(|&r| r as f64)).tabulate().unwrap();
//! assert_eq!(counts.len(), 6);
//! assert_eq!(counts.sum(), 600.0);
//! ```

pub mod combinatorics;
pub mod error;
pub mod random;
pub mod sampler;
pub mod sequence;
pub mod vector;

// Re-export commonly used types
pub use error::{Error, ErrorKind, Result};
pub use random::RandomSource;
pub use sampler::Sampler;
pub use vector::Vector;
