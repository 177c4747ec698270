//! Error types for the probability utilities.
//!
//! Every precondition violation is reported as a structured error rather than
//! a panic. Nothing retries or substitutes a default: the failing call returns
//! before producing any partial result.

use thiserror::Error;

/// Top-level error type for all operations in the library.
///
/// Each variant corresponds to a specific failure domain:
/// - Vector: indexing, slicing, recycling and tabulation
/// - Sampler: sample sizes and population bounds
/// - Combinatorics: results that do not fit in 64 bits
/// - Sequence: degenerate step or non-finite endpoints
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Vector operation rejected its input
    #[error("vector error: {0}")]
    Vector(#[from] VectorError),

    /// Sampling request is not satisfiable
    #[error("sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Combinatorial result overflowed
    #[error("combinatorics error: {0}")]
    Combinatorics(#[from] CombinatoricsError),

    /// Sequence parameters are invalid
    #[error("sequence error: {0}")]
    Sequence(#[from] SequenceError),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value failed a documented precondition.
    InvalidArgument,
    /// The mathematically correct result is not representable.
    Overflow,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Combinatorics(_) => ErrorKind::Overflow,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Vector errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    /// Operation needs at least one element
    #[error("vector is empty for operation: {operation}")]
    Empty { operation: &'static str },

    /// Source sequence contained an absent element
    #[error("values must not contain missing entries (position {position})")]
    MissingValue { position: usize },

    /// 1-based index outside `[1, length]`
    #[error("index must be in [1, {length}], got: {index}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Slice bounds outside the vector or reversed
    #[error("slice bounds must be within [1, {length}] and from <= to, got: {from}..={to}")]
    InvalidSlice { from: usize, to: usize, length: usize },

    /// Neither length tiles the longer one
    #[error("lengths {left} and {right} are not compatible for recycling")]
    IncompatibleLengths { left: usize, right: usize },

    /// Recycle target is not a whole number of copies
    #[error("target length {target} is not a multiple of vector length {length}")]
    NotAMultiple { target: usize, length: usize },

    /// Tabulation found nothing to count
    #[error("no values >= 1 to tabulate")]
    NothingToTabulate,

    /// Tabulation would need more bins than `MAX_TABULATE_BINS`
    #[error("value at position {position} needs too many bins to tabulate")]
    UnboundedTabulation { position: usize },
}

/// Sampling errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// Population upper bound must be at least 1
    #[error("n must be positive, got: {n}")]
    NonPositivePopulation { n: usize },

    /// Sampling from an empty collection
    #[error("xs must not be empty when k is positive")]
    EmptyPopulation,

    /// Without replacement, cannot draw more than the range holds
    #[error("k cannot be greater than n, got k={k}, n={n}")]
    SampleExceedsRange { k: usize, n: usize },

    /// Without replacement, cannot draw more than the collection holds
    #[error("k cannot be greater than xs size, got k={k}, size={size}")]
    SampleExceedsCollection { k: usize, size: usize },
}

/// Combinatorics errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombinatoricsError {
    /// `n!` does not fit in a `u64`
    #[error("factorial overflow: n must be <= 20, got: {n}")]
    FactorialOverflow { n: u32 },

    /// `C(n, k)` does not fit in a `u64`
    #[error("binomial coefficient overflow for n={n}, k={k}")]
    ChooseOverflow { n: u32, k: u32 },
}

/// Sequence errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// Step of exactly zero never terminates
    #[error("step must be non-zero")]
    ZeroStep,

    /// NaN or infinite endpoint or step
    #[error("{name} must be finite, got: {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Sequence would hold more than `MAX_SEQUENCE_LENGTH` values
    #[error("sequence of {length} values is too long")]
    TooLong { length: f64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
