//! Sequence generation in the style of R's `:`, `seq`, `rep` and `c`.

use crate::error::{Result, SequenceError};

/// Longest sequence `seq_by` will build.
pub const MAX_SEQUENCE_LENGTH: usize = 1 << 28;

/// Slack for steps that land on `to` up to rounding.
const STEP_FUZZ: f64 = 1e-10;

/// Inclusive integer range, counting down when `from > to` (R's `from:to`).
pub fn range(from: i64, to: i64) -> Vec<i64> {
    if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    }
}

/// `from, from + step, ...` while not past `to` (R's `seq(from, to, by)`).
///
/// `to` is included when a whole number of steps lands on it (up to rounding).
/// A step pointing away from `to` yields an empty sequence. Element `i` is
/// `from + i * step`, so steps below the precision of `from` still advance.
///
/// # Errors
/// `step == 0`, any argument NaN or infinite, or more than
/// [`MAX_SEQUENCE_LENGTH`] values.
pub fn seq_by(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    for (name, value) in [("from", from), ("to", to), ("step", step)] {
        if !value.is_finite() {
            return Err(SequenceError::NonFinite { name, value }.into());
        }
    }
    if step == 0.0 {
        return Err(SequenceError::ZeroStep.into());
    }
    if (to > from) != (step > 0.0) {
        return Ok(Vec::new());
    }

    let steps = ((to - from) / step + STEP_FUZZ).floor();
    if steps >= MAX_SEQUENCE_LENGTH as f64 {
        return Err(SequenceError::TooLong { length: steps + 1.0 }.into());
    }
    let length = steps as usize + 1;
    Ok((0..length).map(|i| from + i as f64 * step).collect())
}

/// `length` equally spaced values from `from` to `to` (R's `seq(length.out=)`).
pub fn seq_length(from: f64, to: f64, length: usize) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (length - 1) as f64;
            (0..length).map(|i| from + i as f64 * step).collect()
        }
    }
}

/// `1..=n` (R's `seq_len`).
pub fn seq_len(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// `1..=xs.len()` (R's `seq_along`).
pub fn seq_along<T>(xs: &[T]) -> Vec<usize> {
    seq_len(xs.len())
}

/// `value` repeated `times` times (R's `rep(x, times=)` on a scalar).
pub fn rep<T: Clone>(value: T, times: usize) -> Vec<T> {
    vec![value; times]
}

/// Each element of `xs` repeated `each` times in place (R's `rep(xs, each=)`).
pub fn rep_each<T: Clone>(xs: &[T], each: usize) -> Vec<T> {
    xs.iter()
        .flat_map(|x| std::iter::repeat(x).take(each).cloned())
        .collect()
}

/// The whole of `xs` repeated `times` times (R's `rep(xs, times=)`).
pub fn rep_times<T: Clone>(xs: &[T], times: usize) -> Vec<T> {
    std::iter::repeat(xs)
        .take(times)
        .flat_map(|run| run.iter().cloned())
        .collect()
}

/// Concatenate slices in order (R's `c(...)`).
pub fn concat<T: Clone>(lists: &[&[T]]) -> Vec<T> {
    lists.concat()
}
