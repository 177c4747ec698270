//! Factorials and binomial coefficients, exact and logarithmic.
//!
//! Mirrors R's `factorial`, `choose`, `lfactorial` and `lchoose`. The exact
//! forms fail instead of wrapping when the result leaves `u64`; the log forms
//! never overflow.

use crate::error::{CombinatoricsError, Result};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL: u32 = 20;

/// `n!`
///
/// # Errors
/// `n > 20`.
pub fn factorial(n: u32) -> Result<u64> {
    if n > MAX_FACTORIAL {
        return Err(CombinatoricsError::FactorialOverflow { n }.into());
    }
    Ok((1..=u64::from(n)).product())
}

/// Binomial coefficient `C(n, k)`; 0 when `k > n`.
///
/// Uses the multiplicative formula over `min(k, n - k)` terms. Each partial
/// product is itself a binomial coefficient, so the division is always exact.
///
/// # Errors
/// Result larger than `u64::MAX`.
pub fn choose(n: u32, k: u32) -> Result<u64> {
    if k > n {
        return Ok(0);
    }
    if k == 0 || k == n {
        return Ok(1);
    }

    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        result = result * u128::from(n - i) / u128::from(i + 1);
        if result > u128::from(u64::MAX) {
            return Err(CombinatoricsError::ChooseOverflow { n, k }.into());
        }
    }
    Ok(result as u64)
}

/// `ln(n!)`
pub fn log_factorial(n: u32) -> f64 {
    (2..=n).map(|i| f64::from(i).ln()).sum()
}

/// `ln(C(n, k))`; negative infinity when `k > n`.
pub fn log_choose(n: u32, k: u32) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    log_factorial(n) - log_factorial(k) - log_factorial(n - k)
}
