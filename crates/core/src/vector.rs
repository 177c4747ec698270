//! Immutable numeric vector with 1-based indexing and R-style recycling.
//!
//! Every operation validates its arguments before doing any work and returns
//! a brand-new [`Vector`]; the receiver is never modified.
//!
//! # Indexing
//!
//! Positions run from 1 to `len()`. Index 0 is always out of bounds.
//!
//! # Recycling
//!
//! Binary arithmetic on vectors of unequal length tiles the shorter operand
//! until it matches the longer one. With `L = max(len(a), len(b))`, the
//! operands are compatible only when `L` is a whole multiple of both lengths:
//!
//! ```text
//! [1, 2, 3, 4] + [10, 20]  ->  [11, 22, 13, 24]
//! [1, 2, 3]    + [10, 20]  ->  error (3 is not a multiple of 2)
//! ```
//!
//! # Example
//! ```
//! use probability_core::vector::Vector;
//!
//! let v = Vector::of(&[1.0, 2.0, 3.0, 4.0]);
//! let w = v.multiply(&Vector::of(&[2.0])).unwrap();
//! assert_eq!(w.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
//! assert_eq!(w.at(1).unwrap(), 2.0);
//! ```

use crate::error::{Result, VectorError};
use std::collections::HashSet;
use std::fmt;

/// Largest histogram `tabulate` will allocate.
pub const MAX_TABULATE_BINS: usize = 1 << 24;

/// Ordered, immutable sequence of `f64` values addressed from 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Build a vector by fully consuming `values`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Build a vector by copying a slice.
    pub fn of(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Build a vector from values that may be missing.
    ///
    /// # Errors
    /// Any element is `None`; the error names its 1-based position.
    pub fn from_nullable(values: impl IntoIterator<Item = Option<f64>>) -> Result<Self> {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| v.ok_or(VectorError::MissingValue { position: i + 1 }))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { values })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values in order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Copy the values out.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Arithmetic sum; 0.0 for an empty vector.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    /// Empty vector.
    pub fn mean(&self) -> Result<f64> {
        self.ensure_not_empty("mean")?;
        Ok(self.sum() / self.len() as f64)
    }

    /// Largest element.
    ///
    /// # Errors
    /// Empty vector.
    pub fn max(&self) -> Result<f64> {
        self.ensure_not_empty("max")?;
        Ok(self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Smallest element.
    ///
    /// # Errors
    /// Empty vector.
    pub fn min(&self) -> Result<f64> {
        self.ensure_not_empty("min")?;
        Ok(self.values.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Inclusive 1-based slice `from..=to`.
    ///
    /// # Errors
    /// `from == 0`, `to == 0`, `from > to` or `to > len()`.
    pub fn slice(&self, from: usize, to: usize) -> Result<Self> {
        if from < 1 || to < 1 || from > to || to > self.len() {
            return Err(VectorError::InvalidSlice {
                from,
                to,
                length: self.len(),
            }
            .into());
        }
        Ok(Self::of(&self.values[from - 1..to]))
    }

    /// Element at a 1-based index.
    ///
    /// # Errors
    /// `index` outside `[1, len()]`.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.ensure_valid_index(index)?;
        Ok(self.values[index - 1])
    }

    /// Copy without the element at a 1-based index.
    ///
    /// # Errors
    /// `index` outside `[1, len()]`.
    pub fn exclude_index(&self, index: usize) -> Result<Self> {
        self.ensure_valid_index(index)?;
        let mut values = self.values.clone();
        values.remove(index - 1);
        Ok(Self { values })
    }

    /// Copy without the elements at the given 1-based indices.
    ///
    /// Duplicates are tolerated; each position is removed once. An empty
    /// index list returns an identical vector.
    ///
    /// # Errors
    /// Any index outside `[1, len()]`. Nothing is removed in that case.
    pub fn exclude_indices(&self, indices: &[usize]) -> Result<Self> {
        if indices.is_empty() {
            return Ok(self.clone());
        }
        let mut excluded = HashSet::with_capacity(indices.len());
        for &index in indices {
            self.ensure_valid_index(index)?;
            excluded.insert(index);
        }
        Ok(self
            .values
            .iter()
            .enumerate()
            .filter(|(i, _)| !excluded.contains(&(i + 1)))
            .map(|(_, &v)| v)
            .collect())
    }

    /// Elementwise `self + other` with recycling.
    ///
    /// # Errors
    /// Either operand empty, or lengths not compatible for recycling.
    pub fn add(&self, other: &Vector) -> Result<Self> {
        self.combine(other, |a, b| a + b)
    }

    /// Elementwise `self - other` with recycling.
    ///
    /// # Errors
    /// Either operand empty, or lengths not compatible for recycling.
    pub fn subtract(&self, other: &Vector) -> Result<Self> {
        self.combine(other, |a, b| a - b)
    }

    /// Elementwise `self * other` with recycling.
    ///
    /// # Errors
    /// Either operand empty, or lengths not compatible for recycling.
    pub fn multiply(&self, other: &Vector) -> Result<Self> {
        self.combine(other, |a, b| a * b)
    }

    /// Elementwise `self / other` with recycling.
    ///
    /// Division by zero follows IEEE 754 (infinity or NaN), it is not an error.
    ///
    /// # Errors
    /// Either operand empty, or lengths not compatible for recycling.
    pub fn divide(&self, other: &Vector) -> Result<Self> {
        self.combine(other, |a, b| a / b)
    }

    /// Tile the values cyclically up to exactly `target_length` elements.
    ///
    /// `recycle(0)` always succeeds with an empty vector, even when `self` is
    /// empty.
    ///
    /// # Errors
    /// Non-zero target with an empty vector, or a target that is not a
    /// multiple of `len()`.
    pub fn recycle(&self, target_length: usize) -> Result<Self> {
        if target_length == 0 {
            return Ok(Self::default());
        }
        self.ensure_not_empty("recycle")?;
        if target_length % self.len() != 0 {
            return Err(VectorError::NotAMultiple {
                target: target_length,
                length: self.len(),
            }
            .into());
        }
        Ok(self.values.iter().copied().cycle().take(target_length).collect())
    }

    /// Dense 1-based histogram of the values that are at least 1.
    ///
    /// Values are truncated toward zero before counting, so 2.9 lands in bin 2.
    /// Values below 1 (including NaN) are skipped. The result has one bin per
    /// integer from 1 up to the truncated maximum; unseen bins hold 0.
    ///
    /// ```
    /// use probability_core::vector::Vector;
    ///
    /// let counts = Vector::of(&[1.0, 2.0, 1.0, 3.0, 2.0, 1.0]).tabulate().unwrap();
    /// assert_eq!(counts.as_slice(), &[3.0, 2.0, 1.0]);
    /// ```
    ///
    /// # Errors
    /// Empty vector, no value `>= 1`, or a value that would need more than
    /// [`MAX_TABULATE_BINS`] bins (including `+inf`).
    pub fn tabulate(&self) -> Result<Self> {
        self.ensure_not_empty("tabulate")?;

        let mut bins = 0_usize;
        for (i, &x) in self.values.iter().enumerate() {
            if x >= 1.0 {
                if x.trunc() > MAX_TABULATE_BINS as f64 {
                    return Err(VectorError::UnboundedTabulation { position: i + 1 }.into());
                }
                bins = bins.max(x.trunc() as usize);
            }
        }
        if bins == 0 {
            return Err(VectorError::NothingToTabulate.into());
        }

        let mut counts = vec![0.0; bins];
        for &x in self.values.iter().filter(|&&x| x >= 1.0) {
            counts[x.trunc() as usize - 1] += 1.0;
        }
        Ok(Self { values: counts })
    }

    fn combine(&self, other: &Vector, op: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.ensure_not_empty("vectorized operation")?;
        other.ensure_not_empty("vectorized operation")?;

        let (left, right) = (self.len(), other.len());
        let target = left.max(right);
        if target % left != 0 || target % right != 0 {
            return Err(VectorError::IncompatibleLengths { left, right }.into());
        }

        Ok((0..target)
            .map(|i| op(self.values[i % left], other.values[i % right]))
            .collect())
    }

    fn ensure_valid_index(&self, index: usize) -> Result<()> {
        if index < 1 || index > self.len() {
            return Err(VectorError::IndexOutOfBounds {
                index,
                length: self.len(),
            }
            .into());
        }
        Ok(())
    }

    fn ensure_not_empty(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(VectorError::Empty { operation }.into());
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn v(values: &[f64]) -> Vector {
        Vector::of(values)
    }

    fn vector_err(result: Result<impl fmt::Debug>) -> VectorError {
        match result {
            Err(Error::Vector(e)) => e,
            other => panic!("expected vector error, got {other:?}"),
        }
    }

    #[test]
    fn test_construction_consumes_iterator() {
        let vec = Vector::new((1..=4).map(f64::from));
        assert_eq!(vec.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vec.len(), 4);

        let empty = Vector::new(std::iter::empty());
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_from_nullable_rejects_missing() {
        let err = vector_err(Vector::from_nullable([Some(1.0), None, Some(3.0)]));
        assert_eq!(err, VectorError::MissingValue { position: 2 });

        let ok = Vector::from_nullable([Some(1.0), Some(2.0)]).unwrap();
        assert_eq!(ok, v(&[1.0, 2.0]));

        assert!(Vector::from_nullable(std::iter::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_sum_min_max() {
        let vec = v(&[3.0, -1.5, 7.25, 0.0]);
        assert_eq!(vec.sum(), 8.75);
        assert_eq!(vec.max().unwrap(), 7.25);
        assert_eq!(vec.min().unwrap(), -1.5);
        assert!((vec.mean().unwrap() - 2.1875).abs() < 1e-12);
    }

    #[test]
    fn test_empty_aggregates() {
        let empty = Vector::default();
        assert_eq!(empty.sum(), 0.0);
        assert_eq!(vector_err(empty.max()), VectorError::Empty { operation: "max" });
        assert_eq!(vector_err(empty.min()), VectorError::Empty { operation: "min" });
        assert!(empty.mean().is_err());
    }

    #[test]
    fn test_at_boundaries() {
        let vec = v(&[10.0, 20.0, 30.0]);
        assert_eq!(vec.at(1).unwrap(), 10.0);
        assert_eq!(vec.at(3).unwrap(), 30.0);
        assert_eq!(
            vector_err(vec.at(0)),
            VectorError::IndexOutOfBounds { index: 0, length: 3 }
        );
        assert!(vec.at(4).is_err());
        assert!(Vector::default().at(1).is_err());
    }

    #[test]
    fn test_slice() {
        let vec = v(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(vec.slice(2, 4).unwrap(), v(&[2.0, 3.0, 4.0]));
        assert_eq!(vec.slice(3, 3).unwrap(), v(&[3.0]));
        assert_eq!(vec.slice(1, 5).unwrap(), vec);
    }

    #[test]
    fn test_slice_rejects_bad_bounds() {
        let vec = v(&[1.0, 2.0, 3.0]);
        for (from, to) in [(0, 2), (1, 0), (3, 2), (2, 4), (0, 0)] {
            assert_eq!(
                vector_err(vec.slice(from, to)),
                VectorError::InvalidSlice { from, to, length: 3 }
            );
        }
    }

    #[test]
    fn test_exclude_index() {
        let vec = v(&[1.0, 2.0, 3.0]);
        assert_eq!(vec.exclude_index(1).unwrap(), v(&[2.0, 3.0]));
        assert_eq!(vec.exclude_index(3).unwrap(), v(&[1.0, 2.0]));
        assert!(vec.exclude_index(0).is_err());
        assert!(vec.exclude_index(4).is_err());
        // receiver untouched
        assert_eq!(vec.len(), 3);
    }

    #[test]
    fn test_exclude_indices_with_duplicates() {
        let vec = v(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(vec.exclude_indices(&[4, 2, 2]).unwrap(), v(&[1.0, 3.0, 5.0]));
    }

    #[test]
    fn test_exclude_indices_empty_is_identity() {
        let vec = v(&[1.0, 2.0]);
        assert_eq!(vec.exclude_indices(&[]).unwrap(), vec);
        assert!(Vector::default().exclude_indices(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_exclude_indices_validates_all() {
        let vec = v(&[1.0, 2.0, 3.0]);
        assert_eq!(
            vector_err(vec.exclude_indices(&[1, 7])),
            VectorError::IndexOutOfBounds { index: 7, length: 3 }
        );
        assert!(vec.exclude_indices(&[0]).is_err());
        assert!(vec.exclude_indices(&[1, 2, 3]).unwrap().is_empty());
    }

    #[test]
    fn test_arithmetic_same_length() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!(a.add(&b).unwrap(), v(&[5.0, 7.0, 9.0]));
        assert_eq!(a.subtract(&b).unwrap(), v(&[-3.0, -3.0, -3.0]));
        assert_eq!(a.multiply(&b).unwrap(), v(&[4.0, 10.0, 18.0]));
        assert_eq!(b.divide(&v(&[2.0, 5.0, 4.0])).unwrap(), v(&[2.0, 1.0, 1.5]));
    }

    #[test]
    fn test_arithmetic_recycles_shorter_operand() {
        let a = v(&[1.0, 2.0, 3.0, 4.0]);
        let b = v(&[10.0, 20.0]);
        assert_eq!(a.add(&b).unwrap(), v(&[11.0, 22.0, 13.0, 24.0]));
        assert_eq!(b.subtract(&a).unwrap(), v(&[9.0, 18.0, 7.0, 16.0]));
        assert_eq!(a.multiply(&v(&[2.0])).unwrap(), v(&[2.0, 4.0, 6.0, 8.0]));
    }

    #[test]
    fn test_arithmetic_rejects_incompatible_lengths() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[1.0, 2.0]);
        assert_eq!(
            vector_err(a.add(&b)),
            VectorError::IncompatibleLengths { left: 3, right: 2 }
        );
        assert!(b.multiply(&a).is_err());
    }

    #[test]
    fn test_arithmetic_rejects_empty_before_length_check() {
        let a = v(&[1.0, 2.0]);
        let empty = Vector::default();
        let expected = VectorError::Empty {
            operation: "vectorized operation",
        };
        assert_eq!(vector_err(a.add(&empty)), expected);
        assert_eq!(vector_err(empty.divide(&a)), expected);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let q = v(&[1.0, -1.0, 0.0]).divide(&v(&[0.0])).unwrap();
        assert_eq!(q.at(1).unwrap(), f64::INFINITY);
        assert_eq!(q.at(2).unwrap(), f64::NEG_INFINITY);
        assert!(q.at(3).unwrap().is_nan());
    }

    #[test]
    fn test_recycle() {
        let vec = v(&[1.0, 2.0]);
        assert_eq!(vec.recycle(6).unwrap(), v(&[1.0, 2.0, 1.0, 2.0, 1.0, 2.0]));
        assert_eq!(vec.recycle(2).unwrap(), vec);
        assert_eq!(
            vector_err(vec.recycle(3)),
            VectorError::NotAMultiple { target: 3, length: 2 }
        );
    }

    #[test]
    fn test_recycle_zero_always_succeeds() {
        assert!(v(&[1.0, 2.0, 3.0]).recycle(0).unwrap().is_empty());
        assert!(Vector::default().recycle(0).unwrap().is_empty());
    }

    #[test]
    fn test_recycle_empty_to_nonzero_fails() {
        assert_eq!(
            vector_err(Vector::default().recycle(2)),
            VectorError::Empty { operation: "recycle" }
        );
    }

    #[test]
    fn test_tabulate_counts() {
        let counts = v(&[1.0, 2.0, 1.0, 3.0, 2.0, 1.0]).tabulate().unwrap();
        assert_eq!(counts, v(&[3.0, 2.0, 1.0]));
        assert_eq!(counts.at(1).unwrap(), 3.0);
        assert_eq!(counts.at(3).unwrap(), 1.0);

        let counts = v(&[1.0, 1.0, 2.0, 2.0, 2.0, 3.0]).tabulate().unwrap();
        assert_eq!(counts, v(&[2.0, 3.0, 1.0]));
    }

    #[test]
    fn test_tabulate_dense_bins() {
        assert_eq!(
            v(&[5.0, 5.0, 5.0]).tabulate().unwrap(),
            v(&[0.0, 0.0, 0.0, 0.0, 3.0])
        );
    }

    #[test]
    fn test_tabulate_ignores_values_below_one() {
        let counts = v(&[1.0, 0.0, -1.0, 2.0, 0.5, 3.0]).tabulate().unwrap();
        assert_eq!(counts, v(&[1.0, 1.0, 1.0]));

        let counts = v(&[f64::NAN, 2.0]).tabulate().unwrap();
        assert_eq!(counts, v(&[0.0, 1.0]));
    }

    #[test]
    fn test_tabulate_truncates_fractions() {
        let counts = v(&[2.9, 1.1, 2.0]).tabulate().unwrap();
        assert_eq!(counts, v(&[1.0, 2.0]));
    }

    #[test]
    fn test_tabulate_errors() {
        assert_eq!(
            vector_err(Vector::default().tabulate()),
            VectorError::Empty { operation: "tabulate" }
        );
        assert_eq!(
            vector_err(v(&[0.0, -1.0, -2.0, 0.5]).tabulate()),
            VectorError::NothingToTabulate
        );
        assert_eq!(
            vector_err(v(&[1.0, f64::INFINITY]).tabulate()),
            VectorError::UnboundedTabulation { position: 2 }
        );
    }

    #[test]
    fn test_tabulate_rejects_huge_values() {
        assert_eq!(
            vector_err(v(&[1e300]).tabulate()),
            VectorError::UnboundedTabulation { position: 1 }
        );
        assert_eq!(
            vector_err(v(&[1.0, 2.0, 1e12]).tabulate()),
            VectorError::UnboundedTabulation { position: 3 }
        );

        let limit = MAX_TABULATE_BINS as f64;
        let counts = v(&[1.0, limit]).tabulate().unwrap();
        assert_eq!(counts.len(), MAX_TABULATE_BINS);
        assert_eq!(counts.at(1).unwrap(), 1.0);
        assert_eq!(counts.at(MAX_TABULATE_BINS).unwrap(), 1.0);
        assert_eq!(
            vector_err(v(&[limit + 1.0]).tabulate()),
            VectorError::UnboundedTabulation { position: 1 }
        );
    }

    #[test]
    fn test_conversions_and_display() {
        let vec: Vector = vec![1.0, 2.5].into();
        assert_eq!(vec.to_string(), "[1 2.5]");
        assert_eq!(Vector::default().to_string(), "[]");

        let collected: Vector = vec.iter().map(|x| x * 2.0).collect();
        assert_eq!(collected.to_vec(), vec![2.0, 5.0]);

        let total: f64 = (&collected).into_iter().sum();
        assert_eq!(total, 7.0);
    }
}
