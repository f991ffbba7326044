//! Immutable numeric data container.
//!
//! The [`Data`] type holds an ordered, fixed-length series of floating-point
//! values. It exposes no mutating operations: processors always build a new
//! instance for their output.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ProcessError, Result};
use crate::num::DataFloat;
use crate::stats;

/// An immutable, ordered series of floating-point values.
///
/// # Example
///
/// ```rust
/// use dp_core::Data;
///
/// let data = Data::from(vec![1.0, 2.5, 4.0]);
///
/// assert_eq!(data.len(), 3);
/// assert_eq!(data[1], 2.5);
/// assert_eq!(data.iter().count(), data.len());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent, bound = "T: DataFloat"))]
pub struct Data<T: DataFloat = f64> {
    values: Vec<T>,
}

impl<T: DataFloat> Data<T> {
    /// Create a series that takes ownership of `values`.
    #[must_use]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Create an empty series.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new() }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.values.iter().copied()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Build a new series by applying `f` to every element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.values.iter().map(|&v| f(v)).collect()
    }

    /// Smallest value, `+inf` when empty. See [`stats::min`].
    #[must_use]
    pub fn min(&self) -> T {
        stats::min(&self.values)
    }

    /// Largest value, `-inf` when empty. See [`stats::max`].
    #[must_use]
    pub fn max(&self) -> T {
        stats::max(&self.values)
    }

    /// Arithmetic mean, NaN when empty. See [`stats::avg`].
    #[must_use]
    pub fn avg(&self) -> T {
        stats::avg(&self.values)
    }

    /// Population standard deviation. See [`stats::std`].
    #[must_use]
    pub fn std(&self) -> T {
        stats::std(&self.values)
    }

    /// Check that the series is non-empty and every value is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::EmptyInput`] for an empty series and
    /// [`ProcessError::NonFiniteInput`] naming the first NaN or infinite value.
    pub fn check_finite(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ProcessError::EmptyInput);
        }
        match self.values.iter().position(|v| !v.is_valid()) {
            Some(index) => Err(ProcessError::NonFiniteInput { index }),
            None => Ok(()),
        }
    }
}

impl<T: DataFloat> Index<usize> for Data<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<T: DataFloat> FromIterator<T> for Data<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T: DataFloat> IntoIterator for Data<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T: DataFloat> IntoIterator for &'a Data<T> {
    type Item = T;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

impl<T: DataFloat> From<Vec<T>> for Data<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T: DataFloat> From<&[T]> for Data<T> {
    fn from(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<T: DataFloat, const N: usize> From<[T; N]> for Data<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<T: DataFloat> AsRef<[T]> for Data<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_vec() {
        let data: Data<f64> = Data::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(data.len(), 3);
        assert!(!data.is_empty());
        assert_eq!(data.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_slice_copies() {
        let raw = [4.0, 5.0];
        let data: Data<f64> = Data::from(&raw[..]);
        assert_eq!(data.as_slice(), &raw);
    }

    #[test]
    fn test_empty() {
        let data: Data<f64> = Data::empty();
        assert!(data.is_empty());
        assert_eq!(data.len(), 0);
        assert_eq!(data.iter().count(), 0);
        assert_eq!(data.get(0), None);
    }

    #[test]
    fn test_iteration_is_ordered_and_repeatable() {
        let data = Data::from([3.0, 1.0, 2.0]);

        let first: Vec<f64> = data.iter().collect();
        let second: Vec<f64> = (&data).into_iter().collect();

        assert_eq!(first, vec![3.0, 1.0, 2.0]);
        assert_eq!(first, second);
        assert_eq!(data.iter().count(), data.len());
    }

    #[test]
    fn test_index_and_get() {
        let data = Data::from([10.0, 20.0]);
        assert_eq!(data[0], 10.0);
        assert_eq!(data.get(1), Some(20.0));
        assert_eq!(data.get(2), None);
    }

    #[test]
    fn test_from_iterator() {
        let data: Data<f64> = (1..=4).map(f64::from).collect();
        assert_eq!(data.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_into_vec() {
        let data = Data::from(vec![1.5, 2.5]);
        assert_eq!(data.into_vec(), vec![1.5, 2.5]);
    }

    #[test]
    fn test_map_leaves_source_untouched() {
        let data = Data::from([1.0, 2.0, 3.0]);
        let doubled = data.map(|v| v * 2.0);

        assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!(data.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_statistics() {
        let data = Data::from([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(data.min(), 2.0);
        assert_eq!(data.max(), 9.0);
        assert_relative_eq!(data.avg(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(data.std(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_check_finite() {
        assert!(Data::from([1.0, 2.0]).check_finite().is_ok());
        assert_eq!(
            Data::<f64>::empty().check_finite(),
            Err(ProcessError::EmptyInput)
        );
        assert_eq!(
            Data::from([1.0, f64::INFINITY, f64::NAN]).check_finite(),
            Err(ProcessError::NonFiniteInput { index: 1 })
        );
    }

    #[test]
    fn test_f32_data() {
        let data: Data<f32> = Data::from(vec![1.0f32, 3.0]);
        assert_eq!(data.avg(), 2.0f32);
    }
}
