//! Aggregate statistics over a series of values.
//!
//! None of these functions guard against degenerate input. An empty slice
//! yields the sentinel values documented on each function, and NaN or
//! infinite inputs propagate according to IEEE 754 arithmetic.

use crate::num::DataFloat;

/// Smallest value in `data`.
///
/// Returns `+inf` for an empty slice. NaN never compares smaller than the
/// running minimum, so NaN elements are effectively skipped.
///
/// ```rust
/// use dp_core::stats::min;
///
/// assert_eq!(min(&[3.0, -1.0, 2.0]), -1.0);
/// assert_eq!(min::<f64>(&[]), f64::INFINITY);
/// ```
#[must_use]
pub fn min<T: DataFloat>(data: &[T]) -> T {
    data.iter()
        .fold(T::INFINITY, |acc, &v| if v < acc { v } else { acc })
}

/// Largest value in `data`.
///
/// Returns `-inf` for an empty slice.
#[must_use]
pub fn max<T: DataFloat>(data: &[T]) -> T {
    data.iter()
        .fold(T::NEG_INFINITY, |acc, &v| if v > acc { v } else { acc })
}

/// Arithmetic mean of `data`.
///
/// An empty slice divides zero by zero and returns NaN.
#[must_use]
pub fn avg<T: DataFloat>(data: &[T]) -> T {
    let sum = data.iter().fold(T::ZERO, |acc, &v| acc + v);
    sum / <T as DataFloat>::from_usize(data.len())
}

/// Population standard deviation of `data`: `sqrt(sum((x - mean)^2) / N)`.
///
/// Divides by `N`, not `N - 1`. An empty slice returns NaN.
///
/// ```rust
/// use dp_core::stats::std;
///
/// assert_eq!(std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
/// ```
#[must_use]
pub fn std<T: DataFloat>(data: &[T]) -> T {
    let mean = avg(data);
    let sum_sq = data.iter().fold(T::ZERO, |acc, &v| {
        let deviation = v - mean;
        acc + deviation * deviation
    });
    (sum_sq / <T as DataFloat>::from_usize(data.len())).sqrt()
}
