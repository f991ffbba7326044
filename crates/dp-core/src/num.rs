//! Numeric type abstraction for data processing.
//!
//! [`DataFloat`] abstracts over `f32` and `f64` so that the data container,
//! the statistics helpers and every processor can be written once.

use core::fmt::Debug;
use num_traits::{Float, FromPrimitive, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

/// Floating-point element type of a [`Data`](crate::Data) series.
///
/// Implemented for `f32` and `f64`. `f64` is the default element type
/// everywhere in the workspace.
///
/// # Example
///
/// ```rust
/// use dp_core::DataFloat;
///
/// fn percent<T: DataFloat>(part: T, whole: T) -> T {
///     part / whole * T::HUNDRED
/// }
///
/// assert_eq!(percent(1.0f64, 4.0), 25.0);
/// ```
#[cfg(feature = "serde")]
pub trait DataFloat:
    Float + FromPrimitive + ToPrimitive + Debug + Default + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Hundred value, the upper bound of percent scaling.
    const HUNDRED: Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is finite (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

/// Floating-point element type of a [`Data`](crate::Data) series.
#[cfg(not(feature = "serde"))]
pub trait DataFloat:
    Float + FromPrimitive + ToPrimitive + Debug + Default + Send + Sync + 'static
{
    /// Not-a-number value.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Zero value.
    const ZERO: Self;
    /// One value.
    const ONE: Self;
    /// Hundred value, the upper bound of percent scaling.
    const HUNDRED: Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;

    /// Convert from `usize`.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Check if the value is finite (not NaN and not infinite).
    #[must_use]
    fn is_valid(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl DataFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f32
    }
}

impl DataFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }

    #[inline]
    fn from_usize(value: usize) -> Self {
        value as f64
    }
}
