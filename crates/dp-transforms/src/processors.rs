//! Factory functions for the built-in processors.
//!
//! ```rust
//! use dp_core::{Data, Process};
//! use dp_transforms::processors;
//!
//! let data = Data::from([0.0, 5.0, 10.0]);
//!
//! assert_eq!(processors::scale(0.0, 100.0).process(&data).as_slice(), &[0.0, 50.0, 100.0]);
//! assert_eq!(processors::clip_upper(4.0).process(&data).as_slice(), &[0.0, 4.0, 4.0]);
//! ```

use dp_core::num::DataFloat;

use crate::clipper::Clipper;
use crate::processor::Processor;
use crate::scaler::{PercentScaler, Scaler};
use crate::standardizer::Standardizer;

/// Min-max scale onto `[min, max]`. An inverted range is allowed.
pub fn scale<T: DataFloat>(min: T, max: T) -> Processor<T> {
    Processor::Scaler(Scaler::new(min, max))
}

/// Min-max scale onto `[0, 100]`.
pub fn percent_scale<T: DataFloat>() -> Processor<T> {
    Processor::PercentScaler(PercentScaler)
}

/// Z-score standardization using the population standard deviation.
pub fn standardize<T: DataFloat>() -> Processor<T> {
    Processor::Standardizer(Standardizer)
}

/// Clip to `[lower, upper]`.
///
/// The bounds are applied lower first, then upper, without checking their
/// order.
pub fn clip<T: DataFloat>(lower: T, upper: T) -> Processor<T> {
    Processor::Clipper(Clipper::both(lower, upper))
}

/// Raise every value below `lower` to `lower`.
pub fn clip_lower<T: DataFloat>(lower: T) -> Processor<T> {
    Processor::Clipper(Clipper::lower_only(lower))
}

/// Lower every value above `upper` to `upper`.
pub fn clip_upper<T: DataFloat>(upper: T) -> Processor<T> {
    Processor::Clipper(Clipper::upper_only(upper))
}
