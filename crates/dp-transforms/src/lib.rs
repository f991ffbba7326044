//! # dp-transforms
//!
//! Data processors for the dataproc library:
//!
//! - `Scaler`: Min-max scaling onto a target range
//! - `PercentScaler`: Min-max scaling onto `[0, 100]`
//! - `Standardizer`: Z-score standardization
//! - `Clipper`: Clipping against a lower bound, an upper bound, or both
//! - `Processor`: The closed set of the above, built by [`processors`]
//! - `ProcessorPipeline`: Compose multiple processors
//!
//! # Example
//!
//! ```
//! use dp_core::prelude::*;
//! use dp_transforms::prelude::*;
//!
//! let standardize = processors::standardize();
//! let out = standardize.process(&Data::from([1.0, 2.0, 3.0]));
//!
//! assert_eq!(out.len(), 3);
//! assert_eq!(standardize.name(), "Standardizer");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod clipper;
mod pipeline;
mod processor;
mod scaler;
mod standardizer;

pub mod prelude;
pub mod processors;

pub use clipper::{Clipper, ClipperConfig};
pub use pipeline::ProcessorPipeline;
pub use processor::{Processor, ProcessorConfig};
pub use scaler::{PercentScaler, Scaler, ScalerConfig};
pub use standardizer::Standardizer;
