//! # dp-core
//!
//! Core types and traits for the dataproc data-processing library.
//!
//! - [`DataFloat`] - Trait for numeric element types (f32/f64)
//! - [`Data`] - Immutable series of floating-point values
//! - [`stats`] - Min, max, mean and population standard deviation
//! - [`Process`] - Named, pure `Data -> Data` transformation
//! - [`ProcessError`] - Rejection reasons for strict processing
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use dp_core::prelude::*;
//!
//! let data: Data = Data::from(vec![2.0, 4.0, 6.0]);
//!
//! assert_eq!(data.min(), 2.0);
//! assert_eq!(data.avg(), 4.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod num;
pub mod prelude;
pub mod stats;
pub mod traits;

pub use data::Data;
pub use error::{ProcessError, Result};
pub use num::DataFloat;
pub use traits::Process;
