//! Prelude module for convenient imports.
//!
//! ```rust
//! use dp_core::prelude::*;
//!
//! let data: Data<f64> = Data::from(vec![1.0, 2.0]);
//! assert_eq!(stats::max(data.as_slice()), 2.0);
//! ```

pub use crate::data::Data;
pub use crate::error::{ProcessError, Result};
pub use crate::num::DataFloat;
pub use crate::traits::Process;

pub use crate::stats;
