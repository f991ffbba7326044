//! Core trait for data processors.

use crate::data::Data;
use crate::error::Result;
use crate::num::DataFloat;

/// A named, pure transformation from one [`Data`] series to another.
///
/// Implementations hold only their configured parameters, which never
/// change after construction. Every call to [`process`](Process::process)
/// derives whatever statistics it needs from its own input, so a single
/// processor can be shared freely between threads.
///
/// # Strict Mode
///
/// `process` performs no validation: empty input, a zero value range or zero
/// variance come back as NaN or infinity. Callers that prefer an error call
/// [`try_process`](Process::try_process), which runs
/// [`validate`](Process::validate) first.
///
/// # Example
///
/// ```rust
/// use dp_core::{Data, DataFloat, Process};
///
/// struct Negate;
///
/// impl<T: DataFloat> Process<T> for Negate {
///     fn process(&self, data: &Data<T>) -> Data<T> {
///         data.map(|v| -v)
///     }
///
///     fn name(&self) -> String {
///         "Negate".to_string()
///     }
/// }
///
/// let out = Negate.process(&Data::from([1.0, -2.0]));
/// assert_eq!(out.as_slice(), &[-1.0, 2.0]);
/// ```
pub trait Process<T: DataFloat>: Send + Sync {
    /// Transform `data` into a new series of the same length.
    ///
    /// The input is never modified.
    fn process(&self, data: &Data<T>) -> Data<T>;

    /// Human-readable label, possibly embedding configured parameters.
    ///
    /// Intended for logs and diagnostics only; it is not an identity.
    fn name(&self) -> String;

    /// Check whether `data` is acceptable input in strict mode.
    ///
    /// The default accepts any non-empty series of finite values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ProcessError`](crate::ProcessError) that makes the
    /// output of [`process`](Process::process) numerically undefined.
    fn validate(&self, data: &Data<T>) -> Result<()> {
        data.check_finite()
    }

    /// Validate `data`, then process it.
    ///
    /// # Errors
    ///
    /// Returns the error reported by [`validate`](Process::validate).
    fn try_process(&self, data: &Data<T>) -> Result<Data<T>> {
        if let Err(err) = self.validate(data) {
            tracing::debug!(processor = %self.name(), len = data.len(), error = %err, "rejected input");
            return Err(err);
        }
        Ok(self.process(data))
    }
}
