//! Error types for strict processing.
//!
//! Plain [`process`](crate::Process::process) never fails: degenerate input
//! propagates as NaN or infinity. These errors are only produced by the
//! opt-in [`validate`](crate::Process::validate) and
//! [`try_process`](crate::Process::try_process) path.

use thiserror::Error;

/// Result type alias for strict processing.
pub type Result<T> = core::result::Result<T, ProcessError>;

/// Reasons a processor rejects its input in strict mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// The input series has no elements.
    #[error("Empty input: at least one value is required")]
    EmptyInput,

    /// The input series contains NaN or an infinity.
    #[error("Non-finite input value at index {index}")]
    NonFiniteInput {
        /// Position of the first offending element.
        index: usize,
    },

    /// Every input value is identical, so min-max scaling would divide by zero.
    #[error("Degenerate range: all values equal {value}")]
    DegenerateRange {
        /// The single observed value.
        value: f64,
    },

    /// The input has zero standard deviation.
    #[error("Zero variance: standardization is undefined")]
    ZeroVariance,

    /// Both clip bounds are set and the lower bound exceeds the upper one.
    #[error("Inverted bounds: lower {lower} is greater than upper {upper}")]
    InvertedBounds {
        /// Configured lower bound.
        lower: f64,
        /// Configured upper bound.
        upper: f64,
    },

    /// A processor configuration could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ProcessError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ProcessError::EmptyInput.to_string(),
            "Empty input: at least one value is required"
        );
        assert_eq!(
            ProcessError::NonFiniteInput { index: 3 }.to_string(),
            "Non-finite input value at index 3"
        );
        assert_eq!(
            ProcessError::DegenerateRange { value: 5.0 }.to_string(),
            "Degenerate range: all values equal 5"
        );
        assert_eq!(
            ProcessError::InvertedBounds {
                lower: 9.0,
                upper: 2.5
            }
            .to_string(),
            "Inverted bounds: lower 9 is greater than upper 2.5"
        );
    }

    #[test]
    fn test_config_helper() {
        let err = ProcessError::config("unknown processor kind");
        assert_eq!(err, ProcessError::Config("unknown processor kind".to_string()));
        assert_eq!(err.to_string(), "Invalid configuration: unknown processor kind");
    }
}
