//! Z-score standardization.

use dp_core::{
    error::{ProcessError, Result},
    num::DataFloat,
    Data, Process,
};

/// Standardizer: `z = (x - μ) / σ`.
///
/// `μ` is the mean and `σ` the population standard deviation of the input
/// being processed.
///
/// # Edge Cases
///
/// - σ = 0 (constant input): every output is NaN
/// - Empty input: returns an empty series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standardizer;

impl<T: DataFloat> Process<T> for Standardizer {
    fn process(&self, data: &Data<T>) -> Data<T> {
        let mean = data.avg();
        let std = data.std();

        data.map(|v| (v - mean) / std)
    }

    fn name(&self) -> String {
        "Standardizer".to_string()
    }

    fn validate(&self, data: &Data<T>) -> Result<()> {
        data.check_finite()?;
        // Rounding in the mean can leave a small nonzero σ for constant input.
        if data.min() == data.max() || data.std() == T::ZERO {
            return Err(ProcessError::ZeroVariance);
        }
        Ok(())
    }
}
