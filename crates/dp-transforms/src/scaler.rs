//! Min-max scaling.
//!
//! Linearly maps the observed range `[min, max]` of the input onto a
//! configured target range.

use dp_core::{
    error::{ProcessError, Result},
    num::DataFloat,
    Data, Process,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Scaler`].
///
/// No ordering is enforced: `min > max` produces an inverted mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: DataFloat"))]
pub struct ScalerConfig<T: DataFloat = f64> {
    /// Value the smallest input element is mapped to.
    pub min: T,
    /// Value the largest input element is mapped to.
    pub max: T,
}

impl<T: DataFloat> ScalerConfig<T> {
    /// Create a configuration for the target range `[min, max]`.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// The `[0, 100]` range used by [`PercentScaler`].
    pub fn percent() -> Self {
        Self {
            min: T::ZERO,
            max: T::HUNDRED,
        }
    }
}

/// Min-max scaler.
///
/// For each value `v`:
///
/// ```text
/// scaled = (v - data_min) / (data_max - data_min)
/// out    = scaled * (max - min) + min
/// ```
///
/// # Edge Cases
///
/// - Constant or single-element input: `data_max - data_min == 0`, every
///   output is NaN
/// - Empty input: returns an empty series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler<T: DataFloat = f64> {
    config: ScalerConfig<T>,
}

impl<T: DataFloat> Scaler<T> {
    /// Create a scaler targeting `[min, max]`.
    pub fn new(min: T, max: T) -> Self {
        Self::from_config(ScalerConfig::new(min, max))
    }

    /// Create a scaler from a configuration.
    pub fn from_config(config: ScalerConfig<T>) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ScalerConfig<T> {
        &self.config
    }

    /// Lower end of the target range.
    pub fn target_min(&self) -> T {
        self.config.min
    }

    /// Upper end of the target range.
    pub fn target_max(&self) -> T {
        self.config.max
    }
}

impl<T: DataFloat> Process<T> for Scaler<T> {
    fn process(&self, data: &Data<T>) -> Data<T> {
        scale_to_range(data, self.config.min, self.config.max)
    }

    fn name(&self) -> String {
        scaler_name(self.config.min, self.config.max)
    }

    fn validate(&self, data: &Data<T>) -> Result<()> {
        check_range(data)
    }
}

/// Min-max scaler with the fixed target range `[0, 100]`.
///
/// Produces exactly the output of `Scaler::new(0.0, 100.0)` and reports the
/// same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PercentScaler;

impl PercentScaler {
    /// The equivalent general scaler.
    pub fn as_scaler<T: DataFloat>(&self) -> Scaler<T> {
        Scaler::from_config(ScalerConfig::percent())
    }
}

impl<T: DataFloat> Process<T> for PercentScaler {
    fn process(&self, data: &Data<T>) -> Data<T> {
        scale_to_range(data, T::ZERO, T::HUNDRED)
    }

    fn name(&self) -> String {
        scaler_name(T::ZERO, T::HUNDRED)
    }

    fn validate(&self, data: &Data<T>) -> Result<()> {
        check_range(data)
    }
}

fn scale_to_range<T: DataFloat>(data: &Data<T>, target_min: T, target_max: T) -> Data<T> {
    let data_min = data.min();
    let data_max = data.max();
    let span = data_max - data_min;
    let target_span = target_max - target_min;

    data.map(|v| (v - data_min) / span * target_span + target_min)
}

fn scaler_name<T: DataFloat>(min: T, max: T) -> String {
    format!("Scaler({min:?},{max:?})")
}

fn check_range<T: DataFloat>(data: &Data<T>) -> Result<()> {
    data.check_finite()?;
    let data_min = data.min();
    if data_min == data.max() {
        return Err(ProcessError::DegenerateRange {
            value: data_min.to_f64_lossy(),
        });
    }
    Ok(())
}
