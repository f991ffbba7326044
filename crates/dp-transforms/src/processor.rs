//! The closed set of processor variants.

use core::fmt;

use dp_core::{
    error::{ProcessError, Result},
    num::DataFloat,
    Data, Process,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clipper::{Clipper, ClipperConfig};
use crate::scaler::{PercentScaler, Scaler, ScalerConfig};
use crate::standardizer::Standardizer;

/// Serializable description of a [`Processor`].
///
/// With the `serde` feature enabled this is an internally tagged enum:
///
/// ```json
/// {"kind": "scale", "min": 0.0, "max": 1.0}
/// {"kind": "percent_scale"}
/// {"kind": "standardize"}
/// {"kind": "clip", "lower": 0.0}
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case", bound = "T: DataFloat")
)]
pub enum ProcessorConfig<T: DataFloat = f64> {
    /// Min-max scaling onto a target range.
    Scale(ScalerConfig<T>),
    /// Min-max scaling onto `[0, 100]`.
    PercentScale,
    /// Z-score standardization.
    Standardize,
    /// Clipping against optional bounds.
    Clip(ClipperConfig<T>),
}

impl<T: DataFloat> ProcessorConfig<T> {
    /// Reject non-finite parameters.
    ///
    /// The factory functions accept any value; this check applies to
    /// configuration coming from outside the program.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Config`] naming the first non-finite parameter.
    pub fn validate(&self) -> Result<()> {
        let params: [(&str, Option<T>); 2] = match self {
            Self::Scale(cfg) => [("min", Some(cfg.min)), ("max", Some(cfg.max))],
            Self::Clip(cfg) => [("lower", cfg.lower), ("upper", cfg.upper)],
            Self::PercentScale | Self::Standardize => [("", None), ("", None)],
        };

        for (param, value) in params {
            if let Some(value) = value {
                if !value.is_valid() {
                    return Err(ProcessError::config(format!(
                        "parameter '{param}' must be finite, got {value:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A configured processor.
///
/// Each variant wraps the struct implementing that transformation, so a
/// `Processor` can be stored, compared, cloned and shared across threads
/// without boxing.
///
/// # Example
///
/// ```rust
/// use dp_core::{Data, Process};
/// use dp_transforms::processors;
///
/// let clip = processors::clip(0.0, 10.0);
/// let out = clip.process(&Data::from([-5.0, 3.0, 15.0]));
///
/// assert_eq!(out.as_slice(), &[0.0, 3.0, 10.0]);
/// assert_eq!(clip.to_string(), "(lower = 0.0,upper = 10.0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Processor<T: DataFloat = f64> {
    /// Min-max scaling.
    Scaler(Scaler<T>),
    /// Min-max scaling onto `[0, 100]`.
    PercentScaler(PercentScaler),
    /// Z-score standardization.
    Standardizer(Standardizer),
    /// Clipping.
    Clipper(Clipper<T>),
}

impl<T: DataFloat> Processor<T> {
    /// Build a processor from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Config`] if a parameter is not finite.
    pub fn from_config(config: &ProcessorConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(match *config {
            ProcessorConfig::Scale(cfg) => Self::Scaler(Scaler::from_config(cfg)),
            ProcessorConfig::PercentScale => Self::PercentScaler(PercentScaler),
            ProcessorConfig::Standardize => Self::Standardizer(Standardizer),
            ProcessorConfig::Clip(cfg) => Self::Clipper(Clipper::from_config(cfg)),
        })
    }

    /// Export the configuration this processor was built from.
    pub fn config(&self) -> ProcessorConfig<T> {
        match self {
            Self::Scaler(scaler) => ProcessorConfig::Scale(*scaler.config()),
            Self::PercentScaler(_) => ProcessorConfig::PercentScale,
            Self::Standardizer(_) => ProcessorConfig::Standardize,
            Self::Clipper(clipper) => ProcessorConfig::Clip(*clipper.config()),
        }
    }

    fn inner(&self) -> &dyn Process<T> {
        match self {
            Self::Scaler(p) => p,
            Self::PercentScaler(p) => p,
            Self::Standardizer(p) => p,
            Self::Clipper(p) => p,
        }
    }
}

impl<T: DataFloat> Process<T> for Processor<T> {
    fn process(&self, data: &Data<T>) -> Data<T> {
        let inner = self.inner();
        tracing::trace!(processor = %inner.name(), len = data.len(), "processing");
        inner.process(data)
    }

    fn name(&self) -> String {
        self.inner().name()
    }

    fn validate(&self, data: &Data<T>) -> Result<()> {
        self.inner().validate(data)
    }
}

impl<T: DataFloat> fmt::Display for Processor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl<T: DataFloat> From<Scaler<T>> for Processor<T> {
    fn from(scaler: Scaler<T>) -> Self {
        Self::Scaler(scaler)
    }
}

impl<T: DataFloat> From<PercentScaler> for Processor<T> {
    fn from(scaler: PercentScaler) -> Self {
        Self::PercentScaler(scaler)
    }
}

impl<T: DataFloat> From<Standardizer> for Processor<T> {
    fn from(standardizer: Standardizer) -> Self {
        Self::Standardizer(standardizer)
    }
}

impl<T: DataFloat> From<Clipper<T>> for Processor<T> {
    fn from(clipper: Clipper<T>) -> Self {
        Self::Clipper(clipper)
    }
}
