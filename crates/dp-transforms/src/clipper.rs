//! Value clipping against a lower bound, an upper bound, or both.

use dp_core::{
    error::{ProcessError, Result},
    num::DataFloat,
    Data, Process,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`Clipper`]. A bound set to `None` is inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: DataFloat"))]
pub struct ClipperConfig<T: DataFloat = f64> {
    /// Values below this are raised to it.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub lower: Option<T>,
    /// Values above this are lowered to it.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub upper: Option<T>,
}

impl<T: DataFloat> ClipperConfig<T> {
    /// Clip against both bounds.
    pub fn both(lower: T, upper: T) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    /// Clip against a lower bound only.
    pub fn lower(lower: T) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Clip against an upper bound only.
    pub fn upper(upper: T) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }
}

/// Clipper.
///
/// With both bounds active each value is first raised to `lower`, then
/// lowered to `upper`. The bounds are not validated against each other, so
/// when `lower > upper` every value ends up at `upper`.
///
/// Comparisons follow IEEE 754: NaN values pass through unchanged. With no
/// active bound the clipper is the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper<T: DataFloat = f64> {
    config: ClipperConfig<T>,
}

impl<T: DataFloat> Clipper<T> {
    /// Create a clipper from a configuration.
    pub fn from_config(config: ClipperConfig<T>) -> Self {
        Self { config }
    }

    /// Clip to `[lower, upper]`.
    pub fn both(lower: T, upper: T) -> Self {
        Self::from_config(ClipperConfig::both(lower, upper))
    }

    /// Clip below `lower`.
    pub fn lower_only(lower: T) -> Self {
        Self::from_config(ClipperConfig::lower(lower))
    }

    /// Clip above `upper`.
    pub fn upper_only(upper: T) -> Self {
        Self::from_config(ClipperConfig::upper(upper))
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClipperConfig<T> {
        &self.config
    }

    /// Active lower bound, if any.
    pub fn lower(&self) -> Option<T> {
        self.config.lower
    }

    /// Active upper bound, if any.
    pub fn upper(&self) -> Option<T> {
        self.config.upper
    }

    /// Clip a single value.
    #[inline]
    pub fn clip_value(&self, v: T) -> T {
        match (self.config.lower, self.config.upper) {
            (Some(lower), Some(upper)) => clip_above(clip_below(v, lower), upper),
            (Some(lower), None) => clip_below(v, lower),
            (None, Some(upper)) => clip_above(v, upper),
            (None, None) => v,
        }
    }
}

// Plain comparisons rather than `Float::max`/`min`, which would replace NaN.
#[inline]
fn clip_below<T: DataFloat>(v: T, lower: T) -> T {
    if v < lower {
        lower
    } else {
        v
    }
}

#[inline]
fn clip_above<T: DataFloat>(v: T, upper: T) -> T {
    if v > upper {
        upper
    } else {
        v
    }
}

impl<T: DataFloat> Process<T> for Clipper<T> {
    fn process(&self, data: &Data<T>) -> Data<T> {
        data.map(|v| self.clip_value(v))
    }

    fn name(&self) -> String {
        match (self.config.lower, self.config.upper) {
            (Some(lower), Some(upper)) => format!("(lower = {lower:?},upper = {upper:?})"),
            (Some(lower), None) => format!("(lower = {lower:?})"),
            (None, Some(upper)) => format!("(upper = {upper:?})"),
            (None, None) => "()".to_string(),
        }
    }

    fn validate(&self, data: &Data<T>) -> Result<()> {
        if let (Some(lower), Some(upper)) = (self.config.lower, self.config.upper) {
            if lower > upper {
                return Err(ProcessError::InvertedBounds {
                    lower: lower.to_f64_lossy(),
                    upper: upper.to_f64_lossy(),
                });
            }
        }
        data.check_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_both() {
        let out = Clipper::both(0.0, 10.0).process(&Data::from([-5.0, 3.0, 15.0]));
        assert_eq!(out.as_slice(), &[0.0, 3.0, 10.0]);
    }

    #[test]
    fn test_clip_lower_only() {
        let out = Clipper::lower_only(2.0).process(&Data::from([1.0, 2.0, 100.0]));
        assert_eq!(out.as_slice(), &[2.0, 2.0, 100.0]);
    }

    #[test]
    fn test_clip_upper_only() {
        let out = Clipper::upper_only(9.0).process(&Data::from([-100.0, 9.0, 9.5]));
        assert_eq!(out.as_slice(), &[-100.0, 9.0, 9.0]);
    }

    #[test]
    fn test_unbounded_is_identity() {
        let clipper = Clipper::from_config(ClipperConfig::default());
        let data = Data::from([-1e9, 0.0, 1e9]);
        assert_eq!(clipper.process(&data), data);
        assert_eq!(Process::<f64>::name(&clipper), "()");
    }

    #[test]
    fn test_inverted_bounds_collapse_to_upper() {
        let clipper = Clipper::both(5.0, 2.0);
        let out = clipper.process(&Data::from([0.0, 3.0, 10.0]));
        assert_eq!(out.as_slice(), &[2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_nan_passes_through() {
        let out = Clipper::both(0.0, 1.0).process(&Data::from([f64::NAN, 2.0]));
        assert!(out[0].is_nan());
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn test_infinities_are_clipped() {
        let out = Clipper::both(-1.0, 1.0).process(&Data::from([f64::NEG_INFINITY, f64::INFINITY]));
        assert_eq!(out.as_slice(), &[-1.0, 1.0]);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            Process::<f64>::name(&Clipper::both(2.0, 9.0)),
            "(lower = 2.0,upper = 9.0)"
        );
        assert_eq!(Process::<f64>::name(&Clipper::lower_only(2.0)), "(lower = 2.0)");
        assert_eq!(Process::<f64>::name(&Clipper::upper_only(9.0)), "(upper = 9.0)");
    }

    #[test]
    fn test_accessors() {
        let clipper = Clipper::lower_only(1.5);
        assert_eq!(clipper.lower(), Some(1.5));
        assert_eq!(clipper.upper(), None);
        assert_eq!(clipper.config(), &ClipperConfig::lower(1.5));
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let result = Clipper::both(5.0, 2.0).try_process(&Data::from([1.0]));
        assert_eq!(
            result,
            Err(ProcessError::InvertedBounds {
                lower: 5.0,
                upper: 2.0
            })
        );
    }

    #[test]
    fn test_validate_single_bound_never_inverted() {
        assert!(Clipper::lower_only(5.0).try_process(&Data::from([1.0])).is_ok());
        assert!(Clipper::upper_only(-5.0).try_process(&Data::from([1.0])).is_ok());
    }
}
