//! Defines [`ThresholdRange`], the inclusive value window used for conditional filtering.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[min, max]` value window, in the unit of the series it filters.
///
/// # Examples
///
/// ```
/// use epw_analysis::ThresholdRange;
///
/// let comfortable = ThresholdRange::new(18.0, 26.0)?;
/// assert!(comfortable.contains(18.0) && comfortable.contains(26.0));
/// assert!(ThresholdRange::new(26.0, 18.0).is_err());
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    min: f64,
    max: f64,
}

impl ThresholdRange {
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRange`] if `min > max` or either bound is NaN.
    pub fn new(min: f64, max: f64) -> Result<Self, AnalysisError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        // NaN fails the comparison, so it is rejected too.
        if !(self.min <= self.max) {
            return Err(AnalysisError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_bounds_are_rejected() {
        for (min, max) in [(f64::NAN, 1.0), (0.0, f64::NAN), (f64::NAN, f64::NAN)] {
            assert!(
                matches!(
                    ThresholdRange::new(min, max),
                    Err(AnalysisError::InvalidRange { .. })
                ),
                "range [{min}, {max}] should be rejected"
            );
        }
    }

    #[test]
    fn test_degenerate_range_holds_one_value() -> Result<(), AnalysisError> {
        let range = ThresholdRange::new(21.0, 21.0)?;
        assert!(range.contains(21.0));
        assert!(!range.contains(21.5));
        assert!(!range.contains(f64::NAN));
        assert_eq!(range.to_string(), "[21, 21]");
        Ok(())
    }
}
