//! Defines [`HourRange`], a sub-daily window such as occupied hours.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of hours of the day, e.g. `8..=18` for office hours.
///
/// A range whose start is after its end wraps over midnight, so `22..=5`
/// selects the night hours 22, 23, 0, 1, 2, 3, 4 and 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourRange {
    start: u32,
    end: u32,
}

impl Default for HourRange {
    fn default() -> Self {
        Self { start: 0, end: 23 }
    }
}

impl HourRange {
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidHourRange`] if either hour is above 23.
    pub fn new(start: u32, end: u32) -> Result<Self, AnalysisError> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.start > 23 || self.end > 23 {
            return Err(AnalysisError::InvalidHourRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of hours per day inside the range.
    pub fn hours_per_day(&self) -> u32 {
        if self.start <= self.end {
            self.end - self.start + 1
        } else {
            24 - self.start + self.end + 1
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            self.start <= hour && hour <= self.end
        } else {
            hour >= self.start || hour <= self.end
        }
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_wrapping_ranges() -> Result<(), AnalysisError> {
        let office = HourRange::new(8, 18)?;
        assert_eq!(office.hours_per_day(), 11);
        assert!(office.contains(8) && office.contains(18));
        assert!(!office.contains(7) && !office.contains(19));

        let night = HourRange::new(22, 5)?;
        assert_eq!(night.hours_per_day(), 8);
        assert!(night.contains(23) && night.contains(0) && night.contains(5));
        assert!(!night.contains(12));

        assert_eq!(HourRange::new(12, 12)?.hours_per_day(), 1);
        assert_eq!(HourRange::default().hours_per_day(), 24);
        Ok(())
    }

    #[test]
    fn test_rejects_hour_24() {
        assert!(matches!(
            HourRange::new(0, 24),
            Err(AnalysisError::InvalidHourRange { start: 0, end: 24 })
        ));
    }
}
