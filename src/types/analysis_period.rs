//! Defines [`AnalysisPeriod`], the calendar window used to select hours of the year.

use crate::error::AnalysisError;
use crate::types::calendar::{days_in_month, CalendarHour, REFERENCE_LEAP_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive window of the year, evaluated against each sample's month, day and hour.
///
/// The period has two independent parts:
///
/// * a **date window** from `st_month/st_day` to `end_month/end_day`, and
/// * a **daily hour window** from `st_hour` to `end_hour`, applied to every day
///   inside the date window.
///
/// Both windows are inclusive. When a start lies after its end (e.g. Nov 15 to
/// Feb 15, or 22:00 to 05:00) the window wraps around the year (or midnight)
/// instead of being empty. A period whose start equals its end selects exactly
/// that one hour.
///
/// Feb 29 is accepted as a day; it only matches samples of a leap-year series.
///
/// # Examples
///
/// ```
/// use epw_analysis::AnalysisPeriod;
///
/// // Winter working hours, wrapping over new year.
/// let winter = AnalysisPeriod::new(11, 15, 8, 2, 15, 18)?;
/// assert!(winter.is_reversed());
///
/// // April has no 31st.
/// assert!(AnalysisPeriod::new(4, 1, 0, 4, 31, 23).is_err());
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisPeriod {
    st_month: u32,
    st_day: u32,
    st_hour: u32,
    end_month: u32,
    end_day: u32,
    end_hour: u32,
}

impl Default for AnalysisPeriod {
    /// The whole year: Jan 1 00:00 to Dec 31 23:00.
    fn default() -> Self {
        Self {
            st_month: 1,
            st_day: 1,
            st_hour: 0,
            end_month: 12,
            end_day: 31,
            end_hour: 23,
        }
    }
}

impl AnalysisPeriod {
    /// Creates a validated period.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidPeriod`] if a month is outside 1-12, a day
    /// does not exist in its month, or an hour is outside 0-23. Values are never
    /// clamped.
    pub fn new(
        st_month: u32,
        st_day: u32,
        st_hour: u32,
        end_month: u32,
        end_day: u32,
        end_hour: u32,
    ) -> Result<Self, AnalysisError> {
        let period = Self {
            st_month,
            st_day,
            st_hour,
            end_month,
            end_day,
            end_hour,
        };
        period.validate()?;
        Ok(period)
    }

    /// Re-checks the calendar invariants.
    ///
    /// Periods deserialized from parameter documents bypass [`AnalysisPeriod::new`],
    /// so the filters call this before using one.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        check_point("start", self.st_month, self.st_day, self.st_hour)?;
        check_point("end", self.end_month, self.end_day, self.end_hour)
    }

    pub fn st_month(&self) -> u32 {
        self.st_month
    }

    pub fn st_day(&self) -> u32 {
        self.st_day
    }

    pub fn st_hour(&self) -> u32 {
        self.st_hour
    }

    pub fn end_month(&self) -> u32 {
        self.end_month
    }

    pub fn end_day(&self) -> u32 {
        self.end_day
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// `true` if the date window wraps past Dec 31.
    pub fn is_reversed(&self) -> bool {
        (self.st_month, self.st_day) > (self.end_month, self.end_day)
    }

    /// `true` if the period selects every hour of the year.
    pub fn is_annual(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, at: &CalendarHour) -> bool {
        self.contains_date(at.month, at.day) && self.contains_hour(at.hour)
    }

    fn contains_date(&self, month: u32, day: u32) -> bool {
        let date = (month, day);
        let start = (self.st_month, self.st_day);
        let end = (self.end_month, self.end_day);
        if start <= end {
            start <= date && date <= end
        } else {
            date >= start || date <= end
        }
    }

    fn contains_hour(&self, hour: u32) -> bool {
        if self.st_hour <= self.end_hour {
            self.st_hour <= hour && hour <= self.end_hour
        } else {
            hour >= self.st_hour || hour <= self.end_hour
        }
    }
}

fn check_point(label: &str, month: u32, day: u32, hour: u32) -> Result<(), AnalysisError> {
    let Some(max_day) = days_in_month(REFERENCE_LEAP_YEAR, month) else {
        return Err(AnalysisError::InvalidPeriod {
            reason: format!("{label} month {month} is outside 1-12"),
        });
    };
    if day < 1 || day > max_day {
        return Err(AnalysisError::InvalidPeriod {
            reason: format!("{label} day {day} does not exist in month {month} (1-{max_day})"),
        });
    }
    if hour > 23 {
        return Err(AnalysisError::InvalidPeriod {
            reason: format!("{label} hour {hour} is outside 0-23"),
        });
    }
    Ok(())
}

impl fmt::Display for AnalysisPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} to {}/{} between {} and {}",
            self.st_month, self.st_day, self.end_month, self.end_day, self.st_hour, self.end_hour
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases = [
            (0, 1, 0, 12, 31, 23),
            (1, 1, 0, 13, 31, 23),
            (4, 31, 0, 5, 1, 23),
            (1, 1, 0, 2, 30, 23),
            (1, 0, 0, 12, 31, 23),
            (1, 1, 24, 12, 31, 23),
            (1, 1, 0, 12, 31, 24),
        ];
        for (sm, sd, sh, em, ed, eh) in cases {
            let result = AnalysisPeriod::new(sm, sd, sh, em, ed, eh);
            assert!(
                matches!(result, Err(AnalysisError::InvalidPeriod { .. })),
                "Expected ({sm}, {sd}, {sh}, {em}, {ed}, {eh}) to be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_leap_day() {
        assert!(AnalysisPeriod::new(2, 29, 0, 3, 1, 23).is_ok());
    }

    #[test]
    fn test_default_is_annual() {
        let period = AnalysisPeriod::default();
        assert!(period.is_annual());
        assert!(!period.is_reversed());
        assert_eq!(period.to_string(), "1/1 to 12/31 between 0 and 23");
    }

    #[test]
    fn test_contains_wrapping_dates_and_hours() -> Result<(), AnalysisError> {
        let period = AnalysisPeriod::new(11, 15, 22, 2, 15, 5)?;
        let at = |month, day, hour| CalendarHour { month, day, hour };

        assert!(period.contains(&at(12, 31, 23)));
        assert!(period.contains(&at(1, 1, 0)));
        assert!(period.contains(&at(11, 15, 22)));
        assert!(period.contains(&at(2, 15, 5)));
        assert!(!period.contains(&at(2, 16, 0)));
        assert!(!period.contains(&at(11, 14, 23)));
        assert!(!period.contains(&at(1, 10, 12)));
        Ok(())
    }

    #[test]
    fn test_deserialized_period_is_revalidated() -> Result<(), Box<dyn std::error::Error>> {
        let period: AnalysisPeriod = serde_json::from_str(
            r#"{"st_month":4,"st_day":31,"st_hour":0,"end_month":5,"end_day":1,"end_hour":23}"#,
        )?;
        assert!(matches!(
            period.validate(),
            Err(AnalysisError::InvalidPeriod { .. })
        ));
        Ok(())
    }
}
