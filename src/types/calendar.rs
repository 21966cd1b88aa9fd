//! Calendar helpers mapping an hour-of-year index onto month, day and hour.
//!
//! Annual weather files carry no year of their own, so timestamps are derived
//! against fixed reference years: 2017 for 8760-hour files and 2016 for
//! 8784-hour (leap) files.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

pub const HOURS_PER_DAY: u32 = 24;
pub(crate) const REFERENCE_YEAR: i32 = 2017;
pub(crate) const REFERENCE_LEAP_YEAR: i32 = 2016;

pub(crate) fn reference_year(is_leap_year: bool) -> i32 {
    if is_leap_year {
        REFERENCE_LEAP_YEAR
    } else {
        REFERENCE_YEAR
    }
}

/// Number of hourly samples in a full year.
pub fn hours_in_year(is_leap_year: bool) -> usize {
    if is_leap_year {
        8784
    } else {
        8760
    }
}

pub(crate) fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_month_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_day_of_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1)?;
    let last_day_of_current_month = first_day_of_next_month - Duration::days(1);
    Some(last_day_of_current_month.day())
}

/// The calendar position of a single hourly sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CalendarHour {
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl CalendarHour {
    /// Resolves an hour-of-year index (0 = Jan 1, 00:00) to its calendar position.
    ///
    /// Returns `None` when the index lies beyond the end of the year.
    pub fn from_hour_of_year(hour_of_year: u32, is_leap_year: bool) -> Option<Self> {
        let ordinal = hour_of_year / HOURS_PER_DAY + 1;
        let date = NaiveDate::from_yo_opt(reference_year(is_leap_year), ordinal)?;
        Some(Self {
            month: date.month(),
            day: date.day(),
            hour: hour_of_year % HOURS_PER_DAY,
        })
    }

    /// Inverse of [`CalendarHour::from_hour_of_year`].
    pub fn hour_of_year(&self, is_leap_year: bool) -> Option<u32> {
        let date = NaiveDate::from_ymd_opt(reference_year(is_leap_year), self.month, self.day)?;
        Some((date.ordinal() - 1) * HOURS_PER_DAY + self.hour)
    }
}

impl fmt::Display for CalendarHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {:02}:00", self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(REFERENCE_YEAR, 2), Some(28));
        assert_eq!(days_in_month(REFERENCE_LEAP_YEAR, 2), Some(29));
        assert_eq!(days_in_month(REFERENCE_YEAR, 4), Some(30));
        assert_eq!(days_in_month(REFERENCE_YEAR, 12), Some(31));
        assert_eq!(days_in_month(REFERENCE_YEAR, 13), None);
    }

    #[test]
    fn test_from_hour_of_year() {
        let first = CalendarHour::from_hour_of_year(0, false).unwrap();
        assert_eq!(first, CalendarHour { month: 1, day: 1, hour: 0 });

        let last = CalendarHour::from_hour_of_year(8759, false).unwrap();
        assert_eq!(last, CalendarHour { month: 12, day: 31, hour: 23 });

        // Mar 1 follows Feb 28 in a non-leap year but Feb 29 in a leap year.
        let day_60 = CalendarHour::from_hour_of_year(59 * 24, false).unwrap();
        assert_eq!((day_60.month, day_60.day), (3, 1));
        let day_60_leap = CalendarHour::from_hour_of_year(59 * 24, true).unwrap();
        assert_eq!((day_60_leap.month, day_60_leap.day), (2, 29));

        assert!(CalendarHour::from_hour_of_year(8760, false).is_none());
        assert!(CalendarHour::from_hour_of_year(8783, true).is_some());
    }

    #[test]
    fn test_hour_of_year_round_trip() {
        let at = CalendarHour { month: 3, day: 15, hour: 12 };
        assert_eq!(at.hour_of_year(false), Some(1764));
        assert_eq!(CalendarHour::from_hour_of_year(1764, false), Some(at));
        assert_eq!(at.to_string(), "3/15 12:00");
    }
}
