use crate::error::AnalysisError;
use crate::types::analysis_period::AnalysisPeriod;
use crate::types::calendar::{CalendarHour, HOURS_PER_DAY};
use crate::types::hour_range::HourRange;
use crate::types::series::HourlySeries;
use crate::types::threshold_range::ThresholdRange;
use log::debug;

pub trait SeriesFilterExt {
    /// Keeps the samples whose calendar month, day and hour fall inside `period`.
    ///
    /// Retained samples keep their original timestamps and the series keeps its
    /// name and unit. The result is empty only when the period selects no hour
    /// present in the series.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidPeriod`] if `period` violates the calendar
    /// invariants (possible for periods deserialized from parameter documents).
    fn filter_by_period(&self, period: &AnalysisPeriod) -> Result<HourlySeries, AnalysisError>;

    /// Keeps the samples whose value `v` satisfies `min <= v <= max`.
    ///
    /// The result is not reindexed: comparing its length with the input length
    /// gives the met and unmet hours of the input period.
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidRange`] if `range.min > range.max`.
    fn filter_by_threshold(&self, range: &ThresholdRange) -> Result<HourlySeries, AnalysisError>;

    /// Keeps the samples whose hour of day lies inside `hours`.
    ///
    /// Commutes with [`SeriesFilterExt::filter_by_period`].
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidHourRange`] if an hour exceeds 23.
    fn filter_by_hours(&self, hours: &HourRange) -> Result<HourlySeries, AnalysisError>;
}

impl SeriesFilterExt for HourlySeries {
    fn filter_by_period(&self, period: &AnalysisPeriod) -> Result<HourlySeries, AnalysisError> {
        period.validate()?;
        if period.is_annual() {
            return Ok(self.clone());
        }

        let is_leap_year = self.is_leap_year();
        let filtered = self.retain_samples(|hour, _| {
            CalendarHour::from_hour_of_year(hour, is_leap_year).is_some_and(|at| period.contains(&at))
        });
        debug!(
            "Period {} kept {} of {} samples of '{}'",
            period,
            filtered.len(),
            self.len(),
            self.name()
        );
        Ok(filtered)
    }

    fn filter_by_threshold(&self, range: &ThresholdRange) -> Result<HourlySeries, AnalysisError> {
        range.validate()?;
        let filtered = self.retain_samples(|_, value| range.contains(value));
        debug!(
            "Threshold {} kept {} of {} samples of '{}'",
            range,
            filtered.len(),
            self.len(),
            self.name()
        );
        Ok(filtered)
    }

    fn filter_by_hours(&self, hours: &HourRange) -> Result<HourlySeries, AnalysisError> {
        hours.validate()?;
        Ok(self.retain_samples(|hour, _| hours.contains(hour % HOURS_PER_DAY)))
    }
}
