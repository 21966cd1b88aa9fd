//! Summary statistics and simple aggregations for narrative text and daily charts.

use crate::error::AnalysisError;
use crate::types::calendar::{CalendarHour, HOURS_PER_DAY};
use crate::types::series::{Header, HourlySeries};
use serde::Serialize;

/// Mean, extremes and sample count of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Summarizes every sample of `series`.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptySeries`] if `series` holds no samples.
pub fn summarize(series: &HourlySeries) -> Result<Summary, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::EmptySeries {
            name: series.name().to_string(),
        });
    }
    let values = series.values();
    let (min, max, sum) = values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &value| (min.min(value), max.max(value), sum + value),
    );
    Ok(Summary {
        mean: sum / values.len() as f64,
        min,
        max,
        count: values.len(),
    })
}

/// How many hours of an analysed period met a threshold condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdReport {
    /// Hours in the analysed period, before the threshold filter.
    pub period_hours: usize,
    /// Hours whose value lies within the threshold range.
    pub met_hours: usize,
}

impl ThresholdReport {
    /// Compares a period-filtered series with its threshold-filtered subset.
    pub fn new(period_series: &HourlySeries, met_series: &HourlySeries) -> Self {
        Self {
            period_hours: period_series.len(),
            met_hours: met_series.len(),
        }
    }

    /// Hours of the period outside the threshold; zero if `met_hours` exceeds
    /// `period_hours`.
    pub fn unmet_hours(&self) -> usize {
        self.period_hours.saturating_sub(self.met_hours)
    }

    /// Share of the period's hours that met the threshold, in percent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptySeries`] if the period held no hours.
    pub fn percent_met(&self) -> Result<f64, AnalysisError> {
        if self.period_hours == 0 {
            return Err(AnalysisError::EmptySeries {
                name: "threshold period".to_string(),
            });
        }
        Ok(self.met_hours as f64 * 100.0 / self.period_hours as f64)
    }
}

/// The mean of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyMean {
    pub month: u32,
    pub day: u32,
    pub mean: f64,
    /// Samples of the day that contributed to the mean.
    pub hours: usize,
}

/// One mean per calendar day present in a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    pub header: Header,
    pub days: Vec<DailyMean>,
}

/// Averages each calendar day of `series`.
///
/// Days without any sample (e.g. outside a filtered period) are left out;
/// partially covered days average only the samples they have.
pub fn daily_means(series: &HourlySeries) -> DailySeries {
    let mut days: Vec<DailyMean> = Vec::new();
    let mut current: Option<(u32, f64, usize)> = None;

    let mut flush = |day_index: u32, sum: f64, hours: usize| {
        if let Some(at) =
            CalendarHour::from_hour_of_year(day_index * HOURS_PER_DAY, series.is_leap_year())
        {
            days.push(DailyMean {
                month: at.month,
                day: at.day,
                mean: sum / hours as f64,
                hours,
            });
        }
    };

    for (hour, value) in series.samples() {
        let day_index = hour / HOURS_PER_DAY;
        current = match current {
            Some((index, sum, hours)) if index == day_index => Some((index, sum + value, hours + 1)),
            Some((index, sum, hours)) => {
                flush(index, sum, hours);
                Some((day_index, value, 1))
            }
            None => Some((day_index, value, 1)),
        };
    }
    if let Some((index, sum, hours)) = current {
        flush(index, sum, hours);
    }

    DailySeries {
        header: Header::new(
            format!("Daily Mean {}", series.name()),
            series.unit(),
        ),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::SeriesFilterExt;
    use crate::testing::hour_of_day_temperature;
    use crate::types::analysis_period::AnalysisPeriod;
    use crate::types::threshold_range::ThresholdRange;

    #[test]
    fn test_summarize_full_series() -> Result<(), AnalysisError> {
        let summary = summarize(&hour_of_day_temperature(false))?;
        assert_eq!(summary.count, 8760);
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 23.0);
        assert!((summary.mean - 11.5).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_summarize_single_sample() -> Result<(), AnalysisError> {
        let single = hour_of_day_temperature(false)
            .filter_by_period(&AnalysisPeriod::new(7, 4, 15, 7, 4, 15)?)?;
        let summary = summarize(&single)?;
        assert_eq!(
            summary,
            Summary {
                mean: 15.0,
                min: 15.0,
                max: 15.0,
                count: 1
            }
        );
        Ok(())
    }

    #[test]
    fn test_summarize_empty_series_fails() -> Result<(), AnalysisError> {
        let empty = hour_of_day_temperature(false)
            .filter_by_threshold(&ThresholdRange::new(30.0, 40.0)?)?;
        assert!(matches!(
            summarize(&empty),
            Err(AnalysisError::EmptySeries { name }) if name == "Dry Bulb Temperature"
        ));
        Ok(())
    }

    #[test]
    fn test_threshold_report() -> Result<(), AnalysisError> {
        let period = hour_of_day_temperature(false)
            .filter_by_period(&AnalysisPeriod::new(1, 1, 0, 1, 31, 23)?)?;
        let met = period.filter_by_threshold(&ThresholdRange::new(18.0, 23.0)?)?;

        let report = ThresholdReport::new(&period, &met);
        assert_eq!(report.period_hours, 31 * 24);
        assert_eq!(report.met_hours, 31 * 6);
        assert_eq!(report.unmet_hours(), 31 * 18);
        assert!((report.percent_met()? - 25.0).abs() < 1e-9);

        let empty = ThresholdReport {
            period_hours: 0,
            met_hours: 0,
        };
        assert!(empty.percent_met().is_err());

        let inconsistent = ThresholdReport {
            period_hours: 10,
            met_hours: 12,
        };
        assert_eq!(inconsistent.unmet_hours(), 0);
        Ok(())
    }

    #[test]
    fn test_daily_means() -> Result<(), AnalysisError> {
        let daily = daily_means(&hour_of_day_temperature(false));
        assert_eq!(daily.days.len(), 365);
        assert!(daily.days.iter().all(|day| (day.mean - 11.5).abs() < 1e-9));
        assert_eq!((daily.days[31].month, daily.days[31].day), (2, 1));
        assert_eq!(daily.header.name, "Daily Mean Dry Bulb Temperature");

        let mornings = hour_of_day_temperature(false)
            .filter_by_period(&AnalysisPeriod::new(12, 30, 6, 1, 2, 9)?)?;
        let daily = daily_means(&mornings);
        let dates: Vec<(u32, u32)> = daily.days.iter().map(|d| (d.month, d.day)).collect();
        assert_eq!(dates, vec![(1, 1), (1, 2), (12, 30), (12, 31)]);
        assert!(daily.days.iter().all(|day| day.hours == 4 && day.mean == 7.5));
        Ok(())
    }
}
