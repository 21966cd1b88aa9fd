//! Heating and cooling degree-time relative to a base temperature.
//!
//! Every hour contributes the positive difference between the base temperature
//! and the hour's value: `max(base - value, 0)` when heating, and
//! `max(value - base, 0)` when cooling. Results are kept in degree-hours and
//! can be converted to degree-days by dividing by 24.

use crate::error::AnalysisError;
use crate::filtering::SeriesFilterExt;
use crate::types::analysis_period::AnalysisPeriod;
use crate::types::calendar::HOURS_PER_DAY;
use crate::types::hour_range::HourRange;
use crate::types::series::{Header, HourlySeries};
use crate::types::unit::Unit;
use bon::builder;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether degree-time accumulates below (heating) or above (cooling) the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DegreeTimeMode {
    #[default]
    Heating,
    Cooling,
}

impl fmt::Display for DegreeTimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegreeTimeMode::Heating => write!(f, "Heating"),
            DegreeTimeMode::Cooling => write!(f, "Cooling"),
        }
    }
}

/// The time base a [`DegreeTimeResult`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DegreeTimeUnit {
    #[default]
    DegreeHours,
    DegreeDays,
}

impl DegreeTimeUnit {
    pub fn unit(&self) -> Unit {
        match self {
            DegreeTimeUnit::DegreeHours => Unit::DegreeHours,
            DegreeTimeUnit::DegreeDays => Unit::DegreeDays,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DegreeTimeUnit::DegreeHours => "Degree-Hours",
            DegreeTimeUnit::DegreeDays => "Degree-Days",
        }
    }
}

/// A base temperature together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseTemperature {
    pub value: f64,
    pub unit: Unit,
}

impl BaseTemperature {
    pub fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Celsius,
        }
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Fahrenheit,
        }
    }
}

impl fmt::Display for BaseTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Hourly degree-time contributions plus their total.
///
/// The series keeps the timestamps of the temperature series it was computed
/// from, so it can be restricted, charted or aggregated like any other series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeTimeResult {
    series: HourlySeries,
    mode: DegreeTimeMode,
    base: BaseTemperature,
    time_unit: DegreeTimeUnit,
    total: f64,
}

impl DegreeTimeResult {
    pub fn series(&self) -> &HourlySeries {
        &self.series
    }

    pub fn values(&self) -> &[f64] {
        self.series.values()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn mode(&self) -> DegreeTimeMode {
        self.mode
    }

    pub fn base(&self) -> BaseTemperature {
        self.base
    }

    pub fn time_unit(&self) -> DegreeTimeUnit {
        self.time_unit
    }

    pub fn to_degree_days(&self) -> DegreeTimeResult {
        self.convert(DegreeTimeUnit::DegreeDays)
    }

    pub fn to_degree_hours(&self) -> DegreeTimeResult {
        self.convert(DegreeTimeUnit::DegreeHours)
    }

    /// Re-expresses the result in `time_unit`, dividing (or multiplying) every
    /// value and the total by 24. Converting to the current unit is a no-op.
    pub fn convert(&self, time_unit: DegreeTimeUnit) -> DegreeTimeResult {
        let factor = match (self.time_unit, time_unit) {
            (DegreeTimeUnit::DegreeHours, DegreeTimeUnit::DegreeDays) => {
                1.0 / HOURS_PER_DAY as f64
            }
            (DegreeTimeUnit::DegreeDays, DegreeTimeUnit::DegreeHours) => HOURS_PER_DAY as f64,
            _ => return self.clone(),
        };
        DegreeTimeResult {
            series: self
                .series
                .map_values(result_header(self.mode, time_unit), |value| value * factor),
            mode: self.mode,
            base: self.base,
            time_unit,
            total: self.total * factor,
        }
    }

    /// Sums the hourly contributions into one total per calendar month.
    ///
    /// The twelve totals add up to [`DegreeTimeResult::total`].
    pub fn monthly_totals(&self) -> MonthlyTotals {
        let mut totals = [0.0; 12];
        for (at, value) in self.series.calendar_samples() {
            totals[(at.month - 1) as usize] += value;
        }
        MonthlyTotals {
            header: self.series.header().clone(),
            totals,
        }
    }
}

/// Twelve monthly sums of a derived series, January first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotals {
    pub header: Header,
    pub totals: [f64; 12],
}

impl MonthlyTotals {
    /// Total for `month` (1-12), or `None` for any other month number.
    pub fn month(&self, month: u32) -> Option<f64> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.totals.get(index).copied()
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }
}

fn result_header(mode: DegreeTimeMode, time_unit: DegreeTimeUnit) -> Header {
    Header::new(
        format!("{} {}", mode, time_unit.label()),
        time_unit.unit(),
    )
}

/// Computes hourly degree-hours of `series` against `base`.
///
/// # Errors
///
/// Returns [`AnalysisError::UnitMismatch`] if `series` is not a temperature
/// series or `base` is expressed in a different unit than `series`.
pub fn compute_degree_time(
    series: &HourlySeries,
    base: BaseTemperature,
    mode: DegreeTimeMode,
) -> Result<DegreeTimeResult, AnalysisError> {
    if !series.unit().is_temperature() || series.unit() != base.unit {
        return Err(AnalysisError::UnitMismatch {
            name: series.name().to_string(),
            expected: base.unit,
            found: series.unit(),
        });
    }

    let contribution = |value: f64| match mode {
        DegreeTimeMode::Heating => (base.value - value).max(0.0),
        DegreeTimeMode::Cooling => (value - base.value).max(0.0),
    };
    let hourly = series.map_values(
        result_header(mode, DegreeTimeUnit::DegreeHours),
        contribution,
    );
    let total = hourly.values().iter().sum();
    debug!(
        "{} degree-hours of '{}' at base {}: {:.1}",
        mode,
        series.name(),
        base,
        total
    );

    Ok(DegreeTimeResult {
        series: hourly,
        mode,
        base,
        time_unit: DegreeTimeUnit::DegreeHours,
        total,
    })
}

/// Computes degree-time after optionally restricting `series` to a calendar
/// period and to occupied hours of the day.
///
/// Both restrictions are plain timestamp filters, so applying them in either
/// order gives the same result. `unit` defaults to degree-hours.
///
/// # Examples
///
/// ```
/// use epw_analysis::{degree_time, AnalysisPeriod, BaseTemperature, DegreeTimeMode, DegreeTimeUnit, Header, HourRange, HourlySeries, Unit};
///
/// let series = HourlySeries::new(Header::new("Dry Bulb Temperature", Unit::Celsius), false, vec![15.0; 8760])?;
/// let winter = AnalysisPeriod::new(12, 1, 0, 2, 28, 23)?;
///
/// let result = degree_time()
///     .series(&series)
///     .base(BaseTemperature::celsius(18.0))
///     .mode(DegreeTimeMode::Heating)
///     .period(&winter)
///     .occupied_hours(HourRange::new(8, 17)?)
///     .unit(DegreeTimeUnit::DegreeDays)
///     .call()?;
///
/// // 90 winter days, 10 occupied hours a day, 3 degrees below base.
/// assert!((result.total() - 90.0 * 10.0 * 3.0 / 24.0).abs() < 1e-9);
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
#[builder]
pub fn degree_time(
    series: &HourlySeries,
    base: BaseTemperature,
    mode: DegreeTimeMode,
    period: Option<&AnalysisPeriod>,
    occupied_hours: Option<HourRange>,
    unit: Option<DegreeTimeUnit>,
) -> Result<DegreeTimeResult, AnalysisError> {
    let mut restricted = match period {
        Some(period) => series.filter_by_period(period)?,
        None => series.clone(),
    };
    if let Some(hours) = occupied_hours {
        restricted = restricted.filter_by_hours(&hours)?;
    }
    let result = compute_degree_time(&restricted, base, mode)?;
    Ok(result.convert(unit.unwrap_or_default()))
}
