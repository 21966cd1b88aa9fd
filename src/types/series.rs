//! Defines [`HourlySeries`], the hourly time series every analysis operates on.

use crate::error::AnalysisError;
use crate::types::calendar::{hours_in_year, CalendarHour};
use crate::types::unit::Unit;
use serde::{Deserialize, Serialize};

/// Name and unit metadata travelling with every series.
///
/// Chart and document layers use it to title figures and label axes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header {
    /// Human readable variable name, e.g. "Dry Bulb Temperature".
    pub name: String,
    pub unit: Unit,
}

impl Header {
    pub fn new(name: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }
}

/// An hourly time series aligned to a calendar year.
///
/// A series built with [`HourlySeries::new`] is *continuous*: it holds exactly
/// 8760 samples (8784 for a leap year), sample `i` being hour `i` of the year
/// starting at Jan 1, 00:00. Filtering keeps the hour-of-year index of every
/// retained sample, so filtered series may contain gaps but stay in strictly
/// increasing chronological order.
///
/// Series are never mutated in place; every operation returns a new series.
///
/// # Examples
///
/// ```
/// use epw_analysis::{Header, HourlySeries, Unit};
///
/// let values = vec![20.0; 8760];
/// let series = HourlySeries::new(Header::new("Dry Bulb Temperature", Unit::Celsius), false, values)?;
/// assert_eq!(series.len(), 8760);
/// assert!(series.is_continuous());
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlySeries {
    header: Header,
    is_leap_year: bool,
    hours: Vec<u32>,
    values: Vec<f64>,
}

impl HourlySeries {
    /// Creates a continuous series covering a full year.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::SeriesLength`] if `values` does not hold exactly
    /// one sample per hour of the (leap) year.
    pub fn new(
        header: Header,
        is_leap_year: bool,
        values: Vec<f64>,
    ) -> Result<Self, AnalysisError> {
        let expected = hours_in_year(is_leap_year);
        if values.len() != expected {
            return Err(AnalysisError::SeriesLength {
                name: header.name,
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            header,
            is_leap_year,
            hours: (0..expected as u32).collect(),
            values,
        })
    }

    /// Builds a derived series from already aligned parts.
    pub(crate) fn from_parts(
        header: Header,
        is_leap_year: bool,
        hours: Vec<u32>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(hours.len(), values.len());
        debug_assert!(hours.windows(2).all(|pair| pair[0] < pair[1]));
        Self {
            header,
            is_leap_year,
            hours,
            values,
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn unit(&self) -> Unit {
        self.header.unit
    }

    pub fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of hours in the calendar year this series is aligned to.
    pub fn year_len(&self) -> usize {
        hours_in_year(self.is_leap_year)
    }

    /// `true` when the series still holds every hour of its year.
    pub fn is_continuous(&self) -> bool {
        self.len() == self.year_len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Hour-of-year index of each sample, parallel to [`HourlySeries::values`].
    pub fn hours(&self) -> &[u32] {
        &self.hours
    }

    /// Iterates `(hour_of_year, value)` pairs in chronological order.
    pub fn samples(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.hours.iter().copied().zip(self.values.iter().copied())
    }

    /// Iterates samples together with their calendar month, day and hour.
    pub fn calendar_samples(&self) -> impl Iterator<Item = (CalendarHour, f64)> + '_ {
        let is_leap_year = self.is_leap_year;
        self.samples().filter_map(move |(hour, value)| {
            CalendarHour::from_hour_of_year(hour, is_leap_year).map(|at| (at, value))
        })
    }

    /// Keeps the samples for which `keep` returns `true`, preserving their timestamps.
    pub(crate) fn retain_samples(&self, mut keep: impl FnMut(u32, f64) -> bool) -> HourlySeries {
        let (hours, values): (Vec<u32>, Vec<f64>) =
            self.samples().filter(|&(hour, value)| keep(hour, value)).unzip();
        HourlySeries::from_parts(self.header.clone(), self.is_leap_year, hours, values)
    }

    /// Applies `f` to every value, keeping the timestamps and replacing the header.
    pub(crate) fn map_values(&self, header: Header, f: impl Fn(f64) -> f64) -> HourlySeries {
        HourlySeries::from_parts(
            header,
            self.is_leap_year,
            self.hours.clone(),
            self.values.iter().map(|&value| f(value)).collect(),
        )
    }
}
