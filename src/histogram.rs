//! Fixed-width histogram binning of series values.

use crate::error::AnalysisError;
use crate::types::series::{Header, HourlySeries};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on the number of bins a single request may create.
const MAX_BINS: usize = 100_000;
/// Tolerance when deciding whether `(max - min) / step` is a whole number.
const STEP_EPSILON: f64 = 1e-9;
/// Edges are rounded to this many parts per unit (nine decimals).
const EDGE_SCALE: f64 = 1e9;

/// Binning parameters: edges start at `min` and advance by `step` up to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// A single histogram bin.
///
/// Bins are half-open `[lower, upper)` except the last one of a histogram,
/// which is closed `[lower, upper]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// `true` for the final bin, which also includes its upper edge.
    pub closed: bool,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && (value < self.upper || (self.closed && value == self.upper))
    }

    /// Range label for narrative text, e.g. `"20 to 25"`.
    pub fn label(&self) -> String {
        format!("{} to {}", self.lower, self.upper)
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { ')' };
        write!(f, "[{}, {}{}: {}", self.lower, self.upper, close, self.count)
    }
}

/// Counts of a series' values per contiguous bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBins {
    header: Header,
    bins: Vec<HistogramBin>,
    excluded: usize,
}

impl HistogramBins {
    /// Name and unit of the binned series.
    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Samples that fell into some bin.
    pub fn binned_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Samples below `min` or above `max`, which no bin holds.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// The bins holding the most samples; several on a tie.
    pub fn most_frequent(&self) -> Vec<&HistogramBin> {
        let Some(max) = self.bins.iter().map(|bin| bin.count).max() else {
            return vec![];
        };
        self.bins.iter().filter(|bin| bin.count == max).collect()
    }

    /// The bins holding the fewest samples; several on a tie.
    pub fn least_frequent(&self) -> Vec<&HistogramBin> {
        let Some(min) = self.bins.iter().map(|bin| bin.count).min() else {
            return vec![];
        };
        self.bins.iter().filter(|bin| bin.count == min).collect()
    }
}

/// Bins the values of `series` into fixed-width bins.
///
/// Edges are `min, min + step, min + 2 * step, ...` below `max`. When
/// `max - min` is not a multiple of `step`, the final bin is narrower and ends
/// at `max`. Values on an inner edge belong to the upper bin. The final bin
/// includes `max`. Values below `min` or above `max` land in no bin and are
/// reported by [`HistogramBins::excluded`].
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidBinning`] if a parameter is not finite,
/// `step <= 0`, `min >= max`, or the range would need an excessive number of bins.
///
/// # Examples
///
/// ```
/// use epw_analysis::{bin_values, Header, HourlySeries, Unit};
///
/// let values = (0..8760).map(|hour| (hour % 24) as f64).collect();
/// let series = HourlySeries::new(Header::new("Dry Bulb Temperature", Unit::Celsius), false, values)?;
///
/// let bins = bin_values(&series, 0.0, 25.0, 10.0)?;
/// assert_eq!(bins.counts(), vec![3650, 3650, 1460]);
/// assert_eq!(bins.bins()[2].to_string(), "[20, 25]: 1460");
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
pub fn bin_values(
    series: &HourlySeries,
    min: f64,
    max: f64,
    step: f64,
) -> Result<HistogramBins, AnalysisError> {
    let invalid = |reason| AnalysisError::InvalidBinning {
        min,
        max,
        step,
        reason,
    };
    if !(min.is_finite() && max.is_finite() && step.is_finite()) {
        return Err(invalid("parameters must be finite"));
    }
    if step <= 0.0 {
        return Err(invalid("step must be positive"));
    }
    if min >= max {
        return Err(invalid("min must be below max"));
    }

    let span = (max - min) / step;
    let bin_count = if (span - span.round()).abs() < STEP_EPSILON {
        span.round()
    } else {
        span.ceil()
    };
    if bin_count > MAX_BINS as f64 {
        return Err(invalid("too many bins"));
    }
    let bin_count = (bin_count as usize).max(1);

    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| {
            let last = i + 1 == bin_count;
            HistogramBin {
                lower: edge(min, step, i),
                upper: if last { max } else { edge(min, step, i + 1) },
                count: 0,
                closed: last,
            }
        })
        .collect();

    let mut excluded = 0;
    for &value in series.values() {
        // Also rejects NaN.
        if !(value >= min && value <= max) {
            excluded += 1;
            continue;
        }
        // A value on an edge up to rounding error belongs to the upper bin.
        let index = (((value - min) / step + STEP_EPSILON).floor() as usize).min(bin_count - 1);
        bins[index].count += 1;
    }

    debug!(
        "Binned {} samples of '{}' into {} bins ({} excluded)",
        series.len() - excluded,
        series.name(),
        bin_count,
        excluded
    );
    Ok(HistogramBins {
        header: series.header().clone(),
        bins,
        excluded,
    })
}

/// Edge `index` of a histogram, with float noise such as `0.30000000000000004`
/// rounded away.
fn edge(min: f64, step: f64, index: usize) -> f64 {
    let raw = min + index as f64 * step;
    let rounded = (raw * EDGE_SCALE).round() / EDGE_SCALE;
    if rounded.is_finite() && (rounded - raw).abs() < STEP_EPSILON {
        rounded
    } else {
        raw
    }
}

/// [`bin_values`] driven by a settings struct.
pub fn bin_with(
    series: &HourlySeries,
    settings: &HistogramSettings,
) -> Result<HistogramBins, AnalysisError> {
    bin_values(series, settings.min, settings.max, settings.step)
}
