//! The analysis pipeline: one immutable parameter set in, one report out.
//!
//! [`analyze`] is the "recompute everything" entry point a dashboard calls
//! whenever an input changes. It runs the period filter, the optional
//! occupied-hours and threshold filters, summary statistics, degree-time and
//! histogram binning in sequence, and either returns every derived artefact or
//! fails without a partial result.

use crate::degree_time::{
    compute_degree_time, BaseTemperature, DegreeTimeMode, DegreeTimeResult, DegreeTimeUnit,
    MonthlyTotals,
};
use crate::error::AnalysisError;
use crate::filtering::SeriesFilterExt;
use crate::histogram::{bin_with, HistogramBin, HistogramBins, HistogramSettings};
use crate::statistics::{daily_means, summarize, DailySeries, Summary, ThresholdReport};
use crate::types::analysis_period::AnalysisPeriod;
use crate::types::hour_range::HourRange;
use crate::types::location::Location;
use crate::types::plot_mode::PlotMode;
use crate::types::series::HourlySeries;
use crate::types::threshold_range::ThresholdRange;
use bon::Builder;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Degree-time configuration for a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeTimeSettings {
    pub base: BaseTemperature,
    pub mode: DegreeTimeMode,
    #[serde(default)]
    pub unit: DegreeTimeUnit,
}

impl DegreeTimeSettings {
    /// Heating degree-days below 18 °C.
    pub fn heating_days() -> Self {
        Self {
            base: BaseTemperature::celsius(18.0),
            mode: DegreeTimeMode::Heating,
            unit: DegreeTimeUnit::DegreeDays,
        }
    }

    /// Cooling degree-days above 23 °C.
    pub fn cooling_days() -> Self {
        Self {
            base: BaseTemperature::celsius(23.0),
            mode: DegreeTimeMode::Cooling,
            unit: DegreeTimeUnit::DegreeDays,
        }
    }
}

/// Every user-chosen input of one analysis request.
///
/// Build it with [`AnalysisParameters::builder`] or parse it from a JSON
/// document with [`AnalysisParameters::from_json`]. Unset fields take these
/// defaults:
///
/// * `period`: the whole year, Jan 1 00:00 to Dec 31 23:00.
/// * `threshold`, `occupied_hours`, `degree_time`, `histogram`: not applied.
/// * `plot_mode`: [`PlotMode::Hourly`].
///
/// # Examples
///
/// ```
/// use epw_analysis::{AnalysisParameters, AnalysisPeriod, ThresholdRange, PlotMode};
///
/// let parameters = AnalysisParameters::builder()
///     .period(AnalysisPeriod::new(6, 1, 8, 8, 31, 18)?)
///     .threshold(ThresholdRange::new(22.0, 26.0)?)
///     .plot_mode(PlotMode::MeanDaily)
///     .build();
///
/// let from_json = AnalysisParameters::from_json(r#"{
///     "period": {"st_month": 6, "st_day": 1, "st_hour": 8, "end_month": 8, "end_day": 31, "end_hour": 18},
///     "threshold": {"min": 22.0, "max": 26.0},
///     "plot_mode": "MeanDaily"
/// }"#)?;
/// assert_eq!(parameters, from_json);
/// # Ok::<(), epw_analysis::AnalysisError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct AnalysisParameters {
    #[builder(default)]
    pub period: AnalysisPeriod,
    pub threshold: Option<ThresholdRange>,
    pub occupied_hours: Option<HourRange>,
    pub degree_time: Option<DegreeTimeSettings>,
    pub histogram: Option<HistogramSettings>,
    #[builder(default)]
    pub plot_mode: PlotMode,
}

impl Default for AnalysisParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AnalysisParameters {
    /// Parses a parameter document. Missing keys take their defaults.
    ///
    /// Values are validated when the parameters are used, not here.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything derived from one series and one parameter set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub parameters: AnalysisParameters,
    /// The series restricted to the period and occupied hours.
    pub period_series: HourlySeries,
    /// `period_series` after the threshold filter; equal to it without a threshold.
    pub filtered_series: HourlySeries,
    /// Statistics of `period_series`.
    pub summary: Summary,
    /// Statistics of `filtered_series`, `None` when the threshold kept nothing.
    pub filtered_summary: Option<Summary>,
    pub threshold: Option<ThresholdReport>,
    pub degree_time: Option<DegreeTimeResult>,
    pub monthly_degree_time: Option<MonthlyTotals>,
    pub histogram: Option<HistogramBins>,
    /// Daily means of `filtered_series`, only for [`PlotMode::MeanDaily`].
    pub daily_means: Option<DailySeries>,
}

/// Runs the full pipeline for `series`.
///
/// Degree-time and histogram are computed on the period series (period and
/// occupied hours applied, threshold not applied).
///
/// # Errors
///
/// * [`AnalysisError::InvalidPeriod`], [`AnalysisError::InvalidHourRange`] or
///   [`AnalysisError::InvalidRange`] for invalid parameters.
/// * [`AnalysisError::EmptySeries`] if the period selects no hours.
/// * [`AnalysisError::UnitMismatch`] if degree-time is requested for a
///   non-temperature series or with a base in another unit.
/// * [`AnalysisError::InvalidBinning`] for invalid histogram settings.
pub fn analyze(
    series: &HourlySeries,
    parameters: &AnalysisParameters,
) -> Result<AnalysisReport, AnalysisError> {
    info!(
        "Analysing '{}' for {} ({})",
        series.name(),
        parameters.period,
        parameters.plot_mode
    );

    let mut period_series = series.filter_by_period(&parameters.period)?;
    if let Some(hours) = &parameters.occupied_hours {
        period_series = period_series.filter_by_hours(hours)?;
    }
    let summary = summarize(&period_series)?;

    let (filtered_series, threshold) = match &parameters.threshold {
        Some(range) => {
            let met = period_series.filter_by_threshold(range)?;
            let report = ThresholdReport::new(&period_series, &met);
            (met, Some(report))
        }
        None => (period_series.clone(), None),
    };
    let filtered_summary = if filtered_series.is_empty() {
        None
    } else {
        Some(summarize(&filtered_series)?)
    };

    let degree_time = parameters
        .degree_time
        .as_ref()
        .map(|settings| {
            compute_degree_time(&period_series, settings.base, settings.mode)
                .map(|result| result.convert(settings.unit))
        })
        .transpose()?;
    let monthly_degree_time = degree_time.as_ref().map(DegreeTimeResult::monthly_totals);

    let histogram = parameters
        .histogram
        .as_ref()
        .map(|settings| bin_with(&period_series, settings))
        .transpose()?;

    let daily_means = match parameters.plot_mode {
        PlotMode::MeanDaily => Some(daily_means(&filtered_series)),
        PlotMode::Hourly | PlotMode::Line => None,
    };

    debug!(
        "Analysis of '{}' done: {} period hours, {} after threshold",
        series.name(),
        period_series.len(),
        filtered_series.len()
    );
    Ok(AnalysisReport {
        parameters: parameters.clone(),
        period_series,
        filtered_series,
        summary,
        filtered_summary,
        threshold,
        degree_time,
        monthly_degree_time,
        histogram,
        daily_means,
    })
}

impl AnalysisReport {
    /// Sentences summarizing the report, ready for a document export layer.
    pub fn narrative(&self, location: Option<&Location>) -> Vec<String> {
        let name = self.period_series.name();
        let unit = self.period_series.unit();
        let mut lines = Vec::new();

        if let Some(location) = location {
            lines.push(format!("{name} at {location}, {}.", self.parameters.period));
        }
        lines.push(format!(
            "{name} averaged {:.1} {unit} (min {:.1} {unit}, max {:.1} {unit}) over {} hours.",
            self.summary.mean, self.summary.min, self.summary.max, self.summary.count
        ));

        if let (Some(report), Some(range)) = (&self.threshold, &self.parameters.threshold) {
            if let Ok(percent) = report.percent_met() {
                lines.push(format!(
                    "{} of {} hours ({percent:.1}%) were within {range} {unit}; {} hours were not.",
                    report.met_hours,
                    report.period_hours,
                    report.unmet_hours()
                ));
            }
        }

        if let Some(result) = &self.degree_time {
            lines.push(format!(
                "{} degree-time at base {}: {:.1} {}.",
                result.mode(),
                result.base(),
                result.total(),
                result.series().unit()
            ));
        }

        if let Some(histogram) = &self.histogram {
            let describe = |bins: Vec<&HistogramBin>| {
                let labels: Vec<String> = bins.iter().map(|bin| bin.label()).collect();
                let count = bins.first().map(|bin| bin.count).unwrap_or(0);
                (labels.join(", "), count)
            };
            let (most, most_count) = describe(histogram.most_frequent());
            let (least, least_count) = describe(histogram.least_frequent());
            lines.push(format!(
                "Most frequent range: {most} {unit} ({most_count} hours). \
                 Least frequent range: {least} {unit} ({least_count} hours)."
            ));
        }

        lines
    }
}
