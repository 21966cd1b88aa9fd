mod analysis;
mod cache;
mod degree_time;
mod epw;
mod error;
mod filtering;
mod histogram;
mod statistics;
mod types;

#[cfg(test)]
mod testing;

pub use error::AnalysisError;
pub use epw::error::EpwError;
pub use epw::reader::EpwFile;

pub use types::analysis_period::AnalysisPeriod;
pub use types::calendar::{hours_in_year, CalendarHour, HOURS_PER_DAY};
pub use types::epw_field::EpwField;
pub use types::hour_range::HourRange;
pub use types::location::Location;
pub use types::plot_mode::PlotMode;
pub use types::series::{Header, HourlySeries};
pub use types::threshold_range::ThresholdRange;
pub use types::unit::Unit;

pub use filtering::SeriesFilterExt;

pub use degree_time::{
    compute_degree_time, degree_time, BaseTemperature, DegreeTimeMode, DegreeTimeResult,
    DegreeTimeUnit, MonthlyTotals,
};
pub use histogram::{bin_values, bin_with, HistogramBin, HistogramBins, HistogramSettings};
pub use statistics::{daily_means, summarize, DailyMean, DailySeries, Summary, ThresholdReport};

pub use analysis::{analyze, AnalysisParameters, AnalysisReport, DegreeTimeSettings};
pub use cache::{AnalysisCache, CacheStats, DEFAULT_CACHE_CAPACITY};
