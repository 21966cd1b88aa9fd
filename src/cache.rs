//! Memoization of analysis reports.
//!
//! Every pipeline operation is a pure function of the series and the
//! parameters, so a cached report is exactly what a recompute would return.

use crate::analysis::{analyze, AnalysisParameters, AnalysisReport};
use crate::degree_time::{DegreeTimeMode, DegreeTimeUnit};
use crate::error::AnalysisError;
use crate::types::analysis_period::AnalysisPeriod;
use crate::types::hour_range::HourRange;
use crate::types::plot_mode::PlotMode;
use crate::types::series::HourlySeries;
use crate::types::unit::Unit;
use bon::bon;
use log::debug;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Hashable form of [`AnalysisParameters`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ParameterKey {
    period: AnalysisPeriod,
    threshold: Option<[OrderedFloat<f64>; 2]>,
    occupied_hours: Option<HourRange>,
    degree_time: Option<(OrderedFloat<f64>, Unit, DegreeTimeMode, DegreeTimeUnit)>,
    histogram: Option<[OrderedFloat<f64>; 3]>,
    plot_mode: PlotMode,
}

impl From<&AnalysisParameters> for ParameterKey {
    fn from(parameters: &AnalysisParameters) -> Self {
        ParameterKey {
            period: parameters.period,
            threshold: parameters
                .threshold
                .map(|range| [OrderedFloat(range.min()), OrderedFloat(range.max())]),
            occupied_hours: parameters.occupied_hours,
            degree_time: parameters.degree_time.map(|settings| {
                (
                    OrderedFloat(settings.base.value),
                    settings.base.unit,
                    settings.mode,
                    settings.unit,
                )
            }),
            histogram: parameters.histogram.map(|settings| {
                [
                    OrderedFloat(settings.min),
                    OrderedFloat(settings.max),
                    OrderedFloat(settings.step),
                ]
            }),
            plot_mode: parameters.plot_mode,
        }
    }
}

type CacheKey = (String, ParameterKey);

/// Hit and miss counters of an [`AnalysisCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Reports kept by a cache built without an explicit capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Reports keyed on a caller-chosen series identity and the parameters.
///
/// The series identity (e.g. `"denver.epw/Dry Bulb Temperature"`) must change
/// whenever the series content changes, or [`AnalysisCache::invalidate`] must
/// be called for it. Once full, the oldest entry is evicted first.
#[derive(Debug)]
pub struct AnalysisCache {
    reports: HashMap<CacheKey, Arc<AnalysisReport>>,
    insertion_order: VecDeque<CacheKey>,
    capacity: usize,
    stats: CacheStats,
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl AnalysisCache {
    /// Creates an empty cache holding at most `capacity` reports
    /// (default [`DEFAULT_CACHE_CAPACITY`]). A capacity of zero disables caching.
    #[builder]
    pub fn new(capacity: Option<usize>) -> Self {
        AnalysisCache {
            reports: HashMap::new(),
            insertion_order: VecDeque::new(),
            capacity: capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached report for `series_id` and `parameters`, running
    /// [`analyze`] on a miss.
    ///
    /// # Errors
    ///
    /// Any error of [`analyze`]. Failed analyses are not cached, so the next
    /// call with the same inputs recomputes.
    pub fn get_or_analyze(
        &mut self,
        series_id: &str,
        series: &HourlySeries,
        parameters: &AnalysisParameters,
    ) -> Result<Arc<AnalysisReport>, AnalysisError> {
        let key = (series_id.to_string(), ParameterKey::from(parameters));
        if let Some(report) = self.reports.get(&key) {
            self.stats.hits += 1;
            debug!("Analysis cache hit for '{}'", series_id);
            return Ok(Arc::clone(report));
        }

        self.stats.misses += 1;
        debug!("Analysis cache miss for '{}'", series_id);
        let report = Arc::new(analyze(series, parameters)?);
        self.insert(key, Arc::clone(&report));
        Ok(report)
    }

    fn insert(&mut self, key: CacheKey, report: Arc<AnalysisReport>) {
        if self.capacity == 0 {
            return;
        }
        while self.reports.len() >= self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.reports.remove(&oldest);
            debug!("Evicted cached analysis for '{}'", oldest.0);
        }
        self.insertion_order.push_back(key.clone());
        self.reports.insert(key, report);
    }

    /// Drops every report of `series_id`, returning how many were removed.
    pub fn invalidate(&mut self, series_id: &str) -> usize {
        let before = self.reports.len();
        self.reports.retain(|(id, _), _| id != series_id);
        self.insertion_order.retain(|(id, _)| id != series_id);
        before - self.reports.len()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{constant_humidity, hour_of_day_temperature};
    use crate::types::threshold_range::ThresholdRange;

    fn summer() -> AnalysisParameters {
        AnalysisParameters::builder()
            .period(AnalysisPeriod::new(6, 1, 0, 8, 31, 23).expect("valid summer period"))
            .build()
    }

    #[test]
    fn test_hit_returns_same_report() -> Result<(), AnalysisError> {
        let series = hour_of_day_temperature(false);
        let mut cache = AnalysisCache::builder().build();

        let first = cache.get_or_analyze("dbt", &series, &summer())?;
        let second = cache.get_or_analyze("dbt", &series, &summer())?;

        assert!(Arc::ptr_eq(&first, &second), "second call should be served from cache");
        assert_eq!(*first, analyze(&series, &summer())?);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
        Ok(())
    }

    #[test]
    fn test_different_parameters_miss() -> Result<(), AnalysisError> {
        let series = hour_of_day_temperature(false);
        let mut cache = AnalysisCache::default();

        let mut with_threshold = summer();
        with_threshold.threshold = Some(ThresholdRange::new(20.0, 23.0)?);

        let plain = cache.get_or_analyze("dbt", &series, &summer())?;
        let filtered = cache.get_or_analyze("dbt", &series, &with_threshold)?;
        assert!(!Arc::ptr_eq(&plain, &filtered));
        assert_eq!(filtered.filtered_series.len(), 92 * 4);
        assert_eq!(cache.stats().misses, 2);
        Ok(())
    }

    #[test]
    fn test_errors_are_not_cached() -> Result<(), AnalysisError> {
        let mut cache = AnalysisCache::default();
        let leap_day = AnalysisParameters::builder()
            .period(AnalysisPeriod::new(2, 29, 0, 2, 29, 23)?)
            .build();

        for _ in 0..2 {
            let result = cache.get_or_analyze("dbt", &hour_of_day_temperature(false), &leap_day);
            assert!(matches!(result, Err(AnalysisError::EmptySeries { .. })));
        }
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
        Ok(())
    }

    #[test]
    fn test_invalidate_only_drops_one_series() -> Result<(), AnalysisError> {
        let mut cache = AnalysisCache::default();
        cache.get_or_analyze("dbt", &hour_of_day_temperature(false), &summer())?;
        cache.get_or_analyze("dbt", &hour_of_day_temperature(false), &AnalysisParameters::default())?;
        cache.get_or_analyze("rh", &constant_humidity(50.0), &summer())?;

        assert_eq!(cache.invalidate("dbt"), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidate("dbt"), 0);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_capacity_evicts_oldest() -> Result<(), AnalysisError> {
        let series = hour_of_day_temperature(false);
        let mut cache = AnalysisCache::builder().capacity(2).build();

        let first = cache.get_or_analyze("a", &series, &summer())?;
        cache.get_or_analyze("b", &series, &summer())?;
        cache.get_or_analyze("c", &series, &summer())?;
        assert_eq!(cache.len(), 2);

        let again = cache.get_or_analyze("a", &series, &summer())?;
        assert!(!Arc::ptr_eq(&first, &again), "'a' was evicted and recomputed");
        assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 4 });
        Ok(())
    }

    #[test]
    fn test_default_cache_is_bounded() -> Result<(), AnalysisError> {
        let series = hour_of_day_temperature(false);
        let mut cache = AnalysisCache::default();
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);

        for id in 0..DEFAULT_CACHE_CAPACITY + 5 {
            cache.get_or_analyze(&format!("series-{id}"), &series, &summer())?;
        }
        assert_eq!(cache.len(), DEFAULT_CACHE_CAPACITY);
        Ok(())
    }

    #[test]
    fn test_zero_capacity_never_stores() -> Result<(), AnalysisError> {
        let mut cache = AnalysisCache::builder().capacity(0).build();
        cache.get_or_analyze("dbt", &hour_of_day_temperature(false), &summer())?;
        assert!(cache.is_empty());
        Ok(())
    }
}
