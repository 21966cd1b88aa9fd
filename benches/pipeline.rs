use criterion::{black_box, criterion_group, criterion_main, Criterion};
use epw_analysis::{
    analyze, bin_values, AnalysisParameters, AnalysisPeriod, BaseTemperature, DegreeTimeMode,
    DegreeTimeSettings, DegreeTimeUnit, Header, HistogramSettings, HourRange, HourlySeries,
    SeriesFilterExt, ThresholdRange, Unit,
};

fn synthetic_temperature() -> HourlySeries {
    let values = (0..8760)
        .map(|hour| {
            let day = (hour / 24) as f64;
            let seasonal = -10.0 * (2.0 * std::f64::consts::PI * day / 365.0).cos();
            let diurnal = 5.0 * (2.0 * std::f64::consts::PI * (hour % 24) as f64 / 24.0).sin();
            12.0 + seasonal + diurnal
        })
        .collect();
    HourlySeries::new(
        Header::new("Dry Bulb Temperature", Unit::Celsius),
        false,
        values,
    )
    .expect("a full year of samples")
}

fn bench_pipeline(c: &mut Criterion) {
    let series = synthetic_temperature();
    let winter = AnalysisPeriod::new(11, 15, 0, 2, 15, 23).expect("valid period");
    let comfort = ThresholdRange::new(18.0, 26.0).expect("valid range");

    c.bench_function("filter_by_period", |b| {
        b.iter(|| black_box(&series).filter_by_period(black_box(&winter)))
    });
    c.bench_function("filter_by_threshold", |b| {
        b.iter(|| black_box(&series).filter_by_threshold(black_box(&comfort)))
    });
    c.bench_function("bin_values", |b| {
        b.iter(|| bin_values(black_box(&series), -30.0, 40.0, 1.0))
    });

    let parameters = AnalysisParameters::builder()
        .period(winter)
        .occupied_hours(HourRange::new(8, 18).expect("valid hours"))
        .threshold(comfort)
        .degree_time(DegreeTimeSettings {
            base: BaseTemperature::celsius(18.0),
            mode: DegreeTimeMode::Heating,
            unit: DegreeTimeUnit::DegreeDays,
        })
        .histogram(HistogramSettings {
            min: -30.0,
            max: 40.0,
            step: 5.0,
        })
        .build();
    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(&series), black_box(&parameters)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
