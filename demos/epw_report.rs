use epw_analysis::{
    AnalysisCache, AnalysisError, AnalysisParameters, AnalysisPeriod, DegreeTimeSettings,
    EpwFile, HistogramSettings, PlotMode, ThresholdRange,
};
use std::env;

/// Usage: `cargo run --example epw_report -- path/to/weather.epw`
fn main() -> Result<(), AnalysisError> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: epw_report <file.epw>");
        return Ok(());
    };

    let epw = EpwFile::from_path(&path)?;
    let dry_bulb = epw.dry_bulb_temperature()?;

    let parameters = AnalysisParameters::builder()
        .period(AnalysisPeriod::new(6, 1, 8, 8, 31, 18)?)
        .threshold(ThresholdRange::new(22.0, 26.0)?)
        .degree_time(DegreeTimeSettings::cooling_days())
        .histogram(HistogramSettings {
            min: -10.0,
            max: 40.0,
            step: 5.0,
        })
        .plot_mode(PlotMode::MeanDaily)
        .build();

    let mut cache = AnalysisCache::default();
    let report = cache.get_or_analyze(&path, &dry_bulb, &parameters)?;

    for line in report.narrative(Some(epw.location())) {
        println!("{line}");
    }
    if let Some(daily) = &report.daily_means {
        println!("{} days in '{}'", daily.days.len(), daily.header.name);
    }

    Ok(())
}
