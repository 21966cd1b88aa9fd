use epw_analysis::{
    summarize, AnalysisError, AnalysisPeriod, Header, HourRange, HourlySeries, SeriesFilterExt,
    ThresholdRange, Unit,
};

fn main() -> Result<(), AnalysisError> {
    // A made-up year: seasonal swing plus a daily cycle.
    let values = (0..8760)
        .map(|hour| {
            let day = (hour / 24) as f64;
            let hour_of_day = (hour % 24) as f64;
            10.0 - 12.0 * (2.0 * std::f64::consts::PI * day / 365.0).cos()
                + 4.0 * (2.0 * std::f64::consts::PI * (hour_of_day - 9.0) / 24.0).sin()
        })
        .collect();
    let series = HourlySeries::new(
        Header::new("Dry Bulb Temperature", Unit::Celsius),
        false,
        values,
    )?;

    // Winter nights, wrapping over new year and midnight.
    let winter_nights = series
        .filter_by_period(&AnalysisPeriod::new(11, 15, 0, 2, 15, 23)?)?
        .filter_by_hours(&HourRange::new(22, 5)?)?;
    let below_freezing = winter_nights.filter_by_threshold(&ThresholdRange::new(-50.0, 0.0)?)?;

    let summary = summarize(&winter_nights)?;
    println!(
        "{} winter night hours, mean {:.1} {}",
        summary.count,
        summary.mean,
        series.unit()
    );
    println!("{} of them below freezing", below_freezing.len());

    Ok(())
}
