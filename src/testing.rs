//! Synthetic series shared by the unit tests.

use crate::types::series::{Header, HourlySeries};
use crate::types::unit::Unit;

/// A temperature series whose value equals the hour of day (0.0 to 23.0).
pub(crate) fn hour_of_day_temperature(is_leap_year: bool) -> HourlySeries {
    let len = if is_leap_year { 8784 } else { 8760 };
    let values = (0..len).map(|hour| (hour % 24) as f64).collect();
    HourlySeries::new(
        Header::new("Dry Bulb Temperature", Unit::Celsius),
        is_leap_year,
        values,
    )
    .expect("synthetic series has a full year of samples")
}

/// A humidity series holding the same value every hour.
pub(crate) fn constant_humidity(value: f64) -> HourlySeries {
    HourlySeries::new(
        Header::new("Relative Humidity", Unit::Percent),
        false,
        vec![value; 8760],
    )
    .expect("synthetic series has a full year of samples")
}
