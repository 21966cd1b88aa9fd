//! Physical units attached to hourly series.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The unit of measure carried by a series header.
///
/// Covers every unit used by the EPW hourly fields plus the derived
/// degree-time units produced by [`crate::compute_degree_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Percent,
    Pascal,
    WattHoursPerSquareMeter,
    Lux,
    CandelaPerSquareMeter,
    Degrees,
    MetersPerSecond,
    Tenths,
    Thousandths,
    Kilometers,
    Meters,
    Centimeters,
    Millimeters,
    Days,
    Hours,
    Fraction,
    /// Weather observation flags and codes.
    Code,
    DegreeHours,
    DegreeDays,
}

impl Unit {
    /// Short symbol used for axis labels and narrative text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Percent => "%",
            Unit::Pascal => "Pa",
            Unit::WattHoursPerSquareMeter => "Wh/m²",
            Unit::Lux => "lux",
            Unit::CandelaPerSquareMeter => "cd/m²",
            Unit::Degrees => "°",
            Unit::MetersPerSecond => "m/s",
            Unit::Tenths => "tenths",
            Unit::Thousandths => "thousandths",
            Unit::Kilometers => "km",
            Unit::Meters => "m",
            Unit::Centimeters => "cm",
            Unit::Millimeters => "mm",
            Unit::Days => "days",
            Unit::Hours => "h",
            Unit::Fraction => "fraction",
            Unit::Code => "code",
            Unit::DegreeHours => "degree-hours",
            Unit::DegreeDays => "degree-days",
        }
    }

    pub fn is_temperature(&self) -> bool {
        matches!(self, Unit::Celsius | Unit::Fahrenheit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
