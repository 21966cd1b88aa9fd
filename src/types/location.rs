//! Station location metadata read from the EPW `LOCATION` header line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the weather data was recorded.
///
/// The analysis pipeline never consumes this; it exists so report and chart
/// layers can label their output (e.g. "Denver Centennial, USA").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    /// State, province or region, often empty or "-".
    pub state: String,
    pub country: String,
    /// Data source, e.g. "TMY3" or "IWEC".
    pub source: String,
    /// WMO station number as written in the file.
    pub station_id: String,
    /// Latitude in decimal degrees (positive for North).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East).
    pub longitude: f64,
    /// Offset from UTC in hours.
    pub time_zone: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.country)
    }
}
