//! Defines the `EpwField` enum, mapping the hourly EPW data columns to names and units.

use crate::types::unit::Unit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An hourly data field of an EPW file.
///
/// Discriminants are the zero-based column positions within an EPW data row.
/// Columns 0-5 (year, month, day, hour, minute, source flags) describe the
/// timestamp and are not analysable fields; column 34 (liquid precipitation
/// quantity) is rarely populated and not exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpwField {
    DryBulbTemperature = 6,
    DewPointTemperature = 7,
    RelativeHumidity = 8,
    AtmosphericStationPressure = 9,
    ExtraterrestrialHorizontalRadiation = 10,
    ExtraterrestrialDirectNormalRadiation = 11,
    HorizontalInfraredRadiationIntensity = 12,
    GlobalHorizontalRadiation = 13,
    DirectNormalRadiation = 14,
    DiffuseHorizontalRadiation = 15,
    GlobalHorizontalIlluminance = 16,
    DirectNormalIlluminance = 17,
    DiffuseHorizontalIlluminance = 18,
    ZenithLuminance = 19,
    WindDirection = 20,
    WindSpeed = 21,
    TotalSkyCover = 22,
    OpaqueSkyCover = 23,
    Visibility = 24,
    CeilingHeight = 25,
    PresentWeatherObservation = 26,
    PresentWeatherCodes = 27,
    PrecipitableWater = 28,
    AerosolOpticalDepth = 29,
    SnowDepth = 30,
    DaysSinceLastSnowfall = 31,
    Albedo = 32,
    LiquidPrecipitationDepth = 33,
}

impl EpwField {
    pub const ALL: [EpwField; 28] = [
        EpwField::DryBulbTemperature,
        EpwField::DewPointTemperature,
        EpwField::RelativeHumidity,
        EpwField::AtmosphericStationPressure,
        EpwField::ExtraterrestrialHorizontalRadiation,
        EpwField::ExtraterrestrialDirectNormalRadiation,
        EpwField::HorizontalInfraredRadiationIntensity,
        EpwField::GlobalHorizontalRadiation,
        EpwField::DirectNormalRadiation,
        EpwField::DiffuseHorizontalRadiation,
        EpwField::GlobalHorizontalIlluminance,
        EpwField::DirectNormalIlluminance,
        EpwField::DiffuseHorizontalIlluminance,
        EpwField::ZenithLuminance,
        EpwField::WindDirection,
        EpwField::WindSpeed,
        EpwField::TotalSkyCover,
        EpwField::OpaqueSkyCover,
        EpwField::Visibility,
        EpwField::CeilingHeight,
        EpwField::PresentWeatherObservation,
        EpwField::PresentWeatherCodes,
        EpwField::PrecipitableWater,
        EpwField::AerosolOpticalDepth,
        EpwField::SnowDepth,
        EpwField::DaysSinceLastSnowfall,
        EpwField::Albedo,
        EpwField::LiquidPrecipitationDepth,
    ];

    /// Zero-based column position within an EPW data row.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up the field stored at a zero-based column position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epw_analysis::EpwField;
    ///
    /// assert_eq!(EpwField::from_index(6), Some(EpwField::DryBulbTemperature));
    /// assert_eq!(EpwField::from_index(3), None); // the hour column
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.index() == index)
    }

    /// Looks up a field by its display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            EpwField::DryBulbTemperature => "Dry Bulb Temperature",
            EpwField::DewPointTemperature => "Dew Point Temperature",
            EpwField::RelativeHumidity => "Relative Humidity",
            EpwField::AtmosphericStationPressure => "Atmospheric Station Pressure",
            EpwField::ExtraterrestrialHorizontalRadiation => "Extraterrestrial Horizontal Radiation",
            EpwField::ExtraterrestrialDirectNormalRadiation => {
                "Extraterrestrial Direct Normal Radiation"
            }
            EpwField::HorizontalInfraredRadiationIntensity => {
                "Horizontal Infrared Radiation Intensity"
            }
            EpwField::GlobalHorizontalRadiation => "Global Horizontal Radiation",
            EpwField::DirectNormalRadiation => "Direct Normal Radiation",
            EpwField::DiffuseHorizontalRadiation => "Diffuse Horizontal Radiation",
            EpwField::GlobalHorizontalIlluminance => "Global Horizontal Illuminance",
            EpwField::DirectNormalIlluminance => "Direct Normal Illuminance",
            EpwField::DiffuseHorizontalIlluminance => "Diffuse Horizontal Illuminance",
            EpwField::ZenithLuminance => "Zenith Luminance",
            EpwField::WindDirection => "Wind Direction",
            EpwField::WindSpeed => "Wind Speed",
            EpwField::TotalSkyCover => "Total Sky Cover",
            EpwField::OpaqueSkyCover => "Opaque Sky Cover",
            EpwField::Visibility => "Visibility",
            EpwField::CeilingHeight => "Ceiling Height",
            EpwField::PresentWeatherObservation => "Present Weather Observation",
            EpwField::PresentWeatherCodes => "Present Weather Codes",
            EpwField::PrecipitableWater => "Precipitable Water",
            EpwField::AerosolOpticalDepth => "Aerosol Optical Depth",
            EpwField::SnowDepth => "Snow Depth",
            EpwField::DaysSinceLastSnowfall => "Days Since Last Snowfall",
            EpwField::Albedo => "Albedo",
            EpwField::LiquidPrecipitationDepth => "Liquid Precipitation Depth",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            EpwField::DryBulbTemperature | EpwField::DewPointTemperature => Unit::Celsius,
            EpwField::RelativeHumidity => Unit::Percent,
            EpwField::AtmosphericStationPressure => Unit::Pascal,
            EpwField::ExtraterrestrialHorizontalRadiation
            | EpwField::ExtraterrestrialDirectNormalRadiation
            | EpwField::HorizontalInfraredRadiationIntensity
            | EpwField::GlobalHorizontalRadiation
            | EpwField::DirectNormalRadiation
            | EpwField::DiffuseHorizontalRadiation => Unit::WattHoursPerSquareMeter,
            EpwField::GlobalHorizontalIlluminance
            | EpwField::DirectNormalIlluminance
            | EpwField::DiffuseHorizontalIlluminance => Unit::Lux,
            EpwField::ZenithLuminance => Unit::CandelaPerSquareMeter,
            EpwField::WindDirection => Unit::Degrees,
            EpwField::WindSpeed => Unit::MetersPerSecond,
            EpwField::TotalSkyCover | EpwField::OpaqueSkyCover => Unit::Tenths,
            EpwField::Visibility => Unit::Kilometers,
            EpwField::CeilingHeight => Unit::Meters,
            EpwField::PresentWeatherObservation | EpwField::PresentWeatherCodes => Unit::Code,
            EpwField::PrecipitableWater | EpwField::LiquidPrecipitationDepth => Unit::Millimeters,
            EpwField::AerosolOpticalDepth => Unit::Thousandths,
            EpwField::SnowDepth => Unit::Centimeters,
            EpwField::DaysSinceLastSnowfall => Unit::Days,
            EpwField::Albedo => Unit::Fraction,
        }
    }
}

impl fmt::Display for EpwField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
