use crate::epw::error::EpwError;
use crate::error::AnalysisError;
use crate::types::calendar::hours_in_year;
use crate::types::epw_field::EpwField;
use crate::types::location::Location;
use crate::types::series::{Header, HourlySeries};
use log::{info, warn};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Header lines preceding the hourly rows of every EPW file.
const HEADER_LINES: usize = 8;

/// A parsed EPW weather file: its station location and the hourly rows.
///
/// Only the `LOCATION` header line is interpreted. Individual variables are
/// extracted on demand with [`EpwFile::series`].
#[derive(Debug, Clone)]
pub struct EpwFile {
    path: PathBuf,
    location: Location,
    rows: DataFrame,
    is_leap_year: bool,
}

impl EpwFile {
    /// Reads and parses the EPW file at `path`.
    ///
    /// # Errors
    ///
    /// * [`EpwError::Io`] if the file cannot be opened or read.
    /// * [`EpwError::MissingLocation`] / [`EpwError::MalformedLocation`] if the
    ///   first line is not a valid `LOCATION` record.
    /// * [`EpwError::Csv`] if the hourly rows are not valid CSV.
    /// * [`EpwError::RowCount`] unless there are 8760 or 8784 hourly rows.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EpwError> {
        let path = path.as_ref().to_path_buf();
        info!("Reading EPW file {:?}", path);

        let file = File::open(&path).map_err(|e| EpwError::Io(path.clone(), e))?;
        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .map_err(|e| EpwError::Io(path.clone(), e))?;
        let location = parse_location(&path, first_line.trim_end())?;

        let rows = CsvReadOptions::default()
            .with_has_header(false)
            .with_skip_rows(HEADER_LINES)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.clone()))
            .map_err(|e| EpwError::Csv(path.clone(), e))?
            .finish()
            .map_err(|e| EpwError::Csv(path.clone(), e))?;

        let is_leap_year = match rows.height() {
            height if height == hours_in_year(false) => false,
            height if height == hours_in_year(true) => true,
            found => {
                warn!(
                    "EPW file {:?} has {} hourly rows instead of a full year",
                    path, found
                );
                return Err(EpwError::RowCount { path, found });
            }
        };

        info!(
            "Loaded {} hourly rows for {} from {:?}",
            rows.height(),
            location,
            path
        );
        Ok(EpwFile {
            path,
            location,
            rows,
            is_leap_year,
        })
    }

    /// Parses EPW content held in memory, e.g. an uploaded file.
    ///
    /// The bytes are buffered in a temporary file for the CSV reader.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EpwError> {
        let mut temp_file = NamedTempFile::new().map_err(EpwError::TempFile)?;
        temp_file.write_all(bytes).map_err(EpwError::TempFile)?;
        temp_file.flush().map_err(EpwError::TempFile)?;
        Self::from_path(temp_file.path())
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// Path the rows were read from. For [`EpwFile::from_bytes`] this names a
    /// temporary file that no longer exists.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of hourly rows, 8760 or 8784.
    pub fn len(&self) -> usize {
        self.rows.height()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.height() == 0
    }

    /// Extracts the continuous hourly series of `field`, named and unit-tagged
    /// after the field.
    ///
    /// # Errors
    ///
    /// * [`EpwError::ColumnNotFound`] if the rows lack the field's column or it
    ///   is not numeric.
    /// * [`EpwError::MissingValue`] if any hour has an empty cell.
    pub fn series(&self, field: EpwField) -> Result<HourlySeries, AnalysisError> {
        // Headerless CSV columns are named column_1, column_2, ...
        let column_name = format!("column_{}", field.index() + 1);
        let not_found = |source| EpwError::ColumnNotFound { field, source };

        let column = self
            .rows
            .column(&column_name)
            .map_err(not_found)?
            .cast(&DataType::Float64)
            .map_err(not_found)?;
        let values = column
            .f64()
            .map_err(not_found)?
            .into_iter()
            .enumerate()
            .map(|(hour, value)| value.ok_or(EpwError::MissingValue { field, hour }))
            .collect::<Result<Vec<f64>, EpwError>>()?;

        HourlySeries::new(
            Header::new(field.name(), field.unit()),
            self.is_leap_year,
            values,
        )
    }

    pub fn dry_bulb_temperature(&self) -> Result<HourlySeries, AnalysisError> {
        self.series(EpwField::DryBulbTemperature)
    }

    pub fn relative_humidity(&self) -> Result<HourlySeries, AnalysisError> {
        self.series(EpwField::RelativeHumidity)
    }
}

/// Parses `LOCATION,city,state,country,source,wmo,lat,lon,tz,elevation`.
fn parse_location(path: &Path, line: &str) -> Result<Location, EpwError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.first() != Some(&"LOCATION") || parts.len() < 10 {
        return Err(EpwError::MissingLocation(path.to_path_buf()));
    }
    let number = |field: &'static str, value: &str| {
        value
            .parse::<f64>()
            .map_err(|_| EpwError::MalformedLocation {
                field,
                value: value.to_string(),
            })
    };

    Ok(Location {
        city: parts[1].to_string(),
        state: parts[2].to_string(),
        country: parts[3].to_string(),
        source: parts[4].to_string(),
        station_id: parts[5].to_string(),
        latitude: number("latitude", parts[6])?,
        longitude: number("longitude", parts[7])?,
        time_zone: number("time zone", parts[8])?,
        elevation: number("elevation", parts[9])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::unit::Unit;
    use std::error::Error;

    const LOCATION_LINE: &str =
        "LOCATION,Denver Centennial,CO,USA,TMY3,725650,39.57,-104.85,-7.0,1793.0";
    const OTHER_HEADERS: [&str; 7] = [
        "DESIGN CONDITIONS,0",
        "TYPICAL/EXTREME PERIODS,0",
        "GROUND TEMPERATURES,0",
        "HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0",
        "COMMENTS 1,synthetic test file",
        "COMMENTS 2,values follow the hour of day",
        "DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31",
    ];

    /// A complete EPW document with `hours` rows. Dry bulb temperature equals
    /// the hour of day; relative humidity is a constant 45 %.
    fn synthetic_epw(hours: usize) -> String {
        let mut epw = format!("{}\n", LOCATION_LINE);
        for line in OTHER_HEADERS {
            epw.push_str(line);
            epw.push('\n');
        }
        for hour in 0..hours {
            let hour_of_day = hour % 24;
            let mut fields = vec![
                "2017".to_string(),
                "1".to_string(),
                "1".to_string(),
                (hour_of_day + 1).to_string(),
                "60".to_string(),
                "?9?9?9?9E0?9?9?9*9*9?9?9?9?9?9?9?9*_*9*9*9*9*9".to_string(),
                format!("{:.1}", hour_of_day as f64),
                "-3.5".to_string(),
                "45".to_string(),
            ];
            fields.extend((9..35).map(|_| "0".to_string()));
            epw.push_str(&fields.join(","));
            epw.push('\n');
        }
        epw
    }

    #[test]
    fn test_read_synthetic_file() -> Result<(), Box<dyn Error>> {
        let epw = EpwFile::from_bytes(synthetic_epw(8760).as_bytes())?;
        assert_eq!(epw.len(), 8760);
        assert!(!epw.is_leap_year());

        let location = epw.location();
        assert_eq!(location.city, "Denver Centennial");
        assert_eq!(location.country, "USA");
        assert_eq!(location.station_id, "725650");
        assert_eq!(location.latitude, 39.57);
        assert_eq!(location.time_zone, -7.0);
        assert_eq!(location.to_string(), "Denver Centennial, USA");

        let dbt = epw.dry_bulb_temperature()?;
        assert_eq!(dbt.name(), "Dry Bulb Temperature");
        assert_eq!(dbt.unit(), Unit::Celsius);
        assert!(dbt.is_continuous());
        assert_eq!(&dbt.values()[..3], &[0.0, 1.0, 2.0]);
        assert_eq!(dbt.values()[8759], 23.0);

        let rh = epw.relative_humidity()?;
        assert_eq!(rh.unit(), Unit::Percent);
        assert!(rh.values().iter().all(|&value| value == 45.0));

        let dew_point = epw.series(EpwField::DewPointTemperature)?;
        assert_eq!(dew_point.values()[100], -3.5);
        Ok(())
    }

    #[test]
    fn test_read_from_path() -> Result<(), Box<dyn Error>> {
        let mut file = NamedTempFile::new()?;
        file.write_all(synthetic_epw(8784).as_bytes())?;
        file.flush()?;

        let epw = EpwFile::from_path(file.path())?;
        assert!(epw.is_leap_year(), "8784 rows describe a leap year");
        assert_eq!(epw.path(), file.path());
        assert_eq!(epw.series(EpwField::WindSpeed)?.len(), 8784);
        Ok(())
    }

    #[test]
    fn test_partial_year_is_rejected() {
        let result = EpwFile::from_bytes(synthetic_epw(48).as_bytes());
        assert!(matches!(result, Err(EpwError::RowCount { found: 48, .. })));
    }

    #[test]
    fn test_missing_location_is_rejected() {
        let content = synthetic_epw(8760).replacen("LOCATION", "COMMENTS", 1);
        let result = EpwFile::from_bytes(content.as_bytes());
        assert!(matches!(result, Err(EpwError::MissingLocation(_))));
    }

    #[test]
    fn test_malformed_location_is_rejected() {
        let content = synthetic_epw(8760).replacen("39.57", "north", 1);
        let result = EpwFile::from_bytes(content.as_bytes());
        assert!(matches!(
            result,
            Err(EpwError::MalformedLocation { field: "latitude", value }) if value == "north"
        ));
    }

    #[test]
    fn test_missing_value_is_reported() -> Result<(), Box<dyn Error>> {
        // Blank the dry bulb temperature of the third row (hour 2).
        let content = synthetic_epw(8760).replacen("*9*9*9*9*9,2.0,", "*9*9*9*9*9,,", 1);
        let epw = EpwFile::from_bytes(content.as_bytes())?;

        let result = epw.dry_bulb_temperature();
        assert!(matches!(
            result,
            Err(AnalysisError::Epw(EpwError::MissingValue {
                field: EpwField::DryBulbTemperature,
                hour: 2
            }))
        ));
        assert!(epw.relative_humidity().is_ok(), "other fields stay readable");
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = EpwFile::from_path("does/not/exist.epw");
        assert!(matches!(result, Err(EpwError::Io(..))));
    }
}
