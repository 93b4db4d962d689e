//! Station price list loading.
//!
//! The price list is a delimited text file supplied by the operator, with
//! no fixed schema guarantee beyond "there is a name, a position and a
//! price somewhere in it". Loading is deliberately forgiving: header names
//! are matched against known aliases, several delimiters are tried, and
//! malformed rows are skipped rather than fatal.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::Station;

use super::error::CatalogError;

/// Header aliases for the station name column.
const NAME_COLUMNS: &[&str] = &["station_name", "station", "name", "site"];
const LAT_COLUMNS: &[&str] = &["lat", "latitude", "y", "gps_lat"];
const LON_COLUMNS: &[&str] = &["lon", "lng", "longitude", "x", "gps_lon", "long"];
const PRICE_COLUMNS: &[&str] = &["price", "fuel_price", "gas_price", "price_per_gallon", "cost"];

/// Delimiters tried in order until one yields more than one column.
const DELIMITERS: &[u8] = b",;\t|";

/// The static fuel station catalog.
///
/// Loaded once at process start and read-only afterward, so it can be
/// shared across in-flight requests without locking.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
}

impl StationCatalog {
    /// Load the catalog from a delimited text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let bytes = fs::read(path.as_ref())?;
        // Price lists in the wild are not reliably UTF-8; replacing the
        // odd bad byte beats rejecting the whole file.
        let text = String::from_utf8_lossy(&bytes);
        Self::parse(&text)
    }

    /// All stations in the catalog.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    fn parse(text: &str) -> Result<Self, CatalogError> {
        let (headers, records) = read_table(text)?;

        let name_idx = find_column(&headers, NAME_COLUMNS)
            .ok_or(CatalogError::MissingColumn { which: "name" })?;
        let lat_idx = find_column(&headers, LAT_COLUMNS)
            .ok_or(CatalogError::MissingColumn { which: "latitude" })?;
        let lon_idx = find_column(&headers, LON_COLUMNS)
            .ok_or(CatalogError::MissingColumn { which: "longitude" })?;
        let price_idx = find_column(&headers, PRICE_COLUMNS)
            .ok_or(CatalogError::MissingColumn { which: "price" })?;

        let stations: Vec<Station> = records
            .iter()
            .filter_map(|record| parse_row(record, name_idx, lat_idx, lon_idx, price_idx))
            .collect();

        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { stations })
    }
}

/// Read the file with the first delimiter that produces a real table.
fn read_table(text: &str) -> Result<(StringRecord, Vec<StringRecord>), CatalogError> {
    for &delimiter in DELIMITERS {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = match reader.headers() {
            Ok(h) => h.clone(),
            Err(_) => continue,
        };

        // A single column means this wasn't the file's delimiter.
        if headers.len() < 2 {
            continue;
        }

        let records: Vec<StringRecord> = reader.records().filter_map(|r| r.ok()).collect();
        return Ok((headers, records));
    }

    Err(CatalogError::Unparseable)
}

/// Index of the first header matching any of the candidate names.
fn find_column(headers: &StringRecord, candidates: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| candidates.contains(&h.trim().to_ascii_lowercase().as_str()))
}

/// Parse one row into a station; `None` skips the row.
fn parse_row(
    record: &StringRecord,
    name_idx: usize,
    lat_idx: usize,
    lon_idx: usize,
    price_idx: usize,
) -> Option<Station> {
    let name = record.get(name_idx)?.trim();
    if name.is_empty() {
        return None;
    }

    let lat: f64 = record.get(lat_idx)?.parse().ok()?;
    let lon: f64 = record.get(lon_idx)?.parse().ok()?;
    let price: f64 = record.get(price_idx)?.parse().ok()?;

    if !lat.is_finite() || !lon.is_finite() || !price.is_finite() || price <= 0.0 {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }

    Some(Station::new(name, lat, lon, price))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(contents: &str) -> Result<StationCatalog, CatalogError> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.csv");
        fs::write(&path, contents).unwrap();
        StationCatalog::load(&path)
    }

    #[test]
    fn loads_standard_csv() {
        let catalog = load_str(
            "name,lat,lon,price\n\
             Pilot #44,35.19,-101.83,3.15\n\
             Love's #210,35.05,-106.65,2.89\n",
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stations()[0].name, "Pilot #44");
        assert_eq!(catalog.stations()[1].price_per_gallon, 2.89);
    }

    #[test]
    fn header_aliases_are_case_insensitive() {
        let catalog = load_str(
            "Station_Name,Latitude,Lng,Fuel_Price\n\
             TA Travel Center,39.76,-86.16,3.05\n",
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        let s = &catalog.stations()[0];
        assert_eq!(s.name, "TA Travel Center");
        assert_eq!(s.lat, 39.76);
        assert_eq!(s.lon, -86.16);
    }

    #[test]
    fn retries_with_semicolon_delimiter() {
        let catalog = load_str(
            "name;lat;lon;price\n\
             Flying J;41.25;-95.93;2.99\n",
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.stations()[0].name, "Flying J");
    }

    #[test]
    fn retries_with_pipe_delimiter() {
        let catalog = load_str(
            "name|lat|lon|price\n\
             Casey's|41.59|-93.62|3.20\n",
        )
        .unwrap();

        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn skips_malformed_rows() {
        let catalog = load_str(
            "name,lat,lon,price\n\
             Good,35.0,-101.0,3.00\n\
             ,35.1,-101.1,3.10\n\
             NoPrice,35.2,-101.2,not-a-number\n\
             FreeFuel,35.3,-101.3,0.0\n\
             BadLat,95.0,-101.4,3.40\n\
             AlsoGood,35.5,-101.5,3.50\n",
        )
        .unwrap();

        let names: Vec<&str> = catalog.stations().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Good", "AlsoGood"]);
    }

    #[test]
    fn missing_price_column() {
        let err = load_str("name,lat,lon\nNowhere,35.0,-101.0\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingColumn { which: "price" }
        ));
    }

    #[test]
    fn no_valid_rows_is_an_error() {
        let err = load_str("name,lat,lon,price\n,x,y,z\n").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StationCatalog::load("/does/not/exist.csv").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
