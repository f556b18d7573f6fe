/// Earthquake catalog CSV parsing.
///
/// The catalog is the historical dataset the classifier and scalers were
/// built from. Its column names are a fixed external contract and are
/// matched case-sensitively:
///
/// ```text
/// LAT,LONG_,MAGMB,HubDist,FaultDensity,DEPTH_KM,YR,MO,DT,HubName
/// ```
///
/// `HubDist` is in metres. `FaultDensity`, `HubName`, `DEPTH_KM` and the
/// date columns may be empty; an empty `FaultDensity` stays unknown rather
/// than becoming zero.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::{Result, SeismicRecord};

// ---------------------------------------------------------------------------
// Serde structures for CSV rows
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CatalogRow {
    #[serde(rename = "LAT")]
    lat: f64,
    #[serde(rename = "LONG_")]
    long: f64,
    #[serde(rename = "MAGMB")]
    magnitude: f64,
    #[serde(rename = "HubDist")]
    hub_dist: f64,
    #[serde(rename = "FaultDensity", default)]
    fault_density: Option<f64>,
    #[serde(rename = "DEPTH_KM", default)]
    depth_km: Option<f64>,
    #[serde(rename = "YR", default)]
    year: Option<i32>,
    #[serde(rename = "MO", default)]
    month: Option<u32>,
    #[serde(rename = "DT", default)]
    day: Option<u32>,
    #[serde(rename = "HubName", default)]
    hub_name: Option<String>,
}

impl From<CatalogRow> for SeismicRecord {
    fn from(row: CatalogRow) -> Self {
        SeismicRecord {
            latitude: row.lat,
            longitude: row.long,
            magnitude: row.magnitude,
            depth_km: row.depth_km,
            hub_distance_m: row.hub_dist,
            // some exports write missing floats as "nan"
            fault_density: row.fault_density.filter(|d| d.is_finite()),
            fault_hub_name: row
                .hub_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            year: row.year,
            month: row.month,
            day: row.day,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses catalog records from any CSV reader, preserving row order.
///
/// Fails on the first malformed row; a catalog with a bad row is not
/// trusted for inference.
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<SeismicRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CatalogRow>() {
        records.push(row?.into());
    }
    Ok(records)
}

/// Reads and parses the catalog CSV at `path`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<SeismicRecord>> {
    let file = File::open(path)?;
    parse_catalog(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;
    use crate::model::SusceptibilityError;

    #[test]
    fn test_parse_catalog_preserves_row_order() {
        let records = parse_catalog(fixture_catalog_csv().as_bytes()).expect("fixture should parse");
        assert_eq!(records.len(), 8);
        assert!((records[0].latitude - 30.55).abs() < 1e-9);
        assert_eq!(records[0].fault_hub_name.as_deref(), Some("Main_Central_Thrust"));
    }

    #[test]
    fn test_empty_fault_density_stays_unknown() {
        let records = parse_catalog(fixture_catalog_csv().as_bytes()).expect("fixture should parse");
        let unknown = records
            .iter()
            .filter(|r| r.fault_density.is_none())
            .count();
        assert_eq!(unknown, 2, "two fixture rows have an empty FaultDensity");
    }

    #[test]
    fn test_empty_hub_name_is_none() {
        let records = parse_catalog(fixture_catalog_csv().as_bytes()).expect("fixture should parse");
        let last = records.last().expect("fixture has rows");
        assert!(last.fault_hub_name.is_none());
    }

    #[test]
    fn test_optional_date_parts() {
        let records = parse_catalog(fixture_catalog_csv().as_bytes()).expect("fixture should parse");
        assert!(records[0].date().is_some());
        assert!(records.last().unwrap().date().is_none());
    }

    #[test]
    fn test_header_only_catalog_is_empty() {
        let records = parse_catalog(fixture_header_only_csv().as_bytes()).expect("header parses");
        assert!(records.is_empty());
    }

    #[test]
    fn test_lowercase_headers_are_rejected() {
        let result = parse_catalog(fixture_lowercase_headers_csv().as_bytes());
        assert!(matches!(result, Err(SusceptibilityError::Csv(_))));
    }

    #[test]
    fn test_non_numeric_magnitude_is_rejected() {
        let csv = "LAT,LONG_,MAGMB,HubDist,FaultDensity,DEPTH_KM,YR,MO,DT,HubName\n\
                   30.0,79.0,big,1000,0.1,10,2000,1,1,Kopili_Fault\n";
        assert!(parse_catalog(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_nan_fault_density_is_unknown() {
        let csv = "LAT,LONG_,MAGMB,HubDist,FaultDensity,DEPTH_KM,YR,MO,DT,HubName\n\
                   30.0,79.0,4.0,1000,NaN,10,2000,1,1,Kopili_Fault\n";
        let records = parse_catalog(csv.as_bytes()).expect("NaN parses as a float");
        assert!(records[0].fault_density.is_none());
    }
}
