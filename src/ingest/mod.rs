/// Catalog ingestion.
///
/// - `catalog` - EarthquakeFeatures.csv parsing into `SeismicRecord`s
/// - `fixtures` (test only) - representative catalog rows and artifact payloads

pub mod catalog;

#[cfg(test)]
pub(crate) mod fixtures;
