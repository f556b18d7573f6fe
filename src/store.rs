/// In-memory view over the historical earthquake catalog.
///
/// Loaded once at startup and never mutated afterwards, so a single store
/// can be shared read-only across request threads without locking.
///
/// Distances are plain Euclidean distances in (latitude, longitude) degree
/// space, not geodesic. At the precision the ratings are reported with this
/// is adequate for a dataset spanning the subcontinent.

use std::path::Path;

use crate::ingest::catalog;
use crate::model::{Result, SeismicRecord, SusceptibilityError};

#[derive(Debug, Clone, Default)]
pub struct SeismicStore {
    records: Vec<SeismicRecord>,
}

impl SeismicStore {
    pub fn from_records(records: Vec<SeismicRecord>) -> Self {
        Self { records }
    }

    /// Loads the catalog CSV at `path`.
    ///
    /// An empty catalog loads successfully; queries against it fail with
    /// `EmptyDataset`.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let records = catalog::load_catalog(path)?;
        log::info!(
            "loaded {} catalog records from {}",
            records.len(),
            path.display()
        );
        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[SeismicRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns up to `k` records closest to (latitude, longitude), nearest
    /// first. Equal distances keep catalog row order.
    pub fn nearest(&self, latitude: f64, longitude: f64, k: usize) -> Result<Vec<&SeismicRecord>> {
        if self.records.is_empty() {
            return Err(SusceptibilityError::EmptyDataset);
        }

        let mut ranked: Vec<(f64, &SeismicRecord)> = self
            .records
            .iter()
            .map(|r| (squared_distance(r, latitude, longitude), r))
            .collect();

        // sort_by is stable, which gives the row-order tie break
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(ranked.into_iter().take(k).map(|(_, r)| r).collect())
    }

    /// All records labelled with exactly `name` (case-sensitive), in
    /// catalog order. `None` matches nothing.
    pub fn group_by_fault_hub(&self, name: Option<&str>) -> Vec<&SeismicRecord> {
        let Some(name) = name else {
            return Vec::new();
        };
        self.records
            .iter()
            .filter(|r| r.fault_hub_name.as_deref() == Some(name))
            .collect()
    }
}

fn squared_distance(record: &SeismicRecord, latitude: f64, longitude: f64) -> f64 {
    let dlat = record.latitude - latitude;
    let dlon = record.longitude - longitude;
    dlat * dlat + dlon * dlon
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
