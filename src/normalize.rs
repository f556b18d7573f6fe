/// MinMax feature scaling for the classifier inputs.
///
/// Three scalers (fault density, hub distance, magnitude) are fitted once
/// over the same catalog version the classifier was trained on, persisted
/// as `scalers.json`, and applied unchanged at inference time.
///
/// Out-of-range inputs are not clamped: a magnitude above the historical
/// maximum transforms to a value above 1.0, exactly as the stored scaler
/// would produce.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::{Result, SusceptibilityError};
use crate::store::SeismicStore;

// ---------------------------------------------------------------------------
// Single-feature scaler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    pub min: f64,
    pub max: f64,
}

impl MinMaxScaler {
    /// Fits `(min, max)` over `values`. Non-finite values are skipped.
    ///
    /// Fails with `DegenerateScaler` when fewer than two distinct values
    /// remain, since the result could never transform anything.
    pub fn fit<I>(feature: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() {
            return Err(SusceptibilityError::DegenerateScaler {
                feature: feature.to_string(),
                min,
                max,
            });
        }
        let scaler = MinMaxScaler { min, max };
        scaler.validate(feature)?;
        Ok(scaler)
    }

    /// Checks the scaler can divide by its range.
    pub fn validate(&self, feature: &str) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return Err(SusceptibilityError::DegenerateScaler {
                feature: feature.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// `(x - min) / (max - min)`. `feature` names the scaler in errors.
    pub fn transform(&self, feature: &str, x: f64) -> Result<f64> {
        self.validate(feature)?;
        Ok((x - self.min) / (self.max - self.min))
    }
}

// ---------------------------------------------------------------------------
// Scaler set
// ---------------------------------------------------------------------------

pub const FAULT_DENSITY: &str = "fault_density";
pub const HUB_DISTANCE: &str = "hub_distance";
pub const MAGNITUDE: &str = "magnitude";

/// The three scalers the classifier was trained with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalerSet {
    pub fault_density: MinMaxScaler,
    pub hub_distance: MinMaxScaler,
    pub magnitude: MinMaxScaler,
}

impl ScalerSet {
    /// Fits all three scalers over a catalog. Fault density is fitted over
    /// known values only; unknown densities are not treated as zero.
    pub fn fit(store: &SeismicStore) -> Result<Self> {
        if store.is_empty() {
            return Err(SusceptibilityError::EmptyDataset);
        }
        let records = store.records();
        Ok(ScalerSet {
            fault_density: MinMaxScaler::fit(
                FAULT_DENSITY,
                records.iter().filter_map(|r| r.fault_density),
            )?,
            hub_distance: MinMaxScaler::fit(
                HUB_DISTANCE,
                records.iter().map(|r| r.hub_distance_m),
            )?,
            magnitude: MinMaxScaler::fit(MAGNITUDE, records.iter().map(|r| r.magnitude))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.fault_density.validate(FAULT_DENSITY)?;
        self.hub_distance.validate(HUB_DISTANCE)?;
        self.magnitude.validate(MAGNITUDE)?;
        Ok(())
    }

    /// Parses and validates a `scalers.json` payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: ScalerSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Loads `scalers.json`. A degenerate scaler aborts the load.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let set = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("loaded feature scalers from {}", path.display());
        Ok(set)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
