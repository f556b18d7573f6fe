/// SeismicRecord, SusceptibilityClass, SiteFeatures, RiskAssessment, SusceptibilityError
///
/// Core data types for the Bhukamp susceptibility service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains only types and small accessors, and performs no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::severity::MagnitudeSeverity;

// ---------------------------------------------------------------------------
// Catalog types
// ---------------------------------------------------------------------------

/// One historical earthquake observation from the catalog CSV.
///
/// Coordinates and magnitude are always present. Fault density and the
/// fault hub label are optional per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeismicRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    pub depth_km: Option<f64>,
    /// Distance from this record's epicentre to its fault hub, in metres.
    pub hub_distance_m: f64,
    /// Unitless, roughly 0 to 0.8. `None` means unknown, never zero.
    pub fault_density: Option<f64>,
    pub fault_hub_name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl SeismicRecord {
    /// Calendar date of the event, when all three date parts are present
    /// and form a valid date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

// ---------------------------------------------------------------------------
// Classification types
// ---------------------------------------------------------------------------

/// The three susceptibility classes, in the index order the model was
/// trained with (Safe = 0, Moderate = 1, Unsafe = 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SusceptibilityClass {
    Safe,
    Moderate,
    Unsafe,
}

impl SusceptibilityClass {
    pub const ALL: [SusceptibilityClass; 3] = [
        SusceptibilityClass::Safe,
        SusceptibilityClass::Moderate,
        SusceptibilityClass::Unsafe,
    ];

    pub fn index(self) -> usize {
        match self {
            SusceptibilityClass::Safe => 0,
            SusceptibilityClass::Moderate => 1,
            SusceptibilityClass::Unsafe => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for SusceptibilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SusceptibilityClass::Safe => write!(f, "Safe"),
            SusceptibilityClass::Moderate => write!(f, "Moderate"),
            SusceptibilityClass::Unsafe => write!(f, "Unsafe"),
        }
    }
}

// ---------------------------------------------------------------------------
// Assessment types
// ---------------------------------------------------------------------------

/// Raw (unnormalised) signals derived for a query point from its nearest
/// catalog records. Produced by `analysis::features::derive_site_features`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteFeatures {
    pub magnitude: f64,
    pub hub_distance_m: f64,
    pub fault_density: Option<f64>,
    /// Fault hub whose records were aggregated, if one was found among
    /// the nearest neighbours.
    pub fault_hub_name: Option<String>,
    /// Number of catalog records that contributed to `magnitude`.
    pub supporting_records: usize,
}

/// Non-fatal conditions encountered while assessing a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AssessmentWarning {
    /// No fault density was available for the aggregated records; the
    /// fault density flag was left unset.
    MissingFaultDensity { fault_hub_name: Option<String> },
}

impl fmt::Display for AssessmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssessmentWarning::MissingFaultDensity { fault_hub_name: Some(hub) } => {
                write!(f, "fault density unknown for fault hub {}", hub)
            }
            AssessmentWarning::MissingFaultDensity { fault_hub_name: None } => {
                write!(f, "fault density unknown for nearest record")
            }
        }
    }
}

/// Result of a single `assess_location` call. Created fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub latitude: f64,
    pub longitude: f64,
    pub predicted_class: SusceptibilityClass,
    /// `[p_safe, p_moderate, p_unsafe]`, display only.
    pub confidence_per_class: Option<[f64; 3]>,
    /// Continuous 0.0–5.0 rating, band-separated by class.
    pub safety_rating: f64,
    pub nearest_record: SeismicRecord,
    pub terrain_risky: bool,
    pub features: SiteFeatures,
    pub magnitude_severity: MagnitudeSeverity,
    pub region: Option<&'static str>,
    pub warnings: Vec<AssessmentWarning>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while loading artifacts or assessing a location.
#[derive(Debug, thiserror::Error)]
pub enum SusceptibilityError {
    /// The seismic store holds zero records.
    #[error("seismic catalog is empty; no records to assess against")]
    EmptyDataset,

    /// A scaler's fitted min equals (or exceeds) its max.
    #[error("degenerate {feature} scaler: min {min} >= max {max}")]
    DegenerateScaler { feature: String, min: f64, max: f64 },

    /// Classifier input length does not match the trained feature count.
    #[error("feature vector has {actual} values, model expects {expected}")]
    FeatureShape { expected: usize, actual: usize },

    /// Model artifact lists its feature columns in a different order.
    #[error("model feature columns {actual:?} do not match expected {expected:?}")]
    FeatureOrder { expected: Vec<String>, actual: Vec<String> },

    /// Model artifact is structurally unusable (bad tree links, leaf
    /// distributions of the wrong length, and so on).
    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("artifact parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SusceptibilityError>;
