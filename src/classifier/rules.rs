/// Rule-based susceptibility model.
///
/// Scores a feature vector with the same additive rule that labelled the
/// synthetic training catalog, so it agrees with the forest wherever the
/// forest fits its training data. Used when no exported forest is shipped
/// and as a reference in tests.
///
/// | signal                 | points                              |
/// |------------------------|-------------------------------------|
/// | magnitude              | ≥7 → 3, ≥5 → 2, ≥3 → 1              |
/// | hub distance           | ≤10 km → 2.5, ≤50 km → 1.5, ≤100 km → 0.5 |
/// | raw fault density      | ≥0.3 → 2.5, ≥0.1 → 1.5, ≥0.05 → 0.5 |
/// | terrain penalty        | 2                                   |
///
/// Total ≥ 6 is Unsafe, ≥ 3 is Moderate, otherwise Safe.
///
/// Density thresholds are compared in normalised space. The assessor
/// normalises raw densities with the same scaler, so a density sitting on a
/// threshold lands exactly on the normalised threshold.

use super::{check_shape, SusceptibilityModel};
use crate::model::{Result, SusceptibilityClass};
use crate::normalize::{MinMaxScaler, FAULT_DENSITY};

const UNSAFE_SCORE: f64 = 6.0;
const MODERATE_SCORE: f64 = 3.0;

const DENSE_FAULTING: f64 = 0.3;
const MODERATE_FAULTING: f64 = 0.1;
const SPARSE_FAULTING: f64 = 0.05;

pub struct RuleBasedModel {
    dense_norm: f64,
    moderate_norm: f64,
    sparse_norm: f64,
}

impl RuleBasedModel {
    /// Fails with `DegenerateScaler` if the fault density scaler cannot
    /// transform.
    pub fn new(fault_density_scaler: MinMaxScaler) -> Result<Self> {
        Ok(Self {
            dense_norm: fault_density_scaler.transform(FAULT_DENSITY, DENSE_FAULTING)?,
            moderate_norm: fault_density_scaler.transform(FAULT_DENSITY, MODERATE_FAULTING)?,
            sparse_norm: fault_density_scaler.transform(FAULT_DENSITY, SPARSE_FAULTING)?,
        })
    }

    /// Additive risk score for a shape-checked feature row.
    fn score(&self, features: &[f64]) -> f64 {
        let magnitude = features[0];
        let hub_distance_m = features[1];
        let density_norm = features[2];
        let has_fault_density = features[3] >= 0.5;
        let terrain_penalty = features[4] >= 0.5;

        let mut score = 0.0;

        score += if magnitude >= 7.0 {
            3.0
        } else if magnitude >= 5.0 {
            2.0
        } else if magnitude >= 3.0 {
            1.0
        } else {
            0.0
        };

        score += if hub_distance_m <= 10_000.0 {
            2.5
        } else if hub_distance_m <= 50_000.0 {
            1.5
        } else if hub_distance_m <= 100_000.0 {
            0.5
        } else {
            0.0
        };

        // unknown density arrives normalised as 0.0 with the flag unset
        if has_fault_density || density_norm != 0.0 {
            score += if density_norm >= self.dense_norm {
                2.5
            } else if density_norm >= self.moderate_norm {
                1.5
            } else if density_norm >= self.sparse_norm {
                0.5
            } else {
                0.0
            };
        }

        if terrain_penalty {
            score += 2.0;
        }

        score
    }
}

impl SusceptibilityModel for RuleBasedModel {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 3]> {
        check_shape(features)?;
        let score = self.score(features);
        let class = if score >= UNSAFE_SCORE {
            SusceptibilityClass::Unsafe
        } else if score >= MODERATE_SCORE {
            SusceptibilityClass::Moderate
        } else {
            SusceptibilityClass::Safe
        };
        let mut proba = [0.0; 3];
        proba[class.index()] = 1.0;
        Ok(proba)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
