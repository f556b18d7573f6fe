/// Susceptibility classifier: feature layout, model trait, and the
/// serialized model artifact.
///
/// The classifier maps five features, in a fixed trained order, to one of
/// Safe / Moderate / Unsafe. It is loaded once at startup from
/// `susceptibility_model.json` and never retrained at request time.
///
/// Submodules:
/// - `forest` - decision forest exported from the offline training run
/// - `rules`  - the label rule the training data was generated with
///
/// Artifact layout:
///
/// ```json
/// {
///   "feature_columns": ["magnitude", "hub_distance", "fault_density_norm",
///                       "has_fault_density", "terrain_penalty"],
///   "model": { "kind": "forest", "trees": [ ... ] }
/// }
/// ```

pub mod forest;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::model::{Result, SusceptibilityClass, SusceptibilityError};
use crate::normalize::ScalerSet;

use forest::DecisionForest;
use rules::RuleBasedModel;

// ---------------------------------------------------------------------------
// Feature layout
// ---------------------------------------------------------------------------

/// Column order the model was trained on. Must be preserved exactly.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "magnitude",
    "hub_distance",
    "fault_density_norm",
    "has_fault_density",
    "terrain_penalty",
];

pub const FEATURE_COUNT: usize = FEATURE_COLUMNS.len();

/// Raw fault density above which `has_fault_density` is set. Baked into the
/// trained model; changing it requires retraining.
pub const FAULT_DENSITY_FLAG_THRESHOLD: f64 = 0.05;

/// Typed view of one classifier input row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub magnitude: f64,
    pub hub_distance: f64,
    pub fault_density_norm: f64,
    pub has_fault_density: bool,
    pub terrain_penalty: bool,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.magnitude,
            self.hub_distance,
            self.fault_density_norm,
            if self.has_fault_density { 1.0 } else { 0.0 },
            if self.terrain_penalty { 1.0 } else { 0.0 },
        ]
    }
}

/// True iff the raw fault density is known and exceeds the trained flag
/// threshold.
pub fn has_fault_density(raw: Option<f64>) -> bool {
    raw.is_some_and(|d| d > FAULT_DENSITY_FLAG_THRESHOLD)
}

/// Fails with `FeatureShape` unless `features` has exactly
/// `FEATURE_COUNT` values.
pub fn check_shape(features: &[f64]) -> Result<()> {
    if features.len() != FEATURE_COUNT {
        return Err(SusceptibilityError::FeatureShape {
            expected: FEATURE_COUNT,
            actual: features.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Model trait
// ---------------------------------------------------------------------------

/// A loaded, immutable susceptibility classifier.
pub trait SusceptibilityModel: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// `[p_safe, p_moderate, p_unsafe]`, summing to 1.0.
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 3]>;

    /// Most probable class; the lower class index wins ties.
    fn predict(&self, features: &[f64]) -> Result<SusceptibilityClass> {
        let proba = self.predict_proba(features)?;
        Ok(argmax_class(&proba))
    }
}

pub(crate) fn argmax_class(proba: &[f64; 3]) -> SusceptibilityClass {
    let mut best = 0;
    for (i, &p) in proba.iter().enumerate().skip(1) {
        if p > proba[best] {
            best = i;
        }
    }
    SusceptibilityClass::ALL[best]
}

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// Model payload, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelSpec {
    Forest(DecisionForest),
    Rules,
}

/// The serialized classifier artifact: the model plus the exact feature
/// columns it was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_columns: Vec<String>,
    pub model: ModelSpec,
}

impl ModelArtifact {
    /// Parses and validates an artifact payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let artifact = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!(
            "loaded {} model artifact from {}",
            artifact.kind(),
            path.display()
        );
        Ok(artifact)
    }

    pub fn kind(&self) -> &'static str {
        match self.model {
            ModelSpec::Forest(_) => "forest",
            ModelSpec::Rules => "rules",
        }
    }

    /// Checks the column list matches `FEATURE_COLUMNS` in count and order,
    /// then validates the model body.
    pub fn validate(&self) -> Result<()> {
        if self.feature_columns.len() != FEATURE_COUNT {
            return Err(SusceptibilityError::FeatureShape {
                expected: FEATURE_COUNT,
                actual: self.feature_columns.len(),
            });
        }
        if self.feature_columns.iter().zip(FEATURE_COLUMNS).any(|(a, b)| a != b) {
            return Err(SusceptibilityError::FeatureOrder {
                expected: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
                actual: self.feature_columns.clone(),
            });
        }
        match &self.model {
            ModelSpec::Forest(forest) => forest.validate(),
            ModelSpec::Rules => Ok(()),
        }
    }

    /// Builds the runtime model. The rule model needs the fault density
    /// scaler to place its density thresholds in normalised space.
    pub fn into_model(self, scalers: &ScalerSet) -> Result<Box<dyn SusceptibilityModel>> {
        Ok(match self.model {
            ModelSpec::Forest(forest) => Box::new(forest),
            ModelSpec::Rules => Box::new(RuleBasedModel::new(scalers.fault_density)?),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    #[test]
    fn test_feature_vector_preserves_trained_order() {
        let v = FeatureVector {
            magnitude: 5.5,
            hub_distance: 25_000.0,
            fault_density_norm: 0.5,
            has_fault_density: true,
            terrain_penalty: false,
        };
        assert_eq!(v.to_array(), [5.5, 25_000.0, 0.5, 1.0, 0.0]);
    }

    #[test]
    fn test_has_fault_density_threshold() {
        assert!(has_fault_density(Some(0.06)));
        assert!(!has_fault_density(Some(0.05)));
        assert!(!has_fault_density(Some(0.0)));
        assert!(!has_fault_density(None));
    }

    #[test]
    fn test_check_shape_rejects_wrong_length() {
        assert!(check_shape(&[1.0; 5]).is_ok());
        assert!(matches!(
            check_shape(&[1.0; 4]),
            Err(SusceptibilityError::FeatureShape { expected: 5, actual: 4 })
        ));
        assert!(check_shape(&[1.0; 6]).is_err());
    }

    #[test]
    fn test_argmax_prefers_lower_index_on_tie() {
        assert_eq!(argmax_class(&[0.4, 0.4, 0.2]), SusceptibilityClass::Safe);
        assert_eq!(argmax_class(&[0.2, 0.4, 0.4]), SusceptibilityClass::Moderate);
        assert_eq!(argmax_class(&[0.1, 0.2, 0.7]), SusceptibilityClass::Unsafe);
    }

    #[test]
    fn test_artifact_parses_rules_kind() {
        let artifact = ModelArtifact::from_json(fixture_rules_model_json()).unwrap();
        assert_eq!(artifact.kind(), "rules");
    }

    #[test]
    fn test_artifact_parses_forest_kind() {
        let artifact = ModelArtifact::from_json(fixture_forest_model_json()).unwrap();
        assert_eq!(artifact.kind(), "forest");
    }

    #[test]
    fn test_artifact_with_reordered_columns_is_rejected() {
        assert!(matches!(
            ModelArtifact::from_json(fixture_reordered_columns_json()),
            Err(SusceptibilityError::FeatureOrder { .. })
        ));
    }

    #[test]
    fn test_artifact_with_missing_column_is_rejected() {
        let json = r#"{
          "feature_columns": ["magnitude", "hub_distance", "fault_density_norm", "has_fault_density"],
          "model": { "kind": "rules" }
        }"#;
        assert!(matches!(
            ModelArtifact::from_json(json),
            Err(SusceptibilityError::FeatureShape { expected: 5, actual: 4 })
        ));
    }

    #[test]
    fn test_artifact_with_unknown_kind_is_rejected() {
        let json = r#"{
          "feature_columns": ["magnitude", "hub_distance", "fault_density_norm", "has_fault_density", "terrain_penalty"],
          "model": { "kind": "svm" }
        }"#;
        assert!(matches!(
            ModelArtifact::from_json(json),
            Err(SusceptibilityError::Json(_))
        ));
    }

    #[test]
    fn test_artifact_without_column_list_is_rejected() {
        let json = r#"{ "model": { "kind": "rules" } }"#;
        assert!(ModelArtifact::from_json(json).is_err());
    }

    #[test]
    fn test_into_model_predicts_with_either_kind() {
        let scalers = ScalerSet::from_json(fixture_scalers_json()).unwrap();
        let features = [6.5, 5_000.0, 0.975, 1.0, 0.0];
        for json in [fixture_rules_model_json(), fixture_forest_model_json()] {
            let model = ModelArtifact::from_json(json).unwrap().into_model(&scalers).unwrap();
            assert_eq!(
                model.predict(&features).unwrap(),
                SusceptibilityClass::Unsafe,
                "{} model should flag a large nearby quake",
                model.name()
            );
        }
    }
}
