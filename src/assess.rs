/// Location assessment: the service's single query operation.
///
/// A `SusceptibilityAssessor` owns the catalog, the scalers and the
/// classifier. All three are loaded once, up front, and only read
/// afterwards, so one assessor can be wrapped in an `Arc` and shared by
/// every request thread.
///
/// Flow for one query:
/// 1. derive raw site features from the nearest catalog records
/// 2. check terrain risk against the place name and fault hub
/// 3. normalise and classify the five-feature row
/// 4. compute the band-separated safety rating from the class and raw signals

use crate::analysis::features::derive_site_features;
use crate::analysis::rating::safety_rating;
use crate::analysis::severity::MagnitudeSeverity;
use crate::classifier::{has_fault_density, FeatureVector, ModelArtifact, SusceptibilityModel};
use crate::config::{AssessmentConfig, ServiceConfig};
use crate::model::{AssessmentWarning, Result, RiskAssessment, SusceptibilityError};
use crate::normalize::{ScalerSet, FAULT_DENSITY};
use crate::regions::classify_region;
use crate::store::SeismicStore;
use crate::terrain::is_terrain_risky;

pub struct SusceptibilityAssessor {
    store: SeismicStore,
    scalers: ScalerSet,
    model: Box<dyn SusceptibilityModel>,
    settings: AssessmentConfig,
}

impl SusceptibilityAssessor {
    /// Builds an assessor from already-loaded parts. Scalers are validated
    /// here so a degenerate one fails construction rather than a query.
    pub fn new(
        store: SeismicStore,
        scalers: ScalerSet,
        model: Box<dyn SusceptibilityModel>,
        settings: AssessmentConfig,
    ) -> Result<Self> {
        scalers.validate()?;
        Ok(Self { store, scalers, model, settings })
    }

    /// Loads catalog, scalers and model from the paths in `config`.
    /// Any load failure aborts; there is no partially loaded assessor.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let store = SeismicStore::load_csv(&config.artifacts.catalog_csv)?;
        let scalers = ScalerSet::load(&config.artifacts.scalers_json)?;
        let model = ModelArtifact::load(&config.artifacts.model_json)?.into_model(&scalers)?;
        log::info!(
            "assessor ready: {} records, {} model, k={}",
            store.len(),
            model.name(),
            config.assessment.neighbors
        );
        Self::new(store, scalers, model, config.assessment.clone())
    }

    pub fn store(&self) -> &SeismicStore {
        &self.store
    }

    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Assesses a geocoded point. `place_name` is only used for the terrain
    /// keyword check.
    pub fn assess_location(
        &self,
        latitude: f64,
        longitude: f64,
        place_name: &str,
    ) -> Result<RiskAssessment> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || latitude.abs() > 90.0
            || longitude.abs() > 180.0
        {
            return Err(SusceptibilityError::InvalidCoordinates { latitude, longitude });
        }

        let (features, nearest) = derive_site_features(
            &self.store,
            latitude,
            longitude,
            self.settings.neighbors,
            self.settings.hub_top_magnitudes,
        )?;

        let mut warnings = Vec::new();
        if features.fault_density.is_none() {
            let warning = AssessmentWarning::MissingFaultDensity {
                fault_hub_name: features.fault_hub_name.clone(),
            };
            log::warn!("({:.4}, {:.4}): {}", latitude, longitude, warning);
            warnings.push(warning);
        }

        let terrain_risky = is_terrain_risky(place_name, features.fault_hub_name.as_deref());

        let fault_density_norm = match features.fault_density {
            Some(density) => self.scalers.fault_density.transform(FAULT_DENSITY, density)?,
            None => 0.0,
        };
        let row = FeatureVector {
            magnitude: features.magnitude,
            hub_distance: features.hub_distance_m,
            fault_density_norm,
            has_fault_density: has_fault_density(features.fault_density),
            terrain_penalty: terrain_risky,
        }
        .to_array();

        let proba = self.model.predict_proba(&row)?;
        let predicted_class = self.model.predict(&row)?;

        let safety_rating = safety_rating(
            predicted_class,
            features.magnitude,
            features.hub_distance_m,
            terrain_risky,
        );

        log::debug!(
            "({:.4}, {:.4}) {:?} -> {} rated {:.1}",
            latitude,
            longitude,
            row,
            predicted_class,
            safety_rating
        );

        Ok(RiskAssessment {
            latitude,
            longitude,
            predicted_class,
            confidence_per_class: Some(proba),
            safety_rating,
            nearest_record: nearest.clone(),
            terrain_risky,
            magnitude_severity: MagnitudeSeverity::from_magnitude(features.magnitude),
            region: classify_region(latitude, longitude).map(|r| r.name),
            features,
            warnings,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
