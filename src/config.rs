/// Service configuration loader - parses bhukamp.toml
///
/// Separates artifact locations and tuning knobs from code, making it easy
/// to point the service at a new catalog/model release or change the
/// neighbour count without recompiling.
///
/// The config path defaults to `bhukamp.toml` in the working directory and
/// can be overridden with `BHUKAMP_CONFIG` (also read from `.env`).

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::{Result, SusceptibilityError};

pub const DEFAULT_CONFIG_PATH: &str = "bhukamp.toml";
pub const CONFIG_PATH_ENV: &str = "BHUKAMP_CONFIG";

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub artifacts: ArtifactPaths,
    #[serde(default)]
    pub assessment: AssessmentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Locations of the three persisted artifacts. Relative paths resolve
/// against the directory containing the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactPaths {
    pub catalog_csv: PathBuf,
    pub scalers_json: PathBuf,
    pub model_json: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// k for the nearest-record query
    #[serde(default = "default_neighbors")]
    pub neighbors: usize,
    /// How many of a fault hub's largest magnitudes are averaged
    #[serde(default = "default_hub_top_magnitudes")]
    pub hub_top_magnitudes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// env_logger filter, e.g. "info" or "bhukamp_service=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_neighbors() -> usize {
    3
}

fn default_hub_top_magnitudes() -> usize {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_workers() -> usize {
    4
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            neighbors: default_neighbors(),
            hub_top_magnitudes: default_hub_top_magnitudes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self { workers: default_workers() }
    }
}

impl ServiceConfig {
    /// Parses and validates a TOML document. Relative artifact paths are
    /// left as written.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.assessment.neighbors == 0 {
            return Err(SusceptibilityError::Config(
                "assessment.neighbors must be at least 1".to_string(),
            ));
        }
        if self.assessment.hub_top_magnitudes == 0 {
            return Err(SusceptibilityError::Config(
                "assessment.hub_top_magnitudes must be at least 1".to_string(),
            ));
        }
        if self.endpoint.workers == 0 {
            return Err(SusceptibilityError::Config(
                "endpoint.workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves relative artifact paths against `base`.
    fn resolve_against(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.artifacts.catalog_csv);
        resolve(&mut self.artifacts.scalers_json);
        resolve(&mut self.artifacts.model_json);
        self
    }
}

/// Loads the configuration file at `path`.
pub fn load_config_from<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        SusceptibilityError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    let config = ServiceConfig::from_toml(&contents)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_against(base))
}

/// Path the service should read its configuration from.
pub fn config_path() -> PathBuf {
    dotenv::dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Loads the configuration from `config_path()`.
pub fn load_config() -> Result<ServiceConfig> {
    load_config_from(config_path())
}
