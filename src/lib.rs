/// bhukamp_service: earthquake susceptibility scoring for locations in India.
///
/// # Module structure
///
/// ```text
/// bhukamp_service
/// ├── model       - shared data types (SeismicRecord, RiskAssessment, SusceptibilityError, ...)
/// ├── config      - service configuration loader (bhukamp.toml)
/// ├── logging     - env_logger setup for binaries
/// ├── store       - in-memory catalog with nearest-record and fault-hub queries
/// ├── normalize   - MinMax scalers for fault density, hub distance and magnitude
/// ├── terrain     - landslide-prone place registry
/// ├── regions     - bounding-box registry of Indian seismic regions
/// ├── assess      - end-to-end location assessment
/// ├── endpoint    - HTTP API for assessments and regional summaries
/// ├── ingest
/// │   ├── catalog - EarthquakeFeatures.csv parsing
/// │   └── fixtures (test only) - representative catalog rows and artifacts
/// ├── classifier
/// │   ├── forest  - exported decision forest
/// │   └── rules   - additive rule model
/// └── analysis
///     ├── features  - nearest-record aggregation into site signals
///     ├── rating    - band-separated 0-5 safety rating
///     ├── severity  - six-level magnitude severity
///     └── groupings - per-region grouping and risk summaries
/// ```

/// Public modules
pub mod analysis;
pub mod assess;
pub mod classifier;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod regions;
pub mod store;
pub mod terrain;
