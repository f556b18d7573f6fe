/// Data analysis for the Bhukamp susceptibility service.
///
/// Submodules:
/// - `features`  - nearest-record aggregation into raw site signals.
/// - `rating`    - band-separated 0–5 safety rating.
/// - `severity`  - six-level magnitude severity.
/// - `groupings` - per-region grouping and catalog risk summaries.

pub mod features;
pub mod groupings;
pub mod rating;
pub mod severity;
