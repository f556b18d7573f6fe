/// Region grouping and catalog risk summaries.
///
/// `group_by_region` takes the flat catalog and organizes it into
/// per-region buckets using the bounding boxes in `regions`, making it
/// convenient to ask "how active is Northern India?" without filtering the
/// catalog every time. Records outside every region are dropped.
///
/// `summarize_regions` then reduces each bucket to counts of High
/// (magnitude ≥ 6), Moderate (≥ 4) and Low events, the dominant level, and
/// a weighted risk score `(3·high + 2·moderate + low) / total` between 1
/// and 3.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::model::SeismicRecord;
use crate::regions::{classify_region, REGION_REGISTRY};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Groups records by region name. Within each bucket records keep their
/// catalog order.
pub fn group_by_region(records: &[SeismicRecord]) -> HashMap<&'static str, Vec<&SeismicRecord>> {
    let mut grouped: HashMap<&'static str, Vec<&SeismicRecord>> = HashMap::new();

    for record in records {
        if let Some(region) = classify_region(record.latitude, record.longitude) {
            grouped.entry(region.name).or_default().push(record);
        }
    }

    grouped
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Three-level event risk used for regional summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventRisk {
    High,
    Moderate,
    Low,
}

impl EventRisk {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude >= 6.0 {
            EventRisk::High
        } else if magnitude >= 4.0 {
            EventRisk::Moderate
        } else {
            EventRisk::Low
        }
    }
}

impl fmt::Display for EventRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventRisk::High => write!(f, "High"),
            EventRisk::Moderate => write!(f, "Moderate"),
            EventRisk::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    pub region: &'static str,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub total: usize,
    pub max_magnitude: f64,
    pub dominant_risk: EventRisk,
    pub risk_score: f64,
}

/// Summarises every registry region, in registry order. Regions with no
/// records are included with zero counts, Low dominance and a zero score.
pub fn summarize_regions(records: &[SeismicRecord]) -> Vec<RegionSummary> {
    let grouped = group_by_region(records);

    REGION_REGISTRY
        .iter()
        .map(|region| {
            let bucket = grouped.get(region.name).map(Vec::as_slice).unwrap_or(&[]);
            summarize(region.name, bucket)
        })
        .collect()
}

fn summarize(region: &'static str, records: &[&SeismicRecord]) -> RegionSummary {
    let (mut high, mut moderate, mut low) = (0, 0, 0);
    let mut max_magnitude: f64 = 0.0;

    for record in records {
        match EventRisk::from_magnitude(record.magnitude) {
            EventRisk::High => high += 1,
            EventRisk::Moderate => moderate += 1,
            EventRisk::Low => low += 1,
        }
        max_magnitude = max_magnitude.max(record.magnitude);
    }

    let total = high + moderate + low;

    // ties resolve toward the more severe level
    let dominant_risk = if total == 0 {
        EventRisk::Low
    } else if high >= moderate && high >= low {
        EventRisk::High
    } else if moderate >= low {
        EventRisk::Moderate
    } else {
        EventRisk::Low
    };

    let risk_score = if total == 0 {
        0.0
    } else {
        (high * 3 + moderate * 2 + low) as f64 / total as f64
    };

    RegionSummary {
        region,
        high,
        moderate,
        low,
        total,
        max_magnitude,
        dominant_risk,
        risk_score,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::derive_site_features;
    use crate::analysis::rating::safety_rating;
    use crate::ingest::{catalog::parse_catalog, fixtures::*};
    use crate::model::SusceptibilityClass;
    use crate::store::SeismicStore;

    fn fixture_records() -> Vec<SeismicRecord> {
        parse_catalog(fixture_catalog_csv().as_bytes()).expect("fixture should parse")
    }

    fn summary_for<'a>(summaries: &'a [RegionSummary], name: &str) -> &'a RegionSummary {
        summaries
            .iter()
            .find(|s| s.region == name)
            .unwrap_or_else(|| panic!("{} should be summarised", name))
    }

    // --- Grouping -----------------------------------------------------------

    #[test]
    fn test_group_by_region_buckets_fixture_rows() {
        let records = fixture_records();
        let grouped = group_by_region(&records);

        assert_eq!(grouped["Northern India"].len(), 5, "MCT cluster is in the north");
        assert_eq!(grouped["Eastern India"].len(), 1, "Kopili is in the east");
        assert_eq!(grouped["Southern India"].len(), 1, "Bengaluru is in the south");
        assert_eq!(grouped["Western India"].len(), 1, "Koyna is in the west");
        assert!(!grouped.contains_key("Central India"));
    }

    #[test]
    fn test_group_by_region_drops_points_outside_registry() {
        let mut records = fixture_records();
        records.truncate(1);
        records[0].latitude = 40.0;
        assert!(group_by_region(&records).is_empty());
    }

    #[test]
    fn test_group_by_region_empty_input_returns_empty_map() {
        assert!(group_by_region(&[]).is_empty());
    }

    // --- Summaries ----------------------------------------------------------

    #[test]
    fn test_summary_counts_and_score_for_northern_cluster() {
        // 4.8, 5.6 moderate; 3.1, 2.9 low; 6.1 high
        let summaries = summarize_regions(&fixture_records());
        let north = summary_for(&summaries, "Northern India");

        assert_eq!((north.high, north.moderate, north.low), (1, 2, 2));
        assert_eq!(north.total, 5);
        assert_eq!(north.max_magnitude, 6.1);
        assert!((north.risk_score - 9.0 / 5.0).abs() < 1e-12);
        assert_eq!(north.dominant_risk, EventRisk::Moderate, "moderate ties low, moderate wins");
    }

    #[test]
    fn test_summary_includes_empty_regions() {
        let summaries = summarize_regions(&fixture_records());
        assert_eq!(summaries.len(), REGION_REGISTRY.len());

        let central = summary_for(&summaries, "Central India");
        assert_eq!(central.total, 0);
        assert_eq!(central.risk_score, 0.0);
        assert_eq!(central.dominant_risk, EventRisk::Low);
    }

    #[test]
    fn test_event_risk_boundaries() {
        assert_eq!(EventRisk::from_magnitude(6.0), EventRisk::High);
        assert_eq!(EventRisk::from_magnitude(5.99), EventRisk::Moderate);
        assert_eq!(EventRisk::from_magnitude(4.0), EventRisk::Moderate);
        assert_eq!(EventRisk::from_magnitude(3.99), EventRisk::Low);
    }

    // --- Integration: parse → derive → rate ---------------------------------

    #[test]
    fn test_pipeline_joshimath_unsafe_rating_lands_in_unsafe_band() {
        let store = SeismicStore::from_records(fixture_records());
        let (features, _) = derive_site_features(&store, 30.55, 79.56, 3, 4)
            .expect("fixture store is not empty");

        // 1.0 + 0.3 * 0.062 - 0.2 * (4.9 / 6) - 0.1 = 0.755 -> 0.8
        let rating = safety_rating(
            SusceptibilityClass::Unsafe,
            features.magnitude,
            features.hub_distance_m,
            true,
        );
        assert_eq!(rating, 0.8);
    }
}
