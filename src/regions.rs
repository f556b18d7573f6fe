/// Seismic region registry for the Indian subcontinent.
///
/// Defines the five broad regions used to summarise catalog activity,
/// each with a representative city and a lat/lon bounding box. Boxes
/// overlap (Central India sits inside Eastern and Western ranges), so
/// lookups walk the registry in order and the first match wins.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Region metadata
// ---------------------------------------------------------------------------

/// Inclusive lat/lon bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bounds {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

/// Metadata for a single region.
#[derive(Debug, Serialize)]
pub struct Region {
    pub name: &'static str,
    /// States grouped under this region.
    pub states: &'static [&'static str],
    /// Representative city coordinates, used for map labels.
    pub centre_latitude: f64,
    pub centre_longitude: f64,
    pub bounds: Bounds,
}

/// All regions, in lookup priority order.
pub static REGION_REGISTRY: &[Region] = &[
    Region {
        name: "Northern India",
        states: &[
            "Jammu and Kashmir",
            "Himachal Pradesh",
            "Punjab",
            "Haryana",
            "Delhi",
            "Uttarakhand",
        ],
        centre_latitude: 30.7333,
        centre_longitude: 76.7794,
        bounds: Bounds { lat_min: 28.0, lat_max: 35.0, lon_min: 72.0, lon_max: 80.0 },
    },
    Region {
        name: "Eastern India",
        states: &[
            "West Bengal",
            "Odisha",
            "Jharkhand",
            "Bihar",
            "Assam",
            "Meghalaya",
            "Nagaland",
            "Manipur",
        ],
        centre_latitude: 25.0961,
        centre_longitude: 85.3131,
        bounds: Bounds { lat_min: 20.0, lat_max: 28.0, lon_min: 85.0, lon_max: 97.0 },
    },
    Region {
        name: "Western India",
        states: &["Rajasthan", "Gujarat", "Maharashtra", "Goa"],
        centre_latitude: 22.2587,
        centre_longitude: 71.8253,
        bounds: Bounds { lat_min: 15.0, lat_max: 30.0, lon_min: 68.0, lon_max: 78.0 },
    },
    Region {
        name: "Southern India",
        states: &["Tamil Nadu", "Kerala", "Karnataka", "Andhra Pradesh", "Telangana"],
        centre_latitude: 12.9716,
        centre_longitude: 77.5946,
        bounds: Bounds { lat_min: 8.0, lat_max: 20.0, lon_min: 72.0, lon_max: 84.0 },
    },
    Region {
        name: "Central India",
        states: &["Madhya Pradesh", "Chhattisgarh", "Uttar Pradesh"],
        centre_latitude: 23.4734,
        centre_longitude: 77.9479,
        bounds: Bounds { lat_min: 20.0, lat_max: 28.0, lon_min: 75.0, lon_max: 85.0 },
    },
];

/// Returns the first region whose bounds contain the point.
pub fn classify_region(latitude: f64, longitude: f64) -> Option<&'static Region> {
    REGION_REGISTRY
        .iter()
        .find(|r| r.bounds.contains(latitude, longitude))
}

/// Looks up a region by exact name. Returns `None` if not found.
pub fn find_region(name: &str) -> Option<&'static Region> {
    REGION_REGISTRY.iter().find(|r| r.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
