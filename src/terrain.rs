/// Landslide-prone place registry and terrain risk lookup.
///
/// Defines the canonical list of towns and districts known for slope
/// failure across the Himalayan arc, the Northeast, and the Western Ghats.
/// A query is terrain-risky when any entry appears, case-insensitively, as
/// a substring of the place name or of the nearest fault hub label.
///
/// This is a pure substring test: no fuzzy matching, no coordinates.

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Known landslide-prone places, grouped roughly by range.
pub static LANDSLIDE_PRONE_PLACES: &[&str] = &[
    // Garhwal and Kumaon Himalaya
    "Joshimath",
    "Badrinath",
    "Kedarnath",
    "Chamoli",
    "Rudraprayag",
    "Pithoragarh",
    "Almora",
    "Nainital",
    "Dehradun",
    "Mussoorie",
    "Rishikesh",
    "Haridwar",
    "Tehri",
    "Uttarkashi",
    // Himachal Pradesh
    "Manali",
    "Kullu",
    "Chamba",
    "Dharamshala",
    "Kangra",
    "Shimla",
    "Kinnaur",
    // Sikkim and Darjeeling hills
    "Gangtok",
    "Darjeeling",
    "Kalimpong",
    // Northeast
    "Shillong",
    "Aizawl",
    "Kohima",
    "Itanagar",
    "Imphal",
    // Western Ghats
    "Wayanad",
    "Idukki",
    "Munnar",
    "Kodagu",
    "Malin",
    "Mahabaleshwar",
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Returns true if any registry entry occurs in `place_name` or
/// `fault_hub_name`. Empty or absent inputs never match.
pub fn is_terrain_risky(place_name: &str, fault_hub_name: Option<&str>) -> bool {
    mentions_prone_place(place_name) || fault_hub_name.is_some_and(mentions_prone_place)
}

/// Returns the first registry entry found in `text`, if any.
pub fn matching_place(text: &str) -> Option<&'static str> {
    let haystack = text.trim().to_lowercase();
    if haystack.is_empty() {
        return None;
    }
    LANDSLIDE_PRONE_PLACES
        .iter()
        .copied()
        .find(|place| haystack.contains(&place.to_lowercase()))
}

fn mentions_prone_place(text: &str) -> bool {
    matching_place(text).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
