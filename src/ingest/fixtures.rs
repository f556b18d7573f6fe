/// Test fixtures: representative catalog rows and artifact payloads.
///
/// The catalog fixture mirrors the column layout of EarthquakeFeatures.csv
/// and is small enough to reason about distances by hand:
///
///   rows 0–4  Main_Central_Thrust cluster around Joshimath (≈30.5N 79.5E)
///             magnitudes 4.8, 5.6, 3.1, 6.1, 2.9; row 2 has no fault density
///   row 5     Kopili_Fault, Assam
///   row 6     Cauvery_Shear_Zone near Bengaluru, far from any hub
///   row 7     unnamed record near Koyna with no fault density, depth or date
///
/// Derived values used by tests:
///   - MCT top-4 magnitude mean: (6.1 + 5.6 + 4.8 + 3.1) / 4 = 4.9
///   - MCT mean known fault density: (0.32 + 0.28 + 0.41 + 0.12) / 4 = 0.2825
///   - fault density range over known values: 0.01 – 0.41
///   - hub distance range: 4 000 – 240 000 m
///   - magnitude range: 2.1 – 6.1

pub(crate) fn fixture_catalog_csv() -> &'static str {
    "LAT,LONG_,MAGMB,HubDist,FaultDensity,DEPTH_KM,YR,MO,DT,HubName
30.55,79.56,4.8,6200,0.32,15,1999,3,29,Main_Central_Thrust
30.40,79.30,5.6,9100,0.28,22,1991,10,20,Main_Central_Thrust
30.70,79.90,3.1,12000,,10,2005,6,1,Main_Central_Thrust
31.00,78.50,6.1,4000,0.41,30,1975,1,19,Main_Central_Thrust
30.90,79.10,2.9,15000,0.12,8,2010,2,14,Main_Central_Thrust
26.00,92.00,5.2,18000,0.22,40,1950,8,15,Kopili_Fault
12.90,77.60,2.1,240000,0.01,12,2001,5,5,Cauvery_Shear_Zone
17.40,73.75,3.4,45000,,,,,,
"
}

/// Valid header, no rows.
pub(crate) fn fixture_header_only_csv() -> &'static str {
    "LAT,LONG_,MAGMB,HubDist,FaultDensity,DEPTH_KM,YR,MO,DT,HubName\n"
}

/// Headers in the wrong case; the loader must not accept these.
pub(crate) fn fixture_lowercase_headers_csv() -> &'static str {
    "lat,long_,magmb,hubdist,faultdensity,depth_km,yr,mo,dt,hubname
30.55,79.56,4.8,6200,0.32,15,1999,3,29,Main_Central_Thrust
"
}

/// Scalers fitted over `fixture_catalog_csv`.
pub(crate) fn fixture_scalers_json() -> &'static str {
    r#"{
      "fault_density": { "min": 0.01, "max": 0.41 },
      "hub_distance":  { "min": 4000.0, "max": 240000.0 },
      "magnitude":     { "min": 2.1, "max": 6.1 }
    }"#
}

/// Rule-based model artifact with the training label thresholds.
pub(crate) fn fixture_rules_model_json() -> &'static str {
    r#"{
      "feature_columns": ["magnitude", "hub_distance", "fault_density_norm", "has_fault_density", "terrain_penalty"],
      "model": { "kind": "rules" }
    }"#
}

/// Two-tree forest. Tree 0 splits on magnitude then hub distance; tree 1
/// splits on normalised fault density.
pub(crate) fn fixture_forest_model_json() -> &'static str {
    r#"{
      "feature_columns": ["magnitude", "hub_distance", "fault_density_norm", "has_fault_density", "terrain_penalty"],
      "model": {
        "kind": "forest",
        "trees": [
          { "nodes": [
            { "feature": 0, "threshold": 5.0, "left": 1, "right": 2 },
            { "feature": 1, "threshold": 20000.0, "left": 3, "right": 4 },
            { "distribution": [0.0, 0.2, 0.8] },
            { "distribution": [0.2, 0.6, 0.2] },
            { "distribution": [0.9, 0.1, 0.0] }
          ] },
          { "nodes": [
            { "feature": 2, "threshold": 0.5, "left": 1, "right": 2 },
            { "distribution": [0.7, 0.2, 0.1] },
            { "distribution": [0.1, 0.3, 0.6] }
          ] }
        ]
      }
    }"#
}

/// Model artifact whose columns were saved in a different order.
pub(crate) fn fixture_reordered_columns_json() -> &'static str {
    r#"{
      "feature_columns": ["hub_distance", "magnitude", "fault_density_norm", "has_fault_density", "terrain_penalty"],
      "model": { "kind": "rules" }
    }"#
}
