//! Safety rating on a 0–5 scale.
//!
//! The three-class prediction is too coarse to compare two Safe locations,
//! so each class gets its own band of the 0–5 scale and the raw signals
//! move the rating within that band:
//!
//! | class    | base | distance | magnitude | terrain | band        |
//! |----------|------|----------|-----------|---------|-------------|
//! | Safe     | 4.0  | +1.0     | −0.5      | −0.3    | 3.0 – 5.0   |
//! | Moderate | 2.2  | +0.4     | −0.3      | −0.2    | 1.5 – 2.99  |
//! | Unsafe   | 1.0  | +0.3     | −0.2      | −0.1    | 0.0 – 1.49  |
//!
//! `distance` and `magnitude` are weights on saturating factors:
//! `min(1, hub_distance_m / 100 000)` and `min(1, magnitude / 6)`.
//! The bands never overlap, so a Moderate location can never outscore a
//! Safe one whatever its signals.

use crate::model::SusceptibilityClass;

/// Hub distance at which the distance factor saturates.
pub const DISTANCE_SATURATION_M: f64 = 100_000.0;

/// Magnitude at which the magnitude factor saturates.
pub const MAGNITUDE_SATURATION: f64 = 6.0;

/// Per-class weights and clamp band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBand {
    pub base: f64,
    pub distance_weight: f64,
    pub magnitude_weight: f64,
    pub terrain_penalty: f64,
    pub floor: f64,
    pub ceiling: f64,
}

pub const SAFE_BAND: RatingBand = RatingBand {
    base: 4.0,
    distance_weight: 1.0,
    magnitude_weight: 0.5,
    terrain_penalty: 0.3,
    floor: 3.0,
    ceiling: 5.0,
};

pub const MODERATE_BAND: RatingBand = RatingBand {
    base: 2.2,
    distance_weight: 0.4,
    magnitude_weight: 0.3,
    terrain_penalty: 0.2,
    floor: 1.5,
    ceiling: 2.99,
};

pub const UNSAFE_BAND: RatingBand = RatingBand {
    base: 1.0,
    distance_weight: 0.3,
    magnitude_weight: 0.2,
    terrain_penalty: 0.1,
    floor: 0.0,
    ceiling: 1.49,
};

impl RatingBand {
    pub fn for_class(class: SusceptibilityClass) -> &'static RatingBand {
        match class {
            SusceptibilityClass::Safe => &SAFE_BAND,
            SusceptibilityClass::Moderate => &MODERATE_BAND,
            SusceptibilityClass::Unsafe => &UNSAFE_BAND,
        }
    }

    pub fn contains(&self, rating: f64) -> bool {
        (self.floor..=self.ceiling).contains(&rating)
    }

    /// Rounds to one decimal without leaving the band. A rounded value that
    /// would cross the ceiling (2.99 → 3.0) snaps to the highest tenth
    /// inside it instead.
    fn round_within(&self, rating: f64) -> f64 {
        let rounded = (rating * 10.0).round() / 10.0;
        if rounded > self.ceiling {
            (self.ceiling * 10.0).floor() / 10.0
        } else if rounded < self.floor {
            (self.floor * 10.0).ceil() / 10.0
        } else {
            rounded
        }
    }
}

/// Computes the band-separated safety rating, rounded to one decimal.
///
/// Non-finite signals are treated as their least favourable value within
/// the band (zero distance, saturated magnitude).
pub fn safety_rating(
    class: SusceptibilityClass,
    magnitude: f64,
    hub_distance_m: f64,
    terrain_risky: bool,
) -> f64 {
    let band = RatingBand::for_class(class);

    let distance_factor = saturating_factor(hub_distance_m, DISTANCE_SATURATION_M, 0.0);
    let magnitude_factor = saturating_factor(magnitude, MAGNITUDE_SATURATION, 1.0);

    let mut rating = band.base + band.distance_weight * distance_factor
        - band.magnitude_weight * magnitude_factor;
    if terrain_risky {
        rating -= band.terrain_penalty;
    }

    band.round_within(rating.clamp(band.floor, band.ceiling))
}

/// `min(1, value / saturation)`, floored at 0.
fn saturating_factor(value: f64, saturation: f64, if_nan: f64) -> f64 {
    if value.is_nan() {
        return if_nan;
    }
    (value / saturation).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use SusceptibilityClass::*;

    #[test]
    fn test_safe_reference_values() {
        // 4.0 + 1.0 * 1.0 - 0.5 * (2/6) = 4.833 -> 4.8
        assert_eq!(safety_rating(Safe, 2.0, 250_000.0, false), 4.8);
        // 4.0 + 0.5 - 0.5 = 4.0
        assert_eq!(safety_rating(Safe, 6.0, 50_000.0, false), 4.0);
    }

    #[test]
    fn test_moderate_reference_values() {
        // 2.2 + 0.4 * 0.2 - 0.3 * 0.8 = 2.04 -> 2.0
        assert_eq!(safety_rating(Moderate, 4.8, 20_000.0, false), 2.0);
    }

    #[test]
    fn test_unsafe_reference_values() {
        // 1.0 + 0.3 * 0.05 - 0.2 * 1.0 = 0.815 -> 0.8
        assert_eq!(safety_rating(Unsafe, 6.5, 5_000.0, false), 0.8);
        assert_eq!(safety_rating(Unsafe, 6.5, 5_000.0, true), 0.7);
    }

    #[test]
    fn test_extreme_inputs_stay_in_band() {
        for class in SusceptibilityClass::ALL {
            let band = RatingBand::for_class(class);
            for (mag, dist, terrain) in [
                (0.0, 1.0e9, false),
                (9.5, 0.0, true),
                (-3.0, -500.0, false),
                (f64::NAN, f64::NAN, true),
                (f64::INFINITY, f64::INFINITY, true),
            ] {
                let r = safety_rating(class, mag, dist, terrain);
                assert!(band.contains(r), "{:?} rating {} outside band", class, r);
            }
        }
    }

    #[test]
    fn test_bands_do_not_overlap() {
        assert!(UNSAFE_BAND.ceiling < MODERATE_BAND.floor);
        assert!(MODERATE_BAND.ceiling < SAFE_BAND.floor);
    }

    #[test]
    fn test_rounding_never_crosses_ceiling() {
        assert_eq!(MODERATE_BAND.round_within(2.99), 2.9);
        assert_eq!(UNSAFE_BAND.round_within(1.49), 1.4);
        assert_eq!(SAFE_BAND.round_within(5.0), 5.0);
        assert_eq!(SAFE_BAND.round_within(3.0), 3.0);
    }

    #[test]
    fn test_distance_saturates_at_100km() {
        assert_eq!(
            safety_rating(Safe, 3.0, 100_000.0, false),
            safety_rating(Safe, 3.0, 400_000.0, false)
        );
    }

    #[test]
    fn test_magnitude_saturates_at_six() {
        assert_eq!(
            safety_rating(Moderate, 6.0, 30_000.0, false),
            safety_rating(Moderate, 8.5, 30_000.0, false)
        );
    }

    #[test]
    fn test_terrain_lowers_rating() {
        for class in SusceptibilityClass::ALL {
            let flat = safety_rating(class, 4.0, 40_000.0, false);
            let steep = safety_rating(class, 4.0, 40_000.0, true);
            assert!(steep < flat, "{:?}: {} !< {}", class, steep, flat);
        }
    }
}
