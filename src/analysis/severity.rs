//! Magnitude severity levels.
//!
//! A coarse six-step reading of magnitude alone, used for labelling
//! assessments and catalog summaries. Independent of the classifier.

use serde::Serialize;
use std::fmt;

/// Severity levels, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MagnitudeSeverity {
    Minimal,
    Low,
    Moderate,
    High,
    Major,
    Extreme,
}

impl MagnitudeSeverity {
    /// Lower magnitude bound of each level above Minimal.
    const THRESHOLDS: [(f64, MagnitudeSeverity); 5] = [
        (8.0, MagnitudeSeverity::Extreme),
        (7.0, MagnitudeSeverity::Major),
        (6.0, MagnitudeSeverity::High),
        (5.0, MagnitudeSeverity::Moderate),
        (4.0, MagnitudeSeverity::Low),
    ];

    pub fn from_magnitude(magnitude: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(floor, _)| magnitude >= *floor)
            .map(|(_, level)| *level)
            .unwrap_or(MagnitudeSeverity::Minimal)
    }
}

impl fmt::Display for MagnitudeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MagnitudeSeverity::Minimal => "Minimal",
            MagnitudeSeverity::Low => "Low",
            MagnitudeSeverity::Moderate => "Moderate",
            MagnitudeSeverity::High => "High",
            MagnitudeSeverity::Major => "Major",
            MagnitudeSeverity::Extreme => "Extreme",
        };
        write!(f, "{}", label)
    }
}
