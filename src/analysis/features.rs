/// Site feature derivation from nearby catalog records.
///
/// `derive_site_features` turns the `k` nearest catalog records around a
/// query point into the raw magnitude, hub distance and fault density the
/// classifier and rating calculator consume.
///
/// Policy:
/// 1. Among the `k` nearest records, take the first (nearest) one that
///    carries a fault hub name.
/// 2. If found, magnitude is the mean of the top `hub_top_magnitudes`
///    magnitudes across every catalog record on that hub (all of them if
///    there are fewer), fault density is the mean of the hub's known
///    densities, and hub distance is that record's own distance.
/// 3. Otherwise the single nearest record's values are used as they are.
///
/// A fault density that is still unknown after this stays `None`.

use crate::model::{Result, SeismicRecord, SiteFeatures};
use crate::store::SeismicStore;

/// Derives features and returns them alongside the single nearest record.
pub fn derive_site_features<'a>(
    store: &'a SeismicStore,
    latitude: f64,
    longitude: f64,
    neighbors: usize,
    hub_top_magnitudes: usize,
) -> Result<(SiteFeatures, &'a SeismicRecord)> {
    let nearest = store.nearest(latitude, longitude, neighbors.max(1))?;
    // nearest() only returns Ok with at least one record
    let closest = nearest[0];

    let anchor = nearest.iter().copied().find(|r| r.fault_hub_name.is_some());

    let features = match anchor {
        Some(anchor) => {
            let hub = anchor.fault_hub_name.as_deref();
            let group = store.group_by_fault_hub(hub);
            log::debug!(
                "aggregating {} records on fault hub {}",
                group.len(),
                hub.unwrap_or_default()
            );
            SiteFeatures {
                magnitude: top_magnitude_mean(&group, hub_top_magnitudes),
                hub_distance_m: anchor.hub_distance_m,
                fault_density: mean_known_density(&group),
                fault_hub_name: anchor.fault_hub_name.clone(),
                supporting_records: group.len().min(hub_top_magnitudes.max(1)),
            }
        }
        None => {
            log::debug!("no named fault hub among {} nearest records", nearest.len());
            SiteFeatures {
                magnitude: closest.magnitude,
                hub_distance_m: closest.hub_distance_m,
                fault_density: closest.fault_density,
                fault_hub_name: None,
                supporting_records: 1,
            }
        }
    };

    Ok((features, closest))
}

/// Mean of the `n` largest magnitudes. Equal magnitudes keep catalog order.
fn top_magnitude_mean(records: &[&SeismicRecord], n: usize) -> f64 {
    let mut magnitudes: Vec<f64> = records.iter().map(|r| r.magnitude).collect();
    magnitudes.sort_by(|a, b| b.total_cmp(a));
    magnitudes.truncate(n.max(1));
    magnitudes.iter().sum::<f64>() / magnitudes.len() as f64
}

fn mean_known_density(records: &[&SeismicRecord]) -> Option<f64> {
    let known: Vec<f64> = records.iter().filter_map(|r| r.fault_density).collect();
    if known.is_empty() {
        None
    } else {
        Some(known.iter().sum::<f64>() / known.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
