//! Radius search around a municipality.
//!
//! The store is asked once for everything inside a coarse bounding box; the
//! exact great-circle distance then trims the corners and orders the result.

use tracing::debug;

use crate::domain::Municipality;
use crate::error::AppResult;
use crate::infrastructure::repositories::MunicipalityRepository;

mod bounding_box;

pub use bounding_box::{BoundingBox, KM_PER_DEGREE_LATITUDE, KM_PER_DEGREE_LONGITUDE};

/// Municipalities within `radius_km` of `reference`, nearest first.
///
/// The reference is excluded by **name**, so any other municipality sharing
/// its name is dropped as well. Equal distances keep the store's order.
pub async fn find_nearby(
    reference: &Municipality,
    radius_km: u32,
    store: &dyn MunicipalityRepository,
) -> AppResult<Vec<Municipality>> {
    let nearby = find_nearby_with_distance(reference, radius_km, store).await?;
    Ok(nearby
        .into_iter()
        .map(|(municipality, _)| municipality)
        .collect())
}

/// Same as [`find_nearby`], paired with each municipality's distance in km.
pub async fn find_nearby_with_distance(
    reference: &Municipality,
    radius_km: u32,
    store: &dyn MunicipalityRepository,
) -> AppResult<Vec<(Municipality, u64)>> {
    let bbox = BoundingBox::around(reference.location(), radius_km);
    let candidates = store
        .find_by_latitude_and_longitude_range(
            bbox.lat_min,
            bbox.lat_max,
            bbox.lon_min,
            bbox.lon_max,
        )
        .await?;
    let candidate_count = candidates.len();

    let nearby = filter_and_rank(reference, radius_km, candidates);

    debug!(
        code = %reference.code,
        radius_km,
        candidates = candidate_count,
        results = nearby.len(),
        "proximity search completed"
    );

    Ok(nearby)
}

fn filter_and_rank(
    reference: &Municipality,
    radius_km: u32,
    candidates: Vec<Municipality>,
) -> Vec<(Municipality, u64)> {
    let origin = reference.location();
    let radius_km = u64::from(radius_km);

    let mut nearby: Vec<(Municipality, u64)> = candidates
        .into_iter()
        .filter(|candidate| candidate.name != reference.name)
        .map(|candidate| {
            let distance = candidate.location().distance_km_to(origin);
            (candidate, distance)
        })
        .filter(|(_, distance)| *distance <= radius_km)
        .collect();

    // `sort_by_key` is stable: ties stay in store order.
    nearby.sort_by_key(|(_, distance)| *distance);
    nearby
}
