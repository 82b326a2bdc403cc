//! Nearest-car search primitives.
//!
//! Distances are Haversine great-circle approximations over a spherical
//! Earth. A record without a complete coordinate pair is infinitely far
//! away and never matches, whatever the radius; degenerate geodata is not
//! an error here.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius applied when a nearest-car query does not carry one.
pub const DEFAULT_RADIUS_KM: f64 = 50.0;

/// Anything that may sit at a point on the map. `None` means the position
/// is unknown (no location record, or a location without coordinates).
pub trait Positioned {
    fn position(&self) -> Option<(f64, f64)>;
}

/// Great-circle distance in kilometres between two (latitude, longitude)
/// pairs in decimal degrees.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    // Floating-point noise can push the haversine term a hair outside [0, 1].
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Distance between two positioned records, `f64::INFINITY` when either
/// side has no usable coordinates.
pub fn distance_km(from: &impl Positioned, to: &impl Positioned) -> f64 {
    match (from.position(), to.position()) {
        (Some((lat1, lng1)), Some((lat2, lng2))) => haversine_km(lat1, lng1, lat2, lng2),
        _ => f64::INFINITY,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Nearby<T> {
    pub candidate: T,
    pub distance_km: f64,
}

/// Linear scan of `candidates`, keeping those within `radius_km` of
/// `reference`, ordered by ascending distance.
///
/// Distance exactly equal to the radius is included. Candidates (or a
/// reference) missing coordinates are infinitely far away and excluded. A
/// zero or negative radius is not an error; it matches only candidates at
/// distance zero, or nothing. Ties keep their input order (the sort is
/// stable); beyond that the tie order is unspecified.
///
/// Pure: never mutates its inputs and touches no storage.
pub fn find_nearby<R, T>(reference: &R, candidates: Vec<T>, radius_km: f64) -> Vec<Nearby<T>>
where
    R: Positioned,
    T: Positioned,
{
    let mut nearby: Vec<Nearby<T>> = candidates
        .into_iter()
        .map(|candidate| {
            let distance = distance_km(reference, &candidate);
            Nearby {
                candidate,
                distance_km: distance,
            }
        })
        .filter(|entry| entry.distance_km <= radius_km)
        .collect();

    nearby.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    nearby
}
