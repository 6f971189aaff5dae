//! Spatial math for distance and travel-time calculations.

use crate::models::Coordinate;

/// Mean Earth radius used by the great-circle formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6372.795477;

/// Great-circle distance between two coordinates in kilometers.
///
/// Spherical law of cosines. The cosine argument is clamped to [-1, 1]
/// so near-identical or antipodal points stay inside the `acos` domain.
/// Identical points short-circuit to exactly zero.
pub fn great_circle_distance_km(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat_a = from.latitude.to_radians();
    let lon_a = from.longitude.to_radians();
    let lat_b = to.latitude.to_radians();
    let lon_b = to.longitude.to_radians();

    let cos_angle = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_a - lon_b).cos();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}

/// Travel time between two coordinates at a fixed cruising speed, in seconds.
pub fn travel_time_s(from: Coordinate, to: Coordinate, speed_kmh: f64) -> f64 {
    let speed_km_per_s = speed_kmh / 3600.0;
    great_circle_distance_km(from, to) / speed_km_per_s
}
