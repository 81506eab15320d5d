//! Great-circle math on (lat, lng) pairs.
//!
//! Pure helpers shared by the planner (nearest-neighbor proxy distance)
//! and the haversine fallback estimator.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (lat, lng) points in kilometers.
///
/// Symmetric and zero for coincident points. NaN coordinates propagate;
/// callers are expected to validate coordinates upstream.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Round a kilometer value to 2 decimals, the precision carried by route
/// steps and totals.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}
