//! Haversine leg estimator (fallback when live routing is unavailable).
//!
//! Uses great-circle distance and a fixed minutes-per-kilometer heuristic.
//! Less accurate than a road network (ignores streets) but deterministic
//! and always available.

use crate::geo;
use crate::traits::{DistanceProvider, LegEstimate, TransportMode};

/// Default travel-time heuristic: 3 minutes per straight-line kilometer.
const DEFAULT_MINUTES_PER_KM: f64 = 3.0;

/// Haversine-based leg estimator.
///
/// Produces `round(km * minutes_per_km)` minutes and the 2-decimal
/// straight-line distance, with no geometry.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Minutes of travel assumed per kilometer of straight-line distance.
    pub minutes_per_km: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            minutes_per_km: DEFAULT_MINUTES_PER_KM,
        }
    }
}

impl HaversineEstimator {
    pub fn new(minutes_per_km: f64) -> Self {
        Self { minutes_per_km }
    }
}

impl DistanceProvider for HaversineEstimator {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), _mode: TransportMode) -> LegEstimate {
        let km = geo::haversine_km(from, to);
        LegEstimate {
            duration_minutes: (km * self.minutes_per_km).round() as i32,
            distance_km: geo::round_km(km),
            geometry: None,
        }
    }
}
