//! Core traits for the tour planner.
//!
//! These are intentionally minimal: the planner depends only on a leg
//! estimator and an optional progress sink, so it can be unit tested with
//! no network stack and adapted to any UI/event model by the caller.

use serde::{Deserialize, Serialize};

use crate::polyline::Polyline;

/// Transport mode for routing lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Walking,
    Cycling,
}

impl TransportMode {
    /// OSRM profile segment for this mode.
    pub fn profile(&self) -> &'static str {
        match self {
            TransportMode::Driving => "driving",
            TransportMode::Walking => "walking",
            TransportMode::Cycling => "cycling",
        }
    }
}

/// A priced leg between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegEstimate {
    /// Travel time in whole minutes.
    pub duration_minutes: i32,
    /// Travel distance in kilometers, rounded to 2 decimals.
    pub distance_km: f64,
    /// Road geometry for the leg, if the provider has one.
    pub geometry: Option<Polyline>,
}

/// Estimates travel duration/distance between two (lat, lng) locations.
///
/// Implementations must not fail: a provider that performs live lookups is
/// expected to absorb every error and substitute a deterministic estimate,
/// so the planner is never blocked by a lookup failure.
pub trait DistanceProvider {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), mode: TransportMode) -> LegEstimate;
}

/// Receives (percent, label) progress updates during an optimization run.
///
/// Emitted at run start, after each hop, and before the return leg.
/// Purely observational; ignoring updates does not affect the result.
pub trait ProgressSink {
    fn progress(&self, percent: u8, label: &str);
}

/// Progress sink that discards all updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn progress(&self, _percent: u8, _label: &str) {}
}
