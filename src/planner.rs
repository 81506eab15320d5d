//! Tour planner (greedy nearest-neighbor construction).
//!
//! Builds a one-day tour from a home origin over the selected points:
//! each hop moves to the closest unvisited point by straight-line
//! distance, the chosen hop is priced by the distance provider, and a
//! mandatory return leg closes the tour back at the origin.
//!
//! The straight-line proxy keeps provider lookups at exactly n + 1 for n
//! points; evaluating every candidate hop with live routing would cost
//! O(n²) requests. The trade-off is a locally greedy tour with no
//! improvement pass.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::traits::{DistanceProvider, ProgressSink, TransportMode};

/// Display name of the synthetic return-leg destination.
pub const RETURN_STEP_NAME: &str = "Return to start";

/// Progress percentage reported just before the return-leg lookup.
const RETURN_LEG_PERCENT: u8 = 95;

/// Progress labels are cut to this many characters.
const PROGRESS_LABEL_CHARS: usize = 35;

/// Per-run timing parameters.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Minutes spent at each point.
    pub visit_minutes: i32,
    /// Rest minutes after each visit.
    pub rest_minutes: i32,
    pub mode: TransportMode,
    /// Delay between provider lookups, for service etiquette against
    /// third-party routing hosts. Zero disables pacing (tests).
    pub pacing: Duration,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            visit_minutes: 90,
            rest_minutes: 15,
            mode: TransportMode::Driving,
            pacing: Duration::from_millis(100),
        }
    }
}

/// One leg of a computed tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Destination of the leg. For the return leg this is a synthetic
    /// point carrying the origin's coordinates.
    pub point: Point,
    pub travel_minutes: i32,
    /// Kilometers, 2-decimal precision.
    pub distance_km: f64,
    /// Zero for the return leg.
    pub visit_minutes: i32,
    /// Zero for the return leg.
    pub rest_minutes: i32,
    pub geometry: Option<Polyline>,
    pub is_return: bool,
}

/// A computed tour: ordered steps plus aggregate totals.
///
/// The last step always has `is_return` set and its destination carries
/// the origin's coordinates at computation time. Totals are exactly the
/// sum of the per-step fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub steps: Vec<RouteStep>,
    pub total_minutes: i32,
    pub total_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// Fewer than 2 routable points were submitted.
    InsufficientSelection { available: usize },
    /// Another optimization is already in flight on this planner.
    AlreadyRunning,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::InsufficientSelection { available } => write!(
                f,
                "need at least 2 routable points to plan a tour, got {}",
                available
            ),
            PlanError::AlreadyRunning => write!(f, "an optimization run is already in flight"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Plans tours, one run at a time.
///
/// The reentrancy guard rejects overlapping runs: callers that would race
/// on shared route state get `PlanError::AlreadyRunning` instead.
#[derive(Debug, Default)]
pub struct Planner {
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path, including errors.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tour over `selected`, starting and ending at `origin`.
    ///
    /// The input slice is snapshotted up front: mutating the caller's
    /// selection after this returns control (via the provider's blocking
    /// lookups) does not affect the run. Points with invalid coordinates
    /// are dropped defensively; at least 2 routable points must remain.
    pub fn optimize<P, S>(
        &self,
        origin: (f64, f64),
        selected: &[Point],
        options: &PlanOptions,
        provider: &P,
        progress: &S,
    ) -> Result<Route, PlanError>
    where
        P: DistanceProvider,
        S: ProgressSink,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(PlanError::AlreadyRunning);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let mut unvisited: Vec<Point> = selected
            .iter()
            .filter(|point| point.has_valid_coords())
            .cloned()
            .collect();
        if unvisited.len() < 2 {
            return Err(PlanError::InsufficientSelection {
                available: unvisited.len(),
            });
        }

        let total = unvisited.len();
        debug!(points = total, "starting tour optimization");
        progress.progress(0, "Planning route");

        let mut steps: Vec<RouteStep> = Vec::with_capacity(total + 1);
        let mut current = origin;
        let mut total_minutes = 0;
        let mut total_km = 0.0;

        while !unvisited.is_empty() {
            let next = unvisited.remove(nearest_index(current, &unvisited));

            let leg = provider.estimate(current, next.coords(), options.mode);
            total_minutes += leg.duration_minutes + options.visit_minutes + options.rest_minutes;
            total_km += leg.distance_km;
            current = next.coords();

            let visited = total - unvisited.len();
            let percent = ((visited as f64 / total as f64) * 100.0).round() as u8;
            progress.progress(percent, &truncate_label(&next.name));

            steps.push(RouteStep {
                point: next,
                travel_minutes: leg.duration_minutes,
                distance_km: leg.distance_km,
                visit_minutes: options.visit_minutes,
                rest_minutes: options.rest_minutes,
                geometry: leg.geometry,
                is_return: false,
            });

            if !options.pacing.is_zero() {
                thread::sleep(options.pacing);
            }
        }

        progress.progress(RETURN_LEG_PERCENT, "Calculating return to start");
        let leg = provider.estimate(current, origin, options.mode);
        total_minutes += leg.duration_minutes;
        total_km += leg.distance_km;
        steps.push(RouteStep {
            point: Point::new(usize::MAX, RETURN_STEP_NAME, origin.0, origin.1),
            travel_minutes: leg.duration_minutes,
            distance_km: leg.distance_km,
            visit_minutes: 0,
            rest_minutes: 0,
            geometry: leg.geometry,
            is_return: true,
        });

        debug!(
            steps = steps.len(),
            total_minutes, total_km, "tour optimization finished"
        );

        Ok(Route {
            steps,
            total_minutes,
            total_km,
        })
    }
}

/// Index of the unvisited point closest to `current` by straight-line
/// distance. Strict less-than keeps the first point on ties, so the scan
/// is deterministic in input order.
fn nearest_index(current: (f64, f64), unvisited: &[Point]) -> usize {
    let mut nearest = 0;
    let mut nearest_km = f64::INFINITY;

    for (i, candidate) in unvisited.iter().enumerate() {
        let km = geo::haversine_km(current, candidate.coords());
        if km < nearest_km {
            nearest_km = km;
            nearest = i;
        }
    }

    nearest
}

fn truncate_label(name: &str) -> String {
    name.chars().take(PROGRESS_LABEL_CHARS).collect()
}
