//! OSRM HTTP adapter for leg estimates.
//!
//! Queries the OSRM route service for a single leg and converts the
//! response into planner units. Every failure mode (network error,
//! non-2xx, malformed body, empty route list) collapses into the
//! deterministic haversine fallback, so `estimate` never fails.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::geo;
use crate::haversine::HaversineEstimator;
use crate::polyline::{self, Polyline};
use crate::traits::{DistanceProvider, LegEstimate, TransportMode};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://router.project-osrm.org".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
    fallback: HaversineEstimator,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            fallback: HaversineEstimator::default(),
        })
    }

    fn route_url(&self, from: (f64, f64), to: (f64, f64), mode: TransportMode) -> String {
        // OSRM takes lng,lat pairs.
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full",
            self.config.base_url,
            mode.profile(),
            from.1,
            from.0,
            to.1,
            to.0
        )
    }

    fn lookup(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        mode: TransportMode,
    ) -> Option<LegEstimate> {
        let response = self
            .client
            .get(self.route_url(from, to, mode))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>());

        let body = match response {
            Ok(body) => body,
            Err(err) => {
                debug!(error = %err, "OSRM route request failed");
                return None;
            }
        };

        let route = body.routes.into_iter().next()?;
        Some(leg_from_route(route, from, to))
    }
}

impl DistanceProvider for OsrmClient {
    fn estimate(&self, from: (f64, f64), to: (f64, f64), mode: TransportMode) -> LegEstimate {
        match self.lookup(from, to, mode) {
            Some(leg) => leg,
            None => {
                debug!(?from, ?to, "using haversine fallback for leg");
                self.fallback.estimate(from, to, mode)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Seconds.
    duration: f64,
    /// Meters.
    distance: f64,
    /// Encoded polyline, when overview geometry was requested.
    geometry: Option<String>,
}

fn leg_from_route(route: OsrmRoute, from: (f64, f64), to: (f64, f64)) -> LegEstimate {
    LegEstimate {
        duration_minutes: (route.duration / 60.0).round() as i32,
        distance_km: geo::round_km(route.distance / 1000.0),
        geometry: route
            .geometry
            .map(|encoded| decode_or_straight_line(&encoded, from, to)),
    }
}

/// Decodes leg geometry, substituting the straight line between the leg's
/// endpoints if the payload is malformed.
fn decode_or_straight_line(encoded: &str, from: (f64, f64), to: (f64, f64)) -> Polyline {
    match polyline::decode(encoded) {
        Ok(decoded) => decoded,
        Err(err) => {
            warn!(error = %err, "discarding undecodable leg geometry");
            Polyline::new(vec![from, to])
        }
    }
}
