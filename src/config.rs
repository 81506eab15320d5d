//! Persisted tour settings.
//!
//! One JSON blob holds the home origin and the per-visit timing knobs.
//! Saved on every explicit change by the caller (e.g. after the origin
//! marker is dragged); loaded once at startup, falling back to defaults
//! when no file exists yet.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::planner::PlanOptions;
use crate::traits::TransportMode;

/// Mexico City centre, the default home origin.
pub const DEFAULT_ORIGIN: (f64, f64) = (19.4326, -99.1332);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub visit_minutes: i32,
    pub rest_minutes: i32,
    pub mode: TransportMode,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            origin_lat: DEFAULT_ORIGIN.0,
            origin_lng: DEFAULT_ORIGIN.1,
            visit_minutes: 90,
            rest_minutes: 15,
            mode: TransportMode::Driving,
        }
    }
}

impl TourConfig {
    /// Loads the config from `path`, or returns defaults if the file does
    /// not exist. A file that exists but fails to parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn origin(&self) -> (f64, f64) {
        (self.origin_lat, self.origin_lng)
    }

    /// Repositions the home origin (e.g. after dragging the marker).
    pub fn set_origin(&mut self, lat: f64, lng: f64) {
        self.origin_lat = lat;
        self.origin_lng = lng;
    }

    /// Planner options derived from the persisted settings.
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            visit_minutes: self.visit_minutes,
            rest_minutes: self.rest_minutes,
            mode: self.mode,
            ..PlanOptions::default()
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {}", err),
            ConfigError::Parse(err) => write!(f, "config parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}
