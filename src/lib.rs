//! tour-planner core
//!
//! Greedy day-tour construction over geolocated points of interest, with
//! live routing estimates and a deterministic geometric fallback.

pub mod traits;
pub mod planner;
pub mod selection;
pub mod point;
pub mod osrm;
pub mod osrm_data;
pub mod haversine;
pub mod polyline;
pub mod geo;
pub mod config;
