//! Test fixtures for tour-planner.
//!
//! Real Mexico City museum locations (coordinates from OpenStreetMap),
//! routable against the OSRM Mexico extract.

#![allow(dead_code)]

pub mod cdmx_locations;

pub use cdmx_locations::*;
