//! Polyline representation and decoding for route geometries.
//!
//! Routing responses carry leg geometry in the compact polyline encoding
//! (1e-5 precision, 5-bit groups with continuation bit 0x20, zig-zag
//! signs). This module stores polylines as decoded coordinate sequences
//! and decodes the wire format at the boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scale factor of the wire encoding.
const PRECISION: f64 = 1e-5;

/// A route geometry as a decoded sequence of (latitude, longitude) points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

/// Decode failure for a polyline payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolylineError {
    /// Input ended in the middle of a coordinate component.
    UnexpectedEnd,
    /// Byte outside the printable encoding range at the given offset.
    InvalidByte { index: usize },
    /// Component has more continuation bytes than any coordinate needs.
    Overflow { index: usize },
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::UnexpectedEnd => write!(f, "polyline truncated mid-coordinate"),
            PolylineError::InvalidByte { index } => {
                write!(f, "invalid polyline byte at offset {}", index)
            }
            PolylineError::Overflow { index } => {
                write!(f, "polyline component overflow at offset {}", index)
            }
        }
    }
}

impl std::error::Error for PolylineError {}

/// Decodes an encoded polyline string into coordinate points.
///
/// Fails on truncated or malformed input; callers substitute a straight
/// line between the leg's endpoints in that case.
pub fn decode(encoded: &str) -> Result<Polyline, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut pos = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while pos < bytes.len() {
        lat += decode_component(bytes, &mut pos)?;
        lng += decode_component(bytes, &mut pos)?;
        points.push((lat as f64 * PRECISION, lng as f64 * PRECISION));
    }

    Ok(Polyline::new(points))
}

/// Widest shift a component chunk may land at. Real coordinate deltas
/// need at most 6 chunks; 12 leaves headroom while keeping every shift
/// inside the 64-bit accumulator.
const MAX_COMPONENT_SHIFT: u32 = 55;

/// Reads one zig-zag encoded delta starting at `pos`, advancing it.
fn decode_component(bytes: &[u8], pos: &mut usize) -> Result<i64, PolylineError> {
    let mut shift = 0u32;
    let mut accum: i64 = 0;

    loop {
        let raw = match bytes.get(*pos) {
            Some(&byte) => byte,
            None => return Err(PolylineError::UnexpectedEnd),
        };
        if raw < 63 {
            return Err(PolylineError::InvalidByte { index: *pos });
        }
        if shift > MAX_COMPONENT_SHIFT {
            return Err(PolylineError::Overflow { index: *pos });
        }
        *pos += 1;

        let chunk = (raw - 63) as i64;
        accum |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    // Zig-zag: low bit carries the sign.
    Ok(if accum & 1 != 0 { !(accum >> 1) } else { accum >> 1 })
}
