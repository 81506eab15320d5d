//! Real Mexico City museum locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, routable
//! locations that work with OSRM Mexico data.

use tour_planner::point::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Zócalo, the default home origin used across tests.
pub const ZOCALO: Location = Location::new("Zócalo", 19.4326, -99.1332);

// ============================================================================
// Centro Histórico museums (walkable cluster around the Zócalo)
// ============================================================================

pub const CENTRO_MUSEUMS: &[Location] = &[
    Location::new("Templo Mayor", 19.4348, -99.1310),
    Location::new("Palacio de Bellas Artes", 19.4352, -99.1413),
    Location::new("Museo Nacional de Arte", 19.4366, -99.1397),
    Location::new("Museo Franz Mayer", 19.4360, -99.1445),
];

// ============================================================================
// Chapultepec / Polanco museums
// ============================================================================

pub const CHAPULTEPEC_MUSEUMS: &[Location] = &[
    Location::new("Museo Nacional de Antropología", 19.4260, -99.1863),
    Location::new("Museo Nacional de Historia", 19.4204, -99.1819),
    Location::new("Museo Tamayo", 19.4251, -99.1810),
    Location::new("Museo Soumaya", 19.4407, -99.2046),
];

// ============================================================================
// Southern museums (Coyoacán and beyond)
// ============================================================================

pub const SOUTH_MUSEUMS: &[Location] = &[
    Location::new("Museo Frida Kahlo", 19.3551, -99.1626),
    Location::new("Museo Anahuacalli", 19.3338, -99.1500),
];

/// A small mixed set spanning the city, converted to planner points.
pub fn museum_points() -> Vec<Point> {
    let picks = [
        &CENTRO_MUSEUMS[0],
        &CENTRO_MUSEUMS[1],
        &CHAPULTEPEC_MUSEUMS[0],
        &CHAPULTEPEC_MUSEUMS[1],
        &SOUTH_MUSEUMS[0],
    ];
    picks
        .iter()
        .enumerate()
        .map(|(id, loc)| Point::new(id, loc.name, loc.lat, loc.lng))
        .collect()
}

/// All fixture museums as planner points, ids in listing order.
pub fn all_museum_points() -> Vec<Point> {
    CENTRO_MUSEUMS
        .iter()
        .chain(CHAPULTEPEC_MUSEUMS)
        .chain(SOUTH_MUSEUMS)
        .enumerate()
        .map(|(id, loc)| Point::new(id, loc.name, loc.lat, loc.lng))
        .collect()
}
