//! Points of interest eligible for inclusion in a tour.

use serde::{Deserialize, Serialize};

/// A geolocated place loaded from the source data set.
///
/// The id is the point's index in the source collection. Text fields come
/// straight from ingestion and are carried through to presentation
/// untouched; only the coordinates participate in planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: usize,
    pub name: String,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub postal_code: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
    pub hours: Option<String>,
    pub cost: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(id: usize, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.into(),
            street: None,
            neighborhood: None,
            postal_code: None,
            category: None,
            featured: false,
            hours: None,
            cost: None,
            lat,
            lng,
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    pub fn cost(mut self, cost: impl Into<String>) -> Self {
        self.cost = Some(cost.into());
        self
    }

    /// Location as a (lat, lng) pair.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Whether the coordinates are finite and inside the valid ranges.
    ///
    /// Points failing this never reach the planner; the selection snapshot
    /// drops them and the planner re-checks defensively.
    pub fn has_valid_coords(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_fields() {
        let point = Point::new(3, "Museo Nacional de Antropología", 19.4260, -99.1863)
            .street("Av. Paseo de la Reforma s/n")
            .neighborhood("Polanco")
            .postal_code("11560")
            .category("Antropología")
            .featured(true)
            .hours("Mar-Dom 9:00-19:00")
            .cost("$95");

        assert_eq!(point.id, 3);
        assert_eq!(point.neighborhood.as_deref(), Some("Polanco"));
        assert!(point.featured);
        assert_eq!(point.coords(), (19.4260, -99.1863));
    }

    #[test]
    fn boundary_coordinates_are_valid() {
        assert!(Point::new(0, "north pole", 90.0, 0.0).has_valid_coords());
        assert!(Point::new(0, "south pole", -90.0, 0.0).has_valid_coords());
        assert!(Point::new(0, "antimeridian", 0.0, 180.0).has_valid_coords());
        assert!(Point::new(0, "antimeridian west", 0.0, -180.0).has_valid_coords());
    }

    #[test]
    fn out_of_range_coordinates_are_invalid() {
        assert!(!Point::new(0, "bad lat", 90.5, 0.0).has_valid_coords());
        assert!(!Point::new(0, "bad lng", 0.0, -180.5).has_valid_coords());
    }

    #[test]
    fn non_finite_coordinates_are_invalid() {
        assert!(!Point::new(0, "nan lat", f64::NAN, 0.0).has_valid_coords());
        assert!(!Point::new(0, "inf lng", 0.0, f64::INFINITY).has_valid_coords());
    }
}
