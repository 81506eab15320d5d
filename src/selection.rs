//! Selection of points eligible for the next optimization run.

use std::collections::BTreeSet;

use crate::point::Point;

/// Set of point ids marked for optimization.
///
/// Ids follow the source collection, so iteration (and therefore the
/// snapshot handed to the planner) stays in source order. Resets to "all
/// points" whenever a new data set loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects every point in the data set. Called on data load.
    pub fn reset(&mut self, points: &[Point]) {
        self.selected = points.iter().map(|point| point.id).collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Flips a single point in or out of the selection.
    pub fn toggle(&mut self, id: usize) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: usize) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Replaces the selection with all points matching a category tag.
    pub fn select_category(&mut self, points: &[Point], category: &str) {
        self.select_where(points, |point| point.category.as_deref() == Some(category));
    }

    /// Replaces the selection with all points in a neighborhood.
    pub fn select_neighborhood(&mut self, points: &[Point], neighborhood: &str) {
        self.select_where(points, |point| {
            point.neighborhood.as_deref() == Some(neighborhood)
        });
    }

    /// Replaces the selection with the featured points only.
    pub fn select_featured(&mut self, points: &[Point]) {
        self.select_where(points, |point| point.featured);
    }

    fn select_where(&mut self, points: &[Point], keep: impl Fn(&Point) -> bool) {
        self.selected = points
            .iter()
            .filter(|point| keep(point))
            .map(|point| point.id)
            .collect();
    }

    /// Snapshot of the selected, routable points in source order.
    ///
    /// Points with invalid coordinates are dropped here and never reach
    /// the planner. The returned Vec is owned, so mutating the selection
    /// afterwards cannot affect a run already using the snapshot.
    pub fn selected_points(&self, points: &[Point]) -> Vec<Point> {
        points
            .iter()
            .filter(|point| self.selected.contains(&point.id) && point.has_valid_coords())
            .cloned()
            .collect()
    }
}
