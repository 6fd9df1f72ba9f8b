use crate::error::SimulationError;
use crate::math::Point2;
use crate::mesh::{Mesh, ObstacleRegion};

/// A mobile point tracked against the mesh, tagged with the index of the
/// triangle currently containing it (`None` while unassigned).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupant {
    pub x: f64,
    pub y: f64,
    pub triangle: Option<usize>,
}

impl Occupant {
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Outcome of an occupant insertion attempt.
///
/// Rejection is a normal result communicated to the caller, never an error:
/// the capacity cap and the obstacle test are expected gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Accepted,
    AtCapacity,
    InsideObstacle,
}

impl InsertOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Owns the occupant collection and its triangle assignments.
#[derive(Debug)]
pub struct OccupantTracker {
    occupants: Vec<Occupant>,
    capacity: usize,
}

impl OccupantTracker {
    /// Creates an empty tracker capped at `capacity` occupants.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            occupants: Vec::new(),
            capacity,
        }
    }

    /// Read-only snapshot of the occupants.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Removes all occupants.
    pub fn clear(&mut self) {
        self.occupants.clear();
    }

    /// Appends an occupant at `(x, y)` and locates its triangle
    /// immediately.
    ///
    /// Rejected when the tracker is at capacity or the point lies inside
    /// the obstacle. A point outside every triangle is still accepted
    /// unassigned; the next relocate pass prunes it.
    pub fn insert(
        &mut self,
        mesh: &Mesh,
        obstacle: &ObstacleRegion,
        x: f64,
        y: f64,
    ) -> InsertOutcome {
        if self.occupants.len() >= self.capacity {
            return InsertOutcome::AtCapacity;
        }
        let p = Point2::new(x, y);
        if obstacle.contains_point(mesh, p) {
            return InsertOutcome::InsideObstacle;
        }
        self.occupants.push(Occupant {
            x,
            y,
            triangle: mesh.locate(p),
        });
        InsertOutcome::Accepted
    }

    /// Removes the first occupant (in storage order) within `radius` of
    /// `(x, y)`. Returns whether one was removed.
    pub fn remove_near(&mut self, x: f64, y: f64, radius: f64) -> bool {
        let hit = self
            .occupants
            .iter()
            .position(|o| (o.x - x).hypot(o.y - y) <= radius);
        match hit {
            Some(index) => {
                self.occupants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes the occupant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OccupantNotFound`] for an out-of-range
    /// index.
    pub fn remove(&mut self, index: usize) -> Result<Occupant, SimulationError> {
        if index >= self.occupants.len() {
            return Err(SimulationError::OccupantNotFound(index));
        }
        Ok(self.occupants.remove(index))
    }

    /// Index of the occupant nearest to `(x, y)` within `radius`, if any.
    /// Used by interaction layers for picking.
    #[must_use]
    pub fn nearest_within(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, o) in self.occupants.iter().enumerate() {
            let d = (o.x - x).hypot(o.y - y);
            if d <= radius && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Moves an occupant and recomputes its containing triangle. The
    /// occupant is not pruned here even if it lands in the obstacle or
    /// outside the mesh; the next relocate pass does that.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::OccupantNotFound`] for an out-of-range
    /// index.
    pub fn move_occupant(
        &mut self,
        mesh: &Mesh,
        index: usize,
        x: f64,
        y: f64,
    ) -> Result<(), SimulationError> {
        let occupant = self
            .occupants
            .get_mut(index)
            .ok_or(SimulationError::OccupantNotFound(index))?;
        occupant.x = x;
        occupant.y = y;
        occupant.triangle = mesh.locate(Point2::new(x, y));
        Ok(())
    }

    /// Recomputes every occupant's triangle assignment against the current
    /// mesh, then prunes occupants that are unassigned or inside the
    /// obstacle.
    pub fn relocate_all(&mut self, mesh: &Mesh, obstacle: &ObstacleRegion) {
        for occupant in &mut self.occupants {
            occupant.triangle = mesh.locate(occupant.position());
        }
        self.occupants
            .retain(|o| o.triangle.is_some() && !obstacle.contains_point(mesh, o.position()));
    }

    /// Occupant count per triangle, aligned with the mesh triangle list.
    /// Unassigned occupants are not counted.
    #[must_use]
    pub fn per_triangle_counts(&self, triangle_count: usize) -> Vec<usize> {
        let mut counts = vec![0; triangle_count];
        for o in &self.occupants {
            if let Some(t) = o.triangle {
                if t < triangle_count {
                    counts[t] += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square_world() -> (Mesh, ObstacleRegion) {
        let mut mesh = Mesh::new();
        mesh.push_vertex(Point2::new(-1.0, -1.0));
        mesh.push_vertex(Point2::new(1.0, -1.0));
        mesh.push_vertex(Point2::new(1.0, 1.0));
        mesh.push_vertex(Point2::new(-1.0, 1.0));
        // Small square obstacle in the lower-left quadrant.
        let first = mesh.push_vertex(Point2::new(-0.8, -0.8));
        mesh.push_vertex(Point2::new(-0.4, -0.8));
        mesh.push_vertex(Point2::new(-0.4, -0.4));
        let last = mesh.push_vertex(Point2::new(-0.8, -0.4));
        mesh.rebuild();
        (mesh, ObstacleRegion::new((first..=last).collect()))
    }

    #[test]
    fn insert_assigns_a_triangle() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        assert!(tracker.insert(&mesh, &obstacle, 0.5, 0.5).is_accepted());
        assert!(tracker.occupants()[0].triangle.is_some());
    }

    #[test]
    fn capacity_is_enforced() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(2);
        assert!(tracker.insert(&mesh, &obstacle, 0.1, 0.1).is_accepted());
        assert!(tracker.insert(&mesh, &obstacle, 0.2, 0.2).is_accepted());
        for _ in 0..5 {
            assert_eq!(
                tracker.insert(&mesh, &obstacle, 0.3, 0.3),
                InsertOutcome::AtCapacity
            );
        }
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn insert_inside_obstacle_is_rejected() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        assert_eq!(
            tracker.insert(&mesh, &obstacle, -0.6, -0.6),
            InsertOutcome::InsideObstacle
        );
        assert!(tracker.is_empty());
    }

    #[test]
    fn remove_near_takes_first_in_storage_order() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.50, 0.50);
        tracker.insert(&mesh, &obstacle, 0.52, 0.50);
        assert!(tracker.remove_near(0.51, 0.50, 0.1));
        assert_eq!(tracker.len(), 1);
        // The first occupant was closer in storage order and is gone.
        assert!((tracker.occupants()[0].x - 0.52).abs() < 1e-12);
    }

    #[test]
    fn remove_near_misses_outside_radius() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.5, 0.5);
        assert!(!tracker.remove_near(-0.5, 0.5, 0.1));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn nearest_within_prefers_distance_over_order() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.54, 0.50);
        tracker.insert(&mesh, &obstacle, 0.51, 0.50);
        assert_eq!(tracker.nearest_within(0.50, 0.50, 0.1), Some(1));
        assert_eq!(tracker.nearest_within(0.50, -0.9, 0.05), None);
    }

    #[test]
    fn move_occupant_relocates_and_validates_index() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.5, 0.5);
        tracker.move_occupant(&mesh, 0, 5.0, 5.0).unwrap();
        // Outside every triangle: unassigned, but still present.
        assert_eq!(tracker.occupants()[0].triangle, None);
        assert!(tracker.move_occupant(&mesh, 3, 0.0, 0.0).is_err());
    }

    #[test]
    fn relocate_all_prunes_unassigned_and_obstructed() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.5, 0.5);
        tracker.insert(&mesh, &obstacle, 0.2, -0.2);
        // Drag one outside the hull and one into the obstacle.
        tracker.move_occupant(&mesh, 0, 5.0, 5.0).unwrap();
        tracker.move_occupant(&mesh, 1, -0.6, -0.6).unwrap();
        tracker.relocate_all(&mesh, &obstacle);
        assert!(tracker.is_empty());
    }

    #[test]
    fn per_triangle_counts_sum_to_assigned_occupants() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.5, 0.5);
        tracker.insert(&mesh, &obstacle, -0.1, 0.6);
        tracker.insert(&mesh, &obstacle, 0.3, -0.5);
        let counts = tracker.per_triangle_counts(mesh.triangles().len());
        assert_eq!(counts.iter().sum::<usize>(), 3);
    }

    #[test]
    fn remove_by_index() {
        let (mesh, obstacle) = square_world();
        let mut tracker = OccupantTracker::new(10);
        tracker.insert(&mesh, &obstacle, 0.5, 0.5);
        let removed = tracker.remove(0).unwrap();
        assert!((removed.x - 0.5).abs() < 1e-12);
        assert!(tracker.remove(0).is_err());
    }
}
