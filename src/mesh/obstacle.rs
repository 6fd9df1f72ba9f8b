use super::Mesh;
use crate::error::MeshError;
use crate::math::polygon_2d::{centroid, point_in_polygon};
use crate::math::Point2;

/// A simple polygon over shared mesh vertices, stored as corner indices.
///
/// Corners reference [`Mesh`] vertices rather than copied coordinates, so
/// moving a vertex moves the obstacle, and an obstacle transform mutates
/// the shared mesh vertices (the corner list itself never changes).
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegion {
    corners: Vec<usize>,
}

impl ObstacleRegion {
    /// Creates an obstacle over the given corner indices. A simple polygon
    /// needs at least 3 corners; fewer leaves the obstacle inert
    /// (containing nothing), which is the uninitialized state.
    #[must_use]
    pub fn new(corners: Vec<usize>) -> Self {
        Self { corners }
    }

    /// Read-only snapshot of the corner indices.
    #[must_use]
    pub fn corners(&self) -> &[usize] {
        &self.corners
    }

    /// Replaces the corner list.
    pub fn set_corners(&mut self, corners: Vec<usize>) {
        self.corners = corners;
    }

    /// Resolves the corner indices to current coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::CornerOutOfRange`] if a corner references a
    /// vertex missing from `mesh`.
    pub fn corner_points(&self, mesh: &Mesh) -> Result<Vec<Point2>, MeshError> {
        self.corners
            .iter()
            .map(|&c| mesh.vertex(c).map_err(|_| MeshError::CornerOutOfRange(c)))
            .collect()
    }

    /// Arithmetic mean of the corner coordinates, recomputed from the
    /// current vertex positions; the origin when there are no corners.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::CornerOutOfRange`] if a corner references a
    /// vertex missing from `mesh`.
    pub fn centroid(&self, mesh: &Mesh) -> Result<Point2, MeshError> {
        Ok(centroid(&self.corner_points(mesh)?))
    }

    /// Even-odd containment test against the current corner coordinates.
    ///
    /// False when the obstacle has fewer than 3 corners or a corner index
    /// is stale: a malformed obstacle contains nothing.
    #[must_use]
    pub fn contains_point(&self, mesh: &Mesh, p: Point2) -> bool {
        match self.corner_points(mesh) {
            Ok(points) => point_in_polygon(p, &points),
            Err(_) => false,
        }
    }
}
