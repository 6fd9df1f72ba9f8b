use crate::error::Result;
use crate::math::Point2;
use crate::mesh::{Mesh, ObstacleRegion};

/// Translates an obstacle by a fixed offset.
pub struct TranslateObstacle {
    dx: f64,
    dy: f64,
}

impl TranslateObstacle {
    /// Creates a new `TranslateObstacle` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Executes the translation, mutating the shared corner vertices
    /// in-place. The corner index list is left untouched. A no-op for an
    /// obstacle without corners.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner references a missing vertex.
    pub fn execute(&self, mesh: &mut Mesh, obstacle: &ObstacleRegion) -> Result<()> {
        for &corner in obstacle.corners() {
            let p = mesh.vertex(corner)?;
            mesh.set_vertex(corner, Point2::new(p.x + self.dx, p.y + self.dy))?;
        }
        Ok(())
    }
}
