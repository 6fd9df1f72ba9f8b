use crate::error::Result;
use crate::math::Point2;
use crate::mesh::{Mesh, ObstacleRegion};

/// Rotates an obstacle about its own centroid.
pub struct RotateObstacle {
    angle: f64,
}

impl RotateObstacle {
    /// Creates a new `RotateObstacle` operation.
    ///
    /// * `angle` - Rotation angle in radians, counter-clockwise.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Executes the rotation, mutating the shared corner vertices in-place.
    ///
    /// The pivot is the obstacle centroid recomputed at call time, so
    /// chained incremental rotations stay centered even after the obstacle
    /// has been translated.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner references a missing vertex.
    pub fn execute(&self, mesh: &mut Mesh, obstacle: &ObstacleRegion) -> Result<()> {
        let center = obstacle.centroid(mesh)?;
        let (sin, cos) = self.angle.sin_cos();
        for &corner in obstacle.corners() {
            let p = mesh.vertex(corner)?;
            let dx = p.x - center.x;
            let dy = p.y - center.y;
            mesh.set_vertex(
                corner,
                Point2::new(
                    center.x + dx * cos - dy * sin,
                    center.y + dx * sin + dy * cos,
                ),
            )?;
        }
        Ok(())
    }
}
