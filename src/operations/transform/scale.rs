use crate::error::Result;
use crate::math::Point2;
use crate::mesh::{Mesh, ObstacleRegion};

/// Scales an obstacle about its own centroid.
pub struct ScaleObstacle {
    factor: f64,
}

impl ScaleObstacle {
    /// Creates a new `ScaleObstacle` operation.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Executes the scaling, mutating the shared corner vertices in-place.
    ///
    /// The pivot is the obstacle centroid recomputed at call time, so
    /// chained grow/shrink steps stay centered as the obstacle moves.
    ///
    /// # Errors
    ///
    /// Returns an error if a corner references a missing vertex.
    pub fn execute(&self, mesh: &mut Mesh, obstacle: &ObstacleRegion) -> Result<()> {
        let center = obstacle.centroid(mesh)?;
        for &corner in obstacle.corners() {
            let p = mesh.vertex(corner)?;
            mesh.set_vertex(
                corner,
                Point2::new(
                    center.x + (p.x - center.x) * self.factor,
                    center.y + (p.y - center.y) * self.factor,
                ),
            )?;
        }
        Ok(())
    }
}
