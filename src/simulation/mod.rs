pub mod occupants;

pub use occupants::{InsertOutcome, Occupant, OccupantTracker};

use rand::Rng;

use crate::error::Result;
use crate::math::{triangle_2d, Point2};
use crate::mesh::{Mesh, ObstacleRegion};
use crate::operations::transform::{RotateObstacle, ScaleObstacle, TranslateObstacle};

/// Parameters controlling [`SimulationState::reset`] seeding and the
/// occupant capacity.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// Interior sample vertices to scatter at reset.
    pub interior_points: usize,
    /// Occupants seeded per triangle at reset.
    pub occupant_density: usize,
    /// Side length of the seeded square obstacle.
    pub obstacle_size: f64,
    /// Hard cap on the occupant collection.
    pub max_occupants: usize,
    /// Scattered vertices farther than this from the origin are rejected.
    pub scatter_radius: f64,
    /// Total retry budget for interior-vertex scattering.
    pub scatter_attempts: usize,
    /// Retry budget per triangle for occupant seeding.
    pub placement_attempts: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            interior_points: 10,
            occupant_density: 2,
            obstacle_size: 0.4,
            max_occupants: 100,
            scatter_radius: 1.5,
            scatter_attempts: 2000,
            placement_attempts: 100,
        }
    }
}

/// Whether an interactive edit session (a drag, a chained transform) is in
/// progress. Every edit step rebuilds synchronously either way; the session
/// end additionally sweeps up occupants left in an invalid spot by the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    #[default]
    Idle,
    Editing,
}

/// One obstacle transform command.
#[derive(Debug, Clone, Copy)]
pub enum ObstacleTransform {
    Translate { dx: f64, dy: f64 },
    Rotate { angle: f64 },
    Scale { factor: f64 },
}

/// Composition root: owns the mesh, the obstacle, and the occupant
/// collection, and drives the edit → rebuild → relocate → prune cycle.
///
/// All operations run to completion synchronously; no torn state is ever
/// observable between edits. Concurrent callers must serialize access
/// themselves.
#[derive(Debug)]
pub struct SimulationState {
    mesh: Mesh,
    obstacle: ObstacleRegion,
    occupants: OccupantTracker,
    params: SimulationParams,
    phase: EditPhase,
}

impl SimulationState {
    /// Creates an empty simulation. Call [`SimulationState::reset`] to seed
    /// the reference layout.
    #[must_use]
    pub fn new(params: SimulationParams) -> Self {
        Self {
            mesh: Mesh::new(),
            obstacle: ObstacleRegion::default(),
            occupants: OccupantTracker::new(params.max_occupants),
            params,
            phase: EditPhase::Idle,
        }
    }

    // --- Query surface ---

    #[must_use]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[must_use]
    pub fn obstacle(&self) -> &ObstacleRegion {
        &self.obstacle
    }

    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        self.occupants.occupants()
    }

    #[must_use]
    pub fn params(&self) -> SimulationParams {
        self.params
    }

    #[must_use]
    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Occupant count per triangle, aligned with `mesh().triangles()`.
    #[must_use]
    pub fn triangle_occupancy(&self) -> Vec<usize> {
        self.occupants.per_triangle_counts(self.mesh.triangles().len())
    }

    // --- Edit session ---

    /// Marks the start of an interactive edit session.
    pub fn begin_edit(&mut self) {
        self.phase = EditPhase::Editing;
    }

    /// Ends the session and runs a relocate-and-prune pass: a dragged
    /// occupant released inside the obstacle (or outside the mesh) is
    /// removed here.
    pub fn end_edit(&mut self) {
        self.phase = EditPhase::Idle;
        self.occupants.relocate_all(&self.mesh, &self.obstacle);
    }

    // --- Command surface ---

    /// Moves a vertex and runs the full rebuild cycle.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range vertex index.
    pub fn move_point(&mut self, vertex: usize, x: f64, y: f64) -> Result<()> {
        self.mesh.set_vertex(vertex, Point2::new(x, y))?;
        self.refresh();
        Ok(())
    }

    /// Applies one obstacle transform step and runs the full rebuild cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if an obstacle corner references a missing vertex.
    pub fn transform_obstacle(&mut self, transform: ObstacleTransform) -> Result<()> {
        match transform {
            ObstacleTransform::Translate { dx, dy } => {
                TranslateObstacle::new(dx, dy).execute(&mut self.mesh, &self.obstacle)?;
            }
            ObstacleTransform::Rotate { angle } => {
                RotateObstacle::new(angle).execute(&mut self.mesh, &self.obstacle)?;
            }
            ObstacleTransform::Scale { factor } => {
                ScaleObstacle::new(factor).execute(&mut self.mesh, &self.obstacle)?;
            }
        }
        self.refresh();
        Ok(())
    }

    /// Attempts to add an occupant at `(x, y)`.
    pub fn insert_occupant(&mut self, x: f64, y: f64) -> InsertOutcome {
        self.occupants.insert(&self.mesh, &self.obstacle, x, y)
    }

    /// Removes the first occupant within `radius` of `(x, y)`, if any.
    pub fn remove_occupant_near(&mut self, x: f64, y: f64, radius: f64) -> bool {
        self.occupants.remove_near(x, y, radius)
    }

    /// Moves an occupant and recomputes its containing triangle. Pruning is
    /// deferred to the next relocate pass (typically [`Self::end_edit`]).
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range occupant index.
    pub fn move_occupant(&mut self, index: usize, x: f64, y: f64) -> Result<()> {
        self.occupants.move_occupant(&self.mesh, index, x, y)?;
        Ok(())
    }

    /// Reinitializes the whole aggregate: the four domain corners, a square
    /// obstacle whose corners are shared mesh vertices, a bounded rejection
    /// scatter of interior vertices, the triangulation, and a bounded
    /// per-triangle occupant scatter.
    ///
    /// Exhausting a retry budget yields fewer vertices or occupants, never
    /// an error.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.mesh.clear();
        self.occupants.clear();
        self.phase = EditPhase::Idle;

        for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            self.mesh.push_vertex(Point2::new(x, y));
        }

        // Square obstacle anchored at the origin; corners 4..=7 double as
        // mesh vertices.
        let size = self.params.obstacle_size;
        let first = self.mesh.push_vertex(Point2::new(0.0, 0.0));
        self.mesh.push_vertex(Point2::new(size, 0.0));
        self.mesh.push_vertex(Point2::new(size, size));
        let last = self.mesh.push_vertex(Point2::new(0.0, size));
        self.obstacle.set_corners((first..=last).collect());

        let mut accepted = 0;
        let mut attempts = 0;
        while accepted < self.params.interior_points && attempts < self.params.scatter_attempts {
            attempts += 1;
            let p = Point2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            if self.obstacle.contains_point(&self.mesh, p) {
                continue;
            }
            if p.x.hypot(p.y) > self.params.scatter_radius {
                continue;
            }
            self.mesh.push_vertex(p);
            accepted += 1;
        }

        self.mesh.rebuild();

        let triangle_corners: Vec<(Point2, Point2, Point2)> = self
            .mesh
            .triangles()
            .iter()
            .map(|t| {
                (
                    self.mesh.vertices()[t[0]],
                    self.mesh.vertices()[t[1]],
                    self.mesh.vertices()[t[2]],
                )
            })
            .collect();
        for (a, b, c) in triangle_corners {
            let mut added = 0;
            let mut tries = 0;
            while added < self.params.occupant_density && tries < self.params.placement_attempts {
                tries += 1;
                let p = triangle_2d::sample_point(rng, a, b, c);
                if self
                    .occupants
                    .insert(&self.mesh, &self.obstacle, p.x, p.y)
                    .is_accepted()
                {
                    added += 1;
                }
            }
        }
    }

    /// The full post-edit cycle: retriangulate, re-derive edges, relocate
    /// every occupant, prune the stranded ones.
    fn refresh(&mut self) {
        self.mesh.rebuild();
        self.occupants.relocate_all(&self.mesh, &self.obstacle);
    }
}
