pub mod obstacle;

pub use obstacle::ObstacleRegion;

use std::collections::BTreeSet;

use crate::error::MeshError;
use crate::math::triangle_2d::point_in_triangle;
use crate::math::Point2;
use crate::triangulation::{self, Vertex};

/// Central index-arena store for the simulation geometry.
///
/// The mesh owns the vertex coordinates; triangles, edges, and obstacle
/// corners reference them by plain index rather than embedding copies.
/// Moving a vertex therefore moves everything built on it, and only a
/// [`Mesh::rebuild`] is needed to restore the triangulation.
#[derive(Debug, Default)]
pub struct Mesh {
    vertices: Vec<Point2>,
    triangles: Vec<[usize; 3]>,
    edges: Vec<[usize; 2]>,
}

impl Mesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index. Indices are stable: vertices
    /// are never removed, only moved.
    pub fn push_vertex(&mut self, p: Point2) -> usize {
        self.vertices.push(p);
        self.vertices.len() - 1
    }

    /// Returns the coordinates of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::VertexNotFound`] for an out-of-range index.
    pub fn vertex(&self, index: usize) -> Result<Point2, MeshError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(MeshError::VertexNotFound(index))
    }

    /// Moves a vertex to new coordinates. The triangulation is stale until
    /// the next [`Mesh::rebuild`].
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::VertexNotFound`] for an out-of-range index.
    pub fn set_vertex(&mut self, index: usize, p: Point2) -> Result<(), MeshError> {
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(MeshError::VertexNotFound(index))?;
        *slot = p;
        Ok(())
    }

    /// Read-only snapshot of the vertex coordinates.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Read-only snapshot of the triangle index triples. All indices are
    /// real vertices; super-triangle corners are stripped during rebuild.
    #[must_use]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Read-only snapshot of the undirected edge pairs, canonicalized
    /// (smaller index first) and deduplicated.
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Drops all vertices, triangles, and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.triangles.clear();
        self.edges.clear();
    }

    /// Re-derives triangles and edges from the full vertex set.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn rebuild(&mut self) {
        let input: Vec<Vertex> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex::new(i as i64, p.x, p.y))
            .collect();
        self.triangles = triangulation::triangulate(&input)
            .iter()
            // Ids are mesh indices by construction and non-negative after
            // the super-triangle filter.
            .map(|t| [t.a.id as usize, t.b.id as usize, t.c.id as usize])
            .collect();
        self.edges = derive_edges(&self.triangles);
    }

    /// Returns the index of the first triangle containing `p`, scanning in
    /// index order, or `None` if no triangle contains it.
    ///
    /// First-match is the tie-break: a point sitting exactly on a shared
    /// edge belongs to the lowest-index adjacent triangle. Deliberate, so
    /// repeated queries are reproducible.
    #[must_use]
    pub fn locate(&self, p: Point2) -> Option<usize> {
        self.triangles.iter().position(|&tri| {
            let (a, b, c) = self.triangle_corners(tri);
            point_in_triangle(p, a, b, c)
        })
    }

    fn triangle_corners(&self, tri: [usize; 3]) -> (Point2, Point2, Point2) {
        (
            self.vertices[tri[0]],
            self.vertices[tri[1]],
            self.vertices[tri[2]],
        )
    }
}

/// Extracts the undirected edge set of a triangle list: each triangle
/// contributes its three boundary pairs, canonicalized smaller-index-first,
/// deduplicated, in sorted order.
fn derive_edges(triangles: &[[usize; 3]]) -> Vec<[usize; 2]> {
    let mut set = BTreeSet::new();
    for t in triangles {
        for [u, v] in [[t[0], t[1]], [t[1], t[2]], [t[2], t[0]]] {
            set.insert(if u <= v { [u, v] } else { [v, u] });
        }
    }
    set.into_iter().collect()
}
