pub mod bowyer_watson;

pub use bowyer_watson::triangulate;

use crate::math::circumcircle::{circumcircle, Circumcircle};
use crate::math::Point2;

/// A vertex participating in triangulation.
///
/// Non-negative ids are indices into the caller's vertex store; the ids
/// `-1`, `-2`, `-3` are reserved for the synthetic super-triangle corners
/// and never appear in triangulation output.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Coordinate identity, ignoring ids. Exact comparison is intentional:
    /// cavity edges produced from the same triangle corner carry bitwise
    /// identical coordinates.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn coincides(&self, other: &Vertex) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// An immutable triangle value: three vertices plus the circumcircle
/// computed at construction. A geometry change makes a new `Triangle`,
/// never mutates one in place.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
    pub circumcircle: Circumcircle,
}

impl Triangle {
    #[must_use]
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        let circumcircle = circumcircle(a.position(), b.position(), c.position());
        Self {
            a,
            b,
            c,
            circumcircle,
        }
    }

    /// True iff any corner is a synthetic super-triangle vertex.
    #[must_use]
    pub fn references_synthetic(&self) -> bool {
        self.a.id < 0 || self.b.id < 0 || self.c.id < 0
    }

    #[must_use]
    pub fn ids(&self) -> [i64; 3] {
        [self.a.id, self.b.id, self.c.id]
    }
}

/// An undirected cavity-boundary edge; equal to its reverse.
///
/// Transient only: edges exist while a cavity is being re-triangulated and
/// are never persisted independently of the triangle list.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub v0: Vertex,
    pub v1: Vertex,
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.v0.coincides(&other.v0) && self.v1.coincides(&other.v1))
            || (self.v0.coincides(&other.v1) && self.v1.coincides(&other.v0))
    }
}
