//! Incremental Bowyer–Watson triangulation over a synthetic super-triangle.

use super::{Edge, Triangle, Vertex};

/// Margin applied to the input bounding box when sizing the super-triangle,
/// as a multiple of the box span per axis. Large enough that every input
/// vertex lies strictly inside the synthetic triangle by construction; no
/// runtime containment check is needed.
const SUPER_TRIANGLE_MARGIN: f64 = 10.0;

/// Computes the Delaunay triangulation of `vertices`.
///
/// The triangulation is rebuilt from scratch on every call; no state is
/// carried between calls. Every output triangle draws its ids from the
/// input (the synthetic super-triangle corners are stripped at the end).
///
/// Input order only affects which triangulation is chosen when circumcircle
/// ties occur, never its Delaunay validity. Duplicate coordinates do not
/// crash; the triangles they would span degenerate into inert
/// infinite-circumcircle sentinels.
#[must_use]
pub fn triangulate(vertices: &[Vertex]) -> Vec<Triangle> {
    if vertices.is_empty() {
        return Vec::new();
    }
    let mut triangles = vec![super_triangle(vertices)];
    for &vertex in vertices {
        triangles = insert_vertex(vertex, triangles);
    }
    triangles.retain(|t| !t.references_synthetic());
    triangles
}

/// Builds the synthetic bounding triangle enclosing every input vertex.
///
/// The bounding box is extended by [`SUPER_TRIANGLE_MARGIN`] times its span
/// in each direction; the corners carry the reserved ids `-1`, `-2`, `-3`.
#[must_use]
pub fn super_triangle(vertices: &[Vertex]) -> Triangle {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for v in vertices {
        min_x = min_x.min(v.x);
        min_y = min_y.min(v.y);
        max_x = max_x.max(v.x);
        max_y = max_y.max(v.y);
    }
    let dx = (max_x - min_x) * SUPER_TRIANGLE_MARGIN;
    let dy = (max_y - min_y) * SUPER_TRIANGLE_MARGIN;
    Triangle::new(
        Vertex::new(-1, min_x - dx, min_y - dy * 3.0),
        Vertex::new(-2, min_x - dx, max_y + dy),
        Vertex::new(-3, max_x + dx * 3.0, max_y + dy),
    )
}

/// One Bowyer–Watson insertion step: removes every triangle whose
/// circumcircle contains `vertex`, then re-triangulates the cavity by
/// connecting its boundary edges to the new vertex.
fn insert_vertex(vertex: Vertex, triangles: Vec<Triangle>) -> Vec<Triangle> {
    let p = vertex.position();
    let mut cavity = Vec::new();
    let mut kept = Vec::with_capacity(triangles.len());
    for t in triangles {
        if t.circumcircle.contains(p) {
            cavity.push(Edge { v0: t.a, v1: t.b });
            cavity.push(Edge { v0: t.b, v1: t.c });
            cavity.push(Edge { v0: t.c, v1: t.a });
        } else {
            kept.push(t);
        }
    }
    for edge in boundary_edges(&cavity) {
        kept.push(Triangle::new(edge.v0, edge.v1, vertex));
    }
    kept
}

/// Keeps only edges occurring exactly once across the cavity triangles.
///
/// An edge shared by two removed triangles is interior to the cavity union
/// and must not be reconnected. Pairwise comparison is quadratic in the
/// cavity edge count; acceptable at the tens-to-low-hundreds vertex scale
/// this kernel targets.
fn boundary_edges(edges: &[Edge]) -> Vec<Edge> {
    let mut unique = Vec::new();
    for (i, edge) in edges.iter().enumerate() {
        let duplicated = edges
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && edge == other);
        if !duplicated {
            unique.push(*edge);
        }
    }
    unique
}
