use super::{Point2, MIN_DENOMINATOR};

/// Classifies `p` against a simple polygon using the even-odd ray-casting
/// rule: a horizontal ray toward +x is cast from `p` and the crossings with
/// polygon edges are counted.
///
/// Returns false for polygons with fewer than 3 vertices. Horizontal edges
/// are guarded by substituting a minimum-magnitude denominator so the
/// crossing test never divides by zero.
#[must_use]
pub fn point_in_polygon(p: Point2, polygon: &[Point2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        let mut denom = yj - yi;
        if denom.abs() < MIN_DENOMINATOR {
            denom = MIN_DENOMINATOR;
        }
        if (yi > p.y) != (yj > p.y) && p.x < (xj - xi) * (p.y - yi) / denom + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the polygon's vertices, or the origin for an empty
/// vertex list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(polygon: &[Point2]) -> Point2 {
    if polygon.is_empty() {
        return Point2::origin();
    }
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for p in polygon {
        sum_x += p.x;
        sum_y += p.y;
    }
    let n = polygon.len() as f64;
    Point2::new(sum_x / n, sum_y / n)
}
