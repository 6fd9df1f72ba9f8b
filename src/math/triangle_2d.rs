use rand::Rng;

use super::Point2;

/// Returns true iff `p` lies inside the triangle `(a, b, c)` or on its
/// boundary.
///
/// Sign test on the three edge cross-products: the point is inside iff
/// the signs are all non-negative or all non-positive, so the winding of
/// the triangle does not matter and boundary ties break toward "inside".
#[must_use]
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    let s1 = (a.x - p.x) * (b.y - p.y) - (b.x - p.x) * (a.y - p.y);
    let s2 = (b.x - p.x) * (c.y - p.y) - (c.x - p.x) * (b.y - p.y);
    let s3 = (c.x - p.x) * (a.y - p.y) - (a.x - p.x) * (c.y - p.y);
    let has_neg = s1 < 0.0 || s2 < 0.0 || s3 < 0.0;
    let has_pos = s1 > 0.0 || s2 > 0.0 || s3 > 0.0;
    !(has_neg && has_pos)
}

/// Draws a uniformly distributed point inside the triangle `(a, b, c)`.
///
/// Two uniform barycentric weights are drawn and folded back into the lower
/// half of the unit square when their sum exceeds one.
pub fn sample_point(rng: &mut impl Rng, a: Point2, b: Point2, c: Point2) -> Point2 {
    let mut r1: f64 = rng.gen();
    let mut r2: f64 = rng.gen();
    if r1 + r2 > 1.0 {
        r1 = 1.0 - r1;
        r2 = 1.0 - r2;
    }
    let r3 = 1.0 - r1 - r2;
    Point2::new(
        a.x * r1 + b.x * r2 + c.x * r3,
        a.y * r1 + b.y * r2 + c.y * r3,
    )
}
