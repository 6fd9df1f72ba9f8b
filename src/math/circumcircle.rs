use super::{Point2, MIN_DENOMINATOR};

/// The circle through a triangle's three corners.
///
/// A collinear or duplicate triple has no finite circumcircle; it is
/// represented by `radius == f64::INFINITY` with the center at the origin.
/// Such a circle reports `contains == false` for every point, so the
/// triangle carrying it is inert: it is never invalidated by a later
/// insertion and never selected as a containing cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle {
    pub center: Point2,
    pub radius: f64,
}

impl Circumcircle {
    /// Returns true iff `p` lies inside or on the circle.
    ///
    /// Always false for the degenerate (infinite-radius) sentinel.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        if self.radius.is_infinite() {
            return false;
        }
        let dx = self.center.x - p.x;
        let dy = self.center.y - p.y;
        (dx * dx + dy * dy).sqrt() <= self.radius
    }
}

/// Computes the circumcircle of the triangle `(a, b, c)` by intersecting
/// the perpendicular bisectors of sides `ab` and `ac` algebraically.
///
/// The denominator is proportional to twice the triangle's signed area;
/// when its magnitude falls below [`MIN_DENOMINATOR`] the triple is
/// collinear (or contains duplicates) and the infinite-radius sentinel is
/// returned instead.
#[must_use]
pub fn circumcircle(a: Point2, b: Point2, c: Point2) -> Circumcircle {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    let ac_x = c.x - a.x;
    let ac_y = c.y - a.y;

    let e = ab_x * (a.x + b.x) + ab_y * (a.y + b.y);
    let f = ac_x * (a.x + c.x) + ac_y * (a.y + c.y);
    let g = 2.0 * (ab_x * (c.y - b.y) - ab_y * (c.x - b.x));

    if g.abs() < MIN_DENOMINATOR {
        return Circumcircle {
            center: Point2::origin(),
            radius: f64::INFINITY,
        };
    }

    let cx = (ac_y * e - ab_y * f) / g;
    let cy = (ab_x * f - ac_x * e) / g;
    let radius = ((cx - a.x).powi(2) + (cy - a.y).powi(2)).sqrt();

    Circumcircle {
        center: Point2::new(cx, cy),
        radius,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn right_triangle_circumcircle() {
        // Hypotenuse is a diameter: center at its midpoint.
        let circ = circumcircle(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        assert_relative_eq!(circ.center.x, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(circ.center.y, 0.5, epsilon = TOLERANCE);
        assert_relative_eq!(circ.radius, 0.5_f64.sqrt(), epsilon = TOLERANCE);
    }

    #[test]
    fn vertices_lie_on_the_circle() {
        let (a, b, c) = (p(-0.3, 0.2), p(1.1, 0.4), p(0.5, 1.7));
        let circ = circumcircle(a, b, c);
        for v in [a, b, c] {
            let d = ((circ.center.x - v.x).powi(2) + (circ.center.y - v.y).powi(2)).sqrt();
            assert_relative_eq!(d, circ.radius, epsilon = 1e-9);
        }
    }

    #[test]
    fn collinear_triple_is_sentinel() {
        let circ = circumcircle(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        assert!(circ.radius.is_infinite());
    }

    #[test]
    fn duplicate_points_are_sentinel() {
        let circ = circumcircle(p(0.5, 0.5), p(0.5, 0.5), p(1.0, 0.0));
        assert!(circ.radius.is_infinite());
    }

    #[test]
    fn sentinel_contains_nothing() {
        let circ = circumcircle(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0));
        assert!(!circ.contains(p(1.0, 1.0)));
        assert!(!circ.contains(p(0.0, 0.0)));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let circ = circumcircle(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        // A defining vertex sits exactly on the circle.
        assert!(circ.contains(p(1.0, 0.0)));
        assert!(circ.contains(p(0.5, 0.5)));
        assert!(!circ.contains(p(2.0, 2.0)));
    }
}
