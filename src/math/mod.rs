pub mod circumcircle;
pub mod polygon_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Minimum denominator magnitude substituted wherever a division would
/// otherwise produce an infinity or NaN (degenerate triples, horizontal
/// polygon edges).
pub const MIN_DENOMINATOR: f64 = 1e-12;
