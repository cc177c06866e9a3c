//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Point2, Vector2};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Pixel-space point (origin top-left, y grows downward).
pub type P2 = Point2<Scalar>;
/// Pixel-space offset.
pub type V2 = Vector2<Scalar>;

/// Shorthand constructor for a pixel-space point.
#[inline]
#[must_use]
pub fn p2(x: Scalar, y: Scalar) -> P2 {
    P2::new(x, y)
}

/// Linear interpolation between `a` and `b` at fraction `t`.
#[inline]
#[must_use]
pub fn lerp(a: Scalar, b: Scalar, t: Scalar) -> Scalar {
    a + (b - a) * t
}

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
#[must_use]
pub fn relative_difference(a: Scalar, b: Scalar) -> Scalar {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}
