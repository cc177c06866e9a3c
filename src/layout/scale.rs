//! Value-to-pixel scales.

use crate::math::{lerp, Scalar};

/// Affine map from a value domain onto a pixel range.
///
/// Ranges may be inverted (`range.0 > range.1`) for upward-growing y axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (Scalar, Scalar),
    range: (Scalar, Scalar),
    clamp: bool,
}

impl LinearScale {
    /// Creates an unclamped scale.
    #[must_use]
    pub const fn new(domain: (Scalar, Scalar), range: (Scalar, Scalar)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Clamps mapped values to the range.
    #[must_use]
    pub const fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Maps `value` into pixel space.
    #[must_use]
    pub fn map(&self, value: Scalar) -> Scalar {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let mut t = if span == 0.0 { 0.0 } else { (value - d0) / span };
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        lerp(self.range.0, self.range.1, t)
    }
}

/// Maps values spanning many decades to a bar length.
///
/// Length is `(log10(value) − floor_decade) · pixels_per_decade`, clamped to
/// `[0, max_length]`. Non-positive values map to zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    floor_decade: Scalar,
    pixels_per_decade: Scalar,
    max_length: Scalar,
}

impl LogScale {
    /// Creates a decade scale.
    #[must_use]
    pub const fn new(floor_decade: Scalar, pixels_per_decade: Scalar, max_length: Scalar) -> Self {
        Self {
            floor_decade,
            pixels_per_decade,
            max_length,
        }
    }

    /// Bar length for `value`.
    #[must_use]
    pub fn length(&self, value: Scalar) -> Scalar {
        if value <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value.log10() - self.floor_decade) * self.pixels_per_decade).clamp(0.0, self.max_length)
    }
}
