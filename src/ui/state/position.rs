// SPDX-License-Identifier: MPL-2.0
//! Normalized divider position.
//!
//! This newtype enforces validity at the type level: the value is always a
//! fraction in [0, 1] of the slider's width, 0 at the left edge and 1 at the
//! right edge.

use crate::ui::state::geometry::GeometrySnapshot;

/// Normalized divider position in [0, 1].
///
/// # Example
///
/// ```
/// use iced_compare::ui::state::Fraction;
///
/// let position = Fraction::new(0.4);
/// assert_eq!(position.value(), 0.4);
///
/// // Out-of-range values are clamped
/// let beyond = Fraction::new(1.7);
/// assert_eq!(beyond.value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fraction(f32);

impl Fraction {
    /// Left edge of the slider.
    pub const START: Fraction = Fraction(0.0);
    /// Midpoint, the initial position on build.
    pub const CENTER: Fraction = Fraction(0.5);
    /// Right edge of the slider.
    pub const END: Fraction = Fraction(1.0);

    /// Creates a fraction, clamping to [0, 1]. NaN maps to 0.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Converts a viewport x coordinate into a fraction of the given
    /// geometry. Degenerate (zero-width) geometry yields the left edge
    /// instead of a division fault.
    #[must_use]
    pub fn from_client_x(x: f32, geometry: &GeometrySnapshot) -> Self {
        if geometry.is_degenerate() {
            return Self(0.0);
        }
        Self::new((x - geometry.left) / geometry.width)
    }

    /// Clamped addition, used by keyboard stepping.
    #[must_use]
    pub fn step_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Linear interpolation between two positions. `t` is clamped to [0, 1]
    /// and the endpoints are returned exactly at 0 and 1.
    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        if t <= 0.0 {
            from
        } else if t >= 1.0 {
            to
        } else {
            Self::new(from.0 + (to.0 - from.0) * t)
        }
    }

    /// Returns the value as f32, guaranteed to be in [0, 1].
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}
