// SPDX-License-Identifier: MPL-2.0
//! Point-in-time capture of the slider's layout box.
//!
//! A snapshot is taken fresh at the start of each interaction (drag start,
//! animation start, layout) and never cached across frames, since the page
//! may scroll or resize mid-interaction.

use iced::Rectangle;

/// Horizontal extent of the slider in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub left: f32,
    pub right: f32,
    pub width: f32,
}

impl GeometrySnapshot {
    /// Creates a snapshot from a left edge and width.
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            right: left + width,
            width,
        }
    }

    /// Creates a snapshot from a measured bounding box.
    #[must_use]
    pub fn from_bounds(bounds: Rectangle) -> Self {
        Self::new(bounds.x, bounds.width)
    }

    /// True when the box cannot support position math (collapsed or not yet
    /// laid out). Callers fall back to the left edge in that case.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.width.is_finite() || self.width <= 0.0
    }
}
