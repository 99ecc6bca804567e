// SPDX-License-Identifier: MPL-2.0
//! Pure layout computation for one divider position.
//!
//! A frame describes every visual write the sink must perform: where the bar
//! sits, which horizontal span of each pane stays visible, label visibility,
//! and the accessible percent value. The pane boxes themselves never move;
//! only the clip spans change with position.

use crate::ui::state::geometry::GeometrySnapshot;
use crate::ui::state::position::Fraction;

/// Computed visual state for one position over one geometry.
///
/// Idempotent by construction: the same `(position, geometry)` pair always
/// produces an identical frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrame {
    /// X coordinate of the divider bar in viewport coordinates.
    pub bar_x: f32,
    /// Visible width of the "before" pane, measured from its left edge.
    pub before_clip_width: f32,
    /// Left edge of the "after" pane's visible span.
    pub after_clip_x: f32,
    /// Width of the "after" pane's visible span.
    pub after_clip_width: f32,
    /// The "before" label is hidden once its pane's visible span collapses.
    pub label_before_visible: bool,
    pub label_after_visible: bool,
    /// Accessible value representation, 0 to 100.
    pub percent_value: u8,
}

impl LayoutFrame {
    /// Computes the frame for a position over a geometry snapshot.
    #[must_use]
    pub fn compute(position: Fraction, geometry: &GeometrySnapshot) -> Self {
        let width = if geometry.is_degenerate() {
            0.0
        } else {
            geometry.width
        };
        let split = position.value() * width;

        // percent_value: position is in [0, 1], so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self {
            bar_x: geometry.left + split,
            before_clip_width: split,
            after_clip_x: geometry.left + split,
            after_clip_width: width - split,
            label_before_visible: position.value() > 0.0,
            label_after_visible: position.value() < 1.0,
            percent_value: (position.value() * 100.0).round() as u8,
        }
    }
}
