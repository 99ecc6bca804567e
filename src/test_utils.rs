// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::host::{GeometryProbe, LayoutSink};
use crate::ui::slider::layout::LayoutFrame;
use iced::Rectangle;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Geometry probe returning a fixed bounding box.
pub struct FixedProbe(pub Rectangle);

impl GeometryProbe for FixedProbe {
    fn bounds(&self) -> Rectangle {
        self.0
    }
}

/// Layout sink that records every write for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<LayoutFrame>,
    pub hint_visible: Option<bool>,
}

impl RecordingSink {
    pub fn last_frame(&self) -> &LayoutFrame {
        self.frames.last().expect("no frame applied")
    }
}

impl LayoutSink for RecordingSink {
    fn apply(&mut self, frame: &LayoutFrame) {
        self.frames.push(frame.clone());
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_visible = Some(visible);
    }
}
