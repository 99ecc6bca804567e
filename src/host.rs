// SPDX-License-Identifier: MPL-2.0
//! Collaborator interfaces provided by the embedding host.
//!
//! The slider core never reaches for ambient services. The host constructs
//! these collaborators once and injects them into the facade: a geometry
//! probe for synchronous bounds queries and a layout sink that receives the
//! computed visual writes. Every facade operation measures through the probe
//! strictly before writing through the sink.

use crate::ui::slider::layout::LayoutFrame;
use iced::Rectangle;

/// Synchronous "get bounding box in viewport coordinates" query.
pub trait GeometryProbe {
    fn bounds(&self) -> Rectangle;
}

/// Receiver for the visual writes the slider commits.
///
/// Implementations position the divider bar, clip the two panes, and toggle
/// the hint affordance however the host renders them. All committed position
/// changes arrive here synchronously with the operation that produced them.
pub trait LayoutSink {
    /// Applies a computed layout frame. Must be idempotent: applying the
    /// same frame twice produces identical output.
    fn apply(&mut self, frame: &LayoutFrame);

    /// Shows or hides the "drag me" hint affordance.
    fn set_hint_visible(&mut self, visible: bool);
}

/// Viewport-visibility notification delivered by the host at arbitrary times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilitySignal {
    EnteredViewport,
    LeftViewport,
}
