// SPDX-License-Identifier: MPL-2.0
//! Drag-tracking state
//!
//! A grip is established on pointer-down and holds everything a drag needs:
//! the identity of the tracked pointer and the geometry snapshot captured at
//! the press. Moves are resolved against the stored snapshot, not a fresh
//! measurement, so tracking stays stable even if intermediate layout jitters.

use crate::ui::state::geometry::GeometrySnapshot;
use crate::ui::state::position::Fraction;
use iced::touch::Finger;

/// Identity of the single tracked pointer. Touches carry the finger id so
/// that stray fingers of a multi-touch gesture can be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(Finger),
}

/// State of one active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGrip {
    pointer: PointerId,
    geometry: GeometrySnapshot,
}

impl DragGrip {
    /// Establishes a grip for the given pointer over the given geometry.
    #[must_use]
    pub fn new(pointer: PointerId, geometry: GeometrySnapshot) -> Self {
        Self { pointer, geometry }
    }

    /// Whether an event belongs to the tracked pointer.
    #[must_use]
    pub fn matches(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// Resolves a viewport x coordinate against the stored snapshot.
    #[must_use]
    pub fn position_for(&self, x: f32) -> Fraction {
        Fraction::from_client_x(x, &self.geometry)
    }

    /// The geometry captured when the drag started.
    #[must_use]
    pub fn geometry(&self) -> GeometrySnapshot {
        self.geometry
    }
}
