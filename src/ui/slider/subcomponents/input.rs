// SPDX-License-Identifier: MPL-2.0
//! Input sub-component translating pointer, touch, and keyboard events into
//! position updates or animation requests.
//!
//! The interaction mode is an explicit tagged union. Modality exclusivity
//! lives here: moves from a non-tracked pointer are ignored, moves after
//! release are ignored, and a seek arriving mid-drag is dropped because the
//! drag takes precedence.

use crate::error::{Error, Result};
use crate::ui::state::drag::{DragGrip, PointerId};
use crate::ui::state::geometry::GeometrySnapshot;
use crate::ui::state::position::Fraction;
use iced::keyboard;

/// Current interaction mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Dragging(DragGrip),
    Animating,
}

/// Input sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    /// Keyboard step as a fraction of the slider width.
    step: f32,
}

/// Messages for the input sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer went down. The orchestrator measures geometry at the press
    /// and hands the snapshot in with the message.
    PointerPressed {
        pointer: PointerId,
        x: f32,
        geometry: GeometrySnapshot,
    },
    /// Pointer moved.
    PointerMoved { pointer: PointerId, x: f32 },
    /// Pointer went up (or the touch was cancelled).
    PointerReleased { pointer: PointerId },
    /// Key went down while the widget was focused.
    KeyPressed(keyboard::Key),
    /// Externally invoked seek, already clamped by the facade.
    SeekRequested(Fraction),
    /// The animation sequencer committed its final frame.
    AnimationSettled,
}

/// Effects produced by input transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A drag began: commit this position now and count it as the user's
    /// first interaction.
    DragStarted(Fraction),
    /// The active drag moved: commit this position now.
    DragMoved(Fraction),
    /// Start an animated transition toward this target, superseding any run
    /// in flight.
    AnimateTo(Fraction),
}

impl State {
    /// Creates an idle controller with the given keyboard step fraction.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            mode: Mode::Idle,
            step,
        }
    }

    /// Handle an input message against the current committed position.
    pub fn handle(&mut self, msg: Message, current: Fraction) -> Effect {
        match msg {
            Message::PointerPressed {
                pointer,
                x,
                geometry,
            } => {
                // A second finger during an active drag is ignored.
                if matches!(self.mode, Mode::Dragging(_)) {
                    return Effect::None;
                }
                let grip = DragGrip::new(pointer, geometry);
                let position = grip.position_for(x);
                self.mode = Mode::Dragging(grip);
                Effect::DragStarted(position)
            }
            Message::PointerMoved { pointer, x } => match &self.mode {
                Mode::Dragging(grip) if grip.matches(pointer) => {
                    Effect::DragMoved(grip.position_for(x))
                }
                _ => Effect::None,
            },
            Message::PointerReleased { pointer } => {
                if let Mode::Dragging(grip) = &self.mode {
                    if grip.matches(pointer) {
                        self.mode = Mode::Idle;
                    }
                }
                Effect::None
            }
            Message::KeyPressed(key) => match key_target(&key, current, self.step) {
                Some(target) => {
                    self.mode = Mode::Animating;
                    Effect::AnimateTo(target)
                }
                None => Effect::None,
            },
            Message::SeekRequested(target) => {
                if matches!(self.mode, Mode::Dragging(_)) {
                    // Drag takes precedence; the seek request is dropped.
                    return Effect::None;
                }
                self.mode = Mode::Animating;
                Effect::AnimateTo(target)
            }
            Message::AnimationSettled => {
                if self.mode == Mode::Animating {
                    self.mode = Mode::Idle;
                }
                Effect::None
            }
        }
    }

    /// Returns the controller to idle, dropping any tracked pointer.
    pub fn reset(&mut self) {
        self.mode = Mode::Idle;
    }

    /// Check if a drag is currently in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Mode::Dragging(_))
    }

    /// Geometry captured at the start of the active drag, if any.
    #[must_use]
    pub fn active_geometry(&self) -> Option<GeometrySnapshot> {
        match &self.mode {
            Mode::Dragging(grip) => Some(grip.geometry()),
            _ => None,
        }
    }
}

/// Maps a key to its animation target. Unrecognized keys are a no-op.
fn key_target(key: &keyboard::Key, current: Fraction, step: f32) -> Option<Fraction> {
    use keyboard::key::Named;

    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(current.step_by(-step)),
        keyboard::Key::Named(Named::ArrowRight) => Some(current.step_by(step)),
        keyboard::Key::Named(Named::Home) => Some(Fraction::CENTER),
        keyboard::Key::Named(Named::PageUp) => Some(Fraction::START),
        keyboard::Key::Named(Named::PageDown) => Some(Fraction::END),
        _ => None,
    }
}

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
}

/// One raw pointer observation from the host's event wiring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub x: f32,
}

/// Payload of a normalized interaction event.
#[derive(Debug, Clone)]
pub enum EventPayload {
    Pointer(PointerSample),
    Key(keyboard::Key),
}

/// A normalized user interaction delivered by a host event adapter.
///
/// Adapters extract optional payloads from platform events; a descriptor
/// with neither payload indicates a malformed call site and fails fast.
#[derive(Debug, Clone)]
pub struct EventDescriptor {
    payload: EventPayload,
}

impl EventDescriptor {
    /// Builds a descriptor from raw optional payloads. The pointer payload
    /// wins when both are present.
    pub fn new(pointer: Option<PointerSample>, key: Option<keyboard::Key>) -> Result<Self> {
        match (pointer, key) {
            (Some(sample), _) => Ok(Self {
                payload: EventPayload::Pointer(sample),
            }),
            (None, Some(key)) => Ok(Self {
                payload: EventPayload::Key(key),
            }),
            (None, None) => Err(Error::EmptyInteraction),
        }
    }

    #[must_use]
    pub fn pointer(sample: PointerSample) -> Self {
        Self {
            payload: EventPayload::Pointer(sample),
        }
    }

    #[must_use]
    pub fn key(key: keyboard::Key) -> Self {
        Self {
            payload: EventPayload::Key(key),
        }
    }

    #[must_use]
    pub fn into_payload(self) -> EventPayload {
        self.payload
    }
}
