// SPDX-License-Identifier: MPL-2.0
//! Hint sub-component tracking the "drag me" teaching affordance.
//!
//! The hint starts visible, hides on the first user interaction, and may
//! reappear when the widget scrolls back into the viewport after having left
//! it. A reappearance requires an observed exit since the last hide, so
//! spurious repeated enter notifications cannot re-show it.

/// Hint visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Visible,
    Hidden,
}

/// Hint sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    visibility: Visibility,
    /// Immutable after construction, from the `disable-hint-reappear` config.
    reappear_allowed: bool,
    /// Whether the widget has left the viewport since the hint was hidden.
    left_viewport_since_hidden: bool,
}

/// Messages for the hint sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user interacted with the slider for the first time in this cycle.
    InteractionStarted,
    /// Host visibility collaborator reports the widget entered the viewport.
    ViewportEntered,
    /// Host visibility collaborator reports the widget left the viewport.
    ViewportLeft,
}

/// Effects produced by hint transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The sink should show the hint.
    ShowHint,
    /// The sink should hide the hint.
    HideHint,
}

impl State {
    /// Creates a hint in its initial visible state.
    #[must_use]
    pub fn new(reappear_allowed: bool) -> Self {
        Self {
            visibility: Visibility::Visible,
            reappear_allowed,
            left_viewport_since_hidden: false,
        }
    }

    /// Handle a hint message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::InteractionStarted => {
                if self.visibility == Visibility::Visible {
                    self.visibility = Visibility::Hidden;
                    self.left_viewport_since_hidden = false;
                    Effect::HideHint
                } else {
                    Effect::None
                }
            }
            Message::ViewportLeft => {
                if self.visibility == Visibility::Hidden {
                    self.left_viewport_since_hidden = true;
                }
                Effect::None
            }
            Message::ViewportEntered => {
                if self.visibility == Visibility::Hidden
                    && self.left_viewport_since_hidden
                    && self.reappear_allowed
                {
                    self.visibility = Visibility::Visible;
                    self.left_viewport_since_hidden = false;
                    Effect::ShowHint
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Whether the hint is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
