// SPDX-License-Identifier: MPL-2.0
//! The slider facade composing position, layout, animation, input, and hint.
//!
//! All state lives here and is mutated only through the operations below, on
//! the host's single event-processing timeline. Every operation measures
//! geometry through the injected probe before writing through the sink, and
//! committed position changes reach the sink synchronously with the
//! operation that produced them.

pub mod layout;
pub mod subcomponents;

use crate::config::{self, Config};
use crate::host::{GeometryProbe, LayoutSink, VisibilitySignal};
use crate::ui::state::animation::AnimationRun;
use crate::ui::state::dedup::RecentTokens;
use crate::ui::state::drag::PointerId;
use crate::ui::state::geometry::GeometrySnapshot;
use crate::ui::state::position::Fraction;
use iced::event::Event;
use iced::{keyboard, mouse, touch};
use layout::LayoutFrame;
use std::time::Instant;
use subcomponents::input::{EventDescriptor, EventPayload, PointerPhase};
use subcomponents::{hint, input};

/// Before/after comparison slider.
///
/// Generic over the host's geometry probe and layout sink so the core stays
/// deterministic under test.
pub struct Slider<P, S> {
    probe: P,
    sink: S,
    config: Config,
    position: Fraction,
    input: input::State,
    hint: hint::State,
    /// The in-flight run plus the geometry captured when it started.
    animation: Option<(AnimationRun, GeometrySnapshot)>,
    recent_seeks: RecentTokens,
    /// Last known cursor x, for mouse presses which carry no position.
    cursor_x: Option<f32>,
    focused: bool,
}

impl<P, S> Slider<P, S>
where
    P: GeometryProbe,
    S: LayoutSink,
{
    /// Creates a slider with the given configuration.
    pub fn new(probe: P, sink: S, config: Config) -> Self {
        Self {
            position: Fraction::CENTER,
            input: input::State::new(config.step_fraction()),
            hint: hint::State::new(config.reappear_allowed()),
            animation: None,
            recent_seeks: RecentTokens::new(config.dedup_window()),
            cursor_x: None,
            focused: false,
            probe,
            sink,
            config,
        }
    }

    /// Creates a slider from the persisted configuration, falling back to
    /// defaults when it cannot be read.
    pub fn with_loaded_config(probe: P, sink: S) -> Self {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load slider config: {err}");
            Config::default()
        });
        Self::new(probe, sink, config)
    }

    /// Assembles the initial visual state: centered divider, hint visible.
    pub fn build(&mut self) {
        self.position = Fraction::CENTER;
        let geometry = self.measure();
        self.apply(&geometry);
        self.sink.set_hint_visible(self.hint.is_visible());
    }

    /// Re-measures and re-applies the current position. Idempotent, safe to
    /// call on every host layout pass (e.g. resize).
    pub fn layout(&mut self) {
        let geometry = self.measure();
        self.apply(&geometry);
    }

    /// Drops interaction state when the host unloads the widget.
    pub fn unlayout(&mut self) {
        self.supersede_animation();
        self.input.reset();
        self.cursor_x = None;
    }

    /// Instantaneous, non-animated position set.
    pub fn update_positions(&mut self, fraction: f32) {
        self.position = Fraction::new(fraction);
        let geometry = self.measure();
        self.apply(&geometry);
    }

    /// Starts an animated transition to `fraction`, superseding any run in
    /// flight. Frames are delivered through [`Slider::tick`].
    pub fn animate_update_positions(&mut self, fraction: f32, now: Instant) {
        self.start_animation(Fraction::new(fraction), now);
    }

    /// Advances the active animation, if any. Applies at most one frame; the
    /// frame is dropped if the run was superseded since the last tick.
    pub fn tick(&mut self, now: Instant) {
        let Some((run, geometry)) = self.animation.as_ref() else {
            return;
        };
        let geometry = *geometry;
        let finished = run.is_finished(now);
        let Some(position) = run.sample(now) else {
            self.animation = None;
            return;
        };
        self.position = position;
        self.apply(&geometry);
        if finished {
            self.animation = None;
            let effect = self
                .input
                .handle(input::Message::AnimationSettled, self.position);
            debug_assert_eq!(effect, input::Effect::None);
        }
    }

    /// Externally invoked seek. Clamped, animated, and dropped while a drag
    /// is active.
    pub fn seek_to(&mut self, percent: f32, now: Instant) {
        let target = Fraction::new(percent);
        let effect = self
            .input
            .handle(input::Message::SeekRequested(target), self.position);
        self.run_effect(effect, now, false);
    }

    /// Seek carrying the host action's identifying token. A token repeated
    /// within the dedup window is a duplicate delivery and is suppressed.
    pub fn seek_to_tagged(&mut self, percent: f32, token: u64, now: Instant) {
        if !self.recent_seeks.insert(token, now) {
            return;
        }
        self.seek_to(percent, now);
    }

    /// Ingests a normalized interaction descriptor from a host adapter.
    pub fn dispatch(&mut self, event: EventDescriptor, now: Instant) {
        match event.into_payload() {
            EventPayload::Pointer(sample) => match sample.phase {
                PointerPhase::Pressed => self.on_pointer_pressed(sample.pointer, sample.x, now),
                PointerPhase::Moved => self.on_pointer_moved(sample.pointer, sample.x),
                PointerPhase::Released => self.on_pointer_released(sample.pointer),
            },
            EventPayload::Key(key) => self.on_key_pressed(key, now),
        }
    }

    /// Maps raw Iced runtime events onto the slider.
    pub fn on_event(&mut self, event: &Event, now: Instant) {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor_x = Some(position.x);
                self.on_pointer_moved(PointerId::Mouse, position.x);
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(x) = self.cursor_x {
                    self.on_pointer_pressed(PointerId::Mouse, x, now);
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.on_pointer_released(PointerId::Mouse);
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                self.on_pointer_pressed(PointerId::Touch(*id), position.x, now);
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.on_pointer_moved(PointerId::Touch(*id), position.x);
            }
            Event::Touch(touch::Event::FingerLifted { id, .. })
            | Event::Touch(touch::Event::FingerLost { id, .. }) => {
                self.on_pointer_released(PointerId::Touch(*id));
            }
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.on_key_pressed(key.clone(), now);
            }
            _ => {}
        }
    }

    /// Pointer went down over the widget. Geometry is measured here, at the
    /// start of the interaction, and stays fixed for the whole drag.
    pub fn on_pointer_pressed(&mut self, pointer: PointerId, x: f32, now: Instant) {
        let geometry = self.measure();
        let effect = self.input.handle(
            input::Message::PointerPressed {
                pointer,
                x,
                geometry,
            },
            self.position,
        );
        self.run_effect(effect, now, true);
    }

    pub fn on_pointer_moved(&mut self, pointer: PointerId, x: f32) {
        let effect = self
            .input
            .handle(input::Message::PointerMoved { pointer, x }, self.position);
        // Moves never start animations, so the clock is irrelevant here.
        self.run_effect(effect, Instant::now(), true);
    }

    pub fn on_pointer_released(&mut self, pointer: PointerId) {
        let effect = self
            .input
            .handle(input::Message::PointerReleased { pointer }, self.position);
        debug_assert_eq!(effect, input::Effect::None);
    }

    /// Key went down. Ignored unless the widget has focus.
    pub fn on_key_pressed(&mut self, key: keyboard::Key, now: Instant) {
        if !self.focused {
            return;
        }
        let effect = self
            .input
            .handle(input::Message::KeyPressed(key), self.position);
        self.run_effect(effect, now, true);
    }

    /// Viewport-visibility notification from the host.
    pub fn viewport_signal(&mut self, signal: VisibilitySignal) {
        let msg = match signal {
            VisibilitySignal::EnteredViewport => hint::Message::ViewportEntered,
            VisibilitySignal::LeftViewport => hint::Message::ViewportLeft,
        };
        let effect = self.hint.handle(msg);
        self.run_hint_effect(effect);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Current committed position.
    #[must_use]
    pub fn position(&self) -> Fraction {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.hint.is_visible()
    }

    /// The injected layout sink, for hosts that need it back.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn measure(&self) -> GeometrySnapshot {
        GeometrySnapshot::from_bounds(self.probe.bounds())
    }

    fn apply(&mut self, geometry: &GeometrySnapshot) {
        self.sink
            .apply(&LayoutFrame::compute(self.position, geometry));
    }

    fn run_effect(&mut self, effect: input::Effect, now: Instant, user: bool) {
        match effect {
            input::Effect::None => {}
            input::Effect::DragStarted(position) => {
                self.supersede_animation();
                self.note_interaction();
                self.position = position;
                let geometry = match self.input.active_geometry() {
                    Some(snapshot) => snapshot,
                    None => self.measure(),
                };
                self.apply(&geometry);
            }
            input::Effect::DragMoved(position) => {
                self.position = position;
                let geometry = match self.input.active_geometry() {
                    Some(snapshot) => snapshot,
                    None => self.measure(),
                };
                self.apply(&geometry);
            }
            input::Effect::AnimateTo(target) => {
                if user {
                    self.note_interaction();
                }
                self.start_animation(target, now);
            }
        }
    }

    fn start_animation(&mut self, target: Fraction, now: Instant) {
        self.supersede_animation();
        let geometry = self.measure();
        let run = AnimationRun::new(self.position, target, now, self.config.transition());
        self.animation = Some((run, geometry));
    }

    fn supersede_animation(&mut self) {
        if let Some((run, _)) = self.animation.as_mut() {
            run.cancel();
        }
        self.animation = None;
    }

    fn note_interaction(&mut self) {
        let effect = self.hint.handle(hint::Message::InteractionStarted);
        self.run_hint_effect(effect);
    }

    fn run_hint_effect(&mut self, effect: hint::Effect) {
        match effect {
            hint::Effect::ShowHint => self.sink.set_hint_visible(true),
            hint::Effect::HideHint => self.sink.set_hint_visible(false),
            hint::Effect::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, FixedProbe, RecordingSink, F32_EPSILON};
    use iced::{Point, Rectangle, Size};
    use std::time::Duration;

    fn slider(config: Config) -> Slider<FixedProbe, RecordingSink> {
        let probe = FixedProbe(Rectangle::new(
            Point::new(100.0, 0.0),
            Size::new(1000.0, 500.0),
        ));
        let mut slider = Slider::new(probe, RecordingSink::default(), config);
        slider.build();
        slider
    }

    #[test]
    fn build_centers_the_bar_and_shows_the_hint() {
        let slider = slider(Config::default());
        assert_eq!(slider.position(), Fraction::CENTER);
        assert_abs_diff_eq!(slider.sink().last_frame().bar_x, 600.0);
        assert_eq!(slider.sink().hint_visible, Some(true));
    }

    #[test]
    fn layout_is_idempotent() {
        let mut slider = slider(Config::default());
        slider.layout();
        slider.layout();
        let frames = &slider.sink().frames;
        assert_eq!(frames[frames.len() - 1], frames[frames.len() - 2]);
    }

    #[test]
    fn update_positions_hits_the_edges() {
        let mut slider = slider(Config::default());
        slider.update_positions(0.0);
        assert_abs_diff_eq!(slider.sink().last_frame().bar_x, 100.0);
        slider.update_positions(1.0);
        assert_abs_diff_eq!(slider.sink().last_frame().bar_x, 1100.0);
    }

    #[test]
    fn update_positions_clamps_out_of_range_input() {
        let mut slider = slider(Config::default());
        slider.update_positions(3.5);
        assert_eq!(slider.position(), Fraction::END);
        slider.update_positions(-1.0);
        assert_eq!(slider.position(), Fraction::START);
    }

    #[test]
    fn drag_commits_positions_and_hides_hint() {
        let mut slider = slider(Config::default());
        let now = Instant::now();

        slider.on_pointer_pressed(PointerId::Mouse, 600.0, now);
        assert!(slider.is_dragging());
        assert_eq!(slider.sink().hint_visible, Some(false));

        slider.on_pointer_moved(PointerId::Mouse, 500.0);
        assert_abs_diff_eq!(slider.position().value(), 0.4);

        slider.on_pointer_released(PointerId::Mouse);
        assert!(!slider.is_dragging());

        // Stray moves after release must not change position.
        slider.on_pointer_moved(PointerId::Mouse, 900.0);
        assert_abs_diff_eq!(slider.position().value(), 0.4);
    }

    #[test]
    fn drag_beyond_right_edge_clamps() {
        let mut slider = slider(Config::default());
        slider.on_pointer_pressed(PointerId::Mouse, 600.0, Instant::now());
        slider.on_pointer_moved(PointerId::Mouse, 1200.0);
        assert_eq!(slider.position(), Fraction::END);
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut slider = slider(Config::default());
        slider.on_key_pressed(
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
            Instant::now(),
        );
        assert!(!slider.is_animating());
        assert_eq!(slider.position(), Fraction::CENTER);
    }

    #[test]
    fn focused_arrow_key_animates_one_step() {
        let mut slider = slider(Config::default());
        slider.set_focused(true);
        let now = Instant::now();

        slider.on_key_pressed(keyboard::Key::Named(keyboard::key::Named::ArrowLeft), now);
        assert!(slider.is_animating());

        slider.tick(now + Duration::from_millis(500));
        assert!(!slider.is_animating());
        assert_abs_diff_eq!(slider.position().value(), 0.4, epsilon = F32_EPSILON);
    }

    #[test]
    fn new_animation_supersedes_the_old_run() {
        let mut slider = slider(Config::default());
        let now = Instant::now();

        slider.animate_update_positions(0.0, now);
        slider.tick(now + Duration::from_millis(100));
        let mid = slider.position();
        assert!(mid < Fraction::CENTER);

        slider.animate_update_positions(1.0, now + Duration::from_millis(100));
        slider.tick(now + Duration::from_millis(600));
        assert_eq!(slider.position(), Fraction::END);
    }

    #[test]
    fn seek_is_dropped_while_dragging() {
        let mut slider = slider(Config::default());
        let now = Instant::now();
        slider.on_pointer_pressed(PointerId::Mouse, 600.0, now);
        slider.seek_to(1.0, now);
        assert!(!slider.is_animating());
        assert!(slider.is_dragging());
    }

    #[test]
    fn tagged_seek_suppresses_duplicate_tokens() {
        let mut slider = slider(Config::default());
        let now = Instant::now();

        slider.seek_to_tagged(0.8, 42, now);
        assert!(slider.is_animating());
        slider.tick(now + Duration::from_millis(500));
        assert!(!slider.is_animating());

        // Same token within the window: duplicate delivery, dropped.
        slider.seek_to_tagged(0.8, 42, now + Duration::from_millis(10));
        assert!(!slider.is_animating());

        // Same token after the window: a fresh invocation.
        slider.seek_to_tagged(0.2, 42, now + Duration::from_millis(600));
        assert!(slider.is_animating());
    }

    #[test]
    fn seek_does_not_hide_the_hint() {
        let mut slider = slider(Config::default());
        slider.seek_to(0.8, Instant::now());
        assert!(slider.hint_visible());
    }

    #[test]
    fn hint_reappears_only_after_a_viewport_round_trip() {
        let mut slider = slider(Config::default());
        slider.on_pointer_pressed(PointerId::Mouse, 600.0, Instant::now());
        assert!(!slider.hint_visible());

        slider.viewport_signal(VisibilitySignal::EnteredViewport);
        assert!(!slider.hint_visible());

        slider.viewport_signal(VisibilitySignal::LeftViewport);
        slider.viewport_signal(VisibilitySignal::EnteredViewport);
        assert!(slider.hint_visible());
        assert_eq!(slider.sink().hint_visible, Some(true));
    }

    #[test]
    fn suppressed_hint_never_returns() {
        let config = Config {
            disable_hint_reappear: true,
            ..Config::default()
        };
        let mut slider = slider(config);
        slider.on_pointer_pressed(PointerId::Mouse, 600.0, Instant::now());
        slider.viewport_signal(VisibilitySignal::LeftViewport);
        slider.viewport_signal(VisibilitySignal::EnteredViewport);
        assert!(!slider.hint_visible());
    }

    #[test]
    fn unlayout_drops_interaction_state() {
        let mut slider = slider(Config::default());
        let now = Instant::now();
        slider.on_pointer_pressed(PointerId::Mouse, 600.0, now);
        slider.unlayout();
        assert!(!slider.is_dragging());

        slider.animate_update_positions(1.0, now);
        slider.unlayout();
        assert!(!slider.is_animating());
    }

    #[test]
    fn dispatch_routes_descriptor_payloads() {
        let mut slider = slider(Config::default());
        let now = Instant::now();
        slider.dispatch(
            EventDescriptor::pointer(input::PointerSample {
                pointer: PointerId::Mouse,
                phase: PointerPhase::Pressed,
                x: 500.0,
            }),
            now,
        );
        assert!(slider.is_dragging());
        assert_abs_diff_eq!(slider.position().value(), 0.4);
    }

    #[test]
    fn iced_mouse_events_drive_a_drag() {
        let mut slider = slider(Config::default());
        let now = Instant::now();

        slider.on_event(
            &Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(600.0, 100.0),
            }),
            now,
        );
        slider.on_event(
            &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            now,
        );
        assert!(slider.is_dragging());

        slider.on_event(
            &Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(500.0, 100.0),
            }),
            now,
        );
        assert_abs_diff_eq!(slider.position().value(), 0.4);

        slider.on_event(
            &Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            now,
        );
        assert!(!slider.is_dragging());
    }
}
