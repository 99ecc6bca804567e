// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation between two divider positions.
//!
//! At most one run is active per slider; starting a new run supersedes the
//! old one. Supersession is normal control flow, not an error: the cancelled
//! run refuses to produce any further frames, which is the guard every
//! scheduled frame passes through before touching shared state.

use crate::ui::state::position::Fraction;
use std::time::{Duration, Instant};

/// One animated transition from a starting position to a target.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    from: Fraction,
    to: Fraction,
    started_at: Instant,
    duration: Duration,
    cancelled: bool,
}

impl AnimationRun {
    /// Starts a run at `now`.
    #[must_use]
    pub fn new(from: Fraction, to: Fraction, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration,
            cancelled: false,
        }
    }

    /// Marks the run as superseded. Cooperative: the flag is only consulted
    /// at the next frame boundary, nothing is interrupted mid-mutation.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Interpolation progress in [0, 1]. A zero-duration run completes
    /// immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Position for this frame, or `None` once the run is superseded.
    /// The final frame of a completed run is exactly the target.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Option<Fraction> {
        if self.cancelled {
            return None;
        }
        let t = self.progress(now);
        if t >= 1.0 {
            return Some(self.to);
        }
        Some(Fraction::lerp(self.from, self.to, ease_in_out_cubic(t)))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> Fraction {
        self.to
    }
}

/// Cubic ease-in-out, 0 at 0 and exactly 1 at 1.
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}
