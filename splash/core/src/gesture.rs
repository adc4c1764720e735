//! Gesture Progress Tracker
//!
//! Touch drags, mouse drags and wheel scrolling all feed one normalized
//! progress value in `[0, 1]`. Everything the surface shows about the
//! gesture (gate dimming, offset, indicator, progress bar) is derived from
//! that single number through [`GestureFeedback`].
//!
//! # Lifecycle
//!
//! ```text
//! input ──▶ progress ──▶ ≥ 1 ──▶ Completed (once, then deaf)
//!              │
//!           release
//!              ▼
//!           decay frames ──▶ 0
//! ```
//!
//! Releasing short of completion starts a stepped decay; any new input
//! interrupts it and takes over from the current value.

use std::time::Duration;

use crate::animation::FrameLoop;
use crate::config::GestureConfig;
use crate::events::InputEvent;

/// Progress above which the gate counts as ready to enter
pub const READY_THRESHOLD: f32 = 0.3;
/// Fraction of the current progress removed per decay frame
pub const DECAY_RATE: f32 = 0.15;
/// Smallest decrement per decay frame
pub const DECAY_FLOOR: f32 = 0.02;

/// Indicator text before the threshold
pub const PROMPT_TEXT: &str = "Scroll down to continue";
/// Indicator text past the threshold
pub const READY_TEXT: &str = "Release to enter";

/// Current gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureSession {
    /// Normalized progress in `[0, 1]`
    pub progress: f32,
    /// Progress has passed [`READY_THRESHOLD`]
    pub ready: bool,
}

impl GestureSession {
    fn with_progress(progress: f32) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        Self {
            progress,
            ready: progress > READY_THRESHOLD,
        }
    }
}

/// Visual feedback derived from a session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureFeedback {
    /// Opacity of the whole gate, `1 - 0.5p`
    pub gate_opacity: f32,
    /// Downward offset of the gate in pixels, `50p`
    pub offset_px: f32,
    /// Opacity of the swipe indicator, `1 - p`
    pub indicator_opacity: f32,
    /// Swipe indicator text
    pub indicator_text: &'static str,
    /// Filled fraction of the progress bar, `p`
    pub bar_fraction: f32,
}

impl From<GestureSession> for GestureFeedback {
    fn from(session: GestureSession) -> Self {
        let p = session.progress;
        Self {
            gate_opacity: 1.0 - 0.5 * p,
            offset_px: 50.0 * p,
            indicator_opacity: 1.0 - p,
            indicator_text: if session.ready { READY_TEXT } else { PROMPT_TEXT },
            bar_fraction: p,
        }
    }
}

/// What a single input did to the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Input accepted, progress may have changed
    Progressed,
    /// A drag ended short of completion; decay started if progress > 0
    Released,
    /// Progress reached 1; reported exactly once
    Completed,
    /// Input had no effect (no active drag, scroll up, or already completed)
    Ignored,
}

/// Funnels every input source into one progress value
#[derive(Clone, Debug)]
pub struct GestureTracker {
    config: GestureConfig,
    session: GestureSession,
    touch_start: Option<f32>,
    drag_start: Option<f32>,
    decay: FrameLoop,
    completed: bool,
}

impl GestureTracker {
    /// Create an idle tracker; decay runs at `frame_interval`
    ///
    /// Distances that are not finite and positive fall back to the defaults.
    #[must_use]
    pub fn new(mut config: GestureConfig, frame_interval: Duration) -> Self {
        let defaults = GestureConfig::default();
        for (name, value, fallback) in [
            ("touch_distance_px", &mut config.touch_distance_px, defaults.touch_distance_px),
            ("mouse_distance_px", &mut config.mouse_distance_px, defaults.mouse_distance_px),
            ("wheel_distance_px", &mut config.wheel_distance_px, defaults.wheel_distance_px),
        ] {
            if !(value.is_finite() && *value > 0.0) {
                tracing::warn!(name, value = *value, fallback, "Unusable gesture distance");
                *value = fallback;
            }
        }

        Self {
            config,
            session: GestureSession::default(),
            touch_start: None,
            drag_start: None,
            decay: FrameLoop::new(frame_interval),
            completed: false,
        }
    }

    /// Current session
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.session
    }

    /// Feedback for the current session
    #[must_use]
    pub fn feedback(&self) -> GestureFeedback {
        self.session.into()
    }

    /// Whether completion has already been reported
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether a decay is running
    #[must_use]
    pub fn is_decaying(&self) -> bool {
        self.decay.is_running()
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) -> GestureOutcome {
        match event {
            InputEvent::TouchStart { y } => self.touch_start(y),
            InputEvent::TouchMove { y } => self.touch_move(y),
            InputEvent::TouchEnd => self.touch_end(),
            InputEvent::MouseDown { y } => self.mouse_down(y),
            InputEvent::MouseMove { y } => self.mouse_move(y),
            InputEvent::MouseUp => self.mouse_up(),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y),
        }
    }

    /// Finger down: remember where, stop any decay
    pub fn touch_start(&mut self, y: f32) -> GestureOutcome {
        if self.completed || !y.is_finite() {
            return GestureOutcome::Ignored;
        }
        self.decay.cancel();
        self.touch_start = Some(y);
        GestureOutcome::Progressed
    }

    /// Finger moved: progress is the upward travel over the touch distance
    pub fn touch_move(&mut self, y: f32) -> GestureOutcome {
        if self.completed || !y.is_finite() {
            return GestureOutcome::Ignored;
        }
        let Some(start) = self.touch_start else {
            return GestureOutcome::Ignored;
        };
        self.decay.cancel();
        self.set_progress((start - y) / self.config.touch_distance_px)
    }

    /// Finger lifted
    pub fn touch_end(&mut self) -> GestureOutcome {
        if self.completed {
            return GestureOutcome::Ignored;
        }
        self.touch_start = None;
        self.release()
    }

    /// Button down: begin a drag
    pub fn mouse_down(&mut self, y: f32) -> GestureOutcome {
        if self.completed || !y.is_finite() {
            return GestureOutcome::Ignored;
        }
        self.decay.cancel();
        self.drag_start = Some(y);
        GestureOutcome::Progressed
    }

    /// Pointer moved; only counts during a drag
    pub fn mouse_move(&mut self, y: f32) -> GestureOutcome {
        if self.completed || !y.is_finite() {
            return GestureOutcome::Ignored;
        }
        let Some(start) = self.drag_start else {
            return GestureOutcome::Ignored;
        };
        self.decay.cancel();
        self.set_progress((start - y) / self.config.mouse_distance_px)
    }

    /// Button up: end the drag
    pub fn mouse_up(&mut self) -> GestureOutcome {
        if self.completed || self.drag_start.take().is_none() {
            return GestureOutcome::Ignored;
        }
        self.release()
    }

    /// Wheel scrolled; only finite downward scrolling adds progress
    pub fn wheel(&mut self, delta_y: f32) -> GestureOutcome {
        if self.completed || !(delta_y.is_finite() && delta_y > 0.0) {
            return GestureOutcome::Ignored;
        }
        self.decay.cancel();
        let progress = (self.session.progress + delta_y / self.config.wheel_distance_px).min(1.0);
        self.set_progress(progress)
    }

    /// End the current gesture without completing; decays any progress
    pub fn release(&mut self) -> GestureOutcome {
        if self.completed {
            return GestureOutcome::Ignored;
        }
        if self.session.progress > 0.0 {
            self.decay.start();
        } else {
            self.session = GestureSession::default();
        }
        GestureOutcome::Released
    }

    /// Run whatever decay frames `delta` covers
    pub fn advance(&mut self, delta: Duration) {
        for _ in 0..self.decay.advance(delta) {
            if !self.decay_step() {
                break;
            }
        }
    }

    /// Apply one decay frame; returns false once progress hits 0
    fn decay_step(&mut self) -> bool {
        let p = self.session.progress;
        let next = (p - (p * DECAY_RATE).max(DECAY_FLOOR)).max(0.0);
        self.session = GestureSession::with_progress(next);
        if next <= 0.0 {
            self.decay.cancel();
            return false;
        }
        true
    }

    /// Forget any drag in progress and stop decaying
    pub fn reset(&mut self) {
        self.decay.cancel();
        self.touch_start = None;
        self.drag_start = None;
        self.session = GestureSession::default();
    }

    fn set_progress(&mut self, progress: f32) -> GestureOutcome {
        self.session = GestureSession::with_progress(progress);
        if self.session.progress >= 1.0 {
            self.completed = true;
            self.reset();
            return GestureOutcome::Completed;
        }
        GestureOutcome::Progressed
    }
}
