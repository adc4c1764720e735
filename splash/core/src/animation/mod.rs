//! Animation Scheduling
//!
//! Two primitives replace the browser's self-rescheduling frame callbacks
//! and loose timeout handles:
//!
//! - [`FrameLoop`]: a cancellable fixed-step frame scheduler. Each particle
//!   layer owns exactly one, so a layer can never run two loops at once.
//! - [`TimerSet`]: named one-shot timers on the gate clock with a single
//!   `cancel_all` teardown.
//!
//! Both are driven by elapsed time handed in from the surface, so tests can
//! step them deterministically.

mod timers;

pub use timers::{TimerKind, TimerSet};

use std::time::Duration;

/// Cancellable fixed-step frame scheduler
///
/// Time handed to [`FrameLoop::advance`] accumulates; every whole
/// `interval` becomes one frame. A cancelled loop drops its accumulator and
/// yields nothing until started again.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    /// Duration of one frame
    interval: Duration,
    /// Time carried over that has not yet made a whole frame
    accumulated: Duration,
    /// Whether the loop is scheduled
    running: bool,
    /// Frames produced since the last start
    frames: u64,
}

impl FrameLoop {
    /// Create a stopped loop with the given frame interval
    ///
    /// A zero interval is bumped to one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            running: false,
            frames: 0,
        }
    }

    /// Create a loop that is already running
    #[must_use]
    pub fn started(interval: Duration) -> Self {
        let mut frame_loop = Self::new(interval);
        frame_loop.start();
        frame_loop
    }

    /// Schedule the loop (no-op if already running)
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulated = Duration::ZERO;
            self.frames = 0;
        }
    }

    /// Stop the loop and discard any partial frame
    pub fn cancel(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Whether the loop is scheduled
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames produced since the last start
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame interval
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time and return how many frames are due
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulated += delta;
        let mut due = 0u32;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due = due.saturating_add(1);
        }
        self.frames += u64::from(due);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_new_loop_is_stopped() {
        let mut frame_loop = FrameLoop::new(FRAME);
        assert!(!frame_loop.is_running());
        assert_eq!(frame_loop.advance(Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_advance_counts_whole_frames_and_carries_remainder() {
        let mut frame_loop = FrameLoop::started(FRAME);
        assert_eq!(frame_loop.advance(Duration::from_millis(40)), 2);
        // 8ms carried over + 8ms = one more frame
        assert_eq!(frame_loop.advance(Duration::from_millis(8)), 1);
        assert_eq!(frame_loop.advance(Duration::from_millis(15)), 0);
        assert_eq!(frame_loop.frames(), 3);
    }

    #[test]
    fn test_cancel_stops_frames_and_drops_remainder() {
        let mut frame_loop = FrameLoop::started(FRAME);
        frame_loop.advance(Duration::from_millis(10));
        frame_loop.cancel();
        assert_eq!(frame_loop.advance(Duration::from_millis(100)), 0);

        frame_loop.start();
        assert_eq!(frame_loop.advance(Duration::from_millis(10)), 0);
        assert_eq!(frame_loop.frames(), 0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut frame_loop = FrameLoop::started(Duration::ZERO);
        assert_eq!(frame_loop.interval(), Duration::from_millis(1));
        assert_eq!(frame_loop.advance(Duration::from_millis(5)), 5);
    }
}
