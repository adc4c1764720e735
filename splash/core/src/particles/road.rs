//! Road marker layer
//!
//! Dashes on the road scroll leftward to sell forward motion.

use std::time::Duration;

use crate::animation::FrameLoop;

/// Starting offsets of the dashes
pub const MARKER_OFFSETS: [f32; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

const LEFT_EXIT: f32 = -5.0;
const WRAP_SPAN: f32 = 105.0;

/// One road dash
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadMarker {
    /// Horizontal position (percent)
    pub x: f32,
}

/// Scrolling road dashes
#[derive(Clone, Debug)]
pub struct RoadLayer {
    markers: Vec<RoadMarker>,
    speed: f32,
    frame_loop: FrameLoop,
}

impl RoadLayer {
    /// Lay out the dashes at their fixed offsets
    #[must_use]
    pub fn new(speed: f32, interval: Duration) -> Self {
        Self {
            markers: MARKER_OFFSETS.iter().map(|&x| RoadMarker { x }).collect(),
            speed,
            frame_loop: FrameLoop::started(interval),
        }
    }

    pub(super) fn advance(&mut self, delta: Duration) {
        for _ in 0..self.frame_loop.advance(delta) {
            for marker in &mut self.markers {
                marker.x -= self.speed;
                if marker.x < LEFT_EXIT {
                    marker.x += WRAP_SPAN;
                }
            }
        }
    }

    pub(super) fn cancel(&mut self) {
        self.frame_loop.cancel();
    }

    pub(super) fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub(super) fn markers(&self) -> &[RoadMarker] {
        &self.markers
    }
}
