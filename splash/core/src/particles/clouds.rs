//! Cloud layer

use std::time::Duration;

use rand::Rng;

use super::CloudParams;
use crate::animation::FrameLoop;

const RIGHT_EXIT: f32 = 110.0;
const LEFT_ENTRY: f32 = -10.0;

/// One drifting cloud
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    /// Horizontal position (percent)
    pub x: f32,
    /// Vertical position (percent)
    pub y: f32,
    /// Drift speed (units per frame)
    pub speed: f32,
}

/// Clouds drifting left to right
#[derive(Clone, Debug)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
    frame_loop: FrameLoop,
}

impl CloudLayer {
    /// Scatter `params.count` clouds across the upper sky
    pub fn new<R: Rng + ?Sized>(params: CloudParams, interval: Duration, rng: &mut R) -> Self {
        let clouds = (0..params.count)
            .map(|_| Cloud {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(5.0..30.0),
                speed: params.base_speed + rng.gen_range(0.0..params.speed_jitter),
            })
            .collect();

        Self {
            clouds,
            frame_loop: FrameLoop::started(interval),
        }
    }

    pub(super) fn advance(&mut self, delta: Duration) {
        for _ in 0..self.frame_loop.advance(delta) {
            for cloud in &mut self.clouds {
                cloud.x += cloud.speed;
                if cloud.x > RIGHT_EXIT {
                    cloud.x = LEFT_ENTRY;
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

    pub(super) fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}
