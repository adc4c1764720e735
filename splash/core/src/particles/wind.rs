//! Wind streak layer

use std::time::Duration;

use rand::Rng;

use super::WindParams;
use crate::animation::FrameLoop;

/// Glyphs a streak can be drawn with
pub const WIND_GLYPHS: [char; 3] = ['~', '-', '≈'];

const RIGHT_EXIT: f32 = 105.0;
const LEFT_ENTRY: f32 = -5.0;

/// One horizontal wind streak
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindStreak {
    /// Horizontal position (percent)
    pub x: f32,
    /// Vertical position (percent)
    pub y: f32,
    /// Speed (units per frame)
    pub speed: f32,
    /// Opacity in `[0.2, 0.6)`
    pub opacity: f32,
    /// Glyph used to draw the streak
    pub glyph: char,
}

/// Wind streaks blowing left to right across the lower half
#[derive(Clone, Debug)]
pub struct WindLayer {
    streaks: Vec<WindStreak>,
    frame_loop: FrameLoop,
}

impl WindLayer {
    /// Allocate `params.count` streaks
    pub fn new<R: Rng + ?Sized>(params: WindParams, interval: Duration, rng: &mut R) -> Self {
        let streaks = (0..params.count)
            .map(|_| WindStreak {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(40.0..80.0),
                speed: params.base_speed + rng.gen_range(0.0..params.speed_jitter),
                opacity: rng.gen_range(0.2..0.6),
                glyph: WIND_GLYPHS[rng.gen_range(0..WIND_GLYPHS.len())],
            })
            .collect();

        Self {
            streaks,
            frame_loop: FrameLoop::started(interval),
        }
    }

    pub(super) fn advance(&mut self, delta: Duration) {
        for _ in 0..self.frame_loop.advance(delta) {
            for streak in &mut self.streaks {
                streak.x += streak.speed;
                if streak.x > RIGHT_EXIT {
                    streak.x = LEFT_ENTRY;
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

    pub(super) fn streaks(&self) -> &[WindStreak] {
        &self.streaks
    }
}
