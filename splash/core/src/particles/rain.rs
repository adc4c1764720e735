//! Rain layer

use std::time::Duration;

use rand::Rng;

use super::RainParams;
use crate::animation::FrameLoop;

/// Glyphs a drop can be drawn with
pub const RAIN_GLYPHS: [char; 3] = ['/', '|', '\\'];

/// Lowest point a drop reaches before it respawns above the viewport
const BOTTOM: f32 = 100.0;

/// One falling drop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainDrop {
    /// Horizontal position (percent)
    pub x: f32,
    /// Vertical position (percent, grows downward)
    pub y: f32,
    /// Fall speed (units per frame)
    pub speed: f32,
    /// Glyph used to draw the drop
    pub glyph: char,
}

/// Fixed population of drops and the loop that moves them
#[derive(Clone, Debug)]
pub struct RainLayer {
    drops: Vec<RainDrop>,
    frame_loop: FrameLoop,
}

impl RainLayer {
    /// Allocate the drops; a dry scene gets an empty, stopped layer
    pub fn new<R: Rng + ?Sized>(params: Option<RainParams>, interval: Duration, rng: &mut R) -> Self {
        let Some(params) = params else {
            return Self {
                drops: Vec::new(),
                frame_loop: FrameLoop::new(interval),
            };
        };

        let drops = (0..params.count)
            .map(|_| RainDrop {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(-100.0..0.0),
                speed: params.min_speed + rng.gen_range(0.0..params.speed_jitter),
                glyph: RAIN_GLYPHS[rng.gen_range(0..RAIN_GLYPHS.len())],
            })
            .collect();

        Self {
            drops,
            frame_loop: FrameLoop::started(interval),
        }
    }

    pub(super) fn advance<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R) {
        for _ in 0..self.frame_loop.advance(delta) {
            self.step(rng);
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for drop in &mut self.drops {
            drop.y += drop.speed;
            if drop.y > BOTTOM {
                drop.y = -rng.gen_range(0.0..20.0);
                drop.x = rng.gen_range(0.0..100.0);
            }
        }
    }

    pub(super) fn cancel(&mut self) {
        self.frame_loop.cancel();
    }

    pub(super) fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub(super) fn drops(&self) -> &[RainDrop] {
        &self.drops
    }
}
