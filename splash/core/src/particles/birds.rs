//! Bird layer

use std::time::Duration;

use rand::Rng;

use crate::animation::FrameLoop;

/// Birds in every scene
pub const BIRD_COUNT: usize = 3;
/// Frames each wing pose is held
pub const FLAP_FRAMES: u32 = 8;
/// Vertical bob amplitude (percent)
const BOB_AMPLITUDE: f32 = 1.5;
/// Bob cycles per unit of horizontal travel
const BOB_FREQUENCY: f32 = 0.3;

const RIGHT_EXIT: f32 = 105.0;
const LEFT_ENTRY: f32 = -5.0;

/// One bird gliding across the sky
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bird {
    /// Horizontal position (percent)
    pub x: f32,
    /// Current vertical position including the bob
    pub y: f32,
    /// Altitude the bob oscillates around
    pub base_y: f32,
    /// Speed (units per frame)
    pub speed: f32,
    /// Wing pose, 0 or 1
    pub wing_frame: u8,
    /// Frames since the last wing change
    flap_counter: u32,
}

impl Bird {
    fn bob(&mut self) {
        self.y = self.base_y + BOB_AMPLITUDE * (BOB_FREQUENCY * self.x).sin();
    }
}

/// Birds flying left to right
#[derive(Clone, Debug)]
pub struct BirdLayer {
    birds: Vec<Bird>,
    frame_loop: FrameLoop,
}

impl BirdLayer {
    /// Place `count` birds with staggered wing beats
    pub fn new<R: Rng + ?Sized>(count: usize, interval: Duration, rng: &mut R) -> Self {
        let birds = (0..count)
            .map(|_| {
                let mut bird = Bird {
                    x: rng.gen_range(0.0..100.0),
                    y: 0.0,
                    base_y: rng.gen_range(8.0..22.0),
                    speed: rng.gen_range(0.10..0.25),
                    wing_frame: rng.gen_range(0..2),
                    flap_counter: rng.gen_range(0..FLAP_FRAMES),
                };
                bird.bob();
                bird
            })
            .collect();

        Self {
            birds,
            frame_loop: FrameLoop::started(interval),
        }
    }

    pub(super) fn advance(&mut self, delta: Duration) {
        for _ in 0..self.frame_loop.advance(delta) {
            for bird in &mut self.birds {
                bird.x += bird.speed;
                if bird.x > RIGHT_EXIT {
                    bird.x = LEFT_ENTRY;
                }
                bird.bob();

                bird.flap_counter += 1;
                if bird.flap_counter >= FLAP_FRAMES {
                    bird.flap_counter = 0;
                    bird.wing_frame ^= 1;
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

    pub(super) fn birds(&self) -> &[Bird] {
        &self.birds
    }
}
