//! Vehicle layer
//!
//! A single vehicle drives across the road, disappears past the far edge,
//! waits off-screen and comes back the other way. The wait itself is a gate
//! timer; this layer only reports the exit and handles the return.

use std::time::Duration;

use crate::animation::FrameLoop;

/// Leftmost position before the vehicle is considered off-screen
pub const LEFT_BOUND: f32 = -15.0;
/// Rightmost position before the vehicle is considered off-screen
pub const RIGHT_BOUND: f32 = 115.0;
/// Number of wheel animation frames
pub const WHEEL_FRAMES: u8 = 4;

/// Travel direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleDirection {
    /// Left to right
    Forward,
    /// Right to left
    Reverse,
}

impl VehicleDirection {
    /// The other direction
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Sign applied to the speed
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    /// Position the vehicle enters from when heading this way
    #[must_use]
    pub fn entry_bound(self) -> f32 {
        match self {
            Self::Forward => LEFT_BOUND,
            Self::Reverse => RIGHT_BOUND,
        }
    }

    fn has_exited(self, position: f32) -> bool {
        match self {
            Self::Forward => position >= RIGHT_BOUND,
            Self::Reverse => position <= LEFT_BOUND,
        }
    }
}

/// The vehicle itself
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vehicle {
    /// Horizontal position (percent)
    pub position: f32,
    /// Current direction
    pub direction: VehicleDirection,
    /// Wheel animation frame in `0..WHEEL_FRAMES`
    pub wheel_frame: u8,
    /// False while waiting off-screen
    pub visible: bool,
    /// Speed (units per frame)
    pub speed: f32,
}

/// Layer driving the single vehicle
#[derive(Clone, Debug)]
pub struct VehicleLayer {
    vehicle: Vehicle,
    frame_loop: FrameLoop,
}

impl VehicleLayer {
    /// Place the vehicle at the left edge heading right
    #[must_use]
    pub fn new(speed: f32, interval: Duration) -> Self {
        Self {
            vehicle: Vehicle {
                position: LEFT_BOUND,
                direction: VehicleDirection::Forward,
                wheel_frame: 0,
                visible: true,
                speed,
            },
            frame_loop: FrameLoop::started(interval),
        }
    }

    /// Returns true on the frame the vehicle leaves the viewport
    pub(super) fn advance(&mut self, delta: Duration) -> bool {
        let frames = self.frame_loop.advance(delta);
        for _ in 0..frames {
            let vehicle = &mut self.vehicle;
            vehicle.position += vehicle.direction.sign() * vehicle.speed;
            vehicle.wheel_frame = (vehicle.wheel_frame + 1) % WHEEL_FRAMES;

            if vehicle.direction.has_exited(vehicle.position) {
                vehicle.visible = false;
                self.frame_loop.cancel();
                return true;
            }
        }
        false
    }

    /// Turn around and re-enter from the edge it left by
    pub(super) fn reappear(&mut self) {
        if self.vehicle.visible {
            return;
        }
        let direction = self.vehicle.direction.reversed();
        self.vehicle.direction = direction;
        self.vehicle.position = direction.entry_bound();
        self.vehicle.visible = true;
        self.frame_loop.start();
    }

    pub(super) fn cancel(&mut self) {
        self.frame_loop.cancel();
    }

    pub(super) fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub(super) fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }
}
