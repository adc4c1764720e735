//! Particle Layers
//!
//! Every animated layer of the gate lives here. All of them are sized and
//! paced from one table, [`SceneParams`], derived once from the snapshot.
//!
//! # Coordinates
//!
//! Positions are percentages of the viewport: `x = 0` is the left edge,
//! `x = 100` the right edge, `y = 0` the top. Particles may sit outside
//! `[0, 100]` while they wait to wrap back in.
//!
//! # Lifecycle
//!
//! A [`Scene`] is built once per parameterization. Populations never grow or
//! shrink afterwards; frames mutate particles in place. When the weather
//! changes the gate cancels the whole scene and builds a new one.

mod birds;
mod clouds;
mod rain;
mod road;
mod vehicle;
mod wind;

pub use birds::{Bird, BirdLayer};
pub use clouds::{Cloud, CloudLayer};
pub use rain::{RainDrop, RainLayer};
pub use road::{RoadLayer, RoadMarker};
pub use vehicle::{Vehicle, VehicleDirection, VehicleLayer};
pub use wind::{WindLayer, WindStreak};

use std::time::Duration;

use rand::Rng;

use crate::weather::{WeatherCategory, WeatherSnapshot, WindBand};

/// Rain population and speed range
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainParams {
    /// Number of drops
    pub count: usize,
    /// Slowest fall speed (units per frame)
    pub min_speed: f32,
    /// Random speed added on top of `min_speed`
    pub speed_jitter: f32,
}

/// Cloud population and drift speed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudParams {
    /// Number of clouds
    pub count: usize,
    /// Base drift speed (units per frame)
    pub base_speed: f32,
    /// Random speed added on top of `base_speed`
    pub speed_jitter: f32,
}

/// Wind streak population and speed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindParams {
    /// Number of streaks
    pub count: usize,
    /// Base speed (units per frame)
    pub base_speed: f32,
    /// Random speed added on top of `base_speed`
    pub speed_jitter: f32,
}

/// The single parameter table for every layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    /// Category the table was derived from
    pub category: WeatherCategory,
    /// Wind band the table was derived from
    pub wind_band: WindBand,
    /// Raw wind speed the table was derived from
    pub wind_speed_kmh: i32,
    /// Rain, when it rains at all
    pub rain: Option<RainParams>,
    /// Clouds
    pub clouds: CloudParams,
    /// Wind streaks
    pub wind: WindParams,
    /// Vehicle speed (units per frame)
    pub vehicle_speed: f32,
    /// Number of birds
    pub bird_count: usize,
    /// Road marker scroll speed (units per frame)
    pub road_speed: f32,
    /// Whether the lightning scheduler runs
    pub lightning: bool,
}

impl SceneParams {
    /// Derive every layer's parameters from a snapshot
    #[must_use]
    pub fn derive(snapshot: &WeatherSnapshot) -> Self {
        let category = snapshot.category();
        let wind_band = snapshot.wind_band();

        let rain = category.has_rain().then(|| {
            if category.is_stormy() {
                RainParams {
                    count: 80,
                    min_speed: 3.0,
                    speed_jitter: 4.0,
                }
            } else {
                RainParams {
                    count: 50,
                    min_speed: 2.0,
                    speed_jitter: 3.0,
                }
            }
        });

        let cloud_count = match category {
            WeatherCategory::Clear => 2,
            WeatherCategory::Cloudy => 4,
            WeatherCategory::Rain | WeatherCategory::Thunderstorm => 5,
        };
        let (cloud_base, cloud_jitter) = match wind_band {
            WindBand::Calm => (0.05, 0.15),
            WindBand::Breezy => (0.10, 0.20),
            WindBand::Gusty => (0.20, 0.30),
        };

        let (wind_count, wind_base) = match category {
            WeatherCategory::Thunderstorm => (25, 0.8),
            WeatherCategory::Rain => (18, 0.5),
            _ if snapshot.wind_speed_kmh > 20 => (15, 0.4),
            _ => (10, 0.3),
        };

        let (vehicle_speed, road_speed) = match wind_band {
            WindBand::Calm => (0.3, 0.4),
            WindBand::Breezy => (0.5, 0.6),
            WindBand::Gusty => (0.8, 1.0),
        };

        Self {
            category,
            wind_band,
            wind_speed_kmh: snapshot.wind_speed_kmh,
            rain,
            clouds: CloudParams {
                count: cloud_count,
                base_speed: cloud_base,
                speed_jitter: cloud_jitter,
            },
            wind: WindParams {
                count: wind_count,
                base_speed: wind_base,
                speed_jitter: 0.5,
            },
            vehicle_speed,
            bird_count: birds::BIRD_COUNT,
            road_speed,
            lightning: category.is_stormy(),
        }
    }
}

/// Something a frame step reported back to the gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    /// The vehicle crossed its far bound and is now hidden
    VehicleLeftViewport,
}

/// All particle layers for one parameterization
#[derive(Clone, Debug)]
pub struct Scene {
    params: SceneParams,
    rain: RainLayer,
    clouds: CloudLayer,
    wind: WindLayer,
    vehicle: VehicleLayer,
    birds: BirdLayer,
    road: RoadLayer,
}

impl Scene {
    /// Allocate every layer and start its frame loop
    pub fn new<R: Rng + ?Sized>(params: SceneParams, frame_interval: Duration, rng: &mut R) -> Self {
        Self {
            params,
            rain: RainLayer::new(params.rain, frame_interval, rng),
            clouds: CloudLayer::new(params.clouds, frame_interval, rng),
            wind: WindLayer::new(params.wind, frame_interval, rng),
            vehicle: VehicleLayer::new(params.vehicle_speed, frame_interval),
            birds: BirdLayer::new(params.bird_count, frame_interval, rng),
            road: RoadLayer::new(params.road_speed, frame_interval),
        }
    }

    /// Parameters this scene was built from
    #[must_use]
    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    /// Advance every running layer by the frames `delta` covers
    pub fn advance<R: Rng + ?Sized>(&mut self, delta: Duration, rng: &mut R) -> Vec<SceneEvent> {
        let mut events = Vec::new();

        self.rain.advance(delta, rng);
        self.clouds.advance(delta);
        self.wind.advance(delta);
        self.birds.advance(delta);
        self.road.advance(delta);
        if self.vehicle.advance(delta) {
            events.push(SceneEvent::VehicleLeftViewport);
        }

        events
    }

    /// Bring the vehicle back after its pause
    pub fn return_vehicle(&mut self) {
        self.vehicle.reappear();
    }

    /// Cancel every layer's frame loop
    pub fn cancel_all(&mut self) {
        self.rain.cancel();
        self.clouds.cancel();
        self.wind.cancel();
        self.vehicle.cancel();
        self.birds.cancel();
        self.road.cancel();
    }

    /// Number of layers whose frame loop is still scheduled
    #[must_use]
    pub fn running_loops(&self) -> usize {
        [
            self.rain.is_running(),
            self.clouds.is_running(),
            self.wind.is_running(),
            self.vehicle.is_running(),
            self.birds.is_running(),
            self.road.is_running(),
        ]
        .into_iter()
        .filter(|running| *running)
        .count()
    }

    /// Rain drops (empty when it is not raining)
    #[must_use]
    pub fn rain(&self) -> &[RainDrop] {
        self.rain.drops()
    }

    /// Clouds
    #[must_use]
    pub fn clouds(&self) -> &[Cloud] {
        self.clouds.clouds()
    }

    /// Wind streaks
    #[must_use]
    pub fn wind(&self) -> &[WindStreak] {
        self.wind.streaks()
    }

    /// The vehicle
    #[must_use]
    pub fn vehicle(&self) -> &Vehicle {
        self.vehicle.vehicle()
    }

    /// Birds
    #[must_use]
    pub fn birds(&self) -> &[Bird] {
        self.birds.birds()
    }

    /// Road markers
    #[must_use]
    pub fn road(&self) -> &[RoadMarker] {
        self.road.markers()
    }
}
