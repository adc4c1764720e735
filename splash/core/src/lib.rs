//! Splash Core - Headless Intro Gate for the Portfolio
//!
//! This crate owns everything the intro gate does, independent of any
//! rendering surface. A terminal surface (see `splash-tui`) drives it, but it
//! can just as well run headless in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Surface (TUI)                          │
//! │    InputEvent (up)          tick(delta)          render reads  │
//! └───────────┬──────────────────────┬─────────────────────▲───────┘
//!             │                      │                     │
//! ┌───────────┼──────────────────────┼─────────────────────┼───────┐
//! │           ▼                GATE  ▼                     │       │
//! │  ┌────────────────┐  ┌───────────────┐  ┌──────────────┴─────┐ │
//! │  │ GestureTracker │  │   TimerSet    │  │ Scene (particles)  │ │
//! │  └───────┬────────┘  └───────────────┘  │ LightningScheduler │ │
//! │          ▼                              └──────────▲─────────┘ │
//! │  ┌────────────────┐                                │           │
//! │  │ SplashMachine  │──▶ on_complete()   SceneParams ◀── classify│
//! │  └────────────────┘                                ▲           │
//! │                                     WeatherSource ─┘           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Gate`]: owns the clock, timers, scene, tracker and phase
//! - [`WeatherSnapshot`] / [`WeatherCategory`]: resolved weather input
//! - [`SceneParams`]: the one parameter table every layer reads from
//! - [`GestureTracker`]: touch, mouse and wheel funnelled into one progress
//! - [`SplashMachine`]: `Loading → Presenting → Dismissed`
//!
//! # Quick Start
//!
//! ```ignore
//! use splash_core::{resolve_snapshot, Gate, OpenMeteoSource, SplashConfig};
//!
//! let config = SplashConfig::default();
//! let mut gate = Gate::new(config.clone(), Box::new(|| println!("enter")));
//!
//! let source = OpenMeteoSource::from_config(&config.weather);
//! gate.resolve_weather(resolve_snapshot(&source, config.weather.fetch_timeout()).await);
//!
//! loop {
//!     gate.tick(std::time::Duration::from_millis(16));
//! }
//! ```
//!
//! # No TUI Dependencies
//!
//! Nothing in here depends on ratatui or crossterm.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod animation;
pub mod config;
pub mod events;
pub mod gate;
pub mod gesture;
pub mod lightning;
pub mod particles;
pub mod phase;
pub mod weather;

pub use animation::{FrameLoop, TimerKind, TimerSet};
pub use config::{
    default_config_path, load_config, load_config_from_path, AnimationConfig, ConfigError,
    ConfigOverrides, ConfigSource, GestureConfig, SplashConfig, WeatherConfig,
};
pub use events::InputEvent;
pub use gate::Gate;
pub use gesture::{GestureFeedback, GestureOutcome, GestureSession, GestureTracker};
pub use lightning::LightningScheduler;
pub use particles::{
    Bird, Cloud, RainDrop, RoadMarker, Scene, SceneParams, Vehicle, VehicleDirection, WindStreak,
};
pub use phase::{CompletionCallback, PhaseError, SplashMachine, SplashPhase};
pub use weather::{
    classify, resolve_snapshot, OpenMeteoSource, StaticSource, WeatherCategory, WeatherError,
    WeatherSnapshot, WeatherSource, WindBand,
};
