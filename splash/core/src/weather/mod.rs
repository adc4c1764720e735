//! Weather Acquisition and Classification
//!
//! The gate needs exactly one weather snapshot per session. This module
//! covers fetching it, falling back when the fetch fails, and reducing the
//! raw WMO weather code to the small category set the scene is built from.
//!
//! # Available Sources
//!
//! - **Open-Meteo**: the public forecast endpoint (default)
//! - **Static**: a fixed snapshot, for offline runs and tests

mod classify;
mod open_meteo;
mod snapshot;
mod source;

pub use classify::{classify, WeatherCategory, WindBand};
pub use open_meteo::OpenMeteoSource;
pub use snapshot::WeatherSnapshot;
pub use source::{resolve_snapshot, StaticSource, WeatherError, WeatherSource};
