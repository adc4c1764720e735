//! TOML Configuration File Support
//!
//! Centralized configuration for the splash gate, read from
//! `~/.config/portfolio-splash/splash.toml`.
//!
//! # Configuration Priority
//!
//! Values are resolved with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [weather]
//! latitude = -7.5755
//! longitude = 110.8243
//! timezone = "Asia/Jakarta"
//! location_label = "Surakarta, ID"
//!
//! [gesture]
//! touch_distance_px = 200.0
//! wheel_distance_px = 500.0
//! wheel_quiet_ms = 300
//!
//! [animation]
//! frame_interval_ms = 16
//! seed = 42
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// Resolved Configuration
// =============================================================================

/// Where and how to fetch the weather snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherConfig {
    /// Forecast endpoint URL
    pub endpoint: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone name sent with the request
    pub timezone: String,
    /// Human-readable location for the status bar
    pub location_label: String,
    /// Optional fetch timeout in seconds (unset = wait indefinitely)
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.open-meteo.com/v1/forecast".to_string(),
            latitude: -7.5755,
            longitude: 110.8243,
            timezone: "Asia/Jakarta".to_string(),
            location_label: "Surakarta, ID".to_string(),
            fetch_timeout_secs: None,
        }
    }
}

impl WeatherConfig {
    /// Fetch timeout, if one was configured
    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_secs.map(Duration::from_secs)
    }
}

/// Gesture distances and timings
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Upward touch travel (px) that completes the gesture
    pub touch_distance_px: f32,
    /// Upward mouse-drag travel (px) that completes the gesture
    pub mouse_distance_px: f32,
    /// Accumulated downward wheel delta (px) that completes the gesture
    pub wheel_distance_px: f32,
    /// Quiet period after the last wheel event before decay starts
    pub wheel_quiet_ms: u64,
    /// Wheel delta reported per scroll notch or key press
    pub wheel_notch_px: f32,
    /// Height of one terminal row in pixels, for mapping rows to travel
    pub cell_height_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_distance_px: 200.0,
            mouse_distance_px: 200.0,
            wheel_distance_px: 500.0,
            wheel_quiet_ms: 300,
            wheel_notch_px: 100.0,
            cell_height_px: 16.0,
        }
    }
}

impl GestureConfig {
    /// Quiet period as a duration
    #[must_use]
    pub fn wheel_quiet(&self) -> Duration {
        Duration::from_millis(self.wheel_quiet_ms)
    }
}

/// Frame pacing and randomness
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Duration of one animation frame in milliseconds
    pub frame_interval_ms: u64,
    /// Fixed RNG seed for reproducible scenes (unset = entropy)
    pub seed: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            seed: None,
        }
    }
}

impl AnimationConfig {
    /// Frame interval as a duration
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Centralized configuration for the splash gate
#[derive(Clone, Debug, PartialEq)]
pub struct SplashConfig {
    /// Weather fetch settings
    pub weather: WeatherConfig,
    /// Gesture tracker settings
    pub gesture: GestureConfig,
    /// Animation settings
    pub animation: AnimationConfig,
    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,
    /// Primary source of configuration values
    source: ConfigSource,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig::default(),
            gesture: GestureConfig::default(),
            animation: AnimationConfig::default(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl SplashConfig {
    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Check values that would make the gate misbehave
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.gesture;
        for (name, value) in [
            ("touch_distance_px", g.touch_distance_px),
            ("mouse_distance_px", g.mouse_distance_px),
            ("wheel_distance_px", g.wheel_distance_px),
            ("cell_height_px", g.cell_height_px),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "gesture.{name} must be positive, got {value}"
                )));
            }
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "animation.frame_interval_ms must be at least 1".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            return Err(ConfigError::ValidationError(format!(
                "weather.latitude out of range: {}",
                self.weather.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            return Err(ConfigError::ValidationError(format!(
                "weather.longitude out of range: {}",
                self.weather.longitude
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Weather section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherToml {
    /// Forecast endpoint URL
    pub endpoint: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Status bar location label
    pub location_label: Option<String>,
    /// Fetch timeout in seconds
    pub fetch_timeout_secs: Option<u64>,
}

/// Gesture section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureToml {
    /// Touch completion distance
    pub touch_distance_px: Option<f32>,
    /// Mouse completion distance
    pub mouse_distance_px: Option<f32>,
    /// Wheel completion distance
    pub wheel_distance_px: Option<f32>,
    /// Wheel quiet period in milliseconds
    pub wheel_quiet_ms: Option<u64>,
    /// Wheel delta per notch
    pub wheel_notch_px: Option<f32>,
    /// Terminal row height in pixels
    pub cell_height_px: Option<f32>,
}

/// Animation section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationToml {
    /// Frame interval in milliseconds
    pub frame_interval_ms: Option<u64>,
    /// RNG seed
    pub seed: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashToml {
    /// Weather configuration section
    pub weather: WeatherToml,
    /// Gesture configuration section
    pub gesture: GestureToml,
    /// Animation configuration section
    pub animation: AnimationToml,
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/portfolio-splash/splash.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("portfolio-splash").join("splash.toml"))
}

/// Load configuration from the default path, environment and defaults
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be read or parsed.
pub fn load_config() -> Result<SplashConfig, ConfigError> {
    load_config_from_path(default_config_path().as_deref())
}

/// Load configuration from a specific path
///
/// A missing file is not an error; defaults and environment are used.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_from_path(path: Option<&Path>) -> Result<SplashConfig, ConfigError> {
    let mut config = SplashConfig::default();

    if let Some(config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.to_path_buf(),
                    source: e,
                })?;

            let toml_config: SplashToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.to_path_buf());
            config.source = ConfigSource::File;

            tracing::info!(path = %config_path.display(), "Loaded configuration from file");
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut SplashConfig, toml: &SplashToml) {
    let w = &toml.weather;
    if let Some(endpoint) = &w.endpoint {
        config.weather.endpoint.clone_from(endpoint);
    }
    if let Some(lat) = w.latitude {
        config.weather.latitude = lat;
    }
    if let Some(lon) = w.longitude {
        config.weather.longitude = lon;
    }
    if let Some(tz) = &w.timezone {
        config.weather.timezone.clone_from(tz);
    }
    if let Some(label) = &w.location_label {
        config.weather.location_label.clone_from(label);
    }
    if w.fetch_timeout_secs.is_some() {
        config.weather.fetch_timeout_secs = w.fetch_timeout_secs;
    }

    let g = &toml.gesture;
    if let Some(d) = g.touch_distance_px {
        config.gesture.touch_distance_px = d;
    }
    if let Some(d) = g.mouse_distance_px {
        config.gesture.mouse_distance_px = d;
    }
    if let Some(d) = g.wheel_distance_px {
        config.gesture.wheel_distance_px = d;
    }
    if let Some(ms) = g.wheel_quiet_ms {
        config.gesture.wheel_quiet_ms = ms;
    }
    if let Some(px) = g.wheel_notch_px {
        config.gesture.wheel_notch_px = px;
    }
    if let Some(px) = g.cell_height_px {
        config.gesture.cell_height_px = px;
    }

    if let Some(ms) = toml.animation.frame_interval_ms {
        config.animation.frame_interval_ms = ms;
    }
    if toml.animation.seed.is_some() {
        config.animation.seed = toml.animation.seed;
    }
}

/// Apply environment variable overrides to the config
///
/// `lookup` is `std::env::var` in production and a map in tests.
fn apply_env_config<F>(config: &mut SplashConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("SPLASH_WEATHER_URL") {
        config.weather.endpoint = url;
        config.source = ConfigSource::Env;
    }
    if let Some(lat) = lookup("SPLASH_LATITUDE").and_then(|v| v.parse().ok()) {
        config.weather.latitude = lat;
        config.source = ConfigSource::Env;
    }
    if let Some(lon) = lookup("SPLASH_LONGITUDE").and_then(|v| v.parse().ok()) {
        config.weather.longitude = lon;
        config.source = ConfigSource::Env;
    }
    if let Some(tz) = lookup("SPLASH_TIMEZONE") {
        config.weather.timezone = tz;
        config.source = ConfigSource::Env;
    }
    if let Some(secs) = lookup("SPLASH_FETCH_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        config.weather.fetch_timeout_secs = Some(secs);
        config.source = ConfigSource::Env;
    }
    if let Some(seed) = lookup("SPLASH_SEED").and_then(|v| v.parse().ok()) {
        config.animation.seed = Some(seed);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = lookup("SPLASH_FRAME_MS").and_then(|v| v.parse().ok()) {
        config.animation.frame_interval_ms = ms;
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// RNG seed override
    pub seed: Option<u64>,
    /// Frame interval override (milliseconds)
    pub frame_interval_ms: Option<u64>,
    /// Fetch timeout override (seconds)
    pub fetch_timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the RNG seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the frame interval
    #[must_use]
    pub fn with_frame_interval_ms(mut self, ms: u64) -> Self {
        self.frame_interval_ms = Some(ms);
        self
    }

    /// Override the fetch timeout
    #[must_use]
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = Some(secs);
        self
    }

    /// Apply the overrides on top of a loaded config
    pub fn apply(&self, config: &mut SplashConfig) {
        if let Some(seed) = self.seed {
            config.animation.seed = Some(seed);
            config.source = ConfigSource::Cli;
        }
        if let Some(ms) = self.frame_interval_ms {
            config.animation.frame_interval_ms = ms;
            config.source = ConfigSource::Cli;
        }
        if let Some(secs) = self.fetch_timeout_secs {
            config.weather.fetch_timeout_secs = Some(secs);
            config.source = ConfigSource::Cli;
        }
    }
}
