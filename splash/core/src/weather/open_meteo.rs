//! Open-Meteo Source
//!
//! Current conditions from the public Open-Meteo forecast API.
//!
//! # Request
//!
//! A single `GET /v1/forecast` with fixed coordinates and
//! `current=temperature_2m,weather_code,wind_speed_10m,is_day`.
//!
//! # Response (abridged)
//!
//! ```json
//! { "current": { "temperature_2m": 27.6, "weather_code": 3,
//!                "wind_speed_10m": 8.4, "is_day": 1 } }
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use super::snapshot::WeatherSnapshot;
use super::source::{WeatherError, WeatherSource};
use crate::config::WeatherConfig;

/// Fields requested from the `current` block
const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,is_day";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temperature_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
    is_day: u8,
}

impl From<CurrentConditions> for WeatherSnapshot {
    #[allow(clippy::cast_possible_truncation)]
    fn from(current: CurrentConditions) -> Self {
        WeatherSnapshot {
            temperature_c: current.temperature_2m.round() as i32,
            wind_speed_kmh: current.wind_speed_10m.round() as i32,
            weather_code: current.weather_code,
            is_daytime: current.is_day == 1,
        }
    }
}

/// Parse a forecast body into a snapshot
///
/// # Errors
///
/// Returns [`WeatherError::Decode`] when required fields are missing or mistyped.
pub fn parse_forecast(body: &str) -> Result<WeatherSnapshot, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    Ok(response.current.into())
}

/// Open-Meteo forecast client
#[derive(Clone, Debug)]
pub struct OpenMeteoSource {
    /// Forecast endpoint URL
    endpoint: String,
    /// Latitude in decimal degrees
    latitude: f64,
    /// Longitude in decimal degrees
    longitude: f64,
    /// IANA timezone name
    timezone: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl OpenMeteoSource {
    /// Create a source for the given coordinates
    pub fn new(
        endpoint: impl Into<String>,
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            latitude,
            longitude,
            timezone: timezone.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Create from the `[weather]` config section
    #[must_use]
    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            config.latitude,
            config.longitude,
            config.timezone.clone(),
        )
    }

    /// Query parameters sent with every request
    fn query(&self) -> [(&'static str, String); 4] {
        [
            ("latitude", self.latitude.to_string()),
            ("longitude", self.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("timezone", self.timezone.clone()),
        ]
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::from_config(&WeatherConfig::default())
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoSource {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching current weather");

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&self.query())
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Status { status, body });
        }

        let body = response.text().await?;
        parse_forecast(&body)
    }
}
