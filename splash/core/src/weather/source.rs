//! Weather Source Trait
//!
//! Abstraction over "where the snapshot comes from". The gate only ever
//! asks once, and any failure is absorbed into the fallback snapshot.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::snapshot::WeatherSnapshot;

/// Ways a weather fetch can fail
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network or transport failure
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("weather endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (may be empty)
        body: String,
    },

    /// The payload was not the expected JSON shape
    #[error("malformed weather payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch did not finish within the configured timeout
    #[error("weather request timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure reported by a custom source
    #[error("weather source unavailable: {0}")]
    Unavailable(String),
}

/// A provider of current weather conditions
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Source name for logging (e.g. "open-meteo")
    fn name(&self) -> &str;

    /// Fetch the current conditions once
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError>;
}

/// Fetch once and fall back on any failure
///
/// This never fails: errors are logged and replaced by
/// [`WeatherSnapshot::FALLBACK`]. There is no retry. `timeout` is `None`
/// unless explicitly configured, in which case a hung request waits forever.
pub async fn resolve_snapshot<S>(source: &S, timeout: Option<Duration>) -> WeatherSnapshot
where
    S: WeatherSource + ?Sized,
{
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, source.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(WeatherError::Timeout(limit)),
        },
        None => source.fetch().await,
    };

    match result {
        Ok(snapshot) => {
            tracing::info!(
                source = source.name(),
                code = snapshot.weather_code,
                temperature_c = snapshot.temperature_c,
                wind_kmh = snapshot.wind_speed_kmh,
                "Weather resolved"
            );
            snapshot
        }
        Err(e) => {
            tracing::warn!(source = source.name(), error = %e, "Weather fetch failed, using fallback");
            WeatherSnapshot::FALLBACK
        }
    }
}

/// Source that always answers with the same snapshot
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    snapshot: WeatherSnapshot,
}

impl StaticSource {
    /// Create a source answering with `snapshot`
    #[must_use]
    pub fn new(snapshot: WeatherSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl WeatherSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.snapshot)
    }
}
