//! Weather Snapshot

use serde::{Deserialize, Serialize};

use super::classify::{classify, WeatherCategory, WindBand};

/// Current conditions resolved once per gate session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature, rounded to whole degrees Celsius
    pub temperature_c: i32,
    /// Wind speed at 10m, rounded to whole km/h
    pub wind_speed_kmh: i32,
    /// WMO weather interpretation code
    pub weather_code: i32,
    /// Whether the sun is up at the forecast location
    pub is_daytime: bool,
}

impl WeatherSnapshot {
    /// Snapshot used whenever the fetch fails for any reason
    pub const FALLBACK: Self = Self {
        temperature_c: 28,
        wind_speed_kmh: 10,
        weather_code: 0,
        is_daytime: true,
    };

    /// Create a snapshot from already-rounded values
    #[must_use]
    pub const fn new(
        temperature_c: i32,
        wind_speed_kmh: i32,
        weather_code: i32,
        is_daytime: bool,
    ) -> Self {
        Self {
            temperature_c,
            wind_speed_kmh,
            weather_code,
            is_daytime,
        }
    }

    /// Category derived from the weather code
    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        classify(self.weather_code)
    }

    /// Wind band used by the wind-scaled speed tables
    #[must_use]
    pub fn wind_band(&self) -> WindBand {
        WindBand::from_kmh(self.wind_speed_kmh)
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_clear_daytime() {
        let snapshot = WeatherSnapshot::FALLBACK;
        assert_eq!(snapshot.temperature_c, 28);
        assert_eq!(snapshot.wind_speed_kmh, 10);
        assert_eq!(snapshot.category(), WeatherCategory::Clear);
        assert!(snapshot.is_daytime);
    }

    #[test]
    fn test_wind_band_from_snapshot() {
        assert_eq!(WeatherSnapshot::new(20, 25, 95, true).wind_band(), WindBand::Gusty);
        assert_eq!(WeatherSnapshot::FALLBACK.wind_band(), WindBand::Breezy);
    }
}
