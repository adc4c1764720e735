//! Weather Classifier
//!
//! Maps WMO weather codes onto the four categories the scene understands.
//! Membership is by explicit code tables, never by ranges.

use serde::{Deserialize, Serialize};

/// Thunderstorm codes (slight/moderate, with hail)
const THUNDERSTORM_CODES: &[i32] = &[95, 96, 99];

/// Drizzle, rain and rain shower codes
const RAIN_CODES: &[i32] = &[51, 53, 55, 61, 63, 65, 80, 81, 82];

/// Partly cloudy, overcast and fog codes
const CLOUDY_CODES: &[i32] = &[1, 2, 3, 45, 48];

/// Coarse weather classification driving every visual parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    /// Clear sky (and any unrecognised code)
    Clear,
    /// Clouds or fog
    Cloudy,
    /// Drizzle or rain
    Rain,
    /// Thunderstorm
    Thunderstorm,
}

impl WeatherCategory {
    /// Whether rain falls in this category
    #[must_use]
    pub fn has_rain(self) -> bool {
        matches!(self, Self::Rain | Self::Thunderstorm)
    }

    /// Whether lightning is active in this category
    #[must_use]
    pub fn is_stormy(self) -> bool {
        matches!(self, Self::Thunderstorm)
    }

    /// Status bar label; clear nights read as "Night"
    #[must_use]
    pub fn label(self, is_daytime: bool) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Rain => "Rain",
            Self::Cloudy => "Cloudy",
            Self::Clear if is_daytime => "Clear",
            Self::Clear => "Night",
        }
    }
}

/// Classify a weather code
///
/// Thunderstorm and rain tables are consulted before the cloudy one.
#[must_use]
pub fn classify(code: i32) -> WeatherCategory {
    if THUNDERSTORM_CODES.contains(&code) {
        WeatherCategory::Thunderstorm
    } else if RAIN_CODES.contains(&code) {
        WeatherCategory::Rain
    } else if CLOUDY_CODES.contains(&code) {
        WeatherCategory::Cloudy
    } else {
        WeatherCategory::Clear
    }
}

/// Wind speed bands shared by every wind-scaled speed table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindBand {
    /// Below 10 km/h
    Calm,
    /// 10 km/h up to (not including) 20 km/h
    Breezy,
    /// 20 km/h and above
    Gusty,
}

impl WindBand {
    /// Band for a wind speed in km/h
    #[must_use]
    pub fn from_kmh(kmh: i32) -> Self {
        if kmh < 10 {
            Self::Calm
        } else if kmh < 20 {
            Self::Breezy
        } else {
            Self::Gusty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_tables_are_disjoint() {
        for code in THUNDERSTORM_CODES {
            assert!(!RAIN_CODES.contains(code));
            assert!(!CLOUDY_CODES.contains(code));
        }
        for code in RAIN_CODES {
            assert!(!CLOUDY_CODES.contains(code));
        }
    }

    #[test]
    fn test_thunderstorm_codes() {
        for code in [95, 96, 99] {
            assert_eq!(classify(code), WeatherCategory::Thunderstorm);
        }
    }

    #[test]
    fn test_rain_codes() {
        for code in [51, 53, 55, 61, 63, 65, 80, 81, 82] {
            assert_eq!(classify(code), WeatherCategory::Rain);
        }
    }

    #[test]
    fn test_cloudy_codes() {
        for code in [1, 2, 3, 45, 48] {
            assert_eq!(classify(code), WeatherCategory::Cloudy);
        }
    }

    #[test]
    fn test_everything_else_is_clear() {
        // Neighbours of the tables (and snow codes) are not matched by range
        for code in [0, 4, 44, 50, 52, 56, 71, 83, 94, 97, 98, 100, -1] {
            assert_eq!(classify(code), WeatherCategory::Clear, "code {code}");
        }
    }

    #[test]
    fn test_rain_and_storm_flags() {
        assert!(WeatherCategory::Rain.has_rain());
        assert!(WeatherCategory::Thunderstorm.has_rain());
        assert!(!WeatherCategory::Cloudy.has_rain());
        assert!(!WeatherCategory::Clear.has_rain());
        assert!(WeatherCategory::Thunderstorm.is_stormy());
        assert!(!WeatherCategory::Rain.is_stormy());
    }

    #[test]
    fn test_labels() {
        assert_eq!(WeatherCategory::Clear.label(true), "Clear");
        assert_eq!(WeatherCategory::Clear.label(false), "Night");
        assert_eq!(WeatherCategory::Cloudy.label(false), "Cloudy");
        assert_eq!(WeatherCategory::Thunderstorm.label(true), "Thunderstorm");
    }

    #[test]
    fn test_wind_band_edges() {
        assert_eq!(WindBand::from_kmh(0), WindBand::Calm);
        assert_eq!(WindBand::from_kmh(9), WindBand::Calm);
        assert_eq!(WindBand::from_kmh(10), WindBand::Breezy);
        assert_eq!(WindBand::from_kmh(19), WindBand::Breezy);
        assert_eq!(WindBand::from_kmh(20), WindBand::Gusty);
        assert_eq!(WindBand::from_kmh(80), WindBand::Gusty);
    }
}
