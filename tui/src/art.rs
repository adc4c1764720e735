//! ASCII Art
//!
//! Multi-line sprites for the gate. Each sprite is a slice of rows; rows may
//! differ in width and leading spaces are transparent when composited.

use splash_core::WeatherCategory;

/// Storm cloud with a bolt
pub const ICON_THUNDER: &[&str] = &[
    "    .-.",
    "   (   ).",
    "  (___(__)",
    "  ⚡ ' ' ' '",
    "   ' ' ' '",
];

/// Rain cloud
pub const ICON_RAIN: &[&str] = &[
    "    .-.",
    "   (   ).",
    "  (___(__)",
    "   ' ' ' '",
    "   ' ' ' '",
];

/// Plain cloud
pub const ICON_CLOUD: &[&str] = &["     .--.", "  .-(    ).", " (___.__)__)"];

/// Moon and stars
pub const ICON_MOON: &[&str] = &["    *  .  *", "  .    ☾    .", "    *  .  *"];

/// Sun
pub const ICON_SUN: &[&str] = &["    \\   /", "  ―  ☀  ―", "    /   \\"];

/// Drifting cloud sprite
pub const CLOUD: &[&str] = &["  .--.", ".-(    ).", "(___.__)__)"];

/// Joglo house
pub const JOGLO_HOUSE: &[&str] = &[
    "     ╔════════════════╗",
    "    ╱                  ╲",
    "   ╱____________________╲",
    "  ╱                      ╲",
    " ╱________________________╲",
    "║                          ║",
    "║     WELCOME HOME         ║",
    "║                          ║",
    "║  ┌────┐      ┌────┐      ║",
    "║  │ ▓▓ │      │ ▓▓ │      ║",
    "║  └────┘      └────┘      ║",
    "║                          ║",
    "║       ┌──────┐           ║",
    "║       │  ▓▓  │           ║",
    "║       └──────┘           ║",
    "╚══════════════════════════╝",
];

/// Pine tree flanking the house
pub const TREE: &[&str] = &["  ^", " ^^^", "^^^^^", "  |", "  |"];

/// Grass rows under the house
pub const GRASS: &[&str] = &[
    "  ,,  ,,  ,,  ,,  ,,  ,,  ,,  ,,",
    " ,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,",
    ",,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,,",
];

/// Vehicle body heading right
pub const VEHICLE_RIGHT: &str = "_/‾‾\\__";
/// Vehicle body heading left
pub const VEHICLE_LEFT: &str = "__/‾‾\\_";
/// Spinning wheel frames, indexed by the vehicle's wheel frame
pub const WHEEL_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Bird wing poses
pub const BIRD_FRAMES: [&str; 2] = ["\\v/", "-v-"];

/// Road marker dash
pub const ROAD_DASH: &str = "==";

/// Weather icon for a category at a time of day
#[must_use]
pub fn weather_icon(category: WeatherCategory, is_daytime: bool) -> &'static [&'static str] {
    match category {
        WeatherCategory::Thunderstorm => ICON_THUNDER,
        WeatherCategory::Rain => ICON_RAIN,
        WeatherCategory::Cloudy => ICON_CLOUD,
        WeatherCategory::Clear if is_daytime => ICON_SUN,
        WeatherCategory::Clear => ICON_MOON,
    }
}

/// Single glyph used in the status bar
#[must_use]
pub fn weather_glyph(category: WeatherCategory, is_daytime: bool) -> &'static str {
    match category {
        WeatherCategory::Thunderstorm => "⚡",
        WeatherCategory::Rain => "☂",
        WeatherCategory::Cloudy => "☁",
        WeatherCategory::Clear if is_daytime => "☀",
        WeatherCategory::Clear => "☾",
    }
}

/// Width in cells of the widest row of a sprite
#[must_use]
pub fn sprite_width(sprite: &[&str]) -> u16 {
    let widest = sprite
        .iter()
        .map(|row| unicode_width::UnicodeWidthStr::width(*row))
        .max()
        .unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_per_category() {
        assert_eq!(weather_icon(WeatherCategory::Clear, true), ICON_SUN);
        assert_eq!(weather_icon(WeatherCategory::Clear, false), ICON_MOON);
        assert_eq!(weather_icon(WeatherCategory::Rain, false), ICON_RAIN);
        assert_eq!(weather_icon(WeatherCategory::Thunderstorm, true), ICON_THUNDER);
    }

    #[test]
    fn test_house_is_rectangular_at_the_walls() {
        let walls: Vec<u16> = JOGLO_HOUSE[5..]
            .iter()
            .map(|row| sprite_width(&[row]))
            .collect();
        assert!(walls.iter().all(|w| *w == walls[0]), "{walls:?}");
    }

    #[test]
    fn test_sprite_width() {
        assert_eq!(sprite_width(TREE), 5);
        assert_eq!(sprite_width(&[]), 0);
    }
}
