//! Theme and Colors
//!
//! A night-terminal palette: deep navy background, phosphor green text,
//! and a handful of accents for the weather layers.

use ratatui::style::Color;

// ============================================================================
// Surfaces
// ============================================================================

/// Gate background
pub const BACKGROUND: Color = Color::Rgb(26, 27, 38);

/// Panels and bars (status bar, info box, progress track)
pub const PANEL: Color = Color::Rgb(22, 22, 30);

/// Lightning flash wash
pub const FLASH: Color = Color::Rgb(200, 205, 230);

// ============================================================================
// Text
// ============================================================================

/// Primary terminal green
pub const TERMINAL_GREEN: Color = Color::Rgb(74, 222, 128);

/// Bright green (status dot, progress fill)
pub const BRIGHT_GREEN: Color = Color::Rgb(34, 197, 94);

/// Labels and weather icon
pub const LABEL_YELLOW: Color = Color::Rgb(250, 204, 21);

/// Stat numbers
pub const STAT_CYAN: Color = Color::Rgb(34, 211, 238);

/// Secondary text
pub const MUTED_GRAY: Color = Color::Rgb(156, 163, 175);

// ============================================================================
// Scene
// ============================================================================

/// Rain drops
pub const RAIN_BLUE: Color = Color::Rgb(96, 165, 250);

/// Clouds
pub const CLOUD_GRAY: Color = Color::Rgb(156, 163, 175);

/// Wind streaks (before opacity)
pub const WIND_CYAN: Color = Color::Rgb(34, 211, 238);

/// Trees
pub const TREE_GREEN: Color = Color::Rgb(22, 163, 74);

/// Grass band
pub const GRASS_GREEN: Color = Color::Rgb(21, 128, 61);

/// Road surface markers
pub const ROAD_GRAY: Color = Color::Rgb(107, 114, 128);

/// Vehicle body
pub const VEHICLE_RED: Color = Color::Rgb(248, 113, 113);

/// Birds
pub const BIRD_INK: Color = Color::Rgb(203, 213, 225);

/// Blend `color` toward the background by `opacity` (0 = invisible, 1 = as-is)
///
/// Terminals have no alpha channel, so opacity is approximated by mixing
/// with [`BACKGROUND`]. Non-RGB colors pass through unchanged.
#[must_use]
pub fn fade(color: Color, opacity: f32) -> Color {
    mix(BACKGROUND, color, opacity)
}

/// Linear blend from `from` to `to`; `t` is clamped to `[0, 1]`
#[must_use]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
        }
        _ => to,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
