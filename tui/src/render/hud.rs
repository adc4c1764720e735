//! HUD: status bar, swipe indicator, progress bar and the loading screen

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthStr;

use splash_core::{GestureFeedback, WeatherSnapshot};

use super::put_text;
use crate::art;
use crate::portfolio::HANDLE;
use crate::theme::{fade, BACKGROUND, BRIGHT_GREEN, PANEL, TERMINAL_GREEN};

/// How long each half of the cursor blink lasts
const BLINK_HALF_PERIOD: Duration = Duration::from_millis(500);

/// Top bar: prompt on the left, weather readout on the right
///
/// The readout sheds its least important fields until it fits.
pub fn draw_status_bar(buf: &mut Buffer, snapshot: &WeatherSnapshot, location_label: &str) {
    let area = buf.area;
    if area.height == 0 {
        return;
    }
    let bar = Rect::new(area.x, area.y, area.width, 1);
    buf.set_style(bar, Style::default().bg(PANEL).fg(TERMINAL_GREEN));

    let prompt = format!("┌─[{HANDLE}]");
    let style = Style::default().fg(TERMINAL_GREEN).bg(PANEL);
    buf.set_stringn(area.x + 1, area.y, &prompt, usize::from(area.width), style);

    let available = usize::from(area.width).saturating_sub(prompt.width() + 4);
    if let Some(readout) = status_readout(snapshot, location_label, available) {
        let x = area.x + area.width.saturating_sub(u16::try_from(readout.width()).unwrap_or(0) + 1);
        buf.set_string(x, area.y, &readout, style);
    }
}

/// Widest status readout that fits in `available` cells
pub fn status_readout(
    snapshot: &WeatherSnapshot,
    location_label: &str,
    available: usize,
) -> Option<String> {
    let category = snapshot.category();
    let glyph = art::weather_glyph(category, snapshot.is_daytime);
    let label = category.label(snapshot.is_daytime);
    let temperature = format!("{}°C", snapshot.temperature_c);
    let wind = format!("Wind: {} km/h", snapshot.wind_speed_kmh);
    let location = format!("Location: {location_label}");
    let weather = format!("Weather: {glyph} {label}");

    let candidates = [
        vec![
            weather.as_str(),
            temperature.as_str(),
            wind.as_str(),
            location.as_str(),
        ],
        vec![weather.as_str(), temperature.as_str(), wind.as_str()],
        vec![glyph, temperature.as_str(), wind.as_str()],
        vec![glyph, temperature.as_str()],
    ];

    candidates
        .iter()
        .map(|parts| parts.join("  "))
        .find(|line| line.width() <= available)
}

/// "Scroll down to continue" / "Release to enter" with a bouncing arrow
pub fn draw_indicator(buf: &mut Buffer, row: u16, feedback: &GestureFeedback) {
    let area = buf.area;
    let color = fade(TERMINAL_GREEN, feedback.indicator_opacity);
    let style = Style::default().fg(color);

    let text = format!("↓ {} ↓", feedback.indicator_text);
    let x = centered_x(area, &text);
    put_text(buf, x, i32::from(row), &text, style);

    let arrow_x = i32::from(area.x + area.width / 2);
    put_text(buf, arrow_x, i32::from(row) + 1, "↓", style);
}

/// Bottom bar filled to `bar_fraction` of the width
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_progress_bar(buf: &mut Buffer, feedback: &GestureFeedback) {
    let area = buf.area;
    if area.height == 0 {
        return;
    }
    let row = area.y + area.height - 1;
    buf.set_style(Rect::new(area.x, row, area.width, 1), Style::default().bg(PANEL));

    let filled = (feedback.bar_fraction.clamp(0.0, 1.0) * f32::from(area.width)).round() as u16;
    if filled > 0 {
        let bar = "█".repeat(usize::from(filled));
        buf.set_string(area.x, row, &bar, Style::default().fg(BRIGHT_GREEN).bg(PANEL));
    }
}

/// Full-screen "Loading..." with a blinking block cursor
pub fn draw_loading(buf: &mut Buffer, elapsed: Duration) {
    let area = buf.area;
    buf.set_style(area, Style::default().bg(BACKGROUND));

    let style = Style::default().fg(TERMINAL_GREEN).bg(BACKGROUND);
    let mid = i32::from(area.y + area.height / 2);
    let text = "Loading...";
    put_text(buf, centered_x(area, text), mid - 1, text, style);

    let phase = elapsed.as_millis() / BLINK_HALF_PERIOD.as_millis();
    if phase % 2 == 0 {
        put_text(buf, centered_x(area, "█"), mid + 1, "█", style);
    }
}

fn centered_x(area: Rect, text: &str) -> i32 {
    let width = i32::try_from(text.width()).unwrap_or(0);
    i32::from(area.x) + (i32::from(area.width) - width) / 2
}
