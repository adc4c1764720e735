//! Rendering
//!
//! Turns gate state into terminal cells. Particle positions are percentages
//! of the viewport and are mapped onto the cell grid here; everything else
//! is laid out relative to the terminal size.
//!
//! # Drawing Order
//!
//! ```text
//! Sky ─▶ Scenery ─▶ Road ─▶ Weather ─▶ Hud   (compositor planes)
//!                                        │
//!                               apply_feedback (offset, dimming, flash)
//! ```

pub mod hud;
pub mod scene;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthChar;

use splash_core::GestureFeedback;

use crate::theme::{fade, mix, BACKGROUND, FLASH};

/// Strength of the lightning wash over the background
const FLASH_STRENGTH: f32 = 0.3;

/// Map a viewport percentage to a cell, if it lands inside `area`
#[allow(clippy::cast_possible_truncation)]
pub fn cell_at(x_pct: f32, y_pct: f32, area: Rect) -> Option<(u16, u16)> {
    let col = column_at(x_pct, area)?;
    if !(0.0..100.0).contains(&y_pct) {
        return None;
    }
    let row = (y_pct / 100.0 * f32::from(area.height)).floor() as u16;
    (row < area.height).then_some((col, area.y + row))
}

/// Map a horizontal percentage to a column, if it lands inside `area`
#[allow(clippy::cast_possible_truncation)]
pub fn column_at(x_pct: f32, area: Rect) -> Option<u16> {
    if !(0.0..100.0).contains(&x_pct) {
        return None;
    }
    let col = (x_pct / 100.0 * f32::from(area.width)).floor() as u16;
    (col < area.width).then_some(area.x + col)
}

/// Signed column for a horizontal percentage; may fall outside `area`
#[allow(clippy::cast_possible_truncation)]
pub fn signed_column(x_pct: f32, area: Rect) -> i32 {
    i32::from(area.x) + (x_pct / 100.0 * f32::from(area.width)).floor() as i32
}

/// Draw a multi-row sprite with its top-left at `(x, y)`
///
/// Rows are clipped to the buffer and spaces are left untouched, so sprites
/// can hang partly off-screen while they drift in.
pub fn put_sprite(buf: &mut Buffer, x: i32, y: i32, sprite: &[&str], style: Style) {
    for (dy, row) in sprite.iter().enumerate() {
        let Ok(dy) = i32::try_from(dy) else {
            break;
        };
        put_text(buf, x, y + dy, row, style);
    }
}

/// Draw one line of text at a possibly off-screen position
pub fn put_text(buf: &mut Buffer, x: i32, y: i32, text: &str, style: Style) {
    let area = buf.area;
    let Ok(row) = u16::try_from(y) else {
        return;
    };
    if row < area.y || row >= area.y + area.height {
        return;
    }

    let mut col = x;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if ch != ' ' {
            if let Ok(c) = u16::try_from(col) {
                if c >= area.x && c < area.x + area.width {
                    if let Some(cell) = buf.cell_mut((c, row)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
        col += i32::try_from(width).unwrap_or(1);
    }
}

/// Apply gesture feedback and the lightning wash to a composited frame
///
/// The whole frame slides down by `offset_px` (converted to rows), text fades
/// toward the background by `gate_opacity`, and a visible flash lifts the
/// background toward white.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn apply_feedback(buf: &mut Buffer, feedback: &GestureFeedback, flash: bool, cell_height_px: f32) {
    let area = buf.area;
    let shift = if cell_height_px > 0.0 {
        (feedback.offset_px / cell_height_px).round().max(0.0) as u16
    } else {
        0
    };

    if shift > 0 {
        for y in (area.y..area.y + area.height).rev() {
            for x in area.x..area.x + area.width {
                let source = (y >= area.y + shift)
                    .then(|| buf.cell((x, y - shift)).cloned())
                    .flatten();
                if let Some(cell) = buf.cell_mut((x, y)) {
                    match source {
                        Some(src) => *cell = src,
                        None => {
                            cell.reset();
                        }
                    }
                }
            }
        }
    }

    let base_bg = if flash {
        mix(BACKGROUND, FLASH, FLASH_STRENGTH)
    } else {
        BACKGROUND
    };

    for cell in &mut buf.content {
        let fg = match cell.fg {
            Color::Reset => Color::Reset,
            fg => fade(fg, feedback.gate_opacity),
        };
        let bg = match cell.bg {
            Color::Reset => base_bg,
            bg if flash => mix(bg, FLASH, FLASH_STRENGTH),
            bg => bg,
        };
        cell.set_fg(fg).set_bg(bg);
    }
}
