//! Scene planes: sky, scenery, road and weather

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use splash_core::{Scene, VehicleDirection, WeatherSnapshot};

use super::{cell_at, column_at, put_sprite, put_text, signed_column};
use crate::art;
use crate::portfolio::{LOCATION, ROLE, STATS, STATUS, TECH_STACK};
use crate::theme::{
    fade, BIRD_INK, BRIGHT_GREEN, CLOUD_GRAY, GRASS_GREEN, LABEL_YELLOW, MUTED_GRAY, RAIN_BLUE,
    ROAD_GRAY, STAT_CYAN, TERMINAL_GREEN, TREE_GREEN, VEHICLE_RED, WIND_CYAN,
};

/// Rain is drawn slightly see-through
const RAIN_OPACITY: f32 = 0.6;
/// Clouds are drawn half see-through
const CLOUD_OPACITY: f32 = 0.5;
/// Grass is drawn slightly see-through
const GRASS_OPACITY: f32 = 0.6;

/// Minimum width for the two-column layout with the info panel
const WIDE_LAYOUT_MIN: u16 = 90;

/// Where the fixed pieces of the gate sit for a given terminal size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneLayout {
    /// Whole terminal
    pub area: Rect,
    /// Left edge of the house block
    pub house_x: u16,
    /// Top of the weather icon (house follows below)
    pub block_y: u16,
    /// Info panel, when there is room for one
    pub info: Option<Rect>,
    /// Road row
    pub road_y: u16,
    /// Swipe indicator row
    pub indicator_y: u16,
}

impl SceneLayout {
    /// Compute the layout for `area`
    pub fn new(area: Rect) -> Self {
        let house_w = art::sprite_width(art::JOGLO_HOUSE);
        let block_h = 6 + u16::try_from(art::JOGLO_HOUSE.len() + art::GRASS.len()).unwrap_or(0);

        let wide = area.width >= WIDE_LAYOUT_MIN;
        let house_x = if wide {
            (area.width / 2).saturating_sub(house_w + 8)
        } else {
            area.width.saturating_sub(house_w) / 2
        };
        let block_y = (area.height.saturating_sub(block_h) / 2).max(2);

        let info = wide.then(|| {
            let x = area.width / 2 + 2;
            let width = area.width.saturating_sub(x + 4).min(56);
            Rect::new(x, block_y + 4, width, 14.min(area.height.saturating_sub(block_y + 4)))
        });

        Self {
            area,
            house_x,
            block_y,
            info,
            road_y: area.height.saturating_sub(5),
            indicator_y: area.height.saturating_sub(3),
        }
    }
}

/// Clouds and birds
pub fn draw_sky(buf: &mut Buffer, scene: &Scene) {
    let area = buf.area;

    let cloud_style = Style::default().fg(fade(CLOUD_GRAY, CLOUD_OPACITY));
    for cloud in scene.clouds() {
        let x = signed_column(cloud.x, area);
        let y = (cloud.y / 100.0 * f32::from(area.height)).floor();
        #[allow(clippy::cast_possible_truncation)]
        put_sprite(buf, x, y as i32, art::CLOUD, cloud_style);
    }

    let bird_style = Style::default().fg(BIRD_INK);
    for bird in scene.birds() {
        if let Some((x, y)) = cell_at(bird.x, bird.y, area) {
            let frame = art::BIRD_FRAMES[usize::from(bird.wing_frame) % art::BIRD_FRAMES.len()];
            put_text(buf, i32::from(x), i32::from(y), frame, bird_style);
        }
    }
}

/// Weather icon, trees, house, grass and the info panel
pub fn draw_scenery(buf: &mut Buffer, layout: &SceneLayout, snapshot: &WeatherSnapshot) {
    let icon = art::weather_icon(snapshot.category(), snapshot.is_daytime);
    let x = i32::from(layout.house_x);
    let y = i32::from(layout.block_y);

    put_sprite(buf, x + 2, y, icon, Style::default().fg(LABEL_YELLOW));

    let house_y = y + 6;
    let house_w = i32::from(art::sprite_width(art::JOGLO_HOUSE));
    let tree_style = Style::default().fg(TREE_GREEN);
    put_sprite(buf, x - 7, house_y + 6, art::TREE, tree_style);
    put_sprite(buf, x + house_w + 2, house_y + 8, art::TREE, tree_style);
    put_sprite(buf, x, house_y, art::JOGLO_HOUSE, Style::default().fg(TERMINAL_GREEN));

    let grass_y = house_y + i32::try_from(art::JOGLO_HOUSE.len()).unwrap_or(0);
    put_sprite(
        buf,
        x - 3,
        grass_y,
        art::GRASS,
        Style::default().fg(fade(GRASS_GREEN, GRASS_OPACITY)),
    );

    if let Some(info) = layout.info {
        draw_info_panel(buf, info);
    }
}

fn draw_info_panel(buf: &mut Buffer, panel: Rect) {
    if panel.width < 24 || panel.height < 10 {
        return;
    }
    let label = Style::default().fg(LABEL_YELLOW);
    let text = Style::default().fg(TERMINAL_GREEN);
    let muted = Style::default().fg(MUTED_GRAY);
    let width = usize::from(panel.width);
    let x = i32::from(panel.x);
    let mut y = i32::from(panel.y);

    let rows = [
        ("Role: ", ROLE, text),
        ("Location: ", LOCATION, text),
        ("Status: ", STATUS, Style::default().fg(BRIGHT_GREEN)),
    ];
    for (name, value, style) in rows {
        put_text(buf, x, y, name, label);
        let offset = i32::try_from(name.len()).unwrap_or(0);
        put_text(buf, x + offset, y, value, style);
        y += 1;
    }
    y += 1;

    let column = i32::from(panel.width / 3);
    for (i, (value, name)) in STATS.iter().enumerate() {
        let cx = x + column * i32::try_from(i).unwrap_or(0);
        put_text(
            buf,
            cx,
            y,
            value,
            Style::default().fg(STAT_CYAN).add_modifier(Modifier::BOLD),
        );
        put_text(buf, cx, y + 1, name, muted);
    }
    y += 3;

    put_text(buf, x, y, "Tech Stack", muted);
    y += 1;
    let tags = TECH_STACK
        .iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ");
    for line in textwrap::wrap(&tags, width) {
        put_text(buf, x, y, &line, text);
        y += 1;
    }
}

/// Road markers and the vehicle
pub fn draw_road(buf: &mut Buffer, layout: &SceneLayout, scene: &Scene) {
    let area = buf.area;
    let road_y = i32::from(layout.road_y);

    let dash_style = Style::default().fg(ROAD_GRAY);
    for marker in scene.road() {
        if let Some(col) = column_at(marker.x, area) {
            put_text(buf, i32::from(col), road_y, art::ROAD_DASH, dash_style);
        }
    }

    let vehicle = scene.vehicle();
    if !vehicle.visible {
        return;
    }
    let body = match vehicle.direction {
        VehicleDirection::Forward => art::VEHICLE_RIGHT,
        VehicleDirection::Reverse => art::VEHICLE_LEFT,
    };
    let wheel = art::WHEEL_FRAMES[usize::from(vehicle.wheel_frame) % art::WHEEL_FRAMES.len()];
    let wheels = format!(" {wheel}   {wheel}");

    let x = signed_column(vehicle.position, area);
    let style = Style::default().fg(VEHICLE_RED);
    put_text(buf, x, road_y - 2, body, style);
    put_text(buf, x, road_y - 1, &wheels, style);
}

/// Rain drops and wind streaks
pub fn draw_weather(buf: &mut Buffer, scene: &Scene) {
    let area = buf.area;

    let rain_style = Style::default().fg(fade(RAIN_BLUE, RAIN_OPACITY));
    for drop in scene.rain() {
        if let Some((x, y)) = cell_at(drop.x, drop.y, area) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(drop.glyph).set_style(rain_style);
            }
        }
    }

    for streak in scene.wind() {
        if let Some((x, y)) = cell_at(streak.x, streak.y, area) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(streak.glyph)
                    .set_style(Style::default().fg(fade(WIND_CYAN, streak.opacity)));
            }
        }
    }
}
