//! Layered Compositor
//!
//! The gate is drawn as a stack of planes, back to front. Each plane has its
//! own buffer so the particle layers can be redrawn every frame without
//! touching the scenery.
//!
//! The compositor blits every visible plane into one output buffer. Space
//! cells without a background are holes: whatever sits behind shows through.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub use layer::Layer;

/// Render planes, listed back to front
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Plane {
    /// Clouds and birds
    Sky,
    /// Weather icon, house, trees, grass, info panel
    Scenery,
    /// Road markers and the vehicle
    Road,
    /// Rain and wind streaks
    Weather,
    /// Status bar, swipe indicator, progress bar
    Hud,
}

impl Plane {
    /// Every plane in stacking order
    pub const ALL: [Plane; 5] = [
        Plane::Sky,
        Plane::Scenery,
        Plane::Road,
        Plane::Weather,
        Plane::Hud,
    ];
}

/// Owns every plane and composites them together
#[derive(Debug)]
pub struct Compositor {
    /// All layers by plane
    layers: HashMap<Plane, Layer>,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a compositor with one full-screen layer per plane
    pub fn new(area: Rect) -> Self {
        let layers = Plane::ALL
            .into_iter()
            .map(|plane| (plane, Layer::new(plane, area)))
            .collect();

        Self {
            layers,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Total area
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Mutable access to a plane's buffer, cleared for redrawing
    pub fn begin(&mut self, plane: Plane) -> Option<&mut Buffer> {
        self.layers.get_mut(&plane).map(|layer| {
            layer.buffer.reset();
            &mut layer.buffer
        })
    }

    /// Show or hide a plane
    pub fn set_visible(&mut self, plane: Plane, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&plane) {
            layer.visible = visible;
        }
    }

    /// Resize the output and every plane to the new terminal size
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
        for layer in self.layers.values_mut() {
            layer.place(area);
        }
    }

    /// Composite all visible planes into the output buffer
    pub fn composite(&mut self) -> &mut Buffer {
        self.output.reset();

        for plane in Plane::ALL {
            if let Some(layer) = self.layers.get(&plane) {
                if layer.visible {
                    Self::blit_layer(&mut self.output, &self.area, layer);
                }
            }
        }

        &mut self.output
    }

    /// Blit a layer onto the output buffer (solid occlusion)
    fn blit_layer(output: &mut Buffer, area: &Rect, layer: &Layer) {
        let lb = &layer.bounds;

        for ly in 0..lb.height {
            for lx in 0..lb.width {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;

                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let src_idx = layer.buffer.index_of(lx, ly);
                let Some(src_cell) = layer.buffer.content.get(src_idx) else {
                    continue;
                };

                // Bare space cells are transparent; painted ones are not
                if src_cell.symbol() != " " || src_cell.bg != Color::Reset {
                    let dst_idx = output.index_of(dst_x, dst_y);
                    if let Some(dst) = output.content.get_mut(dst_idx) {
                        *dst = src_cell.clone();
                    }
                }
            }
        }
    }
}
