//! A single compositor layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::Plane;

/// One off-screen buffer placed somewhere on the terminal
#[derive(Debug)]
pub struct Layer {
    /// Which plane this layer renders
    pub plane: Plane,
    /// Position and size on screen
    pub bounds: Rect,
    /// Whether the layer takes part in compositing
    pub visible: bool,
    /// Layer content, origin at (0, 0)
    pub buffer: Buffer,
}

impl Layer {
    /// Create a visible, empty layer
    pub fn new(plane: Plane, bounds: Rect) -> Self {
        Self {
            plane,
            bounds,
            visible: true,
            buffer: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
        }
    }

    /// Move and resize, dropping the old content if the size changed
    pub fn place(&mut self, bounds: Rect) {
        if bounds.width != self.bounds.width || bounds.height != self.bounds.height {
            self.buffer = Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height));
        }
        self.bounds = bounds;
    }
}
