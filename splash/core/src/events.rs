//! Input Events
//!
//! Pointer and wheel input as the gate understands it. Surfaces translate
//! their native events into these; vertical positions are in pixels and grow
//! downward.

/// One raw input the gesture tracker consumes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A finger touched down at vertical position `y`
    TouchStart {
        /// Vertical position in pixels
        y: f32,
    },
    /// A touching finger moved to `y`
    TouchMove {
        /// Vertical position in pixels
        y: f32,
    },
    /// The finger lifted
    TouchEnd,
    /// Primary button pressed at `y`
    MouseDown {
        /// Vertical position in pixels
        y: f32,
    },
    /// Pointer moved to `y` (ignored unless a drag is active)
    MouseMove {
        /// Vertical position in pixels
        y: f32,
    },
    /// Primary button released (or the pointer left the surface)
    MouseUp,
    /// Wheel scrolled by `delta_y` pixels; positive scrolls down
    Wheel {
        /// Scroll distance in pixels
        delta_y: f32,
    },
}

impl InputEvent {
    /// Whether this event ends a drag
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(self, Self::TouchEnd | Self::MouseUp)
    }
}
