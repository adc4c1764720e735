//! Terminal Input Mapping
//!
//! Translates crossterm events into what the app acts on. Mouse rows are
//! converted to pixels with the configured cell height so drag distances
//! mean the same thing as on a pointer device.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use splash_core::{GestureConfig, InputEvent};

/// What the app should do with a terminal event
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Forward to the gate
    Gate(InputEvent),
    /// Leave the program
    Quit,
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing to do
    Ignore,
}

/// Map one terminal event
pub fn map_event(event: &Event, gesture: &GestureConfig) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, gesture),
        Event::Mouse(mouse) => map_mouse(mouse, gesture),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::Ignore,
    }
}

fn map_key(key: &KeyEvent, gesture: &GestureConfig) -> Action {
    let notch = Action::Gate(InputEvent::Wheel {
        delta_y: gesture.wheel_notch_px,
    });

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Down | KeyCode::PageDown | KeyCode::Char(' ' | 'j') => notch,
        _ => Action::Ignore,
    }
}

fn map_mouse(mouse: &MouseEvent, gesture: &GestureConfig) -> Action {
    let y = f32::from(mouse.row) * gesture.cell_height_px;

    let event = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => InputEvent::MouseDown { y },
        MouseEventKind::Drag(MouseButton::Left) => InputEvent::MouseMove { y },
        MouseEventKind::Up(MouseButton::Left) => InputEvent::MouseUp,
        MouseEventKind::ScrollDown => InputEvent::Wheel {
            delta_y: gesture.wheel_notch_px,
        },
        MouseEventKind::ScrollUp => InputEvent::Wheel {
            delta_y: -gesture.wheel_notch_px,
        },
        _ => return Action::Ignore,
    };
    Action::Gate(event)
}
