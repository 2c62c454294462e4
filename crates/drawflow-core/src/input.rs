//! Raw input events fed to the canvas.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event in screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Up {
        position: Point,
        #[serde(default)]
        button: MouseButton,
    },
    Move {
        position: Point,
    },
    /// Wheel/trackpad scroll, used for panning.
    Scroll {
        position: Point,
        delta: Vec2,
    },
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Released {
        key: String,
    },
}

/// Any input the canvas reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// The text-entry surface lost focus, carrying its final content.
    FocusLost { text: String },
}

impl InputEvent {
    pub fn pointer_down(x: f64, y: f64) -> Self {
        InputEvent::Pointer(PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        InputEvent::Pointer(PointerEvent::Move {
            position: Point::new(x, y),
        })
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        InputEvent::Pointer(PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        })
    }

    pub fn scroll(dx: f64, dy: f64) -> Self {
        InputEvent::Pointer(PointerEvent::Scroll {
            position: Point::ZERO,
            delta: Vec2::new(dx, dy),
        })
    }

    pub fn key(key: &str, modifiers: Modifiers) -> Self {
        InputEvent::Key(KeyEvent::Pressed {
            key: key.to_string(),
            modifiers,
        })
    }

    pub fn focus_lost(text: &str) -> Self {
        InputEvent::FocusLost {
            text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_modifier() {
        assert!(Modifiers::CTRL.command());
        assert!(Modifiers { meta: true, ..Modifiers::NONE }.command());
        assert!(!Modifiers::NONE.command());
    }

    #[test]
    fn test_events_deserialize_from_json() {
        let json = r#"[
            {"Pointer": {"Down": {"position": [100.0, 100.0]}}},
            {"Pointer": {"Move": {"position": [200.0, 150.0]}}},
            {"Key": {"Pressed": {"key": "z", "modifiers": {"ctrl": true}}}},
            {"FocusLost": {"text": "hi"}}
        ]"#;
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events[0], InputEvent::pointer_down(100.0, 100.0));
        assert_eq!(events[1], InputEvent::pointer_move(200.0, 150.0));
        assert_eq!(events[2], InputEvent::key("z", Modifiers::CTRL));
        assert_eq!(events[3], InputEvent::focus_lost("hi"));
    }
}
