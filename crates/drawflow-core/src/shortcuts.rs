//! Keyboard shortcut registry.

use crate::input::Modifiers;
use crate::tools::ToolKind;

/// What a shortcut asks the canvas to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(ToolKind),
    ToggleDashed,
    Undo,
    Redo,
    /// Clear the drawing and return to the initial settings.
    Reset,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
    pub command: Command,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
        command: Command,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
            command,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Check a key press against this shortcut.
    ///
    /// Keys compare case-insensitively and Cmd counts as Ctrl. Shift only
    /// matters for Ctrl combinations, so `S` and `s` both pick the tool.
    pub fn matches(&self, key: &str, modifiers: &Modifiers) -> bool {
        if !self.key.eq_ignore_ascii_case(key) || self.ctrl != modifiers.command() {
            return false;
        }
        !self.ctrl || self.shift == modifiers.shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("S", false, false, "Select tool", Command::SelectTool(ToolKind::Select)),
            Shortcut::new("L", false, false, "Line tool", Command::SelectTool(ToolKind::Line)),
            Shortcut::new("R", false, false, "Rectangle tool", Command::SelectTool(ToolKind::Rectangle)),
            Shortcut::new("C", false, false, "Circle tool", Command::SelectTool(ToolKind::Circle)),
            Shortcut::new("E", false, false, "Ellipse tool", Command::SelectTool(ToolKind::Ellipse)),
            Shortcut::new("T", false, false, "Text tool", Command::SelectTool(ToolKind::Text)),
            Shortcut::new("D", false, false, "Toggle dashed strokes", Command::ToggleDashed),
            Shortcut::new("Delete", false, false, "Clear the drawing", Command::Reset),
            Shortcut::new("Z", true, false, "Undo", Command::Undo),
            Shortcut::new("Z", true, true, "Redo", Command::Redo),
            Shortcut::new("Y", true, false, "Redo", Command::Redo),
        ]
    }

    /// Find the command bound to a key press.
    pub fn lookup(key: &str, modifiers: &Modifiers) -> Option<Command> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, modifiers))
            .map(|shortcut| shortcut.command)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
