//! Tool selection.

use crate::elements::ElementKind;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    Select,
    #[default]
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Text,
}

impl ToolKind {
    /// The element a drawing tool creates (`None` for Select).
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            ToolKind::Select => None,
            ToolKind::Line => Some(ElementKind::Line),
            ToolKind::Rectangle => Some(ElementKind::Rectangle),
            ToolKind::Circle => Some(ElementKind::Circle),
            ToolKind::Ellipse => Some(ElementKind::Ellipse),
            ToolKind::Text => Some(ElementKind::Text),
        }
    }

    /// Display name for this tool.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Circle => "Circle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Text => "Text",
        }
    }
}

/// Manages the current tool and palette settings.
///
/// Independent of the interaction state: changing the tool never starts or
/// ends a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolManager {
    /// Currently selected tool.
    pub current_tool: ToolKind,
    /// Whether new shapes are drawn dashed.
    pub dashed: bool,
}

impl ToolManager {
    pub fn new(tool: ToolKind, dashed: bool) -> Self {
        Self {
            current_tool: tool,
            dashed,
        }
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
    }

    /// Flip the dashed setting. Returns the new value.
    pub fn toggle_dashed(&mut self) -> bool {
        self.dashed = !self.dashed;
        self.dashed
    }

    pub fn reset(&mut self, tool: ToolKind, dashed: bool) {
        *self = Self::new(tool, dashed);
    }
}
