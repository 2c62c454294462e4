//! Canvas settings.

use crate::tools::ToolKind;
use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Initial settings for a [`Canvas`](crate::Canvas).
///
/// A reset returns the canvas to these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Tool active at start-up.
    pub initial_tool: ToolKind,
    /// Whether new shapes start out dashed.
    pub dashed: bool,
    /// Initial pan offset.
    pub pan_offset: Vec2,
    /// Maximum number of history snapshots (`None` = unbounded).
    pub history_limit: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            initial_tool: ToolKind::Line,
            dashed: false,
            pan_offset: Vec2::ZERO,
            history_limit: None,
        }
    }
}
