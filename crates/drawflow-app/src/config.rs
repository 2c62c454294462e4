//! Application configuration.

use crate::error::AppResult;
use drawflow_core::CanvasConfig;
use drawflow_render::{SerializableColor, StrokePaint, TextStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration, read from a JSON file.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    pub background: SerializableColor,
    pub stroke: StrokePaint,
    pub text: TextStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            width: 1280.0,
            height: 800.0,
            background: SerializableColor::white(),
            stroke: StrokePaint::default(),
            text: TextStyle::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawflow_core::ToolKind;
    use tempfile::tempdir;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"width": 640.0, "canvas": {"initial_tool": "Rectangle", "dashed": true}}"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.canvas.initial_tool, ToolKind::Rectangle);
        assert!(config.canvas.dashed);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = AppConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(crate::error::AppError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(crate::error::AppError::Json(_))
        ));
    }
}
