//! Paint settings shared by the surfaces.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// A color that can be serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// CSS hex notation without alpha, e.g. `#ff8000`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How shape outlines are painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokePaint {
    pub color: SerializableColor,
    pub width: f64,
}

impl Default for StrokePaint {
    fn default() -> Self {
        Self {
            color: SerializableColor::black(),
            width: 1.0,
        }
    }
}

/// How text elements are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    pub font_family: String,
    /// Added to the anchor's y so the glyph tops sit below the click point.
    pub baseline_offset: f64,
    pub color: SerializableColor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            font_family: "fantasy".to_string(),
            baseline_offset: 9.0,
            color: SerializableColor::black(),
        }
    }
}
