//! Text elements.

use super::{ElementId, Geometry};

/// A text label anchored at `(x1, y1)`.
///
/// Text is drawn by the text path of the renderer, so it carries no
/// shape descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub id: ElementId,
    pub geometry: Geometry,
    pub dashed: bool,
    pub text: String,
}

impl TextElement {
    /// Create an empty text element.
    pub fn new(id: ElementId, geometry: Geometry, dashed: bool) -> Self {
        Self {
            id,
            geometry,
            dashed,
            text: String::new(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
