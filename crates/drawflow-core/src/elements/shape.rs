//! Shape elements and the renderer factory that describes them.

use super::{ElementId, Geometry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dash pattern used for dashed strokes.
pub const DASH_PATTERN: [f64; 1] = [5.0];

/// Roughness of undashed lines and rectangles.
pub const SKETCH_ROUGHNESS: f64 = 0.5;

/// The shape subset of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Ellipse,
}

/// Stroke parameters handed to the shape factory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StrokeStyle {
    /// Dash pattern (empty = solid stroke).
    pub dash: Vec<f64>,
    /// Sketch roughness (0 = clean geometric stroke).
    pub roughness: f64,
    /// Curve fitting for round shapes.
    pub curve_fitting: Option<f64>,
}

impl StrokeStyle {
    /// Style for a shape, derived only from its kind and dashed flag.
    pub fn for_shape(kind: ShapeKind, dashed: bool) -> Self {
        if dashed {
            return Self {
                dash: DASH_PATTERN.to_vec(),
                roughness: 0.0,
                curve_fitting: None,
            };
        }
        match kind {
            ShapeKind::Line | ShapeKind::Rectangle => Self {
                dash: Vec::new(),
                roughness: SKETCH_ROUGHNESS,
                curve_fitting: None,
            },
            ShapeKind::Circle | ShapeKind::Ellipse => Self {
                dash: Vec::new(),
                roughness: 0.0,
                curve_fitting: Some(1.0),
            },
        }
    }

    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

/// Produces opaque render descriptors for shapes.
///
/// The core never looks inside a descriptor. It only asks for a fresh one
/// whenever a shape's geometry changes.
pub trait ShapeFactory {
    type Descriptor: Clone + fmt::Debug;

    fn make_descriptor(&self, kind: ShapeKind, geometry: Geometry, style: &StrokeStyle) -> Self::Descriptor;
}

/// A line, rectangle, circle or ellipse.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement<D> {
    pub id: ElementId,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    /// Fixed when the shape is created.
    pub dashed: bool,
    /// Derived from `(kind, geometry, dashed)`; never edited directly.
    pub descriptor: D,
}

impl<D> ShapeElement<D> {
    pub fn new<F>(factory: &F, id: ElementId, kind: ShapeKind, geometry: Geometry, dashed: bool) -> Self
    where
        F: ShapeFactory<Descriptor = D>,
    {
        let style = StrokeStyle::for_shape(kind, dashed);
        Self {
            id,
            kind,
            geometry,
            dashed,
            descriptor: factory.make_descriptor(kind, geometry, &style),
        }
    }

    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashed_style_is_clean() {
        for kind in [ShapeKind::Line, ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Ellipse] {
            let style = StrokeStyle::for_shape(kind, true);
            assert_eq!(style.dash, vec![5.0]);
            assert_eq!(style.roughness, 0.0);
            assert!(style.is_dashed());
        }
    }

    #[test]
    fn test_sketch_style_depends_on_kind() {
        let line = StrokeStyle::for_shape(ShapeKind::Line, false);
        assert!(!line.is_dashed());
        assert_eq!(line.roughness, SKETCH_ROUGHNESS);
        assert_eq!(line.curve_fitting, None);

        let ellipse = StrokeStyle::for_shape(ShapeKind::Ellipse, false);
        assert_eq!(ellipse.roughness, 0.0);
        assert_eq!(ellipse.curve_fitting, Some(1.0));
    }
}
