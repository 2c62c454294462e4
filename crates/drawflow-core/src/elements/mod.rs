//! Element definitions for the drawing surface.

mod shape;
mod store;
mod text;

pub use shape::{ShapeElement, ShapeFactory, ShapeKind, StrokeStyle};
pub use store::{ElementStore, ElementUpdate};
pub use text::TextElement;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Identifier of an element: its position in the store at creation time.
pub type ElementId = usize;

/// The kinds of element that can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Text,
}

impl ElementKind {
    /// The shape kind for shape elements, `None` for text.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ElementKind::Line => Some(ShapeKind::Line),
            ElementKind::Rectangle => Some(ShapeKind::Rectangle),
            ElementKind::Circle => Some(ShapeKind::Circle),
            ElementKind::Ellipse => Some(ShapeKind::Ellipse),
            ElementKind::Text => None,
        }
    }
}

impl From<ShapeKind> for ElementKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => ElementKind::Line,
            ShapeKind::Rectangle => ElementKind::Rectangle,
            ShapeKind::Circle => ElementKind::Circle,
            ShapeKind::Ellipse => ElementKind::Ellipse,
        }
    }
}

/// Anchor geometry shared by every element.
///
/// `(x1, y1)` is where the gesture started and `(x2, y2)` where it ended.
/// The two corners are not normalized: `x1 > x2` is a valid drag to the left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Geometry {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Zero-size geometry at a point.
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Geometry spanning two points.
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// The anchor corner `(x1, y1)`.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Signed width (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed height (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Same anchor, new end corner.
    pub fn with_end(&self, end: Point) -> Self {
        Self::new(self.x1, self.y1, end.x, end.y)
    }

    /// Translate so the anchor lands on `anchor`, keeping width and height.
    pub fn moved_to(&self, anchor: Point) -> Self {
        Self::new(
            anchor.x,
            anchor.y,
            anchor.x + self.width(),
            anchor.y + self.height(),
        )
    }

    /// Axis-aligned bounds with the corners normalized.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start(), self.end())
    }
}

/// A drawable element: a rendered shape or a text label.
#[derive(Debug, Clone, PartialEq)]
pub enum Element<D> {
    Shape(ShapeElement<D>),
    Text(TextElement),
}

impl<D> Element<D> {
    /// Build an element of the given kind.
    ///
    /// Shape kinds get their descriptor from `factory`; text starts out empty.
    pub fn create<F>(factory: &F, id: ElementId, kind: ElementKind, geometry: Geometry, dashed: bool) -> Self
    where
        F: ShapeFactory<Descriptor = D>,
    {
        match kind.shape_kind() {
            Some(shape_kind) => {
                Element::Shape(ShapeElement::new(factory, id, shape_kind, geometry, dashed))
            }
            None => Element::Text(TextElement::new(id, geometry, dashed)),
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::Shape(s) => s.id,
            Element::Text(t) => t.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Shape(s) => s.kind.into(),
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Element::Shape(s) => s.geometry,
            Element::Text(t) => t.geometry,
        }
    }

    pub fn dashed(&self) -> bool {
        match self {
            Element::Shape(s) => s.dashed,
            Element::Text(t) => t.dashed,
        }
    }

    /// Text content, for text elements.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Text(t) => Some(&t.text),
            Element::Shape(_) => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement<D>> {
        match self {
            Element::Shape(s) => Some(s),
            Element::Text(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingFactory;
    use super::*;

    #[test]
    fn test_create_shape_element() {
        let geometry = Geometry::new(10.0, 20.0, 30.0, 40.0);
        let element = Element::create(&RecordingFactory, 3, ElementKind::Rectangle, geometry, false);

        assert_eq!(element.id(), 3);
        assert_eq!(element.kind(), ElementKind::Rectangle);
        assert_eq!(element.geometry(), geometry);
        assert!(!element.dashed());
        let shape = element.as_shape().unwrap();
        assert_eq!(shape.descriptor.kind, ShapeKind::Rectangle);
        assert_eq!(shape.descriptor.geometry, geometry);
    }

    #[test]
    fn test_create_text_element_is_empty() {
        let element = Element::create(&RecordingFactory, 0, ElementKind::Text, Geometry::at(Point::new(5.0, 5.0)), true);

        assert!(element.is_text());
        assert_eq!(element.text(), Some(""));
        assert!(element.as_shape().is_none());
        assert!(element.dashed());
    }

    #[test]
    fn test_geometry_moved_to_keeps_size() {
        let geometry = Geometry::new(10.0, 10.0, 0.0, 30.0);
        let moved = geometry.moved_to(Point::new(100.0, 200.0));

        assert_eq!(moved.start(), Point::new(100.0, 200.0));
        assert_eq!(moved.width(), geometry.width());
        assert_eq!(moved.height(), geometry.height());
    }

    #[test]
    fn test_geometry_bounds_normalized() {
        let bounds = Geometry::new(10.0, 10.0, 0.0, 0.0).bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_kind_round_trip_through_shape_kind() {
        assert_eq!(ElementKind::Text.shape_kind(), None);
        assert_eq!(ElementKind::from(ShapeKind::Circle), ElementKind::Circle);
        assert_eq!(ElementKind::Ellipse.shape_kind(), Some(ShapeKind::Ellipse));
    }
}
