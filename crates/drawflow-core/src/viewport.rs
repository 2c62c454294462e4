//! Viewport pan offset.

use kurbo::{Affine, Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pan translation between screen and drawing coordinates.
///
/// The same offset is applied when rendering and when converting pointer
/// positions, so what is drawn under the cursor is what gets hit. There is
/// no zoom: the transform is a pure translation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportOffset {
    /// Current translation offset.
    pub offset: Vec2,
}

impl ViewportOffset {
    pub fn new(offset: Vec2) -> Self {
        Self { offset }
    }

    /// Affine transform from drawing to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }

    /// Convert a screen point to drawing coordinates.
    pub fn to_drawing(&self, screen_point: Point) -> Point {
        screen_point - self.offset
    }

    /// Convert a drawing point to screen coordinates.
    pub fn to_screen(&self, drawing_point: Point) -> Point {
        drawing_point + self.offset
    }

    /// Apply a scroll delta. Scrolling moves the content against the delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset -= delta;
    }

    /// Return to a given offset.
    pub fn reset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let viewport = ViewportOffset::default();
        let p = Point::new(12.0, 34.0);
        assert_eq!(viewport.to_drawing(p), p);
        assert_eq!(viewport.transform(), Affine::IDENTITY);
    }

    #[test]
    fn test_to_drawing_subtracts_offset() {
        let viewport = ViewportOffset::new(Vec2::new(159.0, 150.0));
        let world = viewport.to_drawing(Point::new(200.0, 200.0));
        assert_eq!(world, Point::new(41.0, 50.0));
    }

    #[test]
    fn test_roundtrip_conversion() {
        let viewport = ViewportOffset::new(Vec2::new(30.0, -20.0));
        let original = Point::new(123.0, 456.0);
        let back = viewport.to_screen(viewport.to_drawing(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_transform_matches_to_screen() {
        let viewport = ViewportOffset::new(Vec2::new(7.0, 9.0));
        let p = Point::new(1.0, 2.0);
        assert_eq!(viewport.transform() * p, viewport.to_screen(p));
    }

    #[test]
    fn test_pan_moves_against_delta() {
        let mut viewport = ViewportOffset::default();
        viewport.pan(Vec2::new(10.0, 20.0));
        assert!((viewport.offset.x + 10.0).abs() < f64::EPSILON);
        assert!((viewport.offset.y + 20.0).abs() < f64::EPSILON);

        viewport.reset(Vec2::ZERO);
        assert_eq!(viewport.offset, Vec2::ZERO);
    }
}
