//! Point-in-element tests used for selection.

use crate::elements::{Element, ElementKind, Geometry};
use kurbo::Point;

/// Width of the band around a line that still counts as a hit.
///
/// Fixed in drawing units, independent of the line's length.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Check whether `point` hits `element`.
///
/// Lines use a detour test: the point is on the line when going through it
/// is at most [`LINE_HIT_TOLERANCE`] longer than the segment itself.
/// Everything else, circles and ellipses included, uses the closed bounding
/// box of its two corners.
pub fn is_inside<D>(point: Point, element: &Element<D>) -> bool {
    let geometry = element.geometry();
    match element.kind() {
        ElementKind::Line => near_segment(point, geometry.start(), geometry.end()),
        ElementKind::Rectangle | ElementKind::Circle | ElementKind::Ellipse | ElementKind::Text => {
            in_closed_box(point, &geometry)
        }
    }
}

/// The first element in store order that `point` hits.
///
/// Older elements win over newer ones when they overlap.
pub fn find_at<D>(point: Point, elements: &[Element<D>]) -> Option<&Element<D>> {
    elements.iter().find(|element| is_inside(point, element))
}

fn near_segment(point: Point, a: Point, b: Point) -> bool {
    let offset = distance(a, b) - (distance(a, point) + distance(b, point));
    offset.abs() <= LINE_HIT_TOLERANCE
}

// Inclusive on every edge, unlike `kurbo::Rect::contains`.
fn in_closed_box(point: Point, geometry: &Geometry) -> bool {
    let min_x = geometry.x1.min(geometry.x2);
    let max_x = geometry.x1.max(geometry.x2);
    let min_y = geometry.y1.min(geometry.y2);
    let max_y = geometry.y1.max(geometry.y2);

    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::testing::{Recorded, RecordingFactory};

    fn element(id: usize, kind: ElementKind, geometry: Geometry) -> Element<Recorded> {
        Element::create(&RecordingFactory, id, kind, geometry, false)
    }

    #[test]
    fn test_point_on_line_is_inside() {
        let line = element(0, ElementKind::Line, Geometry::new(0.0, 0.0, 10.0, 0.0));
        assert!(is_inside(Point::new(5.0, 0.0), &line));
        assert!(is_inside(Point::new(0.0, 0.0), &line));
        assert!(is_inside(Point::new(10.0, 0.0), &line));
    }

    #[test]
    fn test_point_far_from_line_is_outside() {
        let line = element(0, ElementKind::Line, Geometry::new(0.0, 0.0, 10.0, 0.0));
        assert!(!is_inside(Point::new(5.0, 20.0), &line));
    }

    #[test]
    fn test_line_tolerance_band() {
        let line = element(0, ElementKind::Line, Geometry::new(0.0, 0.0, 100.0, 0.0));
        // Detour through (50, 15): 2 * sqrt(50² + 15²) - 100 ≈ 4.4
        assert!(is_inside(Point::new(50.0, 15.0), &line));
        // Detour through (50, 20): 2 * sqrt(50² + 20²) - 100 ≈ 7.7
        assert!(!is_inside(Point::new(50.0, 20.0), &line));
        // Beyond the end on the same axis: detour is twice the overshoot.
        assert!(is_inside(Point::new(102.0, 0.0), &line));
        assert!(!is_inside(Point::new(103.0, 0.0), &line));
    }

    #[test]
    fn test_rectangle_uses_normalized_bounds() {
        let rect = element(0, ElementKind::Rectangle, Geometry::new(10.0, 10.0, 0.0, 0.0));
        assert!(is_inside(Point::new(5.0, 5.0), &rect));
        assert!(!is_inside(Point::new(11.0, 5.0), &rect));
    }

    #[test]
    fn test_box_edges_are_inside() {
        let rect = element(0, ElementKind::Rectangle, Geometry::new(0.0, 0.0, 10.0, 10.0));
        assert!(is_inside(Point::new(10.0, 10.0), &rect));
        assert!(is_inside(Point::new(0.0, 10.0), &rect));
    }

    #[test]
    fn test_ellipse_uses_bounding_box() {
        let ellipse = element(0, ElementKind::Ellipse, Geometry::new(0.0, 0.0, 100.0, 50.0));
        // A corner of the box lies outside the curve but is still a hit.
        assert!(is_inside(Point::new(1.0, 1.0), &ellipse));
    }

    #[test]
    fn test_text_uses_bounding_box() {
        let text = element(0, ElementKind::Text, Geometry::new(50.0, 50.0, 50.0, 50.0));
        assert!(is_inside(Point::new(50.0, 50.0), &text));
        assert!(!is_inside(Point::new(51.0, 50.0), &text));
    }

    #[test]
    fn test_find_at_oldest_wins() {
        let elements = vec![
            element(0, ElementKind::Rectangle, Geometry::new(0.0, 0.0, 100.0, 100.0)),
            element(1, ElementKind::Rectangle, Geometry::new(50.0, 50.0, 150.0, 150.0)),
        ];

        let hit = find_at(Point::new(75.0, 75.0), &elements).unwrap();
        assert_eq!(hit.id(), 0);

        let hit = find_at(Point::new(125.0, 125.0), &elements).unwrap();
        assert_eq!(hit.id(), 1);

        assert!(find_at(Point::new(500.0, 500.0), &elements).is_none());
    }
}
