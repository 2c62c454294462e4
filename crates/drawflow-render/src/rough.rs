//! Hand-drawn shape descriptors generated with `roughr`.

use drawflow_core::{Geometry, ShapeFactory, ShapeKind, StrokeStyle};
use kurbo::{BezPath, Point};
use roughr::core::{OpSet, OpSetType, OpType, Options};
use roughr::generator::Generator;

/// Pre-generated sketch strokes for one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughDescriptor {
    pub kind: ShapeKind,
    /// Stroke outlines in drawing coordinates.
    pub paths: Vec<BezPath>,
    /// Dash pattern the strokes are painted with (empty = solid).
    pub dash: Vec<f64>,
}

/// Builds [`RoughDescriptor`]s with a fixed random seed, so the same
/// geometry always yields the same strokes.
#[derive(Default)]
pub struct RoughFactory {
    generator: Generator,
}

impl RoughFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeFactory for RoughFactory {
    type Descriptor = RoughDescriptor;

    fn make_descriptor(&self, kind: ShapeKind, geometry: Geometry, style: &StrokeStyle) -> RoughDescriptor {
        let options = Some(options_for(style));
        let bounds = geometry.bounds();
        let center = bounds.center();

        let drawable = match kind {
            ShapeKind::Line => self
                .generator
                .line(geometry.x1, geometry.y1, geometry.x2, geometry.y2, &options),
            ShapeKind::Rectangle => self.generator.rectangle(
                geometry.x1,
                geometry.y1,
                geometry.width(),
                geometry.height(),
                &options,
            ),
            ShapeKind::Ellipse => self
                .generator
                .ellipse(center.x, center.y, bounds.width(), bounds.height(), &options),
            ShapeKind::Circle => self.generator.circle(center.x, center.y, bounds.width(), &options),
        };

        let paths = drawable
            .sets
            .iter()
            .filter(|set| set.op_set_type == OpSetType::Path)
            .map(to_bez_path)
            .collect();

        RoughDescriptor {
            kind,
            paths,
            dash: style.dash.clone(),
        }
    }
}

fn options_for(style: &StrokeStyle) -> Options {
    let defaults = Options::default();
    Options {
        roughness: Some(style.roughness as f32),
        curve_fitting: style.curve_fitting.map(|fitting| fitting as f32).or(defaults.curve_fitting),
        stroke_line_dash: style.is_dashed().then(|| style.dash.clone()),
        ..defaults
    }
}

fn to_bez_path(set: &OpSet<f64>) -> BezPath {
    let mut path = BezPath::new();
    for op in &set.ops {
        match (&op.op, op.data.as_slice()) {
            (OpType::Move, [x, y, ..]) => path.move_to(Point::new(*x, *y)),
            (OpType::LineTo, [x, y, ..]) => path.line_to(Point::new(*x, *y)),
            (OpType::BCurveTo, [x1, y1, x2, y2, x, y, ..]) => {
                path.curve_to(Point::new(*x1, *y1), Point::new(*x2, *y2), Point::new(*x, *y))
            }
            (op_type, data) => log::trace!("Skipping {:?} op with {} values", op_type, data.len()),
        }
    }
    path
}
