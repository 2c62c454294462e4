//! Surface abstraction and the full-frame renderer.

use crate::rough::RoughDescriptor;
use crate::style::{StrokePaint, TextStyle};
use drawflow_core::{Element, ElementStore, ViewportOffset};
use kurbo::{Affine, Point, Vec2};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Drawing capabilities a render target provides.
pub trait Surface {
    /// Wipe the surface and fill it with `background`.
    fn clear(&mut self, background: Color) -> RenderResult<()>;

    /// Stroke a shape's pre-generated paths under `transform`.
    fn draw_descriptor(
        &mut self,
        descriptor: &RoughDescriptor,
        transform: Affine,
        paint: &StrokePaint,
    ) -> RenderResult<()>;

    /// Draw a text label with its top-left at `position` (screen space).
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) -> RenderResult<()>;
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Elements to draw, in store order.
    pub elements: &'a ElementStore<RoughDescriptor>,
    /// Pan offset applied to everything.
    pub viewport: ViewportOffset,
    /// Background color.
    pub background_color: Color,
    /// Outline paint for shapes.
    pub stroke: StrokePaint,
    pub text_style: TextStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(elements: &'a ElementStore<RoughDescriptor>, viewport: ViewportOffset) -> Self {
        Self {
            elements,
            viewport,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            stroke: StrokePaint::default(),
            text_style: TextStyle::default(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the outline paint.
    pub fn with_stroke(mut self, stroke: StrokePaint) -> Self {
        self.stroke = stroke;
        self
    }

    /// Set the text style.
    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// Clear `surface` and draw every element.
///
/// Elements are drawn in store order, so later elements paint over earlier
/// ones. Nothing is cached between frames.
pub fn render_frame<S: Surface + ?Sized>(surface: &mut S, ctx: &RenderContext) -> RenderResult<()> {
    let transform = ctx.viewport.transform();
    surface.clear(ctx.background_color)?;

    for element in ctx.elements {
        match element {
            Element::Shape(shape) => {
                surface.draw_descriptor(shape.descriptor(), transform, &ctx.stroke)?;
            }
            Element::Text(text) => {
                let anchor = text.geometry.start() + Vec2::new(0.0, ctx.text_style.baseline_offset);
                surface.draw_text(&text.text, transform * anchor, &ctx.text_style)?;
            }
        }
    }

    log::debug!("Rendered frame with {} elements", ctx.elements.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rough::RoughFactory;
    use crate::style::SerializableColor;
    use drawflow_core::{ElementKind, ElementUpdate, Geometry};

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(SerializableColor),
        Shape(Affine, usize),
        Text(String, Point),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, background: Color) -> RenderResult<()> {
            self.calls.push(Call::Clear(background.into()));
            Ok(())
        }

        fn draw_descriptor(
            &mut self,
            descriptor: &RoughDescriptor,
            transform: Affine,
            _paint: &StrokePaint,
        ) -> RenderResult<()> {
            self.calls.push(Call::Shape(transform, descriptor.paths.len()));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, position: Point, _style: &TextStyle) -> RenderResult<()> {
            self.calls.push(Call::Text(text.to_string(), position));
            Ok(())
        }
    }

    fn sample_store() -> ElementStore<RoughDescriptor> {
        let factory = RoughFactory::new();
        let mut store = ElementStore::new();
        store.push(Element::create(&factory, 0, ElementKind::Line, Geometry::new(0.0, 0.0, 50.0, 50.0), false));
        store.push(Element::create(&factory, 1, ElementKind::Text, Geometry::new(10.0, 20.0, 10.0, 20.0), false));
        store.update_at(&factory, 1, ElementKind::Text, Geometry::default(), &ElementUpdate::text("hi"));
        store
    }

    #[test]
    fn test_frame_clears_then_draws_in_order() {
        let store = sample_store();
        let ctx = RenderContext::new(&store, ViewportOffset::default());
        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &ctx).unwrap();

        assert_eq!(surface.calls.len(), 3);
        assert_eq!(surface.calls[0], Call::Clear(SerializableColor::white()));
        assert!(matches!(surface.calls[1], Call::Shape(t, n) if t == Affine::IDENTITY && n > 0));
        assert_eq!(surface.calls[2], Call::Text("hi".to_string(), Point::new(10.0, 29.0)));
    }

    #[test]
    fn test_frame_applies_pan_offset() {
        let store = sample_store();
        let viewport = ViewportOffset::new(Vec2::new(100.0, 50.0));
        let ctx = RenderContext::new(&store, viewport);
        let mut surface = RecordingSurface::default();
        render_frame(&mut surface, &ctx).unwrap();

        assert!(matches!(surface.calls[1], Call::Shape(t, _) if t == viewport.transform()));
        assert_eq!(surface.calls[2], Call::Text("hi".to_string(), Point::new(110.0, 79.0)));
    }

    #[test]
    fn test_builder_methods() {
        let store = ElementStore::new();
        let red = Color::from_rgba8(255, 0, 0, 255);
        let ctx = RenderContext::new(&store, ViewportOffset::default())
            .with_background(red)
            .with_stroke(StrokePaint {
                width: 3.0,
                ..StrokePaint::default()
            });

        assert_eq!(SerializableColor::from(ctx.background_color), SerializableColor::new(255, 0, 0, 255));
        assert_eq!(ctx.stroke.width, 3.0);
    }
}
