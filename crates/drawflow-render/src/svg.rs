//! SVG document surface.

use crate::renderer::{RenderResult, RendererError, Surface};
use crate::rough::RoughDescriptor;
use crate::style::{SerializableColor, StrokePaint, TextStyle};
use kurbo::{Affine, Point, Size};
use peniko::Color;
use std::fmt::Write;

/// Renders frames into an in-memory SVG document.
///
/// Every `clear` discards what was drawn before, so the document always
/// holds exactly one frame.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    /// Create a surface of the given size in pixels.
    pub fn new(size: Size) -> RenderResult<Self> {
        if !(size.width > 0.0 && size.height > 0.0 && size.is_finite()) {
            return Err(RendererError::Surface(format!(
                "invalid surface size {}x{}",
                size.width, size.height
            )));
        }
        Ok(Self {
            size,
            body: String::new(),
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The complete SVG document for the current frame.
    pub fn document(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
             <svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n\
             {body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body
        )
    }

    /// Consume the surface and return the document.
    pub fn finish(self) -> String {
        self.document()
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, background: Color) -> RenderResult<()> {
        self.body.clear();
        let color = SerializableColor::from(background);
        writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" fill-opacity="{:.3}" />"#,
            self.size.width,
            self.size.height,
            color.to_hex(),
            color.opacity()
        )
        .map_err(|e| RendererError::RenderFailed(e.to_string()))
    }

    fn draw_descriptor(
        &mut self,
        descriptor: &RoughDescriptor,
        transform: Affine,
        paint: &StrokePaint,
    ) -> RenderResult<()> {
        let dash = if descriptor.dash.is_empty() {
            String::new()
        } else {
            let pattern: Vec<String> = descriptor.dash.iter().map(|d| d.to_string()).collect();
            format!(r#" stroke-dasharray="{}""#, pattern.join(" "))
        };

        for path in &descriptor.paths {
            let mut path = path.clone();
            path.apply_affine(transform);
            writeln!(
                self.body,
                r#"<path d="{}" fill="none" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}"{} />"#,
                path.to_svg(),
                paint.color.to_hex(),
                paint.color.opacity(),
                paint.width,
                dash
            )
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) -> RenderResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}" dominant-baseline="hanging">{}</text>"#,
            position.x,
            position.y,
            escape(&style.font_family),
            style.font_size,
            style.color.to_hex(),
            escape(text)
        )
        .map_err(|e| RendererError::RenderFailed(e.to_string()))
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
