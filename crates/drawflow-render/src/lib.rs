//! DrawFlow Render Library
//!
//! Hand-drawn shape generation and full-frame rendering for DrawFlow.
//! Shapes are sketched once with `roughr` when their geometry changes; each
//! frame then strokes the stored paths onto a [`Surface`].

mod renderer;
mod rough;
mod style;
mod svg;

pub use renderer::{RenderContext, RenderResult, RendererError, Surface, render_frame};
pub use rough::{RoughDescriptor, RoughFactory};
pub use style::{SerializableColor, StrokePaint, TextStyle};
pub use svg::SvgSurface;
