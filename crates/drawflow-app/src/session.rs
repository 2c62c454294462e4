//! Recorded input sessions and their replay.

use crate::config::AppConfig;
use crate::error::AppResult;
use drawflow_core::{Canvas, InputEvent};
use drawflow_render::{RenderContext, RoughFactory, SvgSurface, render_frame};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A recorded stream of input events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub events: Vec<InputEvent>,
}

/// Outcome of replaying a session.
#[derive(Debug, Clone)]
pub struct Replay {
    /// The last rendered frame as an SVG document.
    pub svg: String,
    /// Number of frames rendered, including the initial one.
    pub frames: usize,
    /// Elements in the final snapshot.
    pub elements: usize,
    /// Snapshots in the final history.
    pub history_len: usize,
}

impl Session {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a session file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)?;
        let session = Self::from_json(&json)?;
        log::info!("Loaded {} events from {}", session.events.len(), path.display());
        Ok(session)
    }

    /// Feed every event through a fresh canvas.
    ///
    /// The whole frame is redrawn each time the canvas asks for it, the way
    /// an interactive surface would be.
    pub fn replay(&self, config: &AppConfig) -> AppResult<Replay> {
        let mut canvas = Canvas::with_config(RoughFactory::new(), config.canvas.clone());
        let mut surface = SvgSurface::new(Size::new(config.width, config.height))?;

        draw(&canvas, &mut surface, config)?;
        let mut frames = 1;

        for event in &self.events {
            if canvas.handle(event.clone()).redraw {
                draw(&canvas, &mut surface, config)?;
                frames += 1;
            }
        }

        log::info!(
            "Replayed {} events: {} frames, {} elements",
            self.events.len(),
            frames,
            canvas.elements().len()
        );

        Ok(Replay {
            svg: surface.finish(),
            frames,
            elements: canvas.elements().len(),
            history_len: canvas.history().len(),
        })
    }
}

fn draw(canvas: &Canvas<RoughFactory>, surface: &mut SvgSurface, config: &AppConfig) -> AppResult<()> {
    let ctx = RenderContext::new(canvas.elements(), *canvas.viewport())
        .with_background(config.background.into())
        .with_stroke(config.stroke)
        .with_text_style(config.text.clone());
    render_frame(surface, &ctx)?;
    Ok(())
}
