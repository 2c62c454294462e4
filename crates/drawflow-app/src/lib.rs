//! DrawFlow Application
//!
//! Headless application shell: loads a recorded input session, replays it
//! through the canvas and writes the rendered frame as SVG.

mod cli;
mod config;
mod error;
mod session;

pub use cli::{CliArgs, USAGE, run};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::{Replay, Session};
