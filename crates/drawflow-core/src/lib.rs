//! DrawFlow Core Library
//!
//! Platform-agnostic drawing model for DrawFlow: elements, hit-testing,
//! undo history and the interaction state machine that turns input into
//! element changes.

pub mod canvas;
pub mod config;
pub mod elements;
pub mod history;
pub mod hit_test;
pub mod input;
pub mod interaction;
pub mod shortcuts;
pub mod tools;
pub mod viewport;

pub use canvas::{Canvas, Response};
pub use config::CanvasConfig;
pub use elements::{
    Element, ElementId, ElementKind, ElementStore, ElementUpdate, Geometry, ShapeElement, ShapeFactory, ShapeKind,
    StrokeStyle, TextElement,
};
pub use history::{CommitMode, History};
pub use input::{InputEvent, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use interaction::{Gesture, Grab, Interaction, Mutation, Transition};
pub use shortcuts::{Command, Shortcut, ShortcutRegistry};
pub use tools::{ToolKind, ToolManager};
pub use viewport::ViewportOffset;
