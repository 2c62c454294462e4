//! Canvas controller owning the drawing state.

use crate::config::CanvasConfig;
use crate::elements::{Element, ElementStore, ShapeFactory};
use crate::history::{CommitMode, History};
use crate::input::{InputEvent, KeyEvent, Modifiers, MouseButton, PointerEvent};
use crate::interaction::{self, Gesture, Interaction, Mutation};
use crate::shortcuts::{Command, ShortcutRegistry};
use crate::tools::ToolManager;
use crate::viewport::ViewportOffset;

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// The visible drawing changed and the surface must be redrawn.
    pub redraw: bool,
}

impl Response {
    pub const NONE: Self = Self { redraw: false };
    pub const REDRAW: Self = Self { redraw: true };
}

/// The drawing canvas.
///
/// Owns the element history, the viewport, the tool palette and the
/// interaction state, and routes every input event through them. Events
/// are handled one at a time to completion.
pub struct Canvas<F: ShapeFactory> {
    factory: F,
    config: CanvasConfig,
    history: History<ElementStore<F::Descriptor>>,
    viewport: ViewportOffset,
    tools: ToolManager,
    interaction: Interaction,
}

impl<F: ShapeFactory> Canvas<F> {
    /// Create a canvas with default settings.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, CanvasConfig::default())
    }

    pub fn with_config(factory: F, config: CanvasConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(ElementStore::new(), limit),
            None => History::new(ElementStore::new()),
        };
        Self {
            factory,
            viewport: ViewportOffset::new(config.pan_offset),
            tools: ToolManager::new(config.initial_tool, config.dashed),
            interaction: Interaction::Idle,
            history,
            config,
        }
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Pointer(PointerEvent::Down { position, button }) => {
                if button != MouseButton::Left {
                    log::trace!("Ignoring {:?} button press", button);
                    return Response::NONE;
                }
                self.dispatch(Gesture::Down(self.viewport.to_drawing(position)))
            }
            InputEvent::Pointer(PointerEvent::Move { position }) => {
                self.dispatch(Gesture::Move(self.viewport.to_drawing(position)))
            }
            InputEvent::Pointer(PointerEvent::Up { button, .. }) => {
                if button != MouseButton::Left {
                    return Response::NONE;
                }
                self.dispatch(Gesture::Up)
            }
            InputEvent::Pointer(PointerEvent::Scroll { delta, .. }) => {
                self.viewport.pan(delta);
                log::debug!("Panned to ({}, {})", self.viewport.offset.x, self.viewport.offset.y);
                Response::REDRAW
            }
            InputEvent::Key(KeyEvent::Pressed { key, modifiers }) => self.key_pressed(&key, &modifiers),
            InputEvent::Key(KeyEvent::Released { .. }) => Response::NONE,
            InputEvent::FocusLost { text } => self.dispatch(Gesture::FocusLost(text)),
        }
    }

    fn key_pressed(&mut self, key: &str, modifiers: &Modifiers) -> Response {
        if matches!(self.interaction, Interaction::Writing { .. }) {
            log::trace!("Key {:?} goes to the text entry", key);
            return Response::NONE;
        }
        match ShortcutRegistry::lookup(key, modifiers) {
            Some(command) => self.execute(command),
            None => Response::NONE,
        }
    }

    /// Run a shortcut command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::SelectTool(tool) => {
                self.tools.set_tool(tool);
                log::info!("Tool changed to {}", tool.name());
                Response::NONE
            }
            Command::ToggleDashed => {
                let dashed = self.tools.toggle_dashed();
                log::info!("Dashed strokes {}", if dashed { "on" } else { "off" });
                Response::NONE
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Reset => {
                self.reset();
                Response::REDRAW
            }
        }
    }

    fn dispatch(&mut self, gesture: Gesture) -> Response {
        let transition = interaction::step(&self.interaction, &self.tools, self.history.current(), gesture);
        if transition.next != self.interaction {
            log::debug!("Interaction {} -> {}", self.interaction.name(), transition.next.name());
        }
        self.interaction = transition.next;
        match transition.mutation {
            Some(mutation) => {
                self.apply(mutation);
                Response::REDRAW
            }
            None => Response::NONE,
        }
    }

    fn apply(&mut self, mutation: Mutation) {
        let factory = &self.factory;
        match mutation {
            Mutation::Append { kind, geometry, dashed } => {
                self.history.commit_with(
                    |store| {
                        let mut next = store.clone();
                        let id = next.next_id();
                        next.push(Element::create(factory, id, kind, geometry, dashed));
                        next
                    },
                    CommitMode::Append,
                );
            }
            Mutation::Update {
                id,
                kind,
                geometry,
                update,
                mode,
            } => {
                self.history.commit_with(
                    |store| {
                        let mut next = store.clone();
                        next.update_at(factory, id, kind, geometry, &update);
                        next
                    },
                    mode,
                );
            }
            Mutation::Checkpoint => {
                self.history.commit_with(Clone::clone, CommitMode::Append);
            }
        }
    }

    /// Step back in history. Only takes effect while idle.
    pub fn undo(&mut self) -> Response {
        if !self.interaction.is_idle() {
            log::trace!("Undo ignored while {}", self.interaction.name());
            return Response::NONE;
        }
        if self.history.undo() {
            log::info!("Undo performed");
            Response::REDRAW
        } else {
            Response::NONE
        }
    }

    /// Step forward in history. Only takes effect while idle.
    pub fn redo(&mut self) -> Response {
        if !self.interaction.is_idle() {
            log::trace!("Redo ignored while {}", self.interaction.name());
            return Response::NONE;
        }
        if self.history.redo() {
            log::info!("Redo performed");
            Response::REDRAW
        } else {
            Response::NONE
        }
    }

    /// Clear the drawing and return to the configured initial settings.
    pub fn reset(&mut self) {
        self.history.reset(ElementStore::new());
        self.viewport.reset(self.config.pan_offset);
        self.tools.reset(self.config.initial_tool, self.config.dashed);
        self.interaction = Interaction::Idle;
        log::info!("Canvas reset");
    }

    /// The elements in the current snapshot.
    pub fn elements(&self) -> &ElementStore<F::Descriptor> {
        self.history.current()
    }

    /// The selected element, if any.
    pub fn selected(&self) -> Option<&Element<F::Descriptor>> {
        self.interaction.selected().and_then(|id| self.elements().get(id))
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn history(&self) -> &History<ElementStore<F::Descriptor>> {
        &self.history
    }

    pub fn viewport(&self) -> &ViewportOffset {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}
