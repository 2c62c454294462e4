//! The interaction state machine.
//!
//! [`step`] maps the current state, the active tool, the current element
//! store and one gesture to the next state plus at most one mutation. It
//! never touches the store itself; the [`Canvas`](crate::Canvas) applies the
//! mutation and records it in history.

use crate::elements::{Element, ElementId, ElementKind, ElementStore, ElementUpdate, Geometry};
use crate::history::CommitMode;
use crate::tools::{ToolKind, ToolManager};
use kurbo::{Point, Vec2};

/// A selected element being dragged by the Select tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    pub id: ElementId,
    /// Geometry of the element when it was grabbed.
    pub origin: Geometry,
    /// Pointer position relative to the element's anchor at grab time.
    pub offset: Vec2,
}

/// What the user is in the middle of doing.
///
/// Every non-idle state tracks exactly one element, which is the current
/// selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// Dragging out a new shape.
    Drawing { id: ElementId },
    /// Dragging an existing element.
    Moving(Grab),
    /// Typing into a new text element.
    Writing { id: ElementId },
}

impl Interaction {
    /// The selected element, if any.
    pub fn selected(&self) -> Option<ElementId> {
        match self {
            Interaction::Idle => None,
            Interaction::Drawing { id } | Interaction::Writing { id } => Some(*id),
            Interaction::Moving(grab) => Some(grab.id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Interaction::Idle => "idle",
            Interaction::Drawing { .. } => "drawing",
            Interaction::Moving(_) => "moving",
            Interaction::Writing { .. } => "writing",
        }
    }
}

/// Pointer and focus input in drawing coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Down(Point),
    Move(Point),
    Up,
    /// The text-entry surface lost focus with this content.
    FocusLost(String),
}

/// A change to the element store requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Push a new element at the next id, as a new history step.
    Append {
        kind: ElementKind,
        geometry: Geometry,
        dashed: bool,
    },
    /// Rewrite an existing element.
    Update {
        id: ElementId,
        kind: ElementKind,
        geometry: Geometry,
        update: ElementUpdate,
        mode: CommitMode,
    },
    /// Start a new history step holding the current store unchanged.
    Checkpoint,
}

/// Result of a [`step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: Interaction,
    pub mutation: Option<Mutation>,
}

impl Transition {
    fn stay(state: &Interaction) -> Self {
        Self {
            next: state.clone(),
            mutation: None,
        }
    }

    fn to(next: Interaction, mutation: Mutation) -> Self {
        Self {
            next,
            mutation: Some(mutation),
        }
    }
}

/// Compute the transition for one gesture.
///
/// Gestures with no transition from the current state keep the state and
/// request nothing.
///
/// # Panics
///
/// Panics if the state tracks an element that is not in `store`.
pub fn step<D>(
    state: &Interaction,
    tools: &ToolManager,
    store: &ElementStore<D>,
    gesture: Gesture,
) -> Transition {
    match (state, gesture) {
        (Interaction::Idle, Gesture::Down(point)) => press(tools, store, point),

        (Interaction::Drawing { id }, Gesture::Move(point)) => {
            let element = tracked(store, *id);
            let geometry = element.geometry().with_end(point);
            Transition::to(
                state.clone(),
                Mutation::Update {
                    id: *id,
                    kind: element.kind(),
                    geometry,
                    update: ElementUpdate::default(),
                    mode: CommitMode::Overwrite,
                },
            )
        }

        (Interaction::Moving(grab), Gesture::Move(point)) => {
            let element = tracked(store, grab.id);
            let geometry = grab.origin.moved_to(point - grab.offset);
            Transition::to(
                state.clone(),
                Mutation::Update {
                    id: grab.id,
                    kind: element.kind(),
                    geometry,
                    update: ElementUpdate::default(),
                    mode: CommitMode::Overwrite,
                },
            )
        }

        (Interaction::Drawing { .. } | Interaction::Moving(_), Gesture::Up) => Transition {
            next: Interaction::Idle,
            mutation: None,
        },

        (Interaction::Writing { id }, Gesture::FocusLost(text)) => {
            let element = tracked(store, *id);
            Transition::to(
                Interaction::Idle,
                Mutation::Update {
                    id: *id,
                    kind: ElementKind::Text,
                    geometry: element.geometry(),
                    update: ElementUpdate::text(text),
                    mode: CommitMode::Append,
                },
            )
        }

        (_, gesture) => {
            log::trace!("Ignoring {:?} while {}", gesture, state.name());
            Transition::stay(state)
        }
    }
}

fn press<D>(tools: &ToolManager, store: &ElementStore<D>, point: Point) -> Transition {
    match tools.current_tool.element_kind() {
        None => match store.find_at(point) {
            Some(element) => {
                let origin = element.geometry();
                let grab = Grab {
                    id: element.id(),
                    origin,
                    offset: point - origin.start(),
                };
                Transition::to(Interaction::Moving(grab), Mutation::Checkpoint)
            }
            None => Transition::stay(&Interaction::Idle),
        },
        Some(kind) => {
            let id = store.next_id();
            let next = if tools.current_tool == ToolKind::Text {
                Interaction::Writing { id }
            } else {
                Interaction::Drawing { id }
            };
            Transition::to(
                next,
                Mutation::Append {
                    kind,
                    geometry: Geometry::at(point),
                    dashed: tools.dashed,
                },
            )
        }
    }
}

fn tracked<D>(store: &ElementStore<D>, id: ElementId) -> &Element<D> {
    match store.get(id) {
        Some(element) => element,
        None => panic!("interaction tracks element {id}, but the store has {} elements", store.len()),
    }
}
