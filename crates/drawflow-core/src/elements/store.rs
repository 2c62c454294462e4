//! The ordered element collection.

use super::{Element, ElementId, ElementKind, Geometry, ShapeElement, ShapeFactory};
use crate::hit_test;
use kurbo::Point;

/// Options for [`ElementStore::update_at`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementUpdate {
    /// New text for text elements (`None` keeps the current text).
    pub text: Option<String>,
}

impl ElementUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// All elements in creation order.
///
/// The element at position `i` has id `i`; elements are never removed or
/// renumbered. A whole store is one history snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStore<D> {
    elements: Vec<Element<D>>,
}

impl<D> Default for ElementStore<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ElementStore<D> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Id the next pushed element must carry.
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    /// Append an element.
    ///
    /// # Panics
    ///
    /// Panics if the element's id is not the next free position.
    pub fn push(&mut self, element: Element<D>) {
        assert_eq!(
            element.id(),
            self.next_id(),
            "element id must equal its position in the store"
        );
        self.elements.push(element);
    }

    pub fn get(&self, id: ElementId) -> Option<&Element<D>> {
        self.elements.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element<D>> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element<D>] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The oldest element under `point`.
    pub fn find_at(&self, point: Point) -> Option<&Element<D>> {
        hit_test::find_at(point, &self.elements)
    }

    /// Replace the element at `id`.
    ///
    /// Text elements only take the new text from `update`; their geometry
    /// is left untouched. Shapes are rebuilt from `geometry` with the dashed
    /// flag they were created with, which regenerates their descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an existing index.
    pub fn update_at<F>(
        &mut self,
        factory: &F,
        id: ElementId,
        kind: ElementKind,
        geometry: Geometry,
        update: &ElementUpdate,
    ) where
        F: ShapeFactory<Descriptor = D>,
    {
        let len = self.elements.len();
        let Some(slot) = self.elements.get_mut(id) else {
            panic!("update of element {id} out of range ({len} elements)");
        };

        match kind.shape_kind() {
            None => {
                if let Element::Text(text) = slot {
                    if let Some(new_text) = &update.text {
                        text.set_text(new_text.clone());
                    }
                } else {
                    panic!("text update targets shape element {id}");
                }
            }
            Some(shape_kind) => {
                let dashed = slot.dashed();
                *slot = Element::Shape(ShapeElement::new(factory, id, shape_kind, geometry, dashed));
            }
        }
    }
}

impl<'a, D> IntoIterator for &'a ElementStore<D> {
    type Item = &'a Element<D>;
    type IntoIter = std::slice::Iter<'a, Element<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
