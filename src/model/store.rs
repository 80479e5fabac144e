use slotmap::SlotMap;

use super::placement::Placement;

slotmap::new_key_type! {
    /// Opaque identifier of a model element.
    pub struct ElementId;
}

/// Read-only access to element placements.
pub trait ElementStore {
    /// Returns the placement of `id`, or `None` if the element does not exist.
    fn placement(&self, id: ElementId) -> Option<Placement>;
}

/// An element store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryElementStore {
    elements: SlotMap<ElementId, Placement>,
}

impl InMemoryElementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element and returns its id.
    pub fn insert(&mut self, placement: Placement) -> ElementId {
        self.elements.insert(placement)
    }

    /// Removes an element, returning its placement if it existed.
    pub fn remove(&mut self, id: ElementId) -> Option<Placement> {
        self.elements.remove(id)
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementStore for InMemoryElementStore {
    fn placement(&self, id: ElementId) -> Option<Placement> {
        self.elements.get(id).copied()
    }
}
