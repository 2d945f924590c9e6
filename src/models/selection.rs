use serde::{Serialize, Serializer};

/// What a toggle did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item was absent and has been appended
    Added,
    /// The item was present and has been removed
    Removed,
    /// The item was absent but the collection is full; nothing changed
    AtCapacity,
}

/// Ordered, duplicate-free collection with toggle semantics
///
/// Repeat-toggling an item adds it or removes it, so two toggles of the same
/// item restore the original state. A bounded list silently ignores adds once
/// full; removal is always possible.
#[derive(Debug, Clone)]
pub struct SelectionList<T> {
    items: Vec<T>,
    capacity: Option<usize>,
}

impl<T: PartialEq> SelectionList<T> {
    /// Creates a list with no upper bound
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            capacity: None,
        }
    }

    /// Creates a list that holds at most `capacity` items
    pub fn bounded(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Toggles membership, preserving insertion order of the survivors
    pub fn toggle(&mut self, item: T) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|existing| *existing == item) {
            self.items.remove(pos);
            ToggleOutcome::Removed
        } else if self.capacity.is_some_and(|cap| self.items.len() >= cap) {
            ToggleOutcome::AtCapacity
        } else {
            self.items.push(item);
            ToggleOutcome::Added
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Serialize> Serialize for SelectionList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
