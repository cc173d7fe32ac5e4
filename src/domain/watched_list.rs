// src/domain/watched_list.rs

/// A collection that remembers the items it was loaded with so the caller can
/// persist only the difference after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedList<T> {
    initial: Vec<T>,
    current: Vec<T>,
    new: Vec<T>,
    removed: Vec<T>,
}

impl<T: Clone + PartialEq> WatchedList<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            new: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn current_items(&self) -> &[T] {
        &self.current
    }

    /// Items present now that were not part of the initial set.
    pub fn new_items(&self) -> &[T] {
        &self.new
    }

    /// Items of the initial set that are no longer present.
    pub fn removed_items(&self) -> &[T] {
        &self.removed
    }

    pub fn contains(&self, item: &T) -> bool {
        self.current.contains(item)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Replace the whole collection. Differences are always computed against
    /// the initial set, so repeated updates do not accumulate stale entries.
    pub fn update(&mut self, items: Vec<T>) {
        let mut current: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if !current.contains(&item) {
                current.push(item);
            }
        }

        self.new = current
            .iter()
            .filter(|item| !self.initial.contains(item))
            .cloned()
            .collect();
        self.removed = self
            .initial
            .iter()
            .filter(|item| !current.contains(item))
            .cloned()
            .collect();
        self.current = current;
    }
}

impl<T: Clone + PartialEq> Default for WatchedList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
