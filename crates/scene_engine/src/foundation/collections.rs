//! Specialized collection types

use std::collections::HashSet;
use std::hash::Hash;

/// Insertion-ordered queue that holds each item at most once
///
/// Pushing an item that is already queued is a no-op, so producers can signal
/// as often as they like without growing the queue.
#[derive(Debug, Clone)]
pub struct UniqueQueue<T> {
    items: Vec<T>,
    members: HashSet<T>,
}

impl<T: Copy + Eq + Hash> UniqueQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Append an item unless it is already queued. Returns true if it was added.
    pub fn push(&mut self, item: T) -> bool {
        if self.members.insert(item) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Remove an item wherever it sits. Returns true if it was queued.
    pub fn remove(&mut self, item: &T) -> bool {
        if self.members.remove(item) {
            self.items.retain(|queued| queued != item);
            true
        } else {
            false
        }
    }

    /// Check whether an item is queued
    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Move every item out, leaving a fresh empty queue behind
    pub fn take(&mut self) -> Vec<T> {
        self.members.clear();
        std::mem::take(&mut self.items)
    }
}

impl<T: Copy + Eq + Hash> Default for UniqueQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
