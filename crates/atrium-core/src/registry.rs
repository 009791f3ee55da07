//! In-Memory Registries
//!
//! A keyed record list with a single exclusive "current" slot. The slot
//! replaces per-record activation booleans: because there is exactly one
//! owner cell, readers can never observe two records current at once, and
//! the old-current/new-current swap is one atomic write.

use parking_lot::RwLock;
use uuid::Uuid;

use crate::records::Keyed;

/// Thread-safe registry for one record kind.
#[derive(Debug)]
pub struct Registry<T> {
    items: RwLock<Vec<T>>,
    current: RwLock<Option<Uuid>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            current: RwLock::new(None),
        }
    }
}

impl<T: Keyed + Clone> Registry<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            current: RwLock::new(None),
        }
    }

    pub fn list(&self) -> Vec<T> {
        self.items.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<T> {
        self.items.read().iter().find(|i| i.key() == id).cloned()
    }

    pub fn insert(&self, item: T) {
        self.items.write().push(item);
    }

    /// Replace the record with the given key wholesale.
    pub fn replace(&self, id: Uuid, item: T) -> bool {
        let mut items = self.items.write();
        match items.iter_mut().find(|i| i.key() == id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    /// Mutate the record with the given key in place; returns the
    /// updated record.
    pub fn update<F: FnOnce(&mut T)>(&self, id: Uuid, f: F) -> Option<T> {
        let mut items = self.items.write();
        let item = items.iter_mut().find(|i| i.key() == id)?;
        f(item);
        Some(item.clone())
    }

    /// Remove a record. A removed record cannot stay current.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| i.key() != id);
        let removed = items.len() != before;
        if removed {
            let mut current = self.current.write();
            if *current == Some(id) {
                *current = None;
            }
        }
        removed
    }

    /// Point the exclusive current slot at the given record. The
    /// previous owner is implicitly un-marked by the same write.
    pub fn set_current(&self, id: Uuid) -> bool {
        let items = self.items.read();
        if !items.iter().any(|i| i.key() == id) {
            return false;
        }
        *self.current.write() = Some(id);
        true
    }

    pub fn current_id(&self) -> Option<Uuid> {
        *self.current.read()
    }

    pub fn current(&self) -> Option<T> {
        let id = self.current_id()?;
        self.get(id)
    }

    pub fn is_current(&self, id: Uuid) -> bool {
        self.current_id() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
