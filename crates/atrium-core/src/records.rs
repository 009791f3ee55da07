//! Ordered Keyed Records
//!
//! One collection abstraction for every editable sub-record list in the
//! portal: form fields, layout routes, carousel images. Order is display
//! order and is preserved across edits.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sub-record addressable by a stable opaque id.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

/// An ordered collection of identifiable sub-records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Records<T>(Vec<T>);

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: Keyed> Records<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end. Order is append-stable.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    /// Remove the record with the given id. Removal is idempotent:
    /// an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|r| r.key() != id);
        self.0.len() != before
    }

    /// Mutate the record with the given id in place. Returns `false`
    /// when the id is absent; sibling records are untouched either way.
    pub fn update<F: FnOnce(&mut T)>(&mut self, id: Uuid, f: F) -> bool {
        match self.0.iter_mut().find(|r| r.key() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    /// Move the record with the given id to `index`, shifting the
    /// records in between. Out-of-range targets clamp to the end.
    pub fn move_to(&mut self, id: Uuid, index: usize) -> bool {
        let Some(from) = self.0.iter().position(|r| r.key() == id) else {
            return false;
        };
        let item = self.0.remove(from);
        let to = index.min(self.0.len());
        self.0.insert(to, item);
        true
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.0.iter().find(|r| r.key() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Keyed> FromIterator<T> for Records<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Records<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: Uuid,
        name: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> Uuid {
            self.id
        }
    }

    fn item(name: &'static str) -> Item {
        Item { id: Uuid::new_v4(), name }
    }

    #[test]
    fn test_push_is_append_stable() {
        let mut records = Records::new();
        records.push(item("a"));
        records.push(item("b"));
        records.push(item("c"));

        let names: Vec<_> = records.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut records: Records<Item> = [item("a"), item("b")].into_iter().collect();
        let before: Vec<_> = records.iter().cloned().collect();

        assert!(!records.remove(Uuid::new_v4()));
        let after: Vec<_> = records.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_touches_only_target() {
        let a = item("a");
        let b = item("b");
        let a_id = a.id;
        let mut records: Records<Item> = [a, b].into_iter().collect();

        assert!(records.update(a_id, |i| i.name = "edited"));
        assert_eq!(records.get(a_id).unwrap().name, "edited");
        assert_eq!(records.iter().nth(1).unwrap().name, "b");
    }

    #[test]
    fn test_move_to_reorders() {
        let a = item("a");
        let c_id;
        let mut records: Records<Item> = {
            let b = item("b");
            let c = item("c");
            c_id = c.id;
            [a, b, c].into_iter().collect()
        };

        assert!(records.move_to(c_id, 0));
        let names: Vec<_> = records.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_to_out_of_range_clamps_to_end() {
        let a = item("a");
        let a_id = a.id;
        let mut records: Records<Item> = [a, item("b")].into_iter().collect();

        assert!(records.move_to(a_id, 99));
        let names: Vec<_> = records.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
