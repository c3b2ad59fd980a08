//! Order-preserving grouping of records by a derived key.
//!
//! Keys appear in the order they are first seen, not sorted. Callers that
//! want alphabetical groups sort the input before grouping.
//!
//! # Example
//!
//! ```rust
//! use address_book::grouping::group_by;
//!
//! let names = vec!["Amy", "Bob", "Ben"];
//! let groups = group_by(names, |name| name.chars().next());
//!
//! assert_eq!(groups.get(&Some('B')), Some(&vec!["Bob", "Ben"]));
//! ```

mod field;

pub use field::{group_by_field, GroupingError};

use serde::Serialize;
use std::borrow::Borrow;

/// Key to items mapping that remembers first-seen key order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Groups<K, T> {
    groups: Vec<(K, Vec<T>)>,
}

impl<K, T> Default for Groups<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Groups<K, T> {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(|(key, _)| key)
    }

    /// `(key, items)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> + '_ {
        self.groups
            .iter()
            .map(|(key, items)| (key, items.as_slice()))
    }

    /// Consume the grouping into its ordered pairs.
    pub fn into_vec(self) -> Vec<(K, Vec<T>)> {
        self.groups
    }
}

impl<K: PartialEq, T> Groups<K, T> {
    /// Items grouped under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&Vec<T>>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.groups
            .iter()
            .find(|(candidate, _)| <K as Borrow<Q>>::borrow(candidate) == key)
            .map(|(_, items)| items)
    }

    /// Append `item` to the group for `key`, creating the group if needed.
    pub fn push(&mut self, key: K, item: T) {
        match self.groups.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some((_, items)) => items.push(item),
            None => self.groups.push((key, vec![item])),
        }
    }
}

impl<K: Serialize, T: Serialize> Serialize for Groups<K, T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|(key, items)| (key, items)))
    }
}

/// Partition `items` into groups keyed by `key_fn`, in a single pass.
///
/// Every item lands in exactly one group; nothing is deduplicated or
/// dropped, and items keep their relative order inside a group.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Groups<K, I::Item>
where
    I: IntoIterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups = Groups::new();
    for item in items {
        let key = key_fn(&item);
        groups.push(key, item);
    }
    groups
}
