//! Form-state store contract.
//!
//! A [`FormStore`] holds the values users type into each row, keyed by row id.
//! The row controller only ever writes single keys and reads whole snapshots;
//! everything else about the store (validation, subscriptions, submission)
//! belongs to the host form library.

mod memory;

pub use memory::*;

use std::fmt::Debug;

/// Per-row value storage shared with the rest of the form.
///
/// # Example
///
/// ```
/// use rowform::store::{FormStore, MemoryFormStore};
///
/// let store = MemoryFormStore::<String, i32>::new();
/// store.change(&"a".to_string(), Some(1));
/// assert_eq!(store.snapshot().get(&"a".to_string()), Some(&1));
///
/// store.change(&"a".to_string(), None);
/// assert!(store.snapshot().is_empty());
/// ```
pub trait FormStore: Send + Sync {
    /// Row id type.
    type Key: Clone + PartialEq + Debug + Send + Sync;

    /// Value stored for one row.
    type Value: Clone + Send + Sync;

    /// Set the value for `key`, or clear it when `value` is `None`.
    fn change(&self, key: &Self::Key, value: Option<Self::Value>);

    /// Read every current entry.
    fn snapshot(&self) -> FormSnapshot<Self::Key, Self::Value>;
}

/// Point-in-time copy of a store's entries, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> FormSnapshot<K, V> {
    /// Create a snapshot from ordered entries.
    pub fn new(entries: Vec<(K, V)>) -> Self {
        Self { entries }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Consume the snapshot, keeping only the keys.
    pub fn into_keys(self) -> Vec<K> {
        self.entries.into_iter().map(|(key, _)| key).collect()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K: PartialEq, V> FormSnapshot<K, V> {
    /// Look up the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }
}

impl<K, V> Default for FormSnapshot<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormSnapshot<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
