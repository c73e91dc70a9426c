//! In-memory form store.

use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use super::{FormSnapshot, FormStore};

/// A form store backed by an insertion-ordered vector.
///
/// Clones share the same entries, so one handle can be given to a
/// [`Rows`](crate::Rows) controller while another is kept for reading values
/// back. Lookups are linear, which is fine at form sizes.
///
/// # Example
///
/// ```
/// use rowform::store::MemoryFormStore;
///
/// let store = MemoryFormStore::with_values(vec![("a".to_string(), 1)]);
/// assert_eq!(store.get(&"a".to_string()), Some(1));
/// ```
#[derive(Debug)]
pub struct MemoryFormStore<K, V> {
    entries: Arc<RwLock<Vec<(K, V)>>>,
}

impl<K, V> MemoryFormStore<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store holding the given entries, in order.
    pub fn with_values(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: PartialEq, V: Clone> MemoryFormStore<K, V> {
    /// Get a clone of the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.clone())
    }
}

impl<K, V> FormStore for MemoryFormStore<K, V>
where
    K: Clone + PartialEq + Debug + Send + Sync,
    V: Clone + Send + Sync,
{
    type Key = K;
    type Value = V;

    fn change(&self, key: &K, value: Option<V>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let existing = entries.iter().position(|(k, _)| k == key);
        match (existing, value) {
            (Some(index), Some(value)) => entries[index].1 = value,
            (Some(index), None) => {
                entries.remove(index);
            }
            (None, Some(value)) => entries.push((key.clone(), value)),
            (None, None) => {}
        }
    }

    fn snapshot(&self) -> FormSnapshot<K, V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        FormSnapshot::new(entries.clone())
    }
}

impl<K, V> Clone for MemoryFormStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for MemoryFormStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
