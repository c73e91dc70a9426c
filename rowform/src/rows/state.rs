//! Row list state and row-id based operations.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::config::{RowsConfig, ZeroPosition};
use crate::factory::RowFactory;
use crate::store::FormStore;

type Key<S> = <S as FormStore>::Key;
type Value<S> = <S as FormStore>::Value;

/// Internal state for the row controller.
#[derive(Debug)]
pub(super) struct RowsInner<K> {
    /// The row ids, in render order.
    pub rows: Vec<K>,
    /// Whether the list has diverged from its baseline.
    pub dirty: bool,
    /// Number of list changes so far.
    pub revision: u64,
}

impl<K> RowsInner<K> {
    /// Record a change to the list.
    pub fn touch(&mut self) {
        self.dirty = true;
        self.revision += 1;
    }
}

/// Ordered row ids backing a dynamic form.
///
/// `Rows` is a cheap-to-clone handle: clones share the same list, store and
/// factory, so it can be handed to every event handler that edits the form.
/// Operations that add rows return the id they added.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use rowform::Rows;
/// use rowform::factory::RowFactory;
/// use rowform::store::MemoryFormStore;
///
/// let store = Arc::new(MemoryFormStore::<String, u32>::new());
/// let rows = Rows::new(
///     RowFactory::sequential("row-"),
///     Arc::clone(&store),
///     Some(vec!["a".to_string(), "b".to_string()]),
/// );
///
/// let added = rows.push();
/// assert_eq!(rows.rows(), vec!["a", "b", "row-0"]);
///
/// rows.remove(&"a".to_string());
/// assert_eq!(rows.rows(), vec!["b".to_string(), added]);
/// assert!(rows.is_dirty());
/// ```
pub struct Rows<S: FormStore> {
    pub(super) inner: Arc<RwLock<RowsInner<Key<S>>>>,
    pub(super) store: Arc<S>,
    pub(super) factory: RowFactory<Key<S>>,
    pub(super) config: Arc<RowsConfig>,
}

impl<S: FormStore> Rows<S> {
    /// Create a controller with the default config.
    ///
    /// With `initial_rows` the list starts as that baseline and is clean.
    /// Without it the list is seeded from the keys currently in `store`, and
    /// is dirty from the start since there is no baseline to match.
    pub fn new(
        factory: RowFactory<Key<S>>,
        store: Arc<S>,
        initial_rows: Option<Vec<Key<S>>>,
    ) -> Self {
        Self::with_config(factory, store, initial_rows, RowsConfig::default())
    }

    /// Create a controller with an explicit config.
    pub fn with_config(
        factory: RowFactory<Key<S>>,
        store: Arc<S>,
        initial_rows: Option<Vec<Key<S>>>,
        config: RowsConfig,
    ) -> Self {
        let dirty = initial_rows.is_none();
        let rows = initial_rows.unwrap_or_else(|| store.snapshot().into_keys());
        debug!(
            "{}: created with {} rows (baseline: {})",
            config.name,
            rows.len(),
            !dirty
        );

        Self {
            inner: Arc::new(RwLock::new(RowsInner {
                rows,
                dirty,
                revision: 0,
            })),
            store,
            factory,
            config: Arc::new(config),
        }
    }

    pub(super) fn read(&self) -> RwLockReadGuard<'_, RowsInner<Key<S>>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(super) fn write(&self) -> RwLockWriteGuard<'_, RowsInner<Key<S>>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the controller's config.
    pub fn config(&self) -> &RowsConfig {
        &self.config
    }

    /// Get the form store the controller writes to.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Get a copy of the current row ids.
    pub fn rows(&self) -> Vec<Key<S>> {
        self.read().rows.clone()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the row id at `index`.
    pub fn get(&self, index: usize) -> Option<Key<S>> {
        self.read().rows.get(index).cloned()
    }

    /// Check if `row` is in the list.
    pub fn contains(&self, row: &Key<S>) -> bool {
        self.read().rows.contains(row)
    }

    /// Index of the first occurrence of `row`.
    pub fn row_index(&self, row: &Key<S>) -> Option<usize> {
        let index = self.read().rows.iter().position(|item| item == row);
        if index.is_none() {
            trace!("{}: row {:?} not found", self.config.name, row);
        }
        index
    }

    /// Whether the list has diverged from the baseline it was seeded with.
    pub fn is_dirty(&self) -> bool {
        self.read().dirty
    }

    /// Number of changes made to the list since construction.
    ///
    /// Compare against a previously seen value to decide whether to re-render.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Produce a fresh row id without touching the list.
    pub fn generate(&self) -> Key<S> {
        self.factory.generate()
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Replace the list and its baseline.
    ///
    /// `None` empties the list and leaves it dirty, as in [`Rows::new`].
    pub fn reset(&self, initial_rows: Option<Vec<Key<S>>>) {
        let mut guard = self.write();
        guard.dirty = initial_rows.is_none();
        guard.rows = initial_rows.unwrap_or_default();
        guard.revision += 1;
        debug!("{}: reset to {} rows", self.config.name, guard.rows.len());
    }

    /// Replace the list wholesale. The store is left alone.
    pub fn update(&self, rows: Vec<Key<S>>) {
        let mut guard = self.write();
        guard.rows = rows;
        guard.touch();
        debug!("{}: updated to {} rows", self.config.name, guard.rows.len());
    }

    /// Append a freshly generated row.
    pub fn push(&self) -> Key<S> {
        let row = self.factory.generate();
        let mut guard = self.write();
        guard.rows.push(row.clone());
        guard.touch();
        debug!("{}: pushed {:?}", self.config.name, row);
        row
    }

    /// Prepend `row` (or a generated one), storing `values` under it if given.
    pub fn unshift(&self, row: Option<Key<S>>, values: Option<Value<S>>) -> Key<S> {
        let row = row.unwrap_or_else(|| self.factory.generate());
        {
            let mut guard = self.write();
            guard.rows.insert(0, row.clone());
            guard.touch();
        }
        debug!("{}: unshifted {:?}", self.config.name, row);

        if values.is_some() {
            self.store.change(&row, values);
        }
        row
    }

    /// Remove the first occurrence of `row` and clear its stored values.
    ///
    /// The store entry is cleared even when `row` is not in the list.
    /// Returns whether a row was removed.
    pub fn remove(&self, row: &Key<S>) -> bool {
        let removed = {
            let mut guard = self.write();
            match guard.rows.iter().position(|item| item == row) {
                Some(index) => {
                    guard.rows.remove(index);
                    guard.touch();
                    true
                }
                None => false,
            }
        };
        debug!("{}: removed {:?} (present: {})", self.config.name, row, removed);

        self.store.change(row, None);
        removed
    }

    /// Insert a copy of `row` and give it the same stored values.
    ///
    /// The copy is `new_row`, or a generated id. It goes in at `position`
    /// when one is given; otherwise at `row`'s current index, so it sits just
    /// before the original, or at the front if `row` is not in the list. How a
    /// position of zero is read depends on [`RowsConfig::zero_position`].
    /// Positions past the end append.
    pub fn copy(
        &self,
        row: &Key<S>,
        new_row: Option<Key<S>>,
        position: Option<usize>,
    ) -> Key<S> {
        let new_row = new_row.unwrap_or_else(|| self.factory.generate());
        {
            let mut guard = self.write();
            let index = copy_index(&guard.rows, row, position, self.config.zero_position);
            guard.rows.insert(index, new_row.clone());
            guard.touch();
            debug!(
                "{}: copied {:?} to {:?} at {}",
                self.config.name, row, new_row, index
            );
        }

        let values = self.store.snapshot().get(row).cloned();
        self.store.change(&new_row, values);
        new_row
    }

    /// Swap the positions of `drag_row` and `hover_row`.
    ///
    /// Does nothing and returns `false` unless both rows are in the list.
    pub fn drag(&self, drag_row: &Key<S>, hover_row: &Key<S>) -> bool {
        let mut guard = self.write();
        let drag_index = guard.rows.iter().position(|item| item == drag_row);
        let hover_index = guard.rows.iter().position(|item| item == hover_row);

        match (drag_index, hover_index) {
            (Some(drag_index), Some(hover_index)) => {
                guard.rows.swap(drag_index, hover_index);
                guard.touch();
                debug!(
                    "{}: dragged {:?} onto {:?}",
                    self.config.name, drag_row, hover_row
                );
                true
            }
            _ => {
                trace!(
                    "{}: drag of {:?} onto {:?} ignored",
                    self.config.name, drag_row, hover_row
                );
                false
            }
        }
    }
}

/// Where `copy` inserts into `rows`.
fn copy_index<K: PartialEq>(
    rows: &[K],
    source: &K,
    position: Option<usize>,
    zero_position: ZeroPosition,
) -> usize {
    let position = match position {
        Some(0) if zero_position == ZeroPosition::SourceIndex => None,
        other => other,
    };

    match position {
        Some(position) => position.min(rows.len()),
        None => rows.iter().position(|item| item == source).unwrap_or(0),
    }
}

impl<S: FormStore> Clone for Rows<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            store: Arc::clone(&self.store),
            factory: self.factory.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: FormStore> std::fmt::Debug for Rows<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.read();
        f.debug_struct("Rows")
            .field("name", &self.config.name)
            .field("rows", &guard.rows)
            .field("dirty", &guard.dirty)
            .field("revision", &guard.revision)
            .finish()
    }
}
