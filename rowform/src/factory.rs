//! Row id generation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

/// Generator for fresh row ids.
///
/// The controller calls the factory whenever an operation needs a new row and
/// the caller did not supply one. It never looks inside the ids it gets back.
///
/// # Example
///
/// ```
/// use rowform::factory::RowFactory;
///
/// let factory = RowFactory::sequential("row-");
/// assert_eq!(factory.generate(), "row-0");
/// assert_eq!(factory.generate(), "row-1");
/// ```
pub struct RowFactory<K> {
    generate: Arc<dyn Fn() -> K + Send + Sync>,
}

impl<K> RowFactory<K> {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> K + Send + Sync + 'static,
    {
        Self {
            generate: Arc::new(f),
        }
    }

    /// Produce a fresh id.
    pub fn generate(&self) -> K {
        (self.generate)()
    }
}

impl RowFactory<String> {
    /// Ids of the form `{prefix}{n}`, counting from zero.
    ///
    /// Each factory (and its clones) shares one counter.
    pub fn sequential(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let counter = AtomicUsize::new(0);
        Self::new(move || format!("{}{}", prefix, counter.fetch_add(1, Ordering::SeqCst)))
    }

    /// Random v4 UUID strings.
    pub fn uuid() -> Self {
        Self::new(|| Uuid::new_v4().to_string())
    }
}

impl<K> Clone for RowFactory<K> {
    fn clone(&self) -> Self {
        Self {
            generate: Arc::clone(&self.generate),
        }
    }
}

impl<K> std::fmt::Debug for RowFactory<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowFactory").finish_non_exhaustive()
    }
}
