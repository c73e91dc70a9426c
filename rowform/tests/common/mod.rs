//! Shared test helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rowform::Rows;
use rowform::factory::RowFactory;
use rowform::store::{FormSnapshot, FormStore, MemoryFormStore};

/// A memory store that also records every `change` call.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub values: MemoryFormStore<String, String>,
    pub changes: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingStore {
    pub fn with_values(entries: &[(&str, &str)]) -> Self {
        Self {
            values: MemoryFormStore::with_values(
                entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            changes: Mutex::new(Vec::new()),
        }
    }

    pub fn changes(&self) -> Vec<(String, Option<String>)> {
        self.changes.lock().unwrap().clone()
    }
}

impl FormStore for RecordingStore {
    type Key = String;
    type Value = String;

    fn change(&self, key: &String, value: Option<String>) {
        self.changes
            .lock()
            .unwrap()
            .push((key.clone(), value.clone()));
        self.values.change(key, value);
    }

    fn snapshot(&self) -> FormSnapshot<String, String> {
        self.values.snapshot()
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Controller over a fresh recording store, with ids `new-0`, `new-1`, ...
pub fn rows_with(initial: &[&str]) -> (Rows<RecordingStore>, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    let rows = Rows::new(
        RowFactory::sequential("new-"),
        Arc::clone(&store),
        Some(strings(initial)),
    );
    (rows, store)
}
