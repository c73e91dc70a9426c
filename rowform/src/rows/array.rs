//! Positional array operations.
//!
//! Index-based counterparts to the row-id operations, following the
//! final-form-arrays vocabulary. Unlike the row-id operations these report
//! bad indices as [`RowsError`] and leave the list untouched.

use log::{debug, warn};

use crate::error::RowsError;
use crate::store::FormStore;

use super::state::Rows;

impl<S: FormStore> Rows<S> {
    fn out_of_bounds(&self, index: usize, len: usize) -> RowsError {
        warn!(
            "{}: index {} out of bounds (len {})",
            self.config.name, index, len
        );
        RowsError::IndexOutOfBounds { index, len }
    }

    /// Append `rows` to the end. The store is left alone.
    pub fn concat(&self, rows: Vec<S::Key>) {
        if rows.is_empty() {
            return;
        }
        let mut guard = self.write();
        let added = rows.len();
        guard.rows.extend(rows);
        guard.touch();
        debug!("{}: concatenated {} rows", self.config.name, added);
    }

    /// Insert `row` (or a generated one) at `index`, storing `values` under it
    /// if given.
    ///
    /// `index` may equal the length, which appends.
    pub fn insert(
        &self,
        index: usize,
        row: Option<S::Key>,
        values: Option<S::Value>,
    ) -> Result<S::Key, RowsError> {
        let row = row.unwrap_or_else(|| self.factory.generate());
        {
            let mut guard = self.write();
            let len = guard.rows.len();
            if index > len {
                return Err(self.out_of_bounds(index, len));
            }
            guard.rows.insert(index, row.clone());
            guard.touch();
        }
        debug!("{}: inserted {:?} at {}", self.config.name, row, index);

        if values.is_some() {
            self.store.change(&row, values);
        }
        Ok(row)
    }

    /// Move the row at `from` so that it ends up at `to`.
    pub fn move_row(&self, from: usize, to: usize) -> Result<(), RowsError> {
        let mut guard = self.write();
        let len = guard.rows.len();
        for index in [from, to] {
            if index >= len {
                return Err(self.out_of_bounds(index, len));
            }
        }
        if from == to {
            return Ok(());
        }

        let row = guard.rows.remove(from);
        guard.rows.insert(to, row);
        guard.touch();
        debug!("{}: moved row {} to {}", self.config.name, from, to);
        Ok(())
    }

    /// Exchange the rows at `a` and `b`.
    pub fn swap(&self, a: usize, b: usize) -> Result<(), RowsError> {
        let mut guard = self.write();
        let len = guard.rows.len();
        for index in [a, b] {
            if index >= len {
                return Err(self.out_of_bounds(index, len));
            }
        }
        if a == b {
            return Ok(());
        }

        guard.rows.swap(a, b);
        guard.touch();
        debug!("{}: swapped rows {} and {}", self.config.name, a, b);
        Ok(())
    }

    /// Remove the last row and clear its stored values.
    pub fn pop(&self) -> Option<S::Key> {
        let row = {
            let mut guard = self.write();
            let row = guard.rows.pop()?;
            guard.touch();
            row
        };
        debug!("{}: popped {:?}", self.config.name, row);

        self.store.change(&row, None);
        Some(row)
    }

    /// Remove the first row and clear its stored values.
    pub fn shift(&self) -> Option<S::Key> {
        let row = {
            let mut guard = self.write();
            if guard.rows.is_empty() {
                return None;
            }
            let row = guard.rows.remove(0);
            guard.touch();
            row
        };
        debug!("{}: shifted {:?}", self.config.name, row);

        self.store.change(&row, None);
        Some(row)
    }

    /// Remove the rows at `indices` and clear their stored values.
    ///
    /// Every index must be in bounds or nothing is removed. Repeated indices
    /// count once. The removed ids are returned in list order.
    pub fn remove_batch(&self, indices: &[usize]) -> Result<Vec<S::Key>, RowsError> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let removed = {
            let mut guard = self.write();
            let len = guard.rows.len();
            if let Some(&index) = indices.last()
                && index >= len
            {
                return Err(self.out_of_bounds(index, len));
            }
            if indices.is_empty() {
                return Ok(Vec::new());
            }

            let mut removed: Vec<S::Key> = indices
                .iter()
                .rev()
                .map(|&index| guard.rows.remove(index))
                .collect();
            removed.reverse();
            guard.touch();
            removed
        };
        debug!("{}: removed batch {:?}", self.config.name, removed);

        for row in &removed {
            self.store.change(row, None);
        }
        Ok(removed)
    }
}
