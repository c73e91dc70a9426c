//! Error types.

use thiserror::Error;

/// Errors returned by the positional array operations on [`Rows`](crate::Rows).
///
/// The row-id based operations never fail; a missing row degrades to a no-op
/// or a `None`/`false` result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowsError {
    /// An index was past the end of the row list.
    #[error("Row index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}
