//! Row list controller.
//!
//! [`Rows`] owns the ordered list of row ids behind a dynamic form and keeps
//! the form's [`FormStore`](crate::store::FormStore) consistent with
//! structural edits: removing a row clears its values, copying a row copies
//! them, and so on.

mod array;
mod state;

pub use state::Rows;
