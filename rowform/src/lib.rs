pub mod config;
pub mod error;
pub mod factory;
pub mod rows;
pub mod store;

pub use rows::Rows;

pub mod prelude {
    pub use crate::config::{RowsConfig, ZeroPosition};
    pub use crate::error::RowsError;
    pub use crate::factory::RowFactory;
    pub use crate::rows::Rows;
    pub use crate::store::{FormSnapshot, FormStore, MemoryFormStore};
}
