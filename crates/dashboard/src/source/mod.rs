//! Data-source boundary: where snapshots of the hosted tables come from.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryDataSource;
pub use json_file::JsonSnapshotSource;
pub use r#trait::{DataSource, DataSourceError};
