//! Nursery inventory dashboard.
//!
//! Wires the inventory aggregator to a data source and to the store's change
//! notifications, keeps the last good snapshot, and turns it into display
//! view models. No rendering happens here.

pub mod config;
pub mod service;
pub mod snapshot;
pub mod source;
pub mod view;

pub use config::{ConfigWarning, DashboardConfig};
pub use service::{Dashboard, PumpReport};
pub use snapshot::Snapshot;
pub use source::{DataSource, DataSourceError, InMemoryDataSource, JsonSnapshotSource};
pub use view::{ActivityLine, InventoryCard, StatisticsView};
