//! Inventory aggregation module.
//!
//! Stock-status classification, dashboard statistics and multi-predicate
//! filtering over an immutable snapshot of inventory batches, plus the recent
//! activity feed. Everything here is deterministic (no IO, no shared state).

pub mod activity;
pub mod filter;
pub mod record;
pub mod statistics;
pub mod status;

pub use activity::{Activity, ActivityKind, ActivitySeedling, RECENT_ACTIVITY_LIMIT, recent_activities};
pub use filter::{InventoryFilter, filter_records, filter_records_owned};
pub use record::InventoryRecord;
pub use statistics::{DashboardStatistics, compute_dashboard_statistics};
pub use status::{
    LOW_STOCK_THRESHOLD, OUT_OF_STOCK_AVAILABLE, StockStatus, StockThresholds, classify_stock_status,
    stock_status_label,
};
