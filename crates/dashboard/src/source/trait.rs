use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use nursery_catalog::Category;
use nursery_inventory::{Activity, InventoryRecord};

/// Failure to obtain a snapshot from the store.
///
/// Never partial: a failed call yields no data at all, and callers keep
/// whatever they held before.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {what}: {message}")]
    Decode { what: String, message: String },

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

impl DataSourceError {
    pub fn decode(what: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            what: what.into(),
            message: message.into(),
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Supplier of full-replacement snapshots of the three dashboard collections.
///
/// Each call returns the whole collection as of now; there is no paging and no
/// delta. Implementations decide transport and latency.
pub trait DataSource: Send + Sync {
    /// All categories, ordered by name.
    fn categories(&self) -> Result<Vec<Category>, DataSourceError>;

    /// All inventory batches with their joined seedling (and category name).
    fn inventory(&self) -> Result<Vec<InventoryRecord>, DataSourceError>;

    /// The `limit` most recent activities, newest first.
    fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>, DataSourceError>;
}

impl<S> DataSource for Arc<S>
where
    S: DataSource + ?Sized,
{
    fn categories(&self) -> Result<Vec<Category>, DataSourceError> {
        (**self).categories()
    }

    fn inventory(&self) -> Result<Vec<InventoryRecord>, DataSourceError> {
        (**self).inventory()
    }

    fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>, DataSourceError> {
        (**self).recent_activities(limit)
    }
}
