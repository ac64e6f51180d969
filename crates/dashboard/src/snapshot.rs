use chrono::{DateTime, Utc};

use nursery_catalog::Category;
use nursery_inventory::{Activity, InventoryRecord};

/// Last good copy of each dashboard collection.
///
/// Each collection is replaced wholesale on a successful refresh and left
/// untouched on a failed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<InventoryRecord>,
    pub categories: Vec<Category>,
    pub activities: Vec<Activity>,
    pub inventory_refreshed_at: Option<DateTime<Utc>>,
    pub activities_refreshed_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Whether inventory has been loaded at least once.
    pub fn has_inventory(&self) -> bool {
        self.inventory_refreshed_at.is_some()
    }
}
