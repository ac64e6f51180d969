//! Dashboard statistics over an inventory snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use nursery_catalog::Price;

use crate::record::InventoryRecord;

/// Summary counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    /// Sum of available + reserved across all batches.
    pub total_units: u64,
    /// Distinct seedling species referenced, dangling references included.
    pub distinct_species_count: usize,
    pub reserved_units: u64,
    /// Sum of total units x price per seedling (missing price counts as zero).
    pub total_value: Price,
}

impl DashboardStatistics {
    pub fn available_units(&self) -> u64 {
        self.total_units - self.reserved_units
    }
}

/// Aggregate dashboard statistics.
///
/// Records whose seedling snapshot is missing still contribute their units and
/// their species id; only their value is zero. The reduction is commutative, so
/// the result does not depend on input order.
pub fn compute_dashboard_statistics<'a, I>(records: I) -> DashboardStatistics
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let mut total_units: u64 = 0;
    let mut reserved_units: u64 = 0;
    let mut total_value = Price::ZERO;
    let mut species = HashSet::new();

    for record in records {
        total_units = total_units.saturating_add(record.total_quantity());
        reserved_units = reserved_units.saturating_add(u64::from(record.quantity_reserved));
        total_value = total_value.saturating_add(record.stock_value());
        species.insert(&record.seedling_id);
    }

    DashboardStatistics {
        total_units,
        distinct_species_count: species.len(),
        reserved_units,
        total_value,
    }
}
