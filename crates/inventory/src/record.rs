use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use nursery_catalog::{Price, Seedling};
use nursery_core::{Entity, InventoryRecordId, SeedlingId};

use crate::status::{StockStatus, StockThresholds};

/// One inventory batch: a seedling species with on-hand and reserved counts.
///
/// `seedling` is the joined catalog row at query time. It is `None` when the
/// foreign key dangles; such a record still counts towards unit totals but is
/// never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: InventoryRecordId,
    pub seedling_id: SeedlingId,
    #[serde(default)]
    pub quantity_available: u32,
    #[serde(default)]
    pub quantity_reserved: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub batch_number: Option<String>,
    #[serde(default)]
    pub ready_for_sale_date: Option<NaiveDate>,
    #[serde(default)]
    pub seedling: Option<Seedling>,
}

impl InventoryRecord {
    pub fn new(id: InventoryRecordId, seedling_id: SeedlingId, available: u32, reserved: u32) -> Self {
        Self {
            id,
            seedling_id,
            quantity_available: available,
            quantity_reserved: reserved,
            location: None,
            batch_number: None,
            ready_for_sale_date: None,
            seedling: None,
        }
    }

    pub fn with_seedling(mut self, seedling: Seedling) -> Self {
        self.seedling = Some(seedling);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_batch_number(mut self, batch_number: impl Into<String>) -> Self {
        self.batch_number = Some(batch_number.into());
        self
    }

    pub fn with_ready_for_sale_date(mut self, date: NaiveDate) -> Self {
        self.ready_for_sale_date = Some(date);
        self
    }

    /// Available + reserved.
    pub fn total_quantity(&self) -> u64 {
        u64::from(self.quantity_available) + u64::from(self.quantity_reserved)
    }

    pub fn stock_status(&self) -> StockStatus {
        self.stock_status_with(&StockThresholds::default())
    }

    pub fn stock_status_with(&self, thresholds: &StockThresholds) -> StockStatus {
        thresholds.classify(self.quantity_available, self.quantity_reserved)
    }

    /// Price per seedling, zero when the seedling snapshot or its price is missing.
    pub fn unit_price(&self) -> Price {
        self.seedling
            .as_ref()
            .map(Seedling::price_or_zero)
            .unwrap_or(Price::ZERO)
    }

    /// Total units valued at the unit price.
    pub fn stock_value(&self) -> Price {
        self.unit_price().times(self.total_quantity())
    }
}

impl Entity for InventoryRecord {
    type Id = InventoryRecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
