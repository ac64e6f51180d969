//! Stock-status classification.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use nursery_core::DomainError;

/// A batch with this many available units is out of stock, whatever is reserved.
pub const OUT_OF_STOCK_AVAILABLE: u32 = 0;

/// Batches whose total (available + reserved) is below this are low on stock.
pub const LOW_STOCK_THRESHOLD: u64 = 50;

/// Derived stock classification of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    Available,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::Available, StockStatus::LowStock, StockStatus::OutOfStock];

    /// Machine tag (`available`, `low-stock`, `out-of-stock`).
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Available => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown stock status: {s}")))
    }
}

/// Badge label for a status tag; unrecognised tags are returned unchanged.
pub fn stock_status_label(key: &str) -> String {
    match key.parse::<StockStatus>() {
        Ok(status) => status.label().to_string(),
        Err(_) => key.to_string(),
    }
}

/// Classification thresholds.
///
/// Out of stock is always "nothing available"; only the low-stock boundary is
/// configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    pub low_stock_below: u64,
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            low_stock_below: LOW_STOCK_THRESHOLD,
        }
    }
}

impl StockThresholds {
    pub fn new(low_stock_below: u64) -> Self {
        Self { low_stock_below }
    }

    /// Out-of-stock is checked before the total threshold: reserved units
    /// alone never make a batch "in stock".
    pub fn classify(&self, available: u32, reserved: u32) -> StockStatus {
        let total = u64::from(available) + u64::from(reserved);
        if available == OUT_OF_STOCK_AVAILABLE {
            StockStatus::OutOfStock
        } else if total < self.low_stock_below {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }
}

/// Classify a batch using the default thresholds.
pub fn classify_stock_status(available: u32, reserved: u32) -> StockStatus {
    StockThresholds::default().classify(available, reserved)
}
