//! Display view models: everything a renderer needs, already formatted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use nursery_catalog::Price;
use nursery_core::{CategoryId, InventoryRecordId};
use nursery_inventory::{Activity, DashboardStatistics, InventoryRecord, StockStatus};

use crate::config::DashboardConfig;

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const NOT_AVAILABLE: &str = "N/A";

/// One seedling card in the inventory grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryCard {
    pub id: InventoryRecordId,
    pub category_id: CategoryId,
    pub status: StockStatus,
    pub status_label: String,
    pub common_name: String,
    pub scientific_name: String,
    pub local_name: Option<String>,
    pub category_name: String,
    pub location: String,
    pub batch_number: String,
    pub growth_rate: String,
    pub sunlight_requirements: String,
    pub quantity_available: u32,
    pub quantity_reserved: u32,
    pub quantity_total: u64,
    pub price_label: String,
    pub ready_label: Option<String>,
    pub image_url: String,
}

impl InventoryCard {
    /// Build the card for `record`; `None` when its seedling snapshot is missing.
    pub fn from_record(record: &InventoryRecord, config: &DashboardConfig) -> Option<Self> {
        let seedling = record.seedling.as_ref()?;
        let status = record.stock_status_with(&config.thresholds);

        Some(Self {
            id: record.id.clone(),
            category_id: seedling.category_id.clone(),
            status,
            status_label: status.label().to_string(),
            common_name: seedling.common_name.clone(),
            scientific_name: seedling.scientific_name.clone(),
            local_name: seedling.local_name.clone().filter(|n| !n.is_empty()),
            category_name: seedling.category_name().unwrap_or(UNCATEGORIZED).to_string(),
            location: or_not_available(record.location.as_deref()),
            batch_number: or_not_available(record.batch_number.as_deref()),
            growth_rate: or_not_available(seedling.growth_rate.as_deref()),
            sunlight_requirements: or_not_available(seedling.sunlight_requirements.as_deref()),
            quantity_available: record.quantity_available,
            quantity_reserved: record.quantity_reserved,
            quantity_total: record.total_quantity(),
            price_label: format!("{} {} / seedling", config.currency, seedling.price_or_zero()),
            ready_label: record.ready_for_sale_date.map(|d| format!("Ready: {}", format_date(d))),
            image_url: seedling
                .image_url
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| config.placeholder_image.clone()),
        })
    }
}

/// Summary counters, formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsView {
    pub total_units: String,
    pub distinct_species: String,
    pub reserved_units: String,
    pub total_value: String,
}

impl StatisticsView {
    pub fn new(stats: &DashboardStatistics, currency: &str) -> Self {
        Self {
            total_units: format_thousands(stats.total_units),
            distinct_species: stats.distinct_species_count.to_string(),
            reserved_units: format_thousands(stats.reserved_units),
            total_value: format_money(currency, stats.total_value),
        }
    }
}

/// One line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityLine {
    pub icon: &'static str,
    pub activity_type: String,
    pub date_label: String,
    pub summary: String,
}

impl ActivityLine {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            icon: activity.activity_type.icon(),
            activity_type: activity.activity_type.to_string(),
            date_label: format_datetime(activity.activity_date),
            summary: activity.summary(),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// `1234567` -> `1,234,567`.
pub fn format_thousands(n: u64) -> String {
    group_thousands(&n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `KES 8,000.00`, rounded to cents.
pub fn format_money(currency: &str, amount: Price) -> String {
    let cents = amount.to_cents().to_string();
    let (whole, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    format!("{currency} {}.{fraction}", group_thousands(whole))
}

/// `Mar 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_datetime(at: DateTime<Utc>) -> String {
    format_date(at.date_naive())
}
