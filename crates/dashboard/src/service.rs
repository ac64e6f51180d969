//! Dashboard service: owns the last good snapshot and refreshes it on demand
//! or when the store reports a change.

use chrono::Utc;

use nursery_catalog::Category;
use nursery_core::{DomainError, DomainResult, InventoryRecordId};
use nursery_events::{ChangeNotification, Subscription, WatchedTable};
use nursery_inventory::{
    DashboardStatistics, InventoryFilter, InventoryRecord, compute_dashboard_statistics, filter_records,
};

use crate::config::DashboardConfig;
use crate::snapshot::Snapshot;
use crate::source::{DataSource, DataSourceError};
use crate::view::{ActivityLine, InventoryCard, StatisticsView};

/// Outcome of draining a notification subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpReport {
    /// Notifications taken off the subscription.
    pub received: usize,
    /// Collections actually re-requested (coalesced per table).
    pub refreshes: usize,
    /// Refreshes that failed (snapshot kept).
    pub failures: usize,
}

/// Inventory dashboard over a [`DataSource`].
///
/// Every derived value (statistics, filtered records, cards) is computed from
/// the held snapshot on each call; nothing derived is cached.
#[derive(Debug)]
pub struct Dashboard<D> {
    source: D,
    config: DashboardConfig,
    snapshot: Snapshot,
}

impl<D> Dashboard<D>
where
    D: DataSource,
{
    pub fn new(source: D, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            snapshot: Snapshot::default(),
        }
    }

    pub fn source(&self) -> &D {
        &self.source
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Load categories, inventory and activities.
    ///
    /// All three are attempted even if one fails; the first error is returned.
    pub fn refresh_all(&mut self) -> Result<(), DataSourceError> {
        let categories = self.refresh_categories().map(|_| ());
        let inventory = self.refresh_inventory().map(|_| ());
        let activities = self.refresh_activities().map(|_| ());
        categories.and(inventory).and(activities)
    }

    pub fn refresh_categories(&mut self) -> Result<usize, DataSourceError> {
        match self.source.categories() {
            Ok(categories) => {
                let count = categories.len();
                self.snapshot.categories = categories;
                tracing::info!(count, "categories refreshed");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading categories; keeping previous snapshot");
                Err(err)
            }
        }
    }

    pub fn refresh_inventory(&mut self) -> Result<usize, DataSourceError> {
        match self.source.inventory() {
            Ok(records) => {
                let count = records.len();
                let dangling = records.iter().filter(|r| r.seedling.is_none()).count();
                self.snapshot.records = records;
                self.snapshot.inventory_refreshed_at = Some(Utc::now());
                if dangling > 0 {
                    tracing::warn!(dangling, "inventory rows without a seedling will not be displayed");
                }
                tracing::info!(count, "inventory refreshed");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading inventory; keeping previous snapshot");
                Err(err)
            }
        }
    }

    pub fn refresh_activities(&mut self) -> Result<usize, DataSourceError> {
        match self.source.recent_activities(self.config.activity_limit) {
            Ok(mut activities) => {
                activities.truncate(self.config.activity_limit);
                let count = activities.len();
                self.snapshot.activities = activities;
                self.snapshot.activities_refreshed_at = Some(Utc::now());
                tracing::info!(count, "activities refreshed");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "error loading activities; keeping previous snapshot");
                Err(err)
            }
        }
    }

    /// Re-request only the collection the notification is about.
    pub fn handle_notification(&mut self, notification: &ChangeNotification) -> Result<(), DataSourceError> {
        tracing::debug!(
            table = notification.table.as_str(),
            kind = ?notification.kind,
            "change notification received"
        );
        self.refresh_table(notification.table)
    }

    fn refresh_table(&mut self, table: WatchedTable) -> Result<(), DataSourceError> {
        match table {
            WatchedTable::Inventory => self.refresh_inventory().map(|_| ()),
            WatchedTable::Activities => self.refresh_activities().map(|_| ()),
        }
    }

    /// Drain pending notifications without blocking.
    ///
    /// Several notifications for the same table cause a single refresh.
    pub fn pump(&mut self, subscription: &Subscription<ChangeNotification>) -> PumpReport {
        let pending = subscription.drain();
        let mut report = PumpReport {
            received: pending.len(),
            ..PumpReport::default()
        };

        let mut tables: Vec<WatchedTable> = Vec::new();
        for notification in &pending {
            if !tables.contains(&notification.table) {
                tables.push(notification.table);
            }
        }

        for table in tables {
            report.refreshes += 1;
            if self.refresh_table(table).is_err() {
                report.failures += 1;
            }
        }

        report
    }

    /// Filter built from raw input values, using the configured thresholds.
    pub fn filter_from_inputs(&self, search: &str, category: &str, status: &str) -> InventoryFilter {
        InventoryFilter::from_inputs(search, category, status).with_thresholds(self.config.thresholds)
    }

    pub fn statistics(&self) -> DashboardStatistics {
        compute_dashboard_statistics(&self.snapshot.records)
    }

    pub fn statistics_view(&self) -> StatisticsView {
        StatisticsView::new(&self.statistics(), &self.config.currency)
    }

    pub fn filtered(&self, filter: &InventoryFilter) -> Vec<&InventoryRecord> {
        filter_records(&self.snapshot.records, filter)
    }

    pub fn cards(&self, filter: &InventoryFilter) -> Vec<InventoryCard> {
        self.filtered(filter)
            .into_iter()
            .filter_map(|r| InventoryCard::from_record(r, &self.config))
            .collect()
    }

    pub fn activity_feed(&self) -> Vec<ActivityLine> {
        self.snapshot
            .activities
            .iter()
            .map(ActivityLine::from_activity)
            .collect()
    }

    /// Categories for the category selector, ordered by name.
    pub fn category_options(&self) -> &[Category] {
        &self.snapshot.categories
    }

    pub fn record(&self, id: &InventoryRecordId) -> DomainResult<&InventoryRecord> {
        self.snapshot
            .records
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| DomainError::not_found(format!("inventory record {id}")))
    }
}
