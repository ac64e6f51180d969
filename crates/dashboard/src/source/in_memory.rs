use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use nursery_catalog::{Category, category};
use nursery_inventory::{Activity, InventoryRecord, recent_activities};

use super::r#trait::{DataSource, DataSourceError};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    inventory: Vec<InventoryRecord>,
    activities: Vec<Activity>,
}

/// In-memory data source for tests/dev.
///
/// Tables can be replaced at any time; an injected outage makes every call
/// fail until cleared. Fetch counters let tests see which collections were
/// re-requested.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    tables: RwLock<Tables>,
    outage: RwLock<Option<String>>,
    inventory_fetches: AtomicUsize,
    category_fetches: AtomicUsize,
    activity_fetches: AtomicUsize,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.replace_categories(categories);
        self
    }

    pub fn with_inventory(self, inventory: Vec<InventoryRecord>) -> Self {
        self.replace_inventory(inventory);
        self
    }

    pub fn with_activities(self, activities: Vec<Activity>) -> Self {
        self.replace_activities(activities);
        self
    }

    pub fn replace_categories(&self, categories: Vec<Category>) {
        if let Ok(mut tables) = self.tables.write() {
            tables.categories = categories;
        }
    }

    pub fn replace_inventory(&self, inventory: Vec<InventoryRecord>) {
        if let Ok(mut tables) = self.tables.write() {
            tables.inventory = inventory;
        }
    }

    pub fn replace_activities(&self, activities: Vec<Activity>) {
        if let Ok(mut tables) = self.tables.write() {
            tables.activities = activities;
        }
    }

    /// Make every subsequent call fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        if let Ok(mut outage) = self.outage.write() {
            *outage = Some(reason.into());
        }
    }

    pub fn recover(&self) {
        if let Ok(mut outage) = self.outage.write() {
            *outage = None;
        }
    }

    pub fn inventory_fetches(&self) -> usize {
        self.inventory_fetches.load(Ordering::SeqCst)
    }

    pub fn category_fetches(&self) -> usize {
        self.category_fetches.load(Ordering::SeqCst)
    }

    pub fn activity_fetches(&self) -> usize {
        self.activity_fetches.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DataSourceError> {
        let outage = self
            .outage
            .read()
            .map_err(|_| DataSourceError::unavailable("outage flag lock poisoned"))?;
        match outage.as_ref() {
            Some(reason) => Err(DataSourceError::unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn read_tables<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T, DataSourceError> {
        self.check_available()?;
        let tables = self
            .tables
            .read()
            .map_err(|_| DataSourceError::unavailable("tables lock poisoned"))?;
        Ok(f(&tables))
    }
}

impl DataSource for InMemoryDataSource {
    fn categories(&self) -> Result<Vec<Category>, DataSourceError> {
        self.category_fetches.fetch_add(1, Ordering::SeqCst);
        let mut categories = self.read_tables(|t| t.categories.clone())?;
        category::sort_by_name(&mut categories);
        Ok(categories)
    }

    fn inventory(&self) -> Result<Vec<InventoryRecord>, DataSourceError> {
        self.inventory_fetches.fetch_add(1, Ordering::SeqCst);
        self.read_tables(|t| t.inventory.clone())
    }

    fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>, DataSourceError> {
        self.activity_fetches.fetch_add(1, Ordering::SeqCst);
        self.read_tables(|t| recent_activities(&t.activities, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_core::{CategoryId, InventoryRecordId, SeedlingId};

    #[test]
    fn categories_come_back_sorted() {
        let source = InMemoryDataSource::new().with_categories(vec![
            Category::new(CategoryId::from("c2"), "Timber"),
            Category::new(CategoryId::from("c1"), "Fruit Trees"),
        ]);

        let names: Vec<String> = source.categories().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Fruit Trees", "Timber"]);
    }

    #[test]
    fn outage_fails_every_call_until_recovered() {
        let source = InMemoryDataSource::new().with_inventory(vec![InventoryRecord::new(
            InventoryRecordId::from("1"),
            SeedlingId::from("A"),
            5,
            0,
        )]);

        source.fail_with("connection reset");
        match source.inventory().unwrap_err() {
            DataSourceError::Unavailable(msg) => assert_eq!(msg, "connection reset"),
            other => panic!("Expected Unavailable, got {other:?}"),
        }
        assert!(source.categories().is_err());

        source.recover();
        assert_eq!(source.inventory().unwrap().len(), 1);
        assert_eq!(source.inventory_fetches(), 2);
    }
}
