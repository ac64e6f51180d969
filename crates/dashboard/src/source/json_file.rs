use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use nursery_catalog::{Category, category};
use nursery_inventory::{Activity, InventoryRecord, recent_activities};

use super::r#trait::{DataSource, DataSourceError};

pub const CATEGORIES_FILE: &str = "categories.json";
pub const INVENTORY_FILE: &str = "inventory.json";
pub const ACTIVITIES_FILE: &str = "activities.json";

/// Data source backed by JSON exports of the hosted tables.
///
/// Each call re-reads its file, so replacing a file on disk and then
/// publishing a change notification behaves like a live table update.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    dir: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, DataSourceError> {
        let path = self.dir.join(file);
        let bytes = std::fs::read(&path).map_err(|source| DataSourceError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| DataSourceError::decode(path.display().to_string(), e.to_string()))
    }
}

impl DataSource for JsonSnapshotSource {
    fn categories(&self) -> Result<Vec<Category>, DataSourceError> {
        let mut categories: Vec<Category> = self.load(CATEGORIES_FILE)?;
        category::sort_by_name(&mut categories);
        Ok(categories)
    }

    fn inventory(&self) -> Result<Vec<InventoryRecord>, DataSourceError> {
        self.load(INVENTORY_FILE)
    }

    fn recent_activities(&self, limit: usize) -> Result<Vec<Activity>, DataSourceError> {
        let activities: Vec<Activity> = self.load(ACTIVITIES_FILE)?;
        Ok(recent_activities(&activities, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_catalog::Price;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("nursery-json-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = JsonSnapshotSource::new(scratch_dir());
        match source.inventory().unwrap_err() {
            DataSourceError::Io { path, .. } => assert!(path.ends_with(INVENTORY_FILE)),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_are_a_decode_error() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join(INVENTORY_FILE),
            r#"[{ "id": "1", "seedling_id": "A", "quantity_available": -4, "quantity_reserved": 0 }]"#,
        )
        .unwrap();

        let source = JsonSnapshotSource::new(&dir);
        match source.inventory().unwrap_err() {
            DataSourceError::Decode { what, .. } => assert!(what.ends_with(INVENTORY_FILE)),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn sub_cent_price_does_not_drop_the_snapshot() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join(INVENTORY_FILE),
            r#"[
                { "id": 1, "seedling_id": "A", "quantity_available": 4, "quantity_reserved": 0,
                  "seedling": { "id": "A", "category_id": "c1", "common_name": "Neem",
                                "scientific_name": "Azadirachta indica", "price_per_seedling": 12.345 } },
                { "id": 2, "seedling_id": "B", "quantity_available": 60, "quantity_reserved": 5,
                  "seedling": { "id": "B", "category_id": "c2", "common_name": "Mango",
                                "scientific_name": "Mangifera indica", "price_per_seedling": "100.00" } }
            ]"#,
        )
        .unwrap();

        let records = JsonSnapshotSource::new(&dir).inventory().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].unit_price(), "12.345".parse::<Price>().unwrap());
        assert_eq!(records[0].stock_value(), "49.38".parse::<Price>().unwrap());
        assert_eq!(records[1].unit_price(), Price::from_major(100));
    }

    #[test]
    fn reads_and_sorts_categories() {
        let dir = scratch_dir();
        std::fs::write(
            dir.join(CATEGORIES_FILE),
            r#"[{ "id": "c2", "name": "Timber" }, { "id": "c1", "name": "Fruit Trees" }]"#,
        )
        .unwrap();

        let categories = JsonSnapshotSource::new(&dir).categories().unwrap();
        assert_eq!(categories[0].name, "Fruit Trees");
        assert_eq!(categories[1].name, "Timber");
    }
}
