use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tables the dashboard listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchedTable {
    Inventory,
    Activities,
}

impl WatchedTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatchedTable::Inventory => "inventory",
            WatchedTable::Activities => "activities",
        }
    }
}

/// Row-level change kind reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

/// "Something changed in `table`" signal.
///
/// Carries no row data: receivers re-request a full snapshot of the affected
/// collection instead of patching the one they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub table: WatchedTable,
    pub kind: ChangeKind,
    pub occurred_at: DateTime<Utc>,
}

impl ChangeNotification {
    pub fn new(table: WatchedTable, kind: ChangeKind, occurred_at: DateTime<Utc>) -> Self {
        Self {
            table,
            kind,
            occurred_at,
        }
    }

    pub fn inventory(kind: ChangeKind) -> Self {
        Self::new(WatchedTable::Inventory, kind, Utc::now())
    }

    pub fn activities(kind: ChangeKind) -> Self {
        Self::new(WatchedTable::Activities, kind, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_store_payload_shape() {
        let json = r#"{ "table": "inventory", "kind": "UPDATE", "occurred_at": "2024-03-05T08:00:00Z" }"#;
        let n: ChangeNotification = serde_json::from_str(json).unwrap();
        assert_eq!(n.table, WatchedTable::Inventory);
        assert_eq!(n.kind, ChangeKind::Update);
    }
}
