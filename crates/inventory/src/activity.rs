//! Nursery activity feed (watering, transplanting, quality checks, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use nursery_core::{ActivityId, Entity};

/// How many entries the recent-activity feed shows.
pub const RECENT_ACTIVITY_LIMIT: usize = 10;

/// Kind of nursery operation.
///
/// Stored as free text upstream; labels outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    SeedCollection,
    Germination,
    Transplanting,
    Watering,
    Fertilizing,
    PestControl,
    QualityCheck,
    Other(String),
}

impl ActivityKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::SeedCollection => "Seed Collection",
            ActivityKind::Germination => "Germination",
            ActivityKind::Transplanting => "Transplanting",
            ActivityKind::Watering => "Watering",
            ActivityKind::Fertilizing => "Fertilizing",
            ActivityKind::PestControl => "Pest Control",
            ActivityKind::QualityCheck => "Quality Check",
            ActivityKind::Other(label) => label.as_str(),
        }
    }

    /// Icon key for the feed entry.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::SeedCollection => "leaf",
            ActivityKind::Germination => "seedling",
            ActivityKind::Transplanting => "exchange-alt",
            ActivityKind::Watering => "tint",
            ActivityKind::Fertilizing => "flask",
            ActivityKind::PestControl => "bug",
            ActivityKind::QualityCheck => "check-circle",
            ActivityKind::Other(_) => "clipboard-list",
        }
    }
}

impl From<String> for ActivityKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Seed Collection" => ActivityKind::SeedCollection,
            "Germination" => ActivityKind::Germination,
            "Transplanting" => ActivityKind::Transplanting,
            "Watering" => ActivityKind::Watering,
            "Fertilizing" => ActivityKind::Fertilizing,
            "Pest Control" => ActivityKind::PestControl,
            "Quality Check" => ActivityKind::QualityCheck,
            _ => ActivityKind::Other(value),
        }
    }
}

impl From<ActivityKind> for String {
    fn from(value: ActivityKind) -> Self {
        match value {
            ActivityKind::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seedling snapshot joined onto an activity (only the common name is selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeedling {
    pub common_name: String,
}

/// One entry of the activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub activity_type: ActivityKind,
    pub activity_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub quantity_affected: Option<u32>,
    #[serde(default)]
    pub performed_by: Option<String>,
    #[serde(default)]
    pub seedling: Option<ActivitySeedling>,
}

impl Activity {
    pub fn new(id: ActivityId, activity_type: ActivityKind, activity_date: DateTime<Utc>) -> Self {
        Self {
            id,
            activity_type,
            activity_date,
            notes: None,
            quantity_affected: None,
            performed_by: None,
            seedling: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity_affected = Some(quantity);
        self
    }

    pub fn with_performer(mut self, performer: impl Into<String>) -> Self {
        self.performed_by = Some(performer.into());
        self
    }

    pub fn with_seedling_name(mut self, common_name: impl Into<String>) -> Self {
        self.seedling = Some(ActivitySeedling {
            common_name: common_name.into(),
        });
        self
    }

    /// Feed line, e.g. `Mango - Moved to bed 4 (120 seedlings) - by Wanjiku`.
    pub fn summary(&self) -> String {
        let mut line = String::new();

        if let Some(name) = self.seedling.as_ref().map(|s| s.common_name.as_str()).filter(|n| !n.is_empty()) {
            line.push_str(name);
            line.push_str(" - ");
        }

        match self.notes.as_deref().filter(|n| !n.is_empty()) {
            Some(notes) => line.push_str(notes),
            None => line.push_str("No details provided"),
        }

        if let Some(qty) = self.quantity_affected.filter(|q| *q > 0) {
            line.push_str(&format!(" ({qty} seedlings)"));
        }

        if let Some(by) = self.performed_by.as_deref().filter(|p| !p.is_empty()) {
            line.push_str(&format!(" - by {by}"));
        }

        line
    }
}

impl Entity for Activity {
    type Id = ActivityId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Most recent `limit` activities, newest first.
///
/// Entries sharing a date keep their input order.
pub fn recent_activities(activities: &[Activity], limit: usize) -> Vec<Activity> {
    let mut sorted: Vec<Activity> = activities.to_vec();
    sorted.sort_by(|a, b| b.activity_date.cmp(&a.activity_date));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 8, 0, 0).unwrap()
    }

    #[test]
    fn known_kinds_round_trip_through_json() {
        let json = serde_json::to_string(&ActivityKind::PestControl).unwrap();
        assert_eq!(json, "\"Pest Control\"");
        let kind: ActivityKind = serde_json::from_str("\"Quality Check\"").unwrap();
        assert_eq!(kind, ActivityKind::QualityCheck);
    }

    #[test]
    fn unknown_kind_is_kept_with_fallback_icon() {
        let kind: ActivityKind = serde_json::from_str("\"Pruning\"").unwrap();
        assert_eq!(kind, ActivityKind::Other("Pruning".to_string()));
        assert_eq!(kind.as_str(), "Pruning");
        assert_eq!(kind.icon(), "clipboard-list");
        assert_eq!(ActivityKind::Watering.icon(), "tint");
    }

    #[test]
    fn summary_includes_present_parts_only() {
        let full = Activity::new(ActivityId::from("1"), ActivityKind::Transplanting, at(1))
            .with_seedling_name("Mango")
            .with_notes("Moved to bed 4")
            .with_quantity(120)
            .with_performer("Wanjiku");
        assert_eq!(full.summary(), "Mango - Moved to bed 4 (120 seedlings) - by Wanjiku");

        let bare = Activity::new(ActivityId::from("2"), ActivityKind::Watering, at(1)).with_quantity(0);
        assert_eq!(bare.summary(), "No details provided");
    }

    #[test]
    fn recent_activities_sorts_newest_first_and_truncates() {
        let activities: Vec<Activity> = (1..=15)
            .map(|d| Activity::new(ActivityId::from(d.to_string().as_str()), ActivityKind::Watering, at(d)))
            .collect();

        let recent = recent_activities(&activities, RECENT_ACTIVITY_LIMIT);
        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].id.as_str(), "15");
        assert_eq!(recent[9].id.as_str(), "6");
    }

    #[test]
    fn recent_activities_keeps_input_order_for_ties() {
        let activities = vec![
            Activity::new(ActivityId::from("a"), ActivityKind::Watering, at(2)),
            Activity::new(ActivityId::from("b"), ActivityKind::Watering, at(2)),
            Activity::new(ActivityId::from("c"), ActivityKind::Watering, at(3)),
        ];

        let ids: Vec<String> = recent_activities(&activities, 5).iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
