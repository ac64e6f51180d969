//! Multi-predicate filtering over an inventory snapshot.

use nursery_core::CategoryId;

use crate::record::InventoryRecord;
use crate::status::{StockStatus, StockThresholds};

/// Search term, category and status selection from the filter inputs.
///
/// Every predicate is optional; an absent predicate matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    search_term: Option<String>,
    category_id: Option<CategoryId>,
    status: Option<StockStatus>,
    thresholds: StockThresholds,
}

impl InventoryFilter {
    /// A filter that keeps every displayable record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from raw input values.
    ///
    /// An empty value or an unrecognised status tag degrades to "match
    /// everything" for that predicate; this never fails. Non-empty values are
    /// used as given: a whitespace search term is a literal substring and the
    /// category id must match exactly.
    pub fn from_inputs(search: &str, category: &str, status: &str) -> Self {
        let category_id = (!category.is_empty()).then(|| CategoryId::from(category));
        let status = status.parse::<StockStatus>().ok();
        Self::all()
            .with_search(search)
            .with_category_opt(category_id)
            .with_status_opt(status)
    }

    /// Search term, lowercased; an empty term clears the predicate.
    pub fn with_search(mut self, term: &str) -> Self {
        self.search_term = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    pub fn with_category(self, category_id: CategoryId) -> Self {
        self.with_category_opt(Some(category_id))
    }

    pub fn with_category_opt(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn with_status(self, status: StockStatus) -> Self {
        self.with_status_opt(Some(status))
    }

    pub fn with_status_opt(mut self, status: Option<StockStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_thresholds(mut self, thresholds: StockThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    pub fn category_id(&self) -> Option<&CategoryId> {
        self.category_id.as_ref()
    }

    pub fn status(&self) -> Option<StockStatus> {
        self.status
    }

    pub fn thresholds(&self) -> &StockThresholds {
        &self.thresholds
    }

    /// Whether `record` is displayable and satisfies all three predicates.
    pub fn matches(&self, record: &InventoryRecord) -> bool {
        let Some(seedling) = record.seedling.as_ref() else {
            return false;
        };

        let matches_search = self
            .search_term
            .as_deref()
            .is_none_or(|term| seedling.name_contains(term));

        let matches_category = self
            .category_id
            .as_ref()
            .is_none_or(|id| *id == seedling.category_id);

        let matches_status = self
            .status
            .is_none_or(|status| record.stock_status_with(&self.thresholds) == status);

        matches_search && matches_category && matches_status
    }
}

/// Records matching `filter`, in input order.
///
/// Records without a seedling snapshot are never returned.
pub fn filter_records<'a>(records: &'a [InventoryRecord], filter: &InventoryFilter) -> Vec<&'a InventoryRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Owned variant of [`filter_records`].
pub fn filter_records_owned(records: &[InventoryRecord], filter: &InventoryFilter) -> Vec<InventoryRecord> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}
