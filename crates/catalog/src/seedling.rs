use serde::{Deserialize, Serialize};

use nursery_core::{CategoryId, Entity, SeedlingId};

use crate::category::CategoryRef;
use crate::price::Price;

/// Catalog entry for a plant species/cultivar raised in the nursery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seedling {
    pub id: SeedlingId,
    pub category_id: CategoryId,
    pub common_name: String,
    pub scientific_name: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub growth_rate: Option<String>,
    #[serde(default)]
    pub sunlight_requirements: Option<String>,
    #[serde(default)]
    pub price_per_seedling: Option<Price>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Seedling {
    pub fn new(
        id: SeedlingId,
        category_id: CategoryId,
        common_name: impl Into<String>,
        scientific_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category_id,
            common_name: common_name.into(),
            scientific_name: scientific_name.into(),
            local_name: None,
            growth_rate: None,
            sunlight_requirements: None,
            price_per_seedling: None,
            category: None,
            image_url: None,
        }
    }

    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price_per_seedling = Some(price);
        self
    }

    pub fn with_category_name(mut self, name: impl Into<String>) -> Self {
        self.category = Some(CategoryRef { name: name.into() });
        self
    }

    pub fn with_care(mut self, growth_rate: impl Into<String>, sunlight: impl Into<String>) -> Self {
        self.growth_rate = Some(growth_rate.into());
        self.sunlight_requirements = Some(sunlight.into());
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Price per seedling, zero when the catalog row carries none.
    pub fn price_or_zero(&self) -> Price {
        self.price_per_seedling.unwrap_or(Price::ZERO)
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Case-insensitive substring match over common, scientific and local names.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&self.common_name)
            || hit(&self.scientific_name)
            || self.local_name.as_deref().is_some_and(hit)
    }
}

impl Entity for Seedling {
    type Id = SeedlingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
