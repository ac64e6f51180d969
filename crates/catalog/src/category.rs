use serde::{Deserialize, Serialize};

use nursery_core::{CategoryId, Entity};

/// A named grouping of seedling species (e.g. "Fruit Trees", "Indigenous").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Category snapshot joined onto a seedling row (only the name is selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

/// Sort categories by name, the order the category selector lists them in.
pub fn sort_by_name(categories: &mut [Category]) {
    categories.sort_by(|a, b| a.name.cmp(&b.name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_by_name_orders_alphabetically() {
        let mut categories = vec![
            Category::new(CategoryId::from("c2"), "Timber"),
            Category::new(CategoryId::from("c1"), "Fruit Trees"),
            Category::new(CategoryId::from("c3"), "Indigenous"),
        ];

        sort_by_name(&mut categories);

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Fruit Trees", "Indigenous", "Timber"]);
    }
}
