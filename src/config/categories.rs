//! Article categories (`categories.json`)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A category an article is filed under
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Configured categories in file order, indexed by id
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Build the registry; a repeated id keeps its first definition.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut registry = Self::default();
        for category in categories {
            if registry.by_id.contains_key(&category.id) {
                tracing::warn!(id = %category.id, "duplicate category id ignored");
                continue;
            }
            registry
                .by_id
                .insert(category.id.clone(), registry.categories.len());
            registry.categories.push(category);
        }
        registry
    }

    pub fn is_valid(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&i| &self.categories[i])
    }

    pub fn ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}
