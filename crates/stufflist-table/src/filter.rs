//! Session-scoped category selection.

use serde::{Deserialize, Serialize};
use stufflist_core::Category;

/// The five category checkboxes as explicit view state.
///
/// Owned by the table session: constructed with every category enabled
/// when the view opens, discarded when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    metallic: bool,
    woody: bool,
    stony: bool,
    fabric: bool,
    leathery: bool,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            metallic: true,
            woody: true,
            stony: true,
            fabric: true,
            leathery: true,
        }
    }
}

impl CategoryFilter {
    /// All categories enabled.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// No categories enabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            metallic: false,
            woody: false,
            stony: false,
            fabric: false,
            leathery: false,
        }
    }

    /// Whether a category is enabled.
    #[must_use]
    pub const fn enabled(&self, category: Category) -> bool {
        match category {
            Category::Metallic => self.metallic,
            Category::Woody => self.woody,
            Category::Stony => self.stony,
            Category::Fabric => self.fabric,
            Category::Leathery => self.leathery,
        }
    }

    /// Enable or disable a category.
    pub fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Metallic => self.metallic = enabled,
            Category::Woody => self.woody = enabled,
            Category::Stony => self.stony = enabled,
            Category::Fabric => self.fabric = enabled,
            Category::Leathery => self.leathery = enabled,
        }
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    /// Number of enabled categories.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|&&category| self.enabled(category))
            .count()
    }

    /// Whether any category is enabled.
    #[must_use]
    pub fn any(&self) -> bool {
        self.enabled_count() > 0
    }

    /// Iterate over enabled categories in canonical order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|&category| self.enabled(category))
    }
}
