//! Immutable material catalogs with precomputed category indices.

use crate::category::Category;
use crate::material::MaterialItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error raised while building a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two materials share the same identity key.
    DuplicateKey(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "duplicate material key: {key}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A read-only snapshot of every material definition the host knows.
///
/// Built once per session from host data. Construction precomputes one
/// index per category so that the per-frame filter step is a handful of
/// slice walks rather than a scan of the full catalog.
///
/// A material is indexed under a category only if it carries that tag
/// *and* defines at least one stat factor; factor-less entries are host
/// data of no interest to the table and are excluded from every index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<MaterialItem>", into = "Vec<MaterialItem>")]
pub struct Catalog {
    items: Vec<MaterialItem>,
    by_key: HashMap<String, usize>,
    by_category: [Vec<usize>; 5],
}

impl TryFrom<Vec<MaterialItem>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<MaterialItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<MaterialItem> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

impl Catalog {
    /// Build a catalog from host-supplied materials.
    ///
    /// Items keep their given order; category indices therefore list
    /// items in catalog order, which is what makes later sorts tie-break
    /// the way the catalog iterates.
    pub fn new(items: Vec<MaterialItem>) -> Result<Self, CatalogError> {
        let mut by_key = HashMap::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            if by_key.insert(item.key().to_string(), idx).is_some() {
                return Err(CatalogError::DuplicateKey(item.key().to_string()));
            }
        }

        let by_category = Self::build_indices(&items);
        Ok(Self {
            items,
            by_key,
            by_category,
        })
    }

    fn build_indices(items: &[MaterialItem]) -> [Vec<usize>; 5] {
        let mut by_category: [Vec<usize>; 5] = Default::default();
        for (idx, item) in items.iter().enumerate() {
            if item.factors().is_empty() {
                continue;
            }
            for category in Category::ALL {
                if item.has_category(category) {
                    by_category[category.index()].push(idx);
                }
            }
        }
        by_category
    }

    /// All materials in catalog order.
    #[must_use]
    pub fn items(&self) -> &[MaterialItem] {
        &self.items
    }

    /// Number of materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no materials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Material at a catalog index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds; indices handed out by this
    /// catalog are always valid for it.
    #[must_use]
    pub fn item(&self, idx: usize) -> &MaterialItem {
        &self.items[idx]
    }

    /// Look up a material by identity key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MaterialItem> {
        self.by_key.get(key).map(|&idx| &self.items[idx])
    }

    /// Catalog index of a material by identity key.
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    /// Precomputed catalog indices for one category, in catalog order.
    #[must_use]
    pub fn category_items(&self, category: Category) -> &[usize] {
        &self.by_category[category.index()]
    }

    /// Number of indexed materials in one category.
    #[must_use]
    pub fn category_len(&self, category: Category) -> usize {
        self.by_category[category.index()].len()
    }
}
