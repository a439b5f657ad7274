//! Material ("stuff") definitions.

use crate::category::Category;
use crate::stat::{StatId, StatSheet, StatSpace};
use serde::{Deserialize, Serialize};

/// A single crafting-material definition.
///
/// Materials are identified by a stable `key` (the host's definition
/// name) and carry their stat modifiers in three independent spaces:
/// bases, multiplicative factors, and additive offsets. The struct is a
/// read-only snapshot once it enters a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    key: String,
    label: String,
    categories: Vec<Category>,
    bases: StatSheet,
    factors: StatSheet,
    offsets: StatSheet,
}

impl MaterialItem {
    /// Create a material with no categories and empty stat sheets.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            categories: Vec::new(),
            bases: StatSheet::new(),
            factors: StatSheet::new(),
            offsets: StatSheet::new(),
        }
    }

    /// Tag the material with a category. Duplicate tags are ignored.
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    /// Set a base stat value.
    #[must_use]
    pub fn base(mut self, stat: StatId, value: f32) -> Self {
        self.bases.set(stat, value);
        self
    }

    /// Set a multiplicative stat factor.
    #[must_use]
    pub fn factor(mut self, stat: StatId, value: f32) -> Self {
        self.factors.set(stat, value);
        self
    }

    /// Set an additive stat offset.
    #[must_use]
    pub fn offset(mut self, stat: StatId, value: f32) -> Self {
        self.offsets.set(stat, value);
        self
    }

    /// Stable identity key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Category tags in declaration order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the material carries the given category tag.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// The base-value sheet.
    #[must_use]
    pub fn bases(&self) -> &StatSheet {
        &self.bases
    }

    /// The factor sheet.
    #[must_use]
    pub fn factors(&self) -> &StatSheet {
        &self.factors
    }

    /// The offset sheet.
    #[must_use]
    pub fn offsets(&self) -> &StatSheet {
        &self.offsets
    }

    /// Base value for a stat, defaulting to 1 when undefined.
    #[must_use]
    pub fn stat_base(&self, stat: StatId) -> f32 {
        self.bases.get(stat, StatSpace::Bases.default_value())
    }

    /// Base value for a stat with a caller-supplied default.
    ///
    /// Display code wants 0 for insulation deltas while sorting always
    /// uses the space default of 1.
    #[must_use]
    pub fn stat_base_or(&self, stat: StatId, default: f32) -> f32 {
        self.bases.get(stat, default)
    }

    /// Factor for a stat, defaulting to 1 when undefined.
    #[must_use]
    pub fn stat_factor(&self, stat: StatId) -> f32 {
        self.factors.get(stat, StatSpace::Factors.default_value())
    }

    /// Offset for a stat, defaulting to 0 when undefined.
    #[must_use]
    pub fn stat_offset(&self, stat: StatId) -> f32 {
        self.offsets.get(stat, StatSpace::Offsets.default_value())
    }

    /// Stat value in the given space with that space's default.
    #[must_use]
    pub fn stat(&self, space: StatSpace, stat: StatId) -> f32 {
        match space {
            StatSpace::Bases => self.stat_base(stat),
            StatSpace::Factors => self.stat_factor(stat),
            StatSpace::Offsets => self.stat_offset(stat),
        }
    }
}
