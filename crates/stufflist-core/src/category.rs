//! Material categories used for filtering.

use serde::{Deserialize, Serialize};

/// One of the five fixed material classifications.
///
/// Categories are filter tags, not a partition: a material may carry
/// several tags (a modded chitin can be both fabric and leathery) or none
/// at all, in which case it never shows up in any filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Smelted and refined metals
    Metallic,
    /// Felled-tree woods
    Woody,
    /// Cut stone blocks
    Stony,
    /// Woven textiles
    Fabric,
    /// Tanned animal skins
    Leathery,
}

impl Category {
    /// All categories in canonical order.
    ///
    /// This order drives both checkbox display and the union step of the
    /// filter pipeline, so it is part of the observable contract.
    pub const ALL: [Self; 5] = [
        Self::Metallic,
        Self::Woody,
        Self::Stony,
        Self::Fabric,
        Self::Leathery,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Metallic => "Metallic",
            Self::Woody => "Woody",
            Self::Stony => "Stony",
            Self::Fabric => "Fabric",
            Self::Leathery => "Leathery",
        }
    }

    /// Position in [`Category::ALL`], usable as a dense array index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Metallic => 0,
            Self::Woody => 1,
            Self::Stony => 2,
            Self::Fabric => 3,
            Self::Leathery => 4,
        }
    }
}
