//! Stat identifiers, value spaces, and sparse stat sheets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named statistic a material can modify.
///
/// An explicit enum rather than a string key: every column and sort key is
/// dispatched by `match`, so an unknown stat is a compile error instead of
/// a silent lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatId {
    /// Silver value on the market
    MarketValue,
    /// Armor rating against sharp damage
    ArmorSharp,
    /// Armor rating against blunt damage
    ArmorBlunt,
    /// Armor rating against heat
    ArmorHeat,
    /// Insulation against cold (temperature delta)
    InsulationCold,
    /// Insulation against heat (temperature delta)
    InsulationHeat,
    /// Sharp melee damage multiplier
    SharpDamageMultiplier,
    /// Blunt melee damage multiplier
    BluntDamageMultiplier,
    /// Beauty contribution
    Beauty,
    /// Maximum hit points
    MaxHitPoints,
    /// Work required to craft
    WorkToMake,
    /// Work required to build
    WorkToBuild,
    /// Chance to catch fire
    Flammability,
    /// Melee weapon cooldown multiplier
    MeleeCooldown,
}

impl StatId {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MarketValue => "Market value",
            Self::ArmorSharp => "Armor - sharp",
            Self::ArmorBlunt => "Armor - blunt",
            Self::ArmorHeat => "Armor - heat",
            Self::InsulationCold => "Insulation - cold",
            Self::InsulationHeat => "Insulation - heat",
            Self::SharpDamageMultiplier => "Sharp damage",
            Self::BluntDamageMultiplier => "Blunt damage",
            Self::Beauty => "Beauty",
            Self::MaxHitPoints => "Max hit points",
            Self::WorkToMake => "Work to make",
            Self::WorkToBuild => "Work to build",
            Self::Flammability => "Flammability",
            Self::MeleeCooldown => "Melee cooldown",
        }
    }
}

/// One of the three independent numeric spaces a material's stat
/// modifiers live in.
///
/// A stat absent from a space resolves to that space's default: bases and
/// factors default to 1, offsets to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatSpace {
    /// Flat base values
    Bases,
    /// Multiplicative factors
    Factors,
    /// Additive offsets
    Offsets,
}

impl StatSpace {
    /// Default value for a stat absent from this space.
    #[must_use]
    pub const fn default_value(self) -> f32 {
        match self {
            Self::Bases | Self::Factors => 1.0,
            Self::Offsets => 0.0,
        }
    }
}

/// Sparse mapping from [`StatId`] to a numeric value.
///
/// Lookup misses never error; callers supply the default that makes sense
/// for their value space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSheet {
    values: HashMap<StatId, f32>,
}

impl StatSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a stat value, replacing any previous entry.
    pub fn set(&mut self, stat: StatId, value: f32) {
        self.values.insert(stat, value);
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, stat: StatId, value: f32) -> Self {
        self.set(stat, value);
        self
    }

    /// Get a stat value, or `default` when the stat is not defined.
    #[must_use]
    pub fn get(&self, stat: StatId, default: f32) -> f32 {
        self.values.get(&stat).copied().unwrap_or(default)
    }

    /// Whether the stat has a defined value.
    #[must_use]
    pub fn contains(&self, stat: StatId) -> bool {
        self.values.contains_key(&stat)
    }

    /// Number of defined stats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no stats are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over defined `(stat, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (StatId, f32)> + '_ {
        self.values.iter().map(|(&stat, &value)| (stat, value))
    }
}
