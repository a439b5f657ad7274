//! Sort descriptors for the material table.

use serde::{Deserialize, Serialize};
use stufflist_core::{StatId, StatSpace};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Increasing order
    #[default]
    Ascending,
    /// Decreasing order
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether this is ascending order.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// What a table column sorts by.
///
/// A tagged variant instead of a dynamic property lookup: either the
/// display label, or one stat in one of the three value spaces. `Name`
/// deliberately carries no stat id, so two name sorts always compare
/// equal for toggle purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Compare display labels lexicographically
    #[default]
    Name,
    /// Compare one stat value numerically
    Stat {
        /// Value space to read from
        space: StatSpace,
        /// Stat to compare
        stat: StatId,
    },
}

impl SortKey {
    /// Shorthand for a stat sort key.
    #[must_use]
    pub const fn stat(space: StatSpace, stat: StatId) -> Self {
        Self::Stat { space, stat }
    }
}
