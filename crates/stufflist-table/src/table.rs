//! The material table session: filter, sort, and the visible row set.

use crate::filter::CategoryFilter;
use crate::sort::{SortDirection, SortKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use stufflist_core::{Catalog, Category, MaterialItem};

/// One open material-table view.
///
/// Holds the session state a host needs to draw the table: which
/// categories are checked, what the active sort is, and the resulting
/// row set as indices into the shared catalog snapshot. The row set is
/// recomputed lazily behind a dirty flag whenever filter or sort change.
///
/// Construct one per view-open and drop it on close; reopening a view
/// therefore starts from defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StuffTable {
    catalog: Arc<Catalog>,
    filter: CategoryFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
    #[serde(skip, default = "default_dirty")]
    dirty: bool,
    #[serde(skip)]
    visible: Vec<usize>,
}

const fn default_dirty() -> bool {
    true
}

impl StuffTable {
    /// Open a table session over a catalog snapshot.
    ///
    /// Defaults: every category enabled, sorted by name ascending.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::default(),
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            dirty: true,
            visible: Vec::new(),
        }
    }

    /// The catalog snapshot this session reads.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current category selection.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Enable or disable one category checkbox.
    pub fn set_category(&mut self, category: Category, enabled: bool) {
        if self.filter.enabled(category) != enabled {
            self.filter.set(category, enabled);
            self.dirty = true;
        }
    }

    /// The active sort key.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The active sort direction.
    #[must_use]
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// Replace the sort descriptor outright.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
        self.dirty = true;
    }

    /// Header-click sorting.
    ///
    /// Clicking the already-active column toggles the direction; clicking
    /// a different column switches to it and keeps the direction as-is.
    pub fn sort_by(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggle();
        } else {
            self.sort_key = key;
        }
        self.dirty = true;
    }

    /// Whether the next visibility query will recompute.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The filtered, de-duplicated, sorted row set as catalog indices.
    ///
    /// Recomputes only when filter or sort changed since the last call.
    pub fn visible_items(&mut self) -> &[usize] {
        self.recompute_if_dirty();
        &self.visible
    }

    /// The visible rows as materials, in display order.
    pub fn visible_materials(&mut self) -> impl Iterator<Item = &MaterialItem> {
        self.recompute_if_dirty();
        let catalog = &self.catalog;
        self.visible.iter().map(move |&idx| catalog.item(idx))
    }

    /// Number of visible rows, for host layout (scroll extent).
    pub fn visible_count(&mut self) -> usize {
        self.recompute_if_dirty();
        self.visible.len()
    }

    fn recompute_if_dirty(&mut self) {
        if self.dirty {
            self.recompute();
            self.dirty = false;
        }
    }

    fn recompute(&mut self) {
        self.visible.clear();

        // Union of the enabled categories' precomputed indices. An item
        // tagged with several enabled categories must appear once, and
        // ties in the later sort must fall back to catalog order, so the
        // union is normalized to ascending catalog indices.
        let mut seen = vec![false; self.catalog.len()];
        for category in Category::ALL {
            if !self.filter.enabled(category) {
                continue;
            }
            for &idx in self.catalog.category_items(category) {
                if !seen[idx] {
                    seen[idx] = true;
                    self.visible.push(idx);
                }
            }
        }
        self.visible.sort_unstable();

        let catalog = &self.catalog;
        let key = self.sort_key;
        let compare = move |&a: &usize, &b: &usize| -> Ordering {
            let (left, right) = (catalog.item(a), catalog.item(b));
            match key {
                SortKey::Name => left.label().cmp(right.label()),
                SortKey::Stat { space, stat } => {
                    left.stat(space, stat).total_cmp(&right.stat(space, stat))
                }
            }
        };
        // Stable sort with a flipped comparator (rather than sorting and
        // reversing) so that equal keys keep catalog order in both
        // directions.
        match self.sort_direction {
            SortDirection::Ascending => self.visible.sort_by(compare),
            SortDirection::Descending => self.visible.sort_by(|a, b| compare(b, a)),
        }
    }
}
