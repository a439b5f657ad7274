//! StuffList: a sortable, filterable crafting-material statistics table
//! model.
//!
//! The host application owns rendering and the definition database; this
//! workspace owns everything in between. Build a [`Catalog`] once per
//! session from host data, open a [`StuffTable`] per view, and read the
//! visible rows, checkbox states, and sort descriptor back out to draw.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use stufflist::{
//!     Catalog, Category, MaterialItem, SortKey, StatId, StatSpace, StuffTable,
//! };
//!
//! let catalog = Arc::new(Catalog::new(vec![
//!     MaterialItem::new("Steel", "steel")
//!         .category(Category::Metallic)
//!         .base(StatId::MarketValue, 1.9)
//!         .factor(StatId::MaxHitPoints, 1.0),
//!     MaterialItem::new("WoodLog", "wood")
//!         .category(Category::Woody)
//!         .base(StatId::MarketValue, 1.2)
//!         .factor(StatId::MaxHitPoints, 0.65),
//! ])?);
//!
//! let mut table = StuffTable::new(catalog);
//! table.sort_by(SortKey::stat(StatSpace::Bases, StatId::MarketValue));
//! let labels: Vec<&str> = table.visible_materials().map(|m| m.label()).collect();
//! assert_eq!(labels, vec!["wood", "steel"]);
//! # Ok::<(), stufflist::CatalogError>(())
//! ```

pub use stufflist_core::{
    Catalog, CatalogError, Category, MaterialItem, StatId, StatSheet, StatSpace,
};
pub use stufflist_table::{
    format_cell, render_row, standard_columns, CategoryFilter, CellFormat, Column, SortDirection,
    SortKey, StuffTable, TemperatureUnit,
};
