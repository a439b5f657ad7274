//! Filter/union/sort engine for the StuffList material table.
//!
//! Sits between a [`stufflist_core::Catalog`] snapshot and whatever
//! draws the table. One [`StuffTable`] per open view holds the session
//! state: five category checkboxes ([`CategoryFilter`]), the active
//! [`SortKey`] and [`SortDirection`], and the lazily recomputed visible
//! row set. [`standard_columns`] and [`format_cell`] supply the header
//! layout and cell text the host renders.

mod column;
mod filter;
mod format;
mod sort;
mod table;

pub use column::{standard_columns, Column};
pub use filter::CategoryFilter;
pub use format::{format_cell, render_row, CellFormat, TemperatureUnit};
pub use sort::{SortDirection, SortKey};
pub use table::StuffTable;
