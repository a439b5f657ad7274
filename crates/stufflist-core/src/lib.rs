//! Core data model for StuffList: material definitions, their stat
//! modifiers, and the immutable catalog the table queries.
//!
//! This crate knows nothing about filtering state or sort order; it only
//! models what the host's definition database hands over once per
//! session:
//! - [`MaterialItem`]: one crafting material with category tags and three
//!   stat spaces (bases, factors, offsets)
//! - [`Catalog`]: the read-only snapshot with precomputed per-category
//!   indices
//! - [`Category`], [`StatId`], [`StatSpace`], [`StatSheet`]: the
//!   vocabulary those two are built from

mod catalog;
mod category;
mod material;
mod stat;

pub use catalog::{Catalog, CatalogError};
pub use category::Category;
pub use material::MaterialItem;
pub use stat::{StatId, StatSheet, StatSpace};
