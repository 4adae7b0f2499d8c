//! Catalog data model and immutable store
//!
//! This module implements the 4-level retail hierarchy:
//! - Typed ids and the quality/status enums
//! - Record structs whose field names are the flat-table column contract
//! - The validated, read-only [`Catalog`] snapshot

pub mod records;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export main types
pub use records::{
    CatalogTables, Category, Department, Product, Subcategory, TemporalQualityRecord,
};
pub use store::{Catalog, CatalogError, CatalogResult, CatalogStatistics};
pub use types::{
    CategoryId, DepartmentId, Level, ProductId, Quality, Status, SubcategoryId,
};
