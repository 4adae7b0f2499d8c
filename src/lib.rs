//! Gondola — synthetic retail catalog with hierarchy rollups
//!
//! A demonstration/mockup toolkit for dashboard prototyping: it generates a
//! seeded 4-level retail hierarchy (departments → categories → subcategories
//! → products), stores it as an immutable in-memory snapshot, and computes
//! the aggregates that drive the dashboard pages — flow-diagram link widths
//! and colors, explorer-tree counts, and per-period quality series.
//!
//! # Architecture
//!
//! - [`catalog`]: typed records, the validated read-only [`Catalog`] store
//! - [`hierarchy`]: parent→children index with referential-integrity checks
//! - [`aggregate`]: descendant product sets and dominant-quality rollups
//! - [`temporal`]: chronological per-period quality counts and deltas
//! - [`loader`]: CSV load/store of the five flat tables
//! - [`generate`]: seeded synthetic-data generator
//! - [`viz`]: serialisable chart payloads (Sankey, tree, time series)
//!
//! # Example
//!
//! ```rust
//! use gondola::aggregate::{Aggregator, NodeRef};
//! use gondola::catalog::{Catalog, DepartmentId};
//! use gondola::generate::{generate, GeneratorConfig};
//!
//! let tables = generate(&GeneratorConfig::default());
//! let catalog = Catalog::from_tables(tables).unwrap();
//!
//! let aggregator = Aggregator::new(&catalog);
//! let fresh_foods = aggregator
//!     .products_under(NodeRef::Department(DepartmentId::new(1)))
//!     .unwrap();
//! println!(
//!     "Fresh Foods: {} products, overall {}",
//!     fresh_foods.len(),
//!     aggregator.dominant_quality(&fresh_foods)
//! );
//! ```

#![warn(clippy::all)]

pub mod aggregate;
pub mod catalog;
pub mod generate;
pub mod hierarchy;
pub mod loader;
pub mod temporal;
pub mod viz;

// Re-export the main types at the crate root
pub use aggregate::{Aggregator, NodeRef, QualityCounts, QualityPolicy, Selection};
pub use catalog::{
    Catalog, CatalogError, CatalogResult, CatalogStatistics, CatalogTables, Category,
    CategoryId, Department, DepartmentId, Level, Product, ProductId, Quality, Status,
    Subcategory, SubcategoryId, TemporalQualityRecord,
};
pub use hierarchy::{AncestorChain, HierarchyIndex};
pub use loader::{load_dir, load_tables, write_dir, LoadError, LoadResult};
pub use temporal::{
    quality_by_period, trend_summary, waterfall_deltas, PeriodBucket, PeriodDeltas, PeriodRef,
    TrendSummary,
};

/// Crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
