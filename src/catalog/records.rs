//! Record types for the four hierarchy tables and the temporal history
//!
//! Field names double as the column names of the flat CSV tables, so the
//! serde derives bind the load schema directly to these structs. All records
//! are immutable once the catalog is built.

use super::types::{CategoryId, DepartmentId, ProductId, Quality, Status, SubcategoryId};
use serde::{Deserialize, Serialize};

/// A top-level store department (level 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub description: String,
}

/// A product category within a department (level 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub department_id: DepartmentId,
    pub name: String,
    pub description: String,
}

/// A subcategory within a category (level 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
}

/// An individual product (level 4, the leaves of the hierarchy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub subcategory_id: SubcategoryId,
    pub name: String,
    /// Non-negative unit price.
    pub price: f64,
    pub stock_quantity: u32,
    pub unit: String,
    pub sku: String,
    pub barcode: String,
    pub description: String,
    pub quality: Quality,
    pub status: Status,
}

/// One observation of a product's quality classification in a time period.
///
/// `period_index` defines chronological order; the string `period_id` is a
/// stable key (e.g. "2023-12") and `period_name` a display label. Rollups
/// sort by the index, never by the string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalQualityRecord {
    pub product_id: ProductId,
    pub period_id: String,
    pub period_index: u32,
    pub period_name: String,
    pub quality: Quality,
}

/// Raw, unvalidated rows for all five tables, as produced by the loader or
/// the generator. Feed into [`Catalog::from_tables`](super::Catalog::from_tables)
/// to validate and index them.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub departments: Vec<Department>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub products: Vec<Product>,
    pub temporal: Vec<TemporalQualityRecord>,
}

impl CatalogTables {
    /// Total number of rows across all five tables.
    pub fn row_count(&self) -> usize {
        self.departments.len()
            + self.categories.len()
            + self.subcategories.len()
            + self.products.len()
            + self.temporal.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_column_names() {
        let product = Product {
            id: ProductId::new(1),
            subcategory_id: SubcategoryId::new(2),
            name: "Navel Oranges".into(),
            price: 3.49,
            stock_quantity: 42,
            unit: "lb".into(),
            sku: "SKU-000001".into(),
            barcode: "4006381333931".into(),
            description: "High quality navel oranges available in our store".into(),
            quality: Quality::Good,
            status: Status::Approved,
        };

        // The external contract is the exact column/field names.
        let json = serde_json::to_value(&product).unwrap();
        for key in [
            "id",
            "subcategory_id",
            "name",
            "price",
            "stock_quantity",
            "unit",
            "sku",
            "barcode",
            "description",
            "quality",
            "status",
        ] {
            assert!(json.get(key).is_some(), "missing column {key}");
        }
    }

    #[test]
    fn test_temporal_record_column_names() {
        let record = TemporalQualityRecord {
            product_id: ProductId::new(7),
            period_id: "2023-12".into(),
            period_index: 5,
            period_name: "Dec 2023".into(),
            quality: Quality::Neutral,
        };
        let json = serde_json::to_value(&record).unwrap();
        for key in ["product_id", "period_id", "period_index", "period_name", "quality"] {
            assert!(json.get(key).is_some(), "missing column {key}");
        }
    }
}
