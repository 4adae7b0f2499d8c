//! Shared in-memory fixture tables for unit tests

use super::records::*;
use super::types::*;

pub(crate) fn product(id: u32, subcategory: u32, name: &str, quality: Quality) -> Product {
    Product {
        id: ProductId::new(id),
        subcategory_id: SubcategoryId::new(subcategory),
        name: name.to_string(),
        price: 2.99,
        stock_quantity: 10,
        unit: "each".into(),
        sku: format!("SKU-{id:06}"),
        barcode: "4006381333931".into(),
        description: format!("High quality {} available in our store", name.to_lowercase()),
        quality,
        status: Status::Approved,
    }
}

pub(crate) fn temporal(
    product_id: u32,
    period_id: &str,
    period_index: u32,
    period_name: &str,
    quality: Quality,
) -> TemporalQualityRecord {
    TemporalQualityRecord {
        product_id: ProductId::new(product_id),
        period_id: period_id.into(),
        period_index,
        period_name: period_name.into(),
        quality,
    }
}

/// Two departments; department 1 holds one category/subcategory with products
/// {1: good, 2: good, 3: poor}, department 2 holds a single neutral product.
pub(crate) fn small_tables() -> CatalogTables {
    CatalogTables {
        departments: vec![
            Department {
                id: DepartmentId::new(1),
                name: "Fresh Foods".into(),
                description: "Fresh fruits, vegetables, and perishables".into(),
            },
            Department {
                id: DepartmentId::new(2),
                name: "Packaged Goods".into(),
                description: "Shelf-stable packaged items and snacks".into(),
            },
        ],
        categories: vec![
            Category {
                id: CategoryId::new(1),
                department_id: DepartmentId::new(1),
                name: "Fruits".into(),
                description: "Fresh seasonal fruits".into(),
            },
            Category {
                id: CategoryId::new(2),
                department_id: DepartmentId::new(2),
                name: "Snacks".into(),
                description: "Chips, crackers, and snack foods".into(),
            },
        ],
        subcategories: vec![
            Subcategory {
                id: SubcategoryId::new(1),
                category_id: CategoryId::new(1),
                name: "Citrus Fruits".into(),
                description: "Oranges, lemons, limes, and grapefruits".into(),
            },
            Subcategory {
                id: SubcategoryId::new(2),
                category_id: CategoryId::new(2),
                name: "Chips & Crisps".into(),
                description: "Potato chips and similar snacks".into(),
            },
        ],
        products: vec![
            product(1, 1, "Navel Oranges", Quality::Good),
            product(2, 1, "Meyer Lemons", Quality::Good),
            product(3, 1, "Key Limes", Quality::Poor),
            product(4, 2, "Sea Salt Crisps", Quality::Neutral),
        ],
        temporal: vec![
            temporal(1, "2023-01", 0, "Jan 2023", Quality::Good),
            temporal(1, "2023-02", 1, "Feb 2023", Quality::Poor),
            temporal(4, "2023-01", 0, "Jan 2023", Quality::Neutral),
            temporal(4, "2023-02", 1, "Feb 2023", Quality::Neutral),
        ],
    }
}
