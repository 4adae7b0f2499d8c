//! Hierarchy index: parent→children navigation over the flat tables
//!
//! Built in a single pass per table. Each parent id gets an adjacency entry
//! (possibly empty), so "unknown parent" and "parent with no children" stay
//! distinguishable. Construction doubles as the referential-integrity check:
//! any child row whose parent id does not resolve aborts the build instead
//! of being dropped, since a dropped row would undercount every aggregate
//! computed later.

use crate::catalog::records::{Category, Department, Product, Subcategory, TemporalQualityRecord};
use crate::catalog::store::{CatalogError, CatalogResult};
use crate::catalog::types::{CategoryId, DepartmentId, ProductId, SubcategoryId};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// The (subcategory, category, department) ancestry of a product.
#[derive(Debug, Clone, Copy)]
pub struct AncestorChain<'a> {
    pub subcategory: &'a Subcategory,
    pub category: &'a Category,
    pub department: &'a Department,
}

/// Precomputed parent→children id maps for all three level transitions.
///
/// Child id vectors preserve table load order, so enumerations through the
/// index match enumerations over the raw tables.
#[derive(Debug, Clone, Default)]
pub struct HierarchyIndex {
    categories_by_department: FxHashMap<DepartmentId, Vec<CategoryId>>,
    subcategories_by_category: FxHashMap<CategoryId, Vec<SubcategoryId>>,
    products_by_subcategory: FxHashMap<SubcategoryId, Vec<ProductId>>,
}

impl HierarchyIndex {
    /// Build the adjacency maps, validating every parent link (including
    /// temporal records, which must reference an existing product).
    pub fn build(
        departments: &IndexMap<DepartmentId, Department>,
        categories: &IndexMap<CategoryId, Category>,
        subcategories: &IndexMap<SubcategoryId, Subcategory>,
        products: &IndexMap<ProductId, Product>,
        temporal: &[TemporalQualityRecord],
    ) -> CatalogResult<Self> {
        let mut categories_by_department: FxHashMap<DepartmentId, Vec<CategoryId>> =
            departments.keys().map(|id| (*id, Vec::new())).collect();
        for category in categories.values() {
            let children = categories_by_department
                .get_mut(&category.department_id)
                .ok_or(CatalogError::OrphanCategory {
                    id: category.id,
                    department_id: category.department_id,
                })?;
            children.push(category.id);
        }

        let mut subcategories_by_category: FxHashMap<CategoryId, Vec<SubcategoryId>> =
            categories.keys().map(|id| (*id, Vec::new())).collect();
        for subcategory in subcategories.values() {
            let children = subcategories_by_category
                .get_mut(&subcategory.category_id)
                .ok_or(CatalogError::OrphanSubcategory {
                    id: subcategory.id,
                    category_id: subcategory.category_id,
                })?;
            children.push(subcategory.id);
        }

        let mut products_by_subcategory: FxHashMap<SubcategoryId, Vec<ProductId>> =
            subcategories.keys().map(|id| (*id, Vec::new())).collect();
        for product in products.values() {
            let children = products_by_subcategory
                .get_mut(&product.subcategory_id)
                .ok_or(CatalogError::OrphanProduct {
                    id: product.id,
                    subcategory_id: product.subcategory_id,
                })?;
            children.push(product.id);
        }

        for record in temporal {
            if !products.contains_key(&record.product_id) {
                return Err(CatalogError::OrphanTemporalRecord {
                    product_id: record.product_id,
                    period_id: record.period_id.clone(),
                });
            }
        }

        Ok(HierarchyIndex {
            categories_by_department,
            subcategories_by_category,
            products_by_subcategory,
        })
    }

    /// Category ids under a department, or `None` for an unknown id.
    pub fn categories_in(&self, id: DepartmentId) -> Option<&[CategoryId]> {
        self.categories_by_department.get(&id).map(Vec::as_slice)
    }

    /// Subcategory ids under a category, or `None` for an unknown id.
    pub fn subcategories_in(&self, id: CategoryId) -> Option<&[SubcategoryId]> {
        self.subcategories_by_category.get(&id).map(Vec::as_slice)
    }

    /// Product ids under a subcategory, or `None` for an unknown id.
    pub fn products_in(&self, id: SubcategoryId) -> Option<&[ProductId]> {
        self.products_by_subcategory.get(&id).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{small_tables, temporal};
    use crate::catalog::{Catalog, Quality};

    #[test]
    fn test_children_lookup_through_index() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let index = catalog.hierarchy();

        assert_eq!(
            index.categories_in(DepartmentId::new(1)).unwrap(),
            &[CategoryId::new(1)]
        );
        assert_eq!(
            index.products_in(SubcategoryId::new(1)).unwrap(),
            &[ProductId::new(1), ProductId::new(2), ProductId::new(3)]
        );
        assert!(index.categories_in(DepartmentId::new(99)).is_none());
    }

    #[test]
    fn test_orphan_category_fails_build() {
        let mut tables = small_tables();
        tables.categories[1].department_id = DepartmentId::new(77);
        let err = Catalog::from_tables(tables).unwrap_err();
        assert_eq!(
            err,
            CatalogError::OrphanCategory {
                id: CategoryId::new(2),
                department_id: DepartmentId::new(77),
            }
        );
    }

    #[test]
    fn test_orphan_product_fails_build() {
        let mut tables = small_tables();
        tables.products[3].subcategory_id = SubcategoryId::new(50);
        let err = Catalog::from_tables(tables).unwrap_err();
        assert_eq!(
            err,
            CatalogError::OrphanProduct {
                id: ProductId::new(4),
                subcategory_id: SubcategoryId::new(50),
            }
        );
    }

    #[test]
    fn test_orphan_temporal_record_fails_build() {
        let mut tables = small_tables();
        tables
            .temporal
            .push(temporal(123, "2023-03", 2, "Mar 2023", Quality::Good));
        let err = Catalog::from_tables(tables).unwrap_err();
        assert_eq!(
            err,
            CatalogError::OrphanTemporalRecord {
                product_id: ProductId::new(123),
                period_id: "2023-03".into(),
            }
        );
    }
}
