//! Immutable in-memory catalog store
//!
//! The [`Catalog`] owns the five tables plus the hierarchy index derived
//! from them. Construction validates the whole snapshot (unique ids,
//! resolvable parent links) and fails fast; after that every read is
//! infallible or O(1)/O(children), and nothing is ever mutated.

use super::records::{
    CatalogTables, Category, Department, Product, Subcategory, TemporalQualityRecord,
};
use super::types::{CategoryId, DepartmentId, ProductId, SubcategoryId};
use crate::hierarchy::{AncestorChain, HierarchyIndex};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur while building or querying the catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("department {0} not found")]
    DepartmentNotFound(DepartmentId),

    #[error("category {0} not found")]
    CategoryNotFound(CategoryId),

    #[error("subcategory {0} not found")]
    SubcategoryNotFound(SubcategoryId),

    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("duplicate {level} id {id}")]
    DuplicateId { level: super::Level, id: u32 },

    #[error("category {id} references missing department {department_id}")]
    OrphanCategory {
        id: CategoryId,
        department_id: DepartmentId,
    },

    #[error("subcategory {id} references missing category {category_id}")]
    OrphanSubcategory {
        id: SubcategoryId,
        category_id: CategoryId,
    },

    #[error("product {id} references missing subcategory {subcategory_id}")]
    OrphanProduct {
        id: ProductId,
        subcategory_id: SubcategoryId,
    },

    #[error("temporal record for period {period_id} references missing product {product_id}")]
    OrphanTemporalRecord {
        product_id: ProductId,
        period_id: String,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only snapshot of the 4-level catalog hierarchy.
///
/// Tables are keyed by id but preserve load order, so enumerations are
/// deterministic for a given snapshot. The hierarchy index is built once at
/// construction; lookups are O(1) per id and O(children) per enumeration,
/// replacing the per-query linear scans a naive implementation would do.
#[derive(Debug, Clone)]
pub struct Catalog {
    departments: IndexMap<DepartmentId, Department>,
    categories: IndexMap<CategoryId, Category>,
    subcategories: IndexMap<SubcategoryId, Subcategory>,
    products: IndexMap<ProductId, Product>,
    temporal: Vec<TemporalQualityRecord>,
    hierarchy: HierarchyIndex,
}

/// Summary counts over a catalog snapshot
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CatalogStatistics {
    pub departments: usize,
    pub categories: usize,
    pub subcategories: usize,
    pub products: usize,
    pub temporal_records: usize,
}

impl Catalog {
    /// Validate raw table rows and build the indexed catalog.
    ///
    /// Fails on the first duplicate id or unresolvable parent link rather
    /// than silently dropping rows (dropped rows would undercount every
    /// aggregate built on top).
    pub fn from_tables(tables: CatalogTables) -> CatalogResult<Self> {
        let mut departments = IndexMap::with_capacity(tables.departments.len());
        for department in tables.departments {
            let id = department.id;
            if departments.insert(id, department).is_some() {
                return Err(CatalogError::DuplicateId {
                    level: super::Level::Department,
                    id: id.as_u32(),
                });
            }
        }

        let mut categories = IndexMap::with_capacity(tables.categories.len());
        for category in tables.categories {
            let id = category.id;
            if categories.insert(id, category).is_some() {
                return Err(CatalogError::DuplicateId {
                    level: super::Level::Category,
                    id: id.as_u32(),
                });
            }
        }

        let mut subcategories = IndexMap::with_capacity(tables.subcategories.len());
        for subcategory in tables.subcategories {
            let id = subcategory.id;
            if subcategories.insert(id, subcategory).is_some() {
                return Err(CatalogError::DuplicateId {
                    level: super::Level::Subcategory,
                    id: id.as_u32(),
                });
            }
        }

        let mut products = IndexMap::with_capacity(tables.products.len());
        for product in tables.products {
            let id = product.id;
            if products.insert(id, product).is_some() {
                return Err(CatalogError::DuplicateId {
                    level: super::Level::Product,
                    id: id.as_u32(),
                });
            }
        }

        let hierarchy = HierarchyIndex::build(
            &departments,
            &categories,
            &subcategories,
            &products,
            &tables.temporal,
        )?;

        tracing::debug!(
            departments = departments.len(),
            categories = categories.len(),
            subcategories = subcategories.len(),
            products = products.len(),
            temporal_records = tables.temporal.len(),
            "catalog snapshot indexed"
        );

        Ok(Catalog {
            departments,
            categories,
            subcategories,
            products,
            temporal: tables.temporal,
            hierarchy,
        })
    }

    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics {
            departments: self.departments.len(),
            categories: self.categories.len(),
            subcategories: self.subcategories.len(),
            products: self.products.len(),
            temporal_records: self.temporal.len(),
        }
    }

    // --- single-record lookups ---

    pub fn department(&self, id: DepartmentId) -> CatalogResult<&Department> {
        self.departments
            .get(&id)
            .ok_or(CatalogError::DepartmentNotFound(id))
    }

    pub fn category(&self, id: CategoryId) -> CatalogResult<&Category> {
        self.categories
            .get(&id)
            .ok_or(CatalogError::CategoryNotFound(id))
    }

    pub fn subcategory(&self, id: SubcategoryId) -> CatalogResult<&Subcategory> {
        self.subcategories
            .get(&id)
            .ok_or(CatalogError::SubcategoryNotFound(id))
    }

    pub fn product(&self, id: ProductId) -> CatalogResult<&Product> {
        self.products
            .get(&id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    // --- whole-table enumeration (load order) ---

    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.values()
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.values()
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn temporal_records(&self) -> &[TemporalQualityRecord] {
        &self.temporal
    }

    /// Position of an id within its table's load order. Used by chart
    /// builders that address nodes by level-major index.
    pub fn department_position(&self, id: DepartmentId) -> CatalogResult<usize> {
        self.departments
            .get_index_of(&id)
            .ok_or(CatalogError::DepartmentNotFound(id))
    }

    pub fn category_position(&self, id: CategoryId) -> CatalogResult<usize> {
        self.categories
            .get_index_of(&id)
            .ok_or(CatalogError::CategoryNotFound(id))
    }

    pub fn subcategory_position(&self, id: SubcategoryId) -> CatalogResult<usize> {
        self.subcategories
            .get_index_of(&id)
            .ok_or(CatalogError::SubcategoryNotFound(id))
    }

    pub fn product_position(&self, id: ProductId) -> CatalogResult<usize> {
        self.products
            .get_index_of(&id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    // --- hierarchy navigation ---

    pub fn hierarchy(&self) -> &HierarchyIndex {
        &self.hierarchy
    }

    /// Child categories of a department, in load order.
    pub fn categories_in(&self, id: DepartmentId) -> CatalogResult<Vec<&Category>> {
        let ids = self
            .hierarchy
            .categories_in(id)
            .ok_or(CatalogError::DepartmentNotFound(id))?;
        Ok(ids.iter().filter_map(|cid| self.categories.get(cid)).collect())
    }

    /// Child subcategories of a category, in load order.
    pub fn subcategories_in(&self, id: CategoryId) -> CatalogResult<Vec<&Subcategory>> {
        let ids = self
            .hierarchy
            .subcategories_in(id)
            .ok_or(CatalogError::CategoryNotFound(id))?;
        Ok(ids
            .iter()
            .filter_map(|sid| self.subcategories.get(sid))
            .collect())
    }

    /// Child products of a subcategory, in load order.
    pub fn products_in(&self, id: SubcategoryId) -> CatalogResult<Vec<&Product>> {
        let ids = self
            .hierarchy
            .products_in(id)
            .ok_or(CatalogError::SubcategoryNotFound(id))?;
        Ok(ids.iter().filter_map(|pid| self.products.get(pid)).collect())
    }

    /// Walk a product up to its subcategory, category and department.
    pub fn ancestor_chain(&self, id: ProductId) -> CatalogResult<AncestorChain<'_>> {
        let product = self.product(id)?;
        let subcategory = self.subcategory(product.subcategory_id)?;
        let category = self.category(subcategory.category_id)?;
        let department = self.department(category.department_id)?;
        Ok(AncestorChain {
            subcategory,
            category,
            department,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::small_tables;
    use crate::catalog::{Level, Quality};

    #[test]
    fn test_from_tables_builds_indexed_catalog() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let stats = catalog.statistics();
        assert_eq!(stats.departments, 2);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.subcategories, 2);
        assert_eq!(stats.products, 4);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut tables = small_tables();
        let dup = tables.products[0].clone();
        tables.products.push(dup);
        let err = Catalog::from_tables(tables).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                level: Level::Product,
                id: 1,
            }
        );
    }

    #[test]
    fn test_single_record_lookup_and_not_found() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        assert_eq!(catalog.product(ProductId::new(1)).unwrap().quality, Quality::Good);
        assert_eq!(
            catalog.product(ProductId::new(999)).unwrap_err(),
            CatalogError::ProductNotFound(ProductId::new(999))
        );
        assert_eq!(
            catalog.categories_in(DepartmentId::new(42)).unwrap_err(),
            CatalogError::DepartmentNotFound(DepartmentId::new(42))
        );
    }

    #[test]
    fn test_ancestor_chain() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let chain = catalog.ancestor_chain(ProductId::new(1)).unwrap();
        assert_eq!(chain.subcategory.id, SubcategoryId::new(1));
        assert_eq!(chain.category.id, CategoryId::new(1));
        assert_eq!(chain.department.id, DepartmentId::new(1));
        assert_eq!(chain.department.name, "Fresh Foods");
    }

    #[test]
    fn test_children_enumeration_preserves_load_order() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let products = catalog.products_in(SubcategoryId::new(1)).unwrap();
        let ids: Vec<u32> = products.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_parent_has_empty_children() {
        let mut tables = small_tables();
        tables.departments.push(Department {
            id: DepartmentId::new(9),
            name: "Seasonal".into(),
            description: "Rotating seasonal stock".into(),
        });
        let catalog = Catalog::from_tables(tables).unwrap();
        assert!(catalog.categories_in(DepartmentId::new(9)).unwrap().is_empty());
    }
}
