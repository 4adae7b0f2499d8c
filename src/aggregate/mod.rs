//! Rollup aggregation over the catalog hierarchy
//!
//! Computes, for any node at any level or for an arbitrary product-id set,
//! the descendant product count and the dominant quality classification that
//! drive the chart payloads (flow-link widths and colors, tree-node counts).
//!
//! Everything here is a pure function of (catalog snapshot, selection): the
//! aggregator borrows the catalog, holds no mutable state, and recomputes
//! from the indexed tables on every call.

use crate::catalog::{
    Catalog, CatalogResult, CategoryId, DepartmentId, ProductId, Quality, SubcategoryId,
};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A reference to one aggregatable (non-leaf) node in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Department(DepartmentId),
    Category(CategoryId),
    Subcategory(SubcategoryId),
}

/// Thresholds for classifying an aggregate's dominant quality.
///
/// The defaults (60% good, 30% poor) are policy constants carried over from
/// the dashboard this models, kept configurable rather than baked into the
/// call sites. Checked in order: good first, then poor, else neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityPolicy {
    /// Minimum fraction of good products for a "good" aggregate.
    pub good_threshold: f64,
    /// Minimum fraction of poor products for a "poor" aggregate, checked
    /// only after the good test fails.
    pub poor_threshold: f64,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        QualityPolicy {
            good_threshold: 0.6,
            poor_threshold: 0.3,
        }
    }
}

/// Per-label tallies of a quality distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCounts {
    pub good: u64,
    pub neutral: u64,
    pub poor: u64,
}

impl QualityCounts {
    pub fn record(&mut self, quality: Quality) {
        match quality {
            Quality::Good => self.good += 1,
            Quality::Neutral => self.neutral += 1,
            Quality::Poor => self.poor += 1,
        }
    }

    pub fn get(&self, quality: Quality) -> u64 {
        match quality {
            Quality::Good => self.good,
            Quality::Neutral => self.neutral,
            Quality::Poor => self.poor,
        }
    }

    pub fn total(&self) -> u64 {
        self.good + self.neutral + self.poor
    }
}

/// An explicit multi-level selection, as produced by a checkbox tree where
/// any mix of departments, categories, subcategories and individual products
/// can be ticked at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub departments: Vec<DepartmentId>,
    pub categories: Vec<CategoryId>,
    pub subcategories: Vec<SubcategoryId>,
    pub products: Vec<ProductId>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
            && self.categories.is_empty()
            && self.subcategories.is_empty()
            && self.products.is_empty()
    }
}

/// Aggregation executor borrowing a catalog snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    catalog: &'a Catalog,
    policy: QualityPolicy,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator with the default quality policy.
    pub fn new(catalog: &'a Catalog) -> Self {
        Aggregator {
            catalog,
            policy: QualityPolicy::default(),
        }
    }

    /// Create an aggregator with caller-supplied thresholds.
    pub fn with_policy(catalog: &'a Catalog, policy: QualityPolicy) -> Self {
        Aggregator { catalog, policy }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn policy(&self) -> QualityPolicy {
        self.policy
    }

    /// All descendant product ids of a node: a direct index lookup for a
    /// subcategory, the union over children for the upper levels. Unknown
    /// node ids are reported, not treated as empty.
    pub fn products_under(&self, node: NodeRef) -> CatalogResult<FxHashSet<ProductId>> {
        let mut set = FxHashSet::default();
        self.collect_products(node, &mut set)?;
        Ok(set)
    }

    fn collect_products(
        &self,
        node: NodeRef,
        set: &mut FxHashSet<ProductId>,
    ) -> CatalogResult<()> {
        let hierarchy = self.catalog.hierarchy();
        match node {
            NodeRef::Department(id) => {
                // Validate through the catalog so unknown ids surface as
                // NotFound instead of an empty union.
                self.catalog.department(id)?;
                for category in hierarchy.categories_in(id).unwrap_or_default() {
                    self.collect_products(NodeRef::Category(*category), set)?;
                }
            }
            NodeRef::Category(id) => {
                self.catalog.category(id)?;
                for subcategory in hierarchy.subcategories_in(id).unwrap_or_default() {
                    self.collect_products(NodeRef::Subcategory(*subcategory), set)?;
                }
            }
            NodeRef::Subcategory(id) => {
                self.catalog.subcategory(id)?;
                set.extend(
                    hierarchy
                        .products_in(id)
                        .unwrap_or_default()
                        .iter()
                        .copied(),
                );
            }
        }
        Ok(())
    }

    /// Tally the quality labels of a product set.
    pub fn quality_distribution(&self, products: &FxHashSet<ProductId>) -> QualityCounts {
        let mut counts = QualityCounts::default();
        for id in products {
            if let Ok(product) = self.catalog.product(*id) {
                counts.record(product.quality);
            }
        }
        counts
    }

    /// The single quality label for an aggregate, per the configured policy.
    ///
    /// Empty sets classify as neutral, the default for mixed or ambiguous
    /// distributions.
    pub fn dominant_quality(&self, products: &FxHashSet<ProductId>) -> Quality {
        self.classify(&self.quality_distribution(products))
    }

    /// Apply the threshold policy to an already-computed distribution.
    pub fn classify(&self, counts: &QualityCounts) -> Quality {
        let total = counts.total();
        if total == 0 {
            return Quality::Neutral;
        }
        let total = total as f64;
        if counts.good as f64 / total >= self.policy.good_threshold {
            Quality::Good
        } else if counts.poor as f64 / total >= self.policy.poor_threshold {
            Quality::Poor
        } else {
            Quality::Neutral
        }
    }

    /// Minimum-one product count, so empty aggregates keep a visible link
    /// width in flow diagrams.
    pub fn visual_weight(products: &FxHashSet<ProductId>) -> u64 {
        (products.len() as u64).max(1)
    }

    /// Resolve a mixed-level selection to the union of its contributing
    /// product-id sets. A product that is both explicitly selected and
    /// implied by a selected ancestor collapses naturally in the union.
    pub fn resolve_selection(&self, selection: &Selection) -> CatalogResult<FxHashSet<ProductId>> {
        let mut set = FxHashSet::default();
        for id in &selection.departments {
            self.collect_products(NodeRef::Department(*id), &mut set)?;
        }
        for id in &selection.categories {
            self.collect_products(NodeRef::Category(*id), &mut set)?;
        }
        for id in &selection.subcategories {
            self.collect_products(NodeRef::Subcategory(*id), &mut set)?;
        }
        for id in &selection.products {
            self.catalog.product(*id)?;
            set.insert(*id);
        }
        Ok(set)
    }
}
