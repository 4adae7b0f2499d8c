//! Checkbox-tree explorer payload
//!
//! A recursive node-per-record tree with precomputed product counts and
//! dominant quality classes, so the explorer can render badge counts and
//! color chips without re-aggregating on the client side.

use crate::aggregate::{Aggregator, NodeRef};
use crate::catalog::{CatalogResult, Level, Quality};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub level: Level,
    pub id: u32,
    pub label: String,
    pub product_count: u64,
    pub quality: Quality,
    pub children: Vec<TreeNode>,
}

/// Build the full explorer tree, departments down to product leaves.
pub fn explorer_tree(aggregator: &Aggregator) -> CatalogResult<Vec<TreeNode>> {
    let catalog = aggregator.catalog();
    let mut roots = Vec::new();

    for department in catalog.departments() {
        let mut department_children = Vec::new();
        for category in catalog.categories_in(department.id)? {
            let mut category_children = Vec::new();
            for subcategory in catalog.subcategories_in(category.id)? {
                let leaves: Vec<TreeNode> = catalog
                    .products_in(subcategory.id)?
                    .into_iter()
                    .map(|product| TreeNode {
                        level: Level::Product,
                        id: product.id.as_u32(),
                        label: product.name.clone(),
                        product_count: 1,
                        quality: product.quality,
                        children: Vec::new(),
                    })
                    .collect();

                let products = aggregator.products_under(NodeRef::Subcategory(subcategory.id))?;
                category_children.push(TreeNode {
                    level: Level::Subcategory,
                    id: subcategory.id.as_u32(),
                    label: subcategory.name.clone(),
                    product_count: products.len() as u64,
                    quality: aggregator.dominant_quality(&products),
                    children: leaves,
                });
            }

            let products = aggregator.products_under(NodeRef::Category(category.id))?;
            department_children.push(TreeNode {
                level: Level::Category,
                id: category.id.as_u32(),
                label: category.name.clone(),
                product_count: products.len() as u64,
                quality: aggregator.dominant_quality(&products),
                children: category_children,
            });
        }

        let products = aggregator.products_under(NodeRef::Department(department.id))?;
        roots.push(TreeNode {
            level: Level::Department,
            id: department.id.as_u32(),
            label: department.name.clone(),
            product_count: products.len() as u64,
            quality: aggregator.dominant_quality(&products),
            children: department_children,
        });
    }

    Ok(roots)
}
