//! Sankey flow-diagram payloads
//!
//! Node indices are laid out level-major: all departments first, then
//! categories, then subcategories, then (optionally) products, each in table
//! load order. Link widths come from the visual weight of the product set
//! under the link's target, so empty branches keep a visible minimum width;
//! link colors are the target's dominant quality class.

use crate::aggregate::{Aggregator, NodeRef};
use crate::catalog::{CatalogResult, Level, Quality};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNode {
    pub label: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: u64,
    pub quality: Quality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyDiagram {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

/// Three-level flow: departments → categories → subcategories.
pub fn three_level(aggregator: &Aggregator) -> CatalogResult<SankeyDiagram> {
    build(aggregator, None)
}

/// Four-level flow including a products layer, capped per subcategory to
/// keep the diagram renderable on large catalogs.
pub fn four_level(
    aggregator: &Aggregator,
    max_products_per_subcategory: usize,
) -> CatalogResult<SankeyDiagram> {
    build(aggregator, Some(max_products_per_subcategory))
}

fn build(aggregator: &Aggregator, product_cap: Option<usize>) -> CatalogResult<SankeyDiagram> {
    let catalog = aggregator.catalog();
    let stats = catalog.statistics();

    let category_offset = stats.departments;
    let subcategory_offset = category_offset + stats.categories;
    let product_offset = subcategory_offset + stats.subcategories;

    let mut nodes = Vec::new();
    for department in catalog.departments() {
        nodes.push(SankeyNode {
            label: department.name.clone(),
            level: Level::Department,
        });
    }
    for category in catalog.categories() {
        nodes.push(SankeyNode {
            label: category.name.clone(),
            level: Level::Category,
        });
    }
    for subcategory in catalog.subcategories() {
        nodes.push(SankeyNode {
            label: subcategory.name.clone(),
            level: Level::Subcategory,
        });
    }

    let mut links = Vec::new();

    // Departments → categories
    for category in catalog.categories() {
        let products = aggregator.products_under(NodeRef::Category(category.id))?;
        links.push(SankeyLink {
            source: catalog.department_position(category.department_id)?,
            target: category_offset + catalog.category_position(category.id)?,
            value: Aggregator::visual_weight(&products),
            quality: aggregator.dominant_quality(&products),
        });
    }

    // Categories → subcategories
    for subcategory in catalog.subcategories() {
        let products = aggregator.products_under(NodeRef::Subcategory(subcategory.id))?;
        links.push(SankeyLink {
            source: category_offset + catalog.category_position(subcategory.category_id)?,
            target: subcategory_offset + catalog.subcategory_position(subcategory.id)?,
            value: Aggregator::visual_weight(&products),
            quality: aggregator.dominant_quality(&products),
        });
    }

    // Subcategories → products, truncated per subcategory. Product node
    // indices are assigned in emission order since the layer is a subset of
    // the product table.
    if let Some(cap) = product_cap {
        let mut next_product_index = product_offset;
        for subcategory in catalog.subcategories() {
            let source = subcategory_offset + catalog.subcategory_position(subcategory.id)?;
            for product in catalog.products_in(subcategory.id)?.into_iter().take(cap) {
                nodes.push(SankeyNode {
                    label: product.name.clone(),
                    level: Level::Product,
                });
                links.push(SankeyLink {
                    source,
                    target: next_product_index,
                    value: 1,
                    quality: product.quality,
                });
                next_product_index += 1;
            }
        }
    }

    Ok(SankeyDiagram { nodes, links })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::small_tables;
    use crate::catalog::Catalog;

    #[test]
    fn test_three_level_layout() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let aggregator = Aggregator::new(&catalog);
        let diagram = three_level(&aggregator).unwrap();

        // 2 departments + 2 categories + 2 subcategories.
        assert_eq!(diagram.nodes.len(), 6);
        assert_eq!(diagram.links.len(), 4);

        // First link: department 1 → category 1 carries 3 good-ish products.
        let link = &diagram.links[0];
        assert_eq!(link.source, 0);
        assert_eq!(link.target, 2);
        assert_eq!(link.value, 3);
        assert_eq!(link.quality, Quality::Good);

        // Every link target sits in a later layer than its source.
        for link in &diagram.links {
            assert!(link.source < link.target);
        }
    }

    #[test]
    fn test_four_level_caps_products() {
        let catalog = Catalog::from_tables(small_tables()).unwrap();
        let aggregator = Aggregator::new(&catalog);
        let diagram = four_level(&aggregator, 2).unwrap();

        let product_nodes = diagram
            .nodes
            .iter()
            .filter(|n| n.level == Level::Product)
            .count();
        // Subcategory 1 has 3 products (capped to 2), subcategory 2 has 1.
        assert_eq!(product_nodes, 3);

        // Product links are unit-width and colored by the product itself.
        let product_links: Vec<_> = diagram
            .links
            .iter()
            .filter(|l| l.target >= 6)
            .collect();
        assert_eq!(product_links.len(), 3);
        assert!(product_links.iter().all(|l| l.value == 1));
    }

    #[test]
    fn test_empty_branch_keeps_minimum_width() {
        let mut tables = small_tables();
        tables.subcategories.push(crate::catalog::Subcategory {
            id: crate::catalog::SubcategoryId::new(3),
            category_id: crate::catalog::CategoryId::new(1),
            name: "Melons".into(),
            description: "Seasonal melons".into(),
        });
        let catalog = Catalog::from_tables(tables).unwrap();
        let aggregator = Aggregator::new(&catalog);
        let diagram = three_level(&aggregator).unwrap();

        // The childless subcategory still gets a visible link.
        let link = diagram.links.last().unwrap();
        assert_eq!(link.value, 1);
        assert_eq!(link.quality, Quality::Neutral);
    }
}
