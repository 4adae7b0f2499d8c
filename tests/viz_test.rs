use gondola::aggregate::Aggregator;
use gondola::catalog::{Catalog, Level};
use gondola::generate::{generate, GeneratorConfig};
use gondola::viz;

fn generated_catalog() -> Catalog {
    Catalog::from_tables(generate(&GeneratorConfig::default())).unwrap()
}

#[test]
fn test_three_level_sankey_offsets() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);
    let diagram = viz::three_level(&aggregator).unwrap();
    let stats = catalog.statistics();

    assert_eq!(
        diagram.nodes.len(),
        stats.departments + stats.categories + stats.subcategories
    );
    // One link per category plus one per subcategory.
    assert_eq!(diagram.links.len(), stats.categories + stats.subcategories);

    for link in &diagram.links {
        assert!(link.source < diagram.nodes.len());
        assert!(link.target < diagram.nodes.len());
        assert!(link.value >= 1, "links never collapse to zero width");

        // Links only ever point one layer down.
        let source_level = diagram.nodes[link.source].level;
        let target_level = diagram.nodes[link.target].level;
        match source_level {
            Level::Department => assert_eq!(target_level, Level::Category),
            Level::Category => assert_eq!(target_level, Level::Subcategory),
            other => panic!("unexpected source level {other}"),
        }
    }
}

#[test]
fn test_four_level_sankey_respects_product_cap() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);
    let cap = 5;
    let diagram = viz::four_level(&aggregator, cap).unwrap();
    let stats = catalog.statistics();

    let product_nodes = diagram
        .nodes
        .iter()
        .filter(|n| n.level == Level::Product)
        .count();
    assert!(product_nodes <= stats.subcategories * cap);
    assert!(product_nodes > 0);

    let product_links = diagram
        .links
        .iter()
        .filter(|l| diagram.nodes[l.target].level == Level::Product)
        .count();
    assert_eq!(product_links, product_nodes);
}

#[test]
fn test_explorer_tree_counts_sum_like_the_tables() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);
    let roots = viz::explorer_tree(&aggregator).unwrap();

    let total: u64 = roots.iter().map(|r| r.product_count).sum();
    assert_eq!(total, catalog.statistics().products as u64);

    fn check(node: &viz::TreeNode) {
        if !node.children.is_empty() {
            let sum: u64 = node.children.iter().map(|c| c.product_count).sum();
            assert_eq!(node.product_count, sum, "{} {}", node.level, node.id);
            node.children.iter().for_each(check);
        }
    }
    roots.iter().for_each(check);
}

#[test]
fn test_payloads_serialize() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    let diagram = viz::three_level(&aggregator).unwrap();
    let json = serde_json::to_value(&diagram).unwrap();
    assert_eq!(json["nodes"][0]["level"], "department");
    assert!(json["links"][0]["value"].as_u64().unwrap() >= 1);
}
