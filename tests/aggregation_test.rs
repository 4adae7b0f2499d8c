use gondola::aggregate::{Aggregator, NodeRef, Selection};
use gondola::catalog::{Catalog, Quality};
use gondola::generate::{generate, GeneratorConfig};
use rustc_hash::FxHashSet;

fn generated_catalog() -> Catalog {
    Catalog::from_tables(generate(&GeneratorConfig::default())).unwrap()
}

#[test]
fn test_department_rollup_covers_every_product() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    // Summing products_under over all departments reconstructs the whole
    // product table: no product is orphaned or double-counted.
    let mut seen = FxHashSet::default();
    let mut total = 0usize;
    for department in catalog.departments() {
        let products = aggregator
            .products_under(NodeRef::Department(department.id))
            .unwrap();
        total += products.len();
        seen.extend(products);
    }
    assert_eq!(total, catalog.statistics().products);
    assert_eq!(seen.len(), catalog.statistics().products);
}

#[test]
fn test_node_set_equals_union_of_children() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    for category in catalog.categories() {
        let direct = aggregator
            .products_under(NodeRef::Category(category.id))
            .unwrap();

        let mut from_children = FxHashSet::default();
        for subcategory in catalog.subcategories_in(category.id).unwrap() {
            from_children.extend(
                aggregator
                    .products_under(NodeRef::Subcategory(subcategory.id))
                    .unwrap(),
            );
        }
        assert_eq!(direct, from_children, "category {}", category.id);
    }
}

#[test]
fn test_subcategory_set_equals_direct_filter() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    for subcategory in catalog.subcategories() {
        let via_index = aggregator
            .products_under(NodeRef::Subcategory(subcategory.id))
            .unwrap();
        let via_scan: FxHashSet<_> = catalog
            .products()
            .filter(|p| p.subcategory_id == subcategory.id)
            .map(|p| p.id)
            .collect();
        assert_eq!(via_index, via_scan, "subcategory {}", subcategory.id);
    }
}

#[test]
fn test_dominant_quality_is_total() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    // Every node at every level classifies to exactly one of the three
    // labels without panicking, including any empty aggregates.
    for department in catalog.departments() {
        let set = aggregator
            .products_under(NodeRef::Department(department.id))
            .unwrap();
        assert!(Quality::ALL.contains(&aggregator.dominant_quality(&set)));
    }
    for subcategory in catalog.subcategories() {
        let set = aggregator
            .products_under(NodeRef::Subcategory(subcategory.id))
            .unwrap();
        assert!(Quality::ALL.contains(&aggregator.dominant_quality(&set)));
        assert_eq!(Aggregator::visual_weight(&set), (set.len() as u64).max(1));
    }
}

#[test]
fn test_mixed_level_selection_union() {
    let catalog = generated_catalog();
    let aggregator = Aggregator::new(&catalog);

    let department = catalog.departments().next().unwrap();
    let department_set = aggregator
        .products_under(NodeRef::Department(department.id))
        .unwrap();

    // Pick one product inside the department and one outside it.
    let inside = *department_set.iter().min().unwrap();
    let outside = catalog
        .products()
        .map(|p| p.id)
        .find(|id| !department_set.contains(id))
        .unwrap();

    let selection = Selection {
        departments: vec![department.id],
        products: vec![inside, outside],
        ..Selection::default()
    };
    let resolved = aggregator.resolve_selection(&selection).unwrap();

    // The in-department product collapses into the department's set.
    assert_eq!(resolved.len(), department_set.len() + 1);
    assert!(resolved.contains(&outside));
}
