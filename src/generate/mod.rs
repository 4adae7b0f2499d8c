//! Seeded synthetic catalog generator
//!
//! Expands the static department/category/subcategory tables into a full
//! product table plus a monthly quality history, with enough variety to
//! stress dashboard components. Everything derives from a single seed, so
//! the same configuration always produces byte-identical tables.

mod seed_data;

use crate::catalog::{
    CatalogTables, Product, ProductId, Quality, Status, TemporalQualityRecord,
};
use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

const UNITS: [&str; 7] = ["lb", "each", "oz", "bag", "box", "bottle", "pack"];

/// The last month covered by the generated quality history. Fixed so that
/// period labels do not depend on the wall clock.
const HISTORY_ANCHOR: (i32, u32) = (2023, 12);

/// Probability that a product's quality drifts one step between periods.
const DRIFT_CHANCE: f64 = 0.25;

/// Generator knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the deterministic RNG.
    pub seed: u64,
    /// Number of monthly observation periods to emit per product.
    pub periods: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: 42,
            periods: 6,
        }
    }
}

/// Generate the five tables for the given configuration.
pub fn generate(config: &GeneratorConfig) -> CatalogTables {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let departments = seed_data::departments();
    let categories = seed_data::categories();
    let subcategories = seed_data::subcategories();

    let mut products = Vec::new();
    let mut next_id: u32 = 1;
    for subcategory in &subcategories {
        let names = expand_names(subcategory.id.as_u32(), &subcategory.name, &mut rng);
        for name in names {
            products.push(build_product(next_id, subcategory.id.as_u32(), name, &mut rng));
            next_id += 1;
        }
    }

    let temporal = quality_history(&products, config.periods, &mut rng);

    info!(
        seed = config.seed,
        departments = departments.len(),
        categories = categories.len(),
        subcategories = subcategories.len(),
        products = products.len(),
        temporal_records = temporal.len(),
        "generated catalog tables"
    );

    CatalogTables {
        departments,
        categories,
        subcategories,
        products,
        temporal,
    }
}

/// Product names for one subcategory: the curated template list where one
/// exists, otherwise generic numbered items; the first three base names also
/// get brand/size variants.
fn expand_names(subcategory_id: u32, subcategory_name: &str, rng: &mut StdRng) -> Vec<String> {
    let mut names: Vec<String> = match seed_data::product_templates(subcategory_id) {
        Some(templates) => templates.iter().map(|n| n.to_string()).collect(),
        None => {
            let count = rng.gen_range(5..=11);
            (1..=count)
                .map(|i| format!("{subcategory_name} Item {i}"))
                .collect()
        }
    };

    let variants: Vec<String> = names
        .iter()
        .take(3)
        .flat_map(|base| {
            [
                format!("Organic {base}"),
                format!("Premium {base}"),
                format!("{base} - Family Size"),
                format!("{base} - Single Serve"),
            ]
        })
        .collect();
    names.extend(variants);
    names
}

fn build_product(id: u32, subcategory_id: u32, name: String, rng: &mut StdRng) -> Product {
    let lower = name.to_lowercase();

    let mut price: f64 = rng.gen_range(0.99..15.99);
    if lower.contains("organic") || lower.contains("premium") {
        price *= rng.gen_range(1.2..1.8);
    }
    if lower.contains("family size") {
        price *= rng.gen_range(1.5..2.2);
    }
    let price = (price * 100.0).round() / 100.0;

    let mut stock_quantity = rng.gen_range(0..=150);
    // A small slice of the catalog is seasonally out of stock.
    if rng.gen_bool(0.05) {
        stock_quantity = 0;
    }

    let quality = match rng.gen_range(0..100u32) {
        0..=49 => Quality::Good,
        50..=84 => Quality::Neutral,
        _ => Quality::Poor,
    };
    let status = match rng.gen_range(0..100u32) {
        0..=69 => Status::Approved,
        70..=89 => Status::Recommended,
        _ => Status::Rejected,
    };

    let description = format!("High quality {lower} available in our store");

    Product {
        id: ProductId::new(id),
        subcategory_id: subcategory_id.into(),
        name,
        price,
        stock_quantity,
        unit: (*UNITS.choose(rng).unwrap_or(&"each")).to_string(),
        sku: format!("SKU-{id:06}"),
        barcode: ean13(rng),
        description,
        quality,
        status,
    }
}

/// Random EAN-13 barcode with a valid check digit.
fn ean13(rng: &mut StdRng) -> String {
    let mut digits = [0u32; 13];
    for digit in digits.iter_mut().take(12) {
        *digit = rng.gen_range(0..10);
    }
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { *d * 3 })
        .sum();
    digits[12] = (10 - sum % 10) % 10;
    digits.iter().map(|d| char::from(b'0' + *d as u8)).collect()
}

/// Per-product monthly quality history ending at the fixed anchor month.
///
/// Each product starts its history at its current quality and drifts at most
/// one step per period (good and poor always drift towards neutral).
fn quality_history(
    products: &[Product],
    periods: u32,
    rng: &mut StdRng,
) -> Vec<TemporalQualityRecord> {
    let mut records = Vec::with_capacity(products.len() * periods as usize);
    for product in products {
        let mut current = product.quality;
        for index in 0..periods {
            let (period_id, period_name) = period_label(index, periods);
            records.push(TemporalQualityRecord {
                product_id: product.id,
                period_id,
                period_index: index,
                period_name,
                quality: current,
            });
            if rng.gen_bool(DRIFT_CHANCE) {
                current = match current {
                    Quality::Good | Quality::Poor => Quality::Neutral,
                    Quality::Neutral => {
                        if rng.gen_bool(0.5) {
                            Quality::Good
                        } else {
                            Quality::Poor
                        }
                    }
                };
            }
        }
    }
    records
}

/// ("YYYY-MM", "Mon YYYY") for period `index` out of `periods`, counting
/// backwards from the anchor month.
fn period_label(index: u32, periods: u32) -> (String, String) {
    let (year, month) = HISTORY_ANCHOR;
    let anchor = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_default()
        .checked_sub_months(Months::new(periods.saturating_sub(index + 1)))
        .unwrap_or_default();
    (
        anchor.format("%Y-%m").to_string(),
        anchor.format("%b %Y").to_string(),
    )
}
