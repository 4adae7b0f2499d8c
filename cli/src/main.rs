//! Gondola CLI — generate catalog data and inspect its rollups
//!
//! Terminal front-end for the gondola library: `generate` writes the five
//! CSV tables, the read commands load a data directory and print either
//! human-readable tables or chart payloads as JSON.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use gondola::aggregate::{Aggregator, NodeRef, Selection};
use gondola::catalog::{Catalog, Quality};
use gondola::generate::{generate, GeneratorConfig};
use gondola::temporal::{quality_by_period, trend_summary};
use gondola::viz;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gondola", version, about = "Synthetic retail catalog toolkit")]
struct Cli {
    /// Data directory holding the five CSV tables
    #[arg(long, default_value = "data", global = true, env = "GONDOLA_DATA_DIR")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum QualityLabel {
    Good,
    Neutral,
    Poor,
}

impl From<QualityLabel> for Quality {
    fn from(label: QualityLabel) -> Self {
        match label {
            QualityLabel::Good => Quality::Good,
            QualityLabel::Neutral => Quality::Neutral,
            QualityLabel::Poor => Quality::Poor,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic catalog tables into the data directory
    Generate {
        /// RNG seed; the same seed always produces identical tables
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of monthly quality-history periods per product
        #[arg(long, default_value_t = 6)]
        periods: u32,
    },
    /// Load the data directory and validate referential integrity
    Check,
    /// Print catalog overview counts and a per-department breakdown
    Summary,
    /// Print the checkbox explorer tree as JSON
    Tree,
    /// Print a Sankey flow payload as JSON
    Sankey {
        /// Include the products layer (4-level diagram)
        #[arg(long)]
        include_products: bool,

        /// Cap on products shown per subcategory in the 4-level diagram
        #[arg(long, default_value_t = 5)]
        max_products_per_subcat: usize,
    },
    /// Print per-period quality series for a selection as JSON
    Trend {
        /// Department ids to include (repeatable)
        #[arg(long = "department")]
        departments: Vec<u32>,

        /// Category ids to include (repeatable)
        #[arg(long = "category")]
        categories: Vec<u32>,

        /// Subcategory ids to include (repeatable)
        #[arg(long = "subcategory")]
        subcategories: Vec<u32>,

        /// Individual product ids to include (repeatable)
        #[arg(long = "product")]
        products: Vec<u32>,

        /// Emit per-period deltas (waterfall view) instead of raw counts
        #[arg(long)]
        waterfall: bool,

        /// Quality label to summarise the trend for
        #[arg(long, value_enum, default_value = "good")]
        label: QualityLabel,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { seed, periods } => run_generate(&cli.data_dir, seed, periods),
        Commands::Check => run_check(&cli.data_dir),
        Commands::Summary => run_summary(&cli.data_dir),
        Commands::Tree => run_tree(&cli.data_dir),
        Commands::Sankey {
            include_products,
            max_products_per_subcat,
        } => run_sankey(&cli.data_dir, include_products, max_products_per_subcat),
        Commands::Trend {
            departments,
            categories,
            subcategories,
            products,
            waterfall,
            label,
        } => run_trend(
            &cli.data_dir,
            Selection {
                departments: departments.into_iter().map(Into::into).collect(),
                categories: categories.into_iter().map(Into::into).collect(),
                subcategories: subcategories.into_iter().map(Into::into).collect(),
                products: products.into_iter().map(Into::into).collect(),
            },
            waterfall,
            label.into(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn load(data_dir: &Path) -> anyhow::Result<Catalog> {
    gondola::load_dir(data_dir)
        .with_context(|| format!("loading catalog from {}", data_dir.display()))
}

fn run_generate(data_dir: &Path, seed: u64, periods: u32) -> anyhow::Result<()> {
    let tables = generate(&GeneratorConfig { seed, periods });
    // Validate before writing so a broken generator never leaves bad files.
    Catalog::from_tables(tables.clone()).context("generated tables failed validation")?;
    gondola::write_dir(&tables, data_dir)
        .with_context(|| format!("writing tables to {}", data_dir.display()))?;
    println!(
        "Generated {} rows across {} tables in {}",
        tables.row_count(),
        gondola::loader::TABLE_FILES.len(),
        data_dir.display()
    );
    Ok(())
}

fn run_check(data_dir: &Path) -> anyhow::Result<()> {
    let catalog = load(data_dir)?;
    let stats = catalog.statistics();
    println!(
        "OK: {} departments, {} categories, {} subcategories, {} products, {} temporal records",
        stats.departments,
        stats.categories,
        stats.subcategories,
        stats.products,
        stats.temporal_records
    );
    Ok(())
}

fn run_summary(data_dir: &Path) -> anyhow::Result<()> {
    let catalog = load(data_dir)?;
    let aggregator = Aggregator::new(&catalog);
    let stats = catalog.statistics();

    println!("Catalog overview");
    println!("  Departments:      {}", stats.departments);
    println!("  Categories:       {}", stats.categories);
    println!("  Subcategories:    {}", stats.subcategories);
    println!("  Products:         {}", stats.products);
    println!("  Temporal records: {}", stats.temporal_records);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Department",
        "Categories",
        "Subcategories",
        "Products",
        "Quality",
    ]);

    for department in catalog.departments() {
        let categories = catalog.categories_in(department.id)?;
        let subcategories: usize = categories
            .iter()
            .map(|c| catalog.subcategories_in(c.id).map(|s| s.len()))
            .sum::<Result<usize, _>>()?;
        let products = aggregator.products_under(NodeRef::Department(department.id))?;
        table.add_row(vec![
            department.name.clone(),
            categories.len().to_string(),
            subcategories.to_string(),
            products.len().to_string(),
            aggregator.dominant_quality(&products).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn run_tree(data_dir: &Path) -> anyhow::Result<()> {
    let catalog = load(data_dir)?;
    let aggregator = Aggregator::new(&catalog);
    let tree = viz::explorer_tree(&aggregator)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn run_sankey(
    data_dir: &Path,
    include_products: bool,
    max_products_per_subcat: usize,
) -> anyhow::Result<()> {
    let catalog = load(data_dir)?;
    let aggregator = Aggregator::new(&catalog);
    let diagram = if include_products {
        viz::four_level(&aggregator, max_products_per_subcat)?
    } else {
        viz::three_level(&aggregator)?
    };
    println!("{}", serde_json::to_string_pretty(&diagram)?);
    Ok(())
}

fn run_trend(
    data_dir: &Path,
    selection: Selection,
    waterfall: bool,
    label: Quality,
) -> anyhow::Result<()> {
    let catalog = load(data_dir)?;
    let aggregator = Aggregator::new(&catalog);

    // An empty selection means "everything", matching the dashboard default.
    let selection = if selection.is_empty() {
        Selection {
            departments: catalog.departments().map(|d| d.id).collect(),
            ..Selection::default()
        }
    } else {
        selection
    };
    let products = aggregator.resolve_selection(&selection)?;

    let series = quality_by_period(&catalog, &products);
    if series.is_empty() {
        println!("No temporal data for the current selection.");
        return Ok(());
    }

    if waterfall {
        println!("{}", serde_json::to_string_pretty(&viz::waterfall(&series))?);
    } else {
        println!("{}", serde_json::to_string_pretty(&viz::stacked(&series))?);
    }

    if let Some(summary) = trend_summary(&series, label) {
        println!(
            "{}: {} -> {} ({:+}), peak {} in {}, trough {} in {}",
            summary.label,
            summary.first_count,
            summary.last_count,
            summary.net_change,
            summary.peak.count,
            summary.peak.period_name,
            summary.trough.count,
            summary.trough.period_name,
        );
    }
    Ok(())
}
