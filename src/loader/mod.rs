//! CSV load/store for the five flat catalog tables
//!
//! The data directory is the external contract: one file per table, headers
//! matching the record field names exactly. Loading is all-or-nothing — a
//! missing directory or file is a fatal [`LoadError::MissingTable`] naming
//! the file, never a partial snapshot.

use crate::catalog::{
    Catalog, CatalogError, CatalogTables, Category, Department, Product, Subcategory,
    TemporalQualityRecord,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

pub const DEPARTMENTS_FILE: &str = "departments.csv";
pub const CATEGORIES_FILE: &str = "categories.csv";
pub const SUBCATEGORIES_FILE: &str = "subcategories.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const TEMPORAL_FILE: &str = "temporal_quality.csv";

/// All table files, in load order.
pub const TABLE_FILES: [&str; 5] = [
    DEPARTMENTS_FILE,
    CATEGORIES_FILE,
    SUBCATEGORIES_FILE,
    PRODUCTS_FILE,
    TEMPORAL_FILE,
];

/// Errors raised while reading or writing the table files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("required table file {table} is missing at {path}")]
    MissingTable { table: &'static str, path: PathBuf },

    #[error("failed to parse {table}: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {table}: {source}")]
    Write {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

fn read_table<T: DeserializeOwned>(dir: &Path, table: &'static str) -> LoadResult<Vec<T>> {
    let path = dir.join(table);
    if !path.is_file() {
        return Err(LoadError::MissingTable { table, path });
    }
    let mut reader =
        csv::Reader::from_path(&path).map_err(|source| LoadError::Parse { table, source })?;
    let rows: Vec<T> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .map_err(|source| LoadError::Parse { table, source })?;
    Ok(rows)
}

fn write_table<T: Serialize>(dir: &Path, table: &'static str, rows: &[T]) -> LoadResult<()> {
    let path = dir.join(table);
    let mut writer =
        csv::Writer::from_path(&path).map_err(|source| LoadError::Write { table, source })?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| LoadError::Write { table, source })?;
    }
    writer
        .flush()
        .map_err(|source| LoadError::Write { table, source: source.into() })?;
    Ok(())
}

/// Read the five table files without validating cross-table links.
pub fn load_tables(dir: &Path) -> LoadResult<CatalogTables> {
    let tables = CatalogTables {
        departments: read_table::<Department>(dir, DEPARTMENTS_FILE)?,
        categories: read_table::<Category>(dir, CATEGORIES_FILE)?,
        subcategories: read_table::<Subcategory>(dir, SUBCATEGORIES_FILE)?,
        products: read_table::<Product>(dir, PRODUCTS_FILE)?,
        temporal: read_table::<TemporalQualityRecord>(dir, TEMPORAL_FILE)?,
    };
    info!(
        dir = %dir.display(),
        departments = tables.departments.len(),
        categories = tables.categories.len(),
        subcategories = tables.subcategories.len(),
        products = tables.products.len(),
        temporal_records = tables.temporal.len(),
        "loaded catalog tables"
    );
    Ok(tables)
}

/// Load a data directory into a validated, indexed [`Catalog`].
pub fn load_dir(dir: &Path) -> LoadResult<Catalog> {
    let tables = load_tables(dir)?;
    Ok(Catalog::from_tables(tables)?)
}

/// Write all five tables into `dir`, creating it if needed.
pub fn write_dir(tables: &CatalogTables, dir: &Path) -> LoadResult<()> {
    std::fs::create_dir_all(dir)?;
    write_table(dir, DEPARTMENTS_FILE, &tables.departments)?;
    write_table(dir, CATEGORIES_FILE, &tables.categories)?;
    write_table(dir, SUBCATEGORIES_FILE, &tables.subcategories)?;
    write_table(dir, PRODUCTS_FILE, &tables.products)?;
    write_table(dir, TEMPORAL_FILE, &tables.temporal)?;
    info!(dir = %dir.display(), rows = tables.row_count(), "wrote catalog tables");
    Ok(())
}
