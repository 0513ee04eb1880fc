//! Catalog generator for the logo gallery.
//!
//! Walks the logo repository, derives metadata from folder and file names,
//! and writes the data file the gallery loads at startup.

pub mod output;
pub mod parse;
pub mod scan;

use std::path::Path;

use anyhow::{Context, Result};
use logodeck_core::Catalog;
use tracing::info;

pub use output::{OutputFormat, render, write_catalog};
pub use parse::parse_logo_path;
pub use scan::{ScanOptions, scan};

/// Scan, validate and write the catalog. Returns what was written.
pub fn generate(options: &ScanOptions, output: &Path, format: OutputFormat) -> Result<Catalog> {
    let catalog = build_catalog(options)?;
    info!("Generating {}", output.display());
    write_catalog(output, catalog.records(), format)?;
    info!("Generated {} with {} logos", output.display(), catalog.len());
    Ok(catalog)
}

/// Scan and validate without writing anything.
pub fn build_catalog(options: &ScanOptions) -> Result<Catalog> {
    let records = scan(options)?;
    Catalog::new(records).context("scanned files do not form a valid catalog")
}

/// Per-family counts as printable lines.
pub fn summary_lines(catalog: &Catalog) -> Vec<String> {
    catalog
        .family_counts()
        .into_iter()
        .map(|(family, count)| format!("  {}: {}", family, count))
        .collect()
}
