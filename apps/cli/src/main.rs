//! CatalogForge CLI — storefront catalog normalization and enrichment tool.
//!
//! Reads a document of raw scraped product records, normalizes them into
//! the canonical product/variant schema, enriches each with templated
//! compliance/marketing copy, and writes the import-ready catalog.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
