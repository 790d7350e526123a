//! Taxoprep CLI Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Command-line tool that turns a biodiversity occurrence/checklist export
//! into the inputs of a name-resolution workflow:
//!
//! - **Dialect Detection**: comma vs. tab, inferred from the header line
//! - **Column Resolution**: case-insensitive lookup of `species`, `genus`,
//!   `kingdom`
//! - **Aggregation**: one streaming pass into two deduplicated, ordered
//!   sets
//! - **Artifacts**: `<prefix>_species_search.txt` (taxon names for search)
//!   and `<prefix>_species_kingdom.tsv` (taxon-to-kingdom lookup)

pub mod aggregate;
pub mod columns;
pub mod dialect;
pub mod error;
pub mod output;
pub mod prep;

// Re-export commonly used types
pub use error::{CliError, Result};
pub use output::Summary;

use clap::Parser;
use std::path::PathBuf;

/// Taxoprep - taxon list preparation for biodiversity exports
#[derive(Parser, Debug)]
#[command(name = "taxoprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Occurrence or checklist export (CSV or TSV; must contain columns
    /// 'species', 'genus', 'kingdom')
    pub input: PathBuf,

    /// Prefix for generated files
    pub out_prefix: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
