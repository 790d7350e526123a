//! Artifact writers and the completion report
//!
//! Serializes the aggregated sets into the two derived files. Set
//! iteration order already gives the sorted, deduplicated contract, so
//! the writers are plain sequential dumps.

use crate::aggregate::Aggregates;
use crate::error::Result;
use colored::Colorize;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Counts and paths reported after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows_read: u64,
    pub unique_search_names: usize,
    pub unique_pairs: usize,
    pub search_path: PathBuf,
    pub pairs_path: PathBuf,
}

impl Summary {
    /// Render the human-readable completion report to stderr.
    ///
    /// Diagnostic output only; nothing downstream parses it.
    pub fn report(&self) {
        eprintln!("{}", "Prep complete.".cyan().bold());
        eprintln!("  Rows read:           {}", self.rows_read);
        eprintln!(
            "  Unique search names: {} -> {}",
            self.unique_search_names,
            self.search_path.display()
        );
        eprintln!(
            "  Unique pairs:        {} -> {}",
            self.unique_pairs,
            self.pairs_path.display()
        );
    }
}

/// Write both artifacts and build the run summary.
///
/// The search list is written before the pair table; a failure writing the
/// second file leaves the first in place.
pub fn write_artifacts(aggregates: &Aggregates, out_prefix: &str) -> Result<Summary> {
    let search_path = PathBuf::from(format!("{out_prefix}_species_search.txt"));
    let pairs_path = PathBuf::from(format!("{out_prefix}_species_kingdom.tsv"));

    write_search_list(&search_path, &aggregates.search_names)?;
    write_pair_table(&pairs_path, &aggregates.species_kingdom)?;

    Ok(Summary {
        rows_read: aggregates.rows_read,
        unique_search_names: aggregates.search_names.len(),
        unique_pairs: aggregates.species_kingdom.len(),
        search_path,
        pairs_path,
    })
}

/// One taxon name per line, newline-terminated, ascending code-point order
fn write_search_list(path: &Path, names: &BTreeSet<String>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for name in names {
        writeln!(writer, "{name}")?;
    }
    writer.flush()?;

    debug!(path = %path.display(), names = names.len(), "Wrote search list");
    Ok(())
}

/// Tab-separated `species<TAB>kingdom` rows, no header, sorted by tuple
fn write_pair_table(path: &Path, pairs: &BTreeSet<(String, String)>) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    for (species, kingdom) in pairs {
        writer.write_record([species.as_str(), kingdom.as_str()])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), pairs = pairs.len(), "Wrote species-kingdom table");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_aggregates() -> Aggregates {
        let mut aggregates = Aggregates::default();
        aggregates.rows_read = 3;
        aggregates.search_names.insert("Quercus".to_string());
        aggregates.search_names.insert("Panthera leo".to_string());
        aggregates
            .species_kingdom
            .insert(("Panthera leo".to_string(), "Animalia".to_string()));
        aggregates
    }

    #[test]
    fn test_write_artifacts_contents_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let prefix = temp_dir.path().join("out").to_string_lossy().to_string();

        let summary = write_artifacts(&sample_aggregates(), &prefix).unwrap();

        let search = fs::read_to_string(&summary.search_path).unwrap();
        assert_eq!(search, "Panthera leo\nQuercus\n");

        let pairs = fs::read_to_string(&summary.pairs_path).unwrap();
        assert_eq!(pairs, "Panthera leo\tAnimalia\n");

        assert_eq!(summary.rows_read, 3);
        assert_eq!(summary.unique_search_names, 2);
        assert_eq!(summary.unique_pairs, 1);
    }

    #[test]
    fn test_write_artifacts_empty_sets() {
        let temp_dir = TempDir::new().unwrap();
        let prefix = temp_dir.path().join("empty").to_string_lossy().to_string();

        let summary = write_artifacts(&Aggregates::default(), &prefix).unwrap();

        assert_eq!(fs::read_to_string(&summary.search_path).unwrap(), "");
        assert_eq!(fs::read_to_string(&summary.pairs_path).unwrap(), "");
        assert_eq!(summary.unique_search_names, 0);
        assert_eq!(summary.unique_pairs, 0);
    }

    #[test]
    fn test_idempotent_byte_identical() {
        let temp_dir = TempDir::new().unwrap();
        let prefix = temp_dir.path().join("twice").to_string_lossy().to_string();

        let first = write_artifacts(&sample_aggregates(), &prefix).unwrap();
        let search_once = fs::read(&first.search_path).unwrap();
        let pairs_once = fs::read(&first.pairs_path).unwrap();

        let second = write_artifacts(&sample_aggregates(), &prefix).unwrap();
        assert_eq!(fs::read(&second.search_path).unwrap(), search_once);
        assert_eq!(fs::read(&second.pairs_path).unwrap(), pairs_once);
    }
}
