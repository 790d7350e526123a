//! Record aggregation
//!
//! Streams data rows through a single pass and accumulates the two
//! deduplicated, ordered sets the artifacts are written from. Field bytes
//! are decoded lossily; a mangled character in a vernacular-name column
//! must not abort a multi-million-row export.

use crate::columns::ColumnMap;
use crate::error::Result;
use csv::{ByteRecord, Reader};
use std::collections::BTreeSet;
use std::io::Read;
use tracing::debug;

/// Accumulated output of the aggregation pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregates {
    /// Distinct taxon names for downstream name-resolution searches:
    /// every non-empty species name, plus the genus for rows where the
    /// species is blank
    pub search_names: BTreeSet<String>,

    /// Distinct (species, kingdom) pairs for the later splitting step;
    /// species is always non-empty here
    pub species_kingdom: BTreeSet<(String, String)>,

    /// Rows read from the input, counted whether or not they contributed
    pub rows_read: u64,
}

impl Aggregates {
    fn observe(&mut self, species: &str, genus: &str, kingdom: &str) {
        if !species.is_empty() {
            self.search_names.insert(species.to_string());
            if !kingdom.is_empty() {
                self.species_kingdom
                    .insert((species.to_string(), kingdom.to_string()));
            }
        } else if !genus.is_empty() {
            // Genus-level fallback: searchable name, but intentionally
            // never paired with a kingdom
            self.search_names.insert(genus.to_string());
        }
    }
}

/// Trimmed, lossily decoded field at `idx`, or empty when the row is short
fn field(record: &ByteRecord, idx: usize) -> String {
    record
        .get(idx)
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .unwrap_or_default()
}

/// Run the aggregation pass over all data rows of `reader`.
///
/// Blank and sparse rows are expected in occurrence exports and are
/// silently skipped; every row still increments the row counter.
pub fn collect<R: Read>(reader: &mut Reader<R>, columns: &ColumnMap) -> Result<Aggregates> {
    let mut aggregates = Aggregates::default();
    let mut record = ByteRecord::new();

    while reader.read_byte_record(&mut record)? {
        aggregates.rows_read += 1;

        let species = field(&record, columns.species);
        let genus = field(&record, columns.genus);
        let kingdom = field(&record, columns.kingdom);

        aggregates.observe(&species, &genus, &kingdom);
    }

    debug!(
        rows = aggregates.rows_read,
        search_names = aggregates.search_names.len(),
        pairs = aggregates.species_kingdom.len(),
        "Aggregation pass complete"
    );
    Ok(aggregates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn run(input: &str) -> Aggregates {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(input.as_bytes());
        let headers = reader.byte_headers().unwrap().clone();
        let columns = ColumnMap::resolve(&headers).unwrap();
        collect(&mut reader, &columns).unwrap()
    }

    #[test]
    fn test_species_and_genus_fallback() {
        let aggregates = run(
            "species,genus,kingdom\n\
             Panthera leo,Panthera,Animalia\n\
             ,Quercus,Plantae\n\
             Panthera leo,Panthera,Animalia\n",
        );

        let names: Vec<&str> = aggregates.search_names.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Panthera leo", "Quercus"]);

        let pairs: Vec<_> = aggregates.species_kingdom.iter().cloned().collect();
        assert_eq!(
            pairs,
            vec![("Panthera leo".to_string(), "Animalia".to_string())]
        );
        assert_eq!(aggregates.rows_read, 3);
    }

    #[test]
    fn test_genus_fallback_never_pairs_with_kingdom() {
        let aggregates = run("species,genus,kingdom\n,Quercus,Plantae\n");
        assert!(aggregates.search_names.contains("Quercus"));
        assert!(aggregates.species_kingdom.is_empty());
    }

    #[test]
    fn test_whitespace_trimmed_and_blank_rows_skipped() {
        let aggregates = run(
            "species,genus,kingdom\n\
             \"  Panthera leo \",Panthera,\" Animalia\"\n\
             \" \",\"\",\"  \"\n",
        );

        assert!(aggregates.search_names.contains("Panthera leo"));
        assert!(aggregates
            .species_kingdom
            .contains(&("Panthera leo".to_string(), "Animalia".to_string())));
        assert_eq!(aggregates.search_names.len(), 1);
        assert_eq!(aggregates.rows_read, 2);
    }

    #[test]
    fn test_species_without_kingdom_searchable_but_unpaired() {
        let aggregates = run("species,genus,kingdom\nPanthera leo,Panthera,\n");
        assert!(aggregates.search_names.contains("Panthera leo"));
        assert!(aggregates.species_kingdom.is_empty());
    }

    #[test]
    fn test_short_rows_treated_as_empty_fields() {
        let aggregates = run("species,genus,kingdom\nPanthera leo\n,Quercus\n");
        assert!(aggregates.search_names.contains("Panthera leo"));
        assert!(aggregates.search_names.contains("Quercus"));
        assert!(aggregates.species_kingdom.is_empty());
        assert_eq!(aggregates.rows_read, 2);
    }
}
