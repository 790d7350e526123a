//! Case-insensitive header resolution
//!
//! Maps the required logical columns (`species`, `genus`, `kingdom`) onto
//! their positions in the actual header row. Exports rename and reorder
//! columns freely; the lookup is built once from the lowercased header
//! names and consulted by index afterwards.

use crate::error::{CliError, Result};
use csv::ByteRecord;
use std::collections::HashMap;
use tracing::debug;

/// Logical column names every export must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["species", "genus", "kingdom"];

/// Resolved positions of the required columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub species: usize,
    pub genus: usize,
    pub kingdom: usize,
}

impl ColumnMap {
    /// Resolve the required columns against a header record.
    ///
    /// Header names are matched case-insensitively after lossy UTF-8
    /// decoding. Fails with [`CliError::MissingColumns`] listing the
    /// missing and found names when any required column is absent; any
    /// additional columns are ignored.
    pub fn resolve(headers: &ByteRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();

        let by_lower: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.to_lowercase(), idx))
            .collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !by_lower.contains_key(**required))
            .map(|required| required.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(CliError::missing_columns(missing, names));
        }

        let map = Self {
            species: by_lower["species"],
            genus: by_lower["genus"],
            kingdom: by_lower["kingdom"],
        };

        debug!(
            species = map.species,
            genus = map.genus,
            kingdom = map.kingdom,
            "Resolved required columns"
        );
        Ok(map)
    }
}
