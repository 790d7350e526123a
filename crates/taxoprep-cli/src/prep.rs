//! Prep pipeline orchestration
//!
//! One blocking pass: detect the dialect from the header line, resolve the
//! required columns, aggregate the rows, then write both artifacts.

use crate::aggregate;
use crate::columns::ColumnMap;
use crate::dialect::Dialect;
use crate::error::{CliError, Result};
use crate::output::{self, Summary};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, info};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Run the full prep pipeline over `input`, writing artifacts under
/// `out_prefix`.
///
/// Fails fast on a missing or empty input and on absent required columns;
/// once the header validates, the pass runs to completion and the two
/// artifact writes follow.
pub fn run(input: &Path, out_prefix: &str) -> Result<Summary> {
    if !input.exists() {
        return Err(CliError::input_not_found(input.display().to_string()));
    }

    info!(input = %input.display(), out_prefix, "Starting prep run");

    let file = File::open(input)?;
    let mut reader = BufReader::new(file);
    let data_start = skip_bom(&mut reader)?;

    let mut first_line = Vec::new();
    if reader.read_until(b'\n', &mut first_line)? == 0 {
        return Err(CliError::empty_input(input.display().to_string()));
    }
    let dialect = Dialect::detect(&String::from_utf8_lossy(&first_line));

    // Re-read from the first post-BOM byte so the csv reader sees the
    // header row itself
    reader.seek(SeekFrom::Start(data_start))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(dialect.as_byte())
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.byte_headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let aggregates = aggregate::collect(&mut csv_reader, &columns)?;

    // Input handle released before any output handle is opened
    drop(csv_reader);

    let summary = output::write_artifacts(&aggregates, out_prefix)?;
    info!(
        rows = summary.rows_read,
        search_names = summary.unique_search_names,
        pairs = summary.unique_pairs,
        "Prep run finished"
    );
    Ok(summary)
}

/// Consume a leading UTF-8 BOM if present, returning the offset where the
/// data starts
fn skip_bom<R: Read + Seek>(reader: &mut R) -> Result<u64> {
    let mut prefix = [0u8; 3];
    let mut filled = 0;
    while filled < prefix.len() {
        let n = reader.read(&mut prefix[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    if filled == prefix.len() && prefix == UTF8_BOM {
        debug!("Skipped UTF-8 BOM");
        Ok(prefix.len() as u64)
    } else {
        reader.seek(SeekFrom::Start(0))?;
        Ok(0)
    }
}
