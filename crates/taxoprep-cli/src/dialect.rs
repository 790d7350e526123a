//! Delimiter detection for checklist exports
//!
//! GBIF hands out both comma- and tab-separated downloads, so the dialect
//! is inferred from the header line rather than the file extension.

use tracing::debug;

/// Field delimiter of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Comma-separated values
    Comma,
    /// Tab-separated values
    Tab,
}

impl Dialect {
    /// Delimiter byte for the csv reader/writer builders
    pub fn as_byte(self) -> u8 {
        match self {
            Dialect::Comma => b',',
            Dialect::Tab => b'\t',
        }
    }

    /// Detect the dialect from the first line of the source.
    ///
    /// A line containing tabs but no commas is tab-separated and vice
    /// versa. When both or neither occur, whichever character occurs more
    /// often wins; ties favor tab.
    pub fn detect(first_line: &str) -> Dialect {
        let tabs = first_line.matches('\t').count();
        let commas = first_line.matches(',').count();

        let dialect = if tabs > 0 && commas == 0 {
            Dialect::Tab
        } else if commas > 0 && tabs == 0 {
            Dialect::Comma
        } else if tabs >= commas {
            Dialect::Tab
        } else {
            Dialect::Comma
        };

        debug!(tabs, commas, dialect = ?dialect, "Detected input dialect");
        dialect
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Comma => write!(f, "comma"),
            Dialect::Tab => write!(f, "tab"),
        }
    }
}
