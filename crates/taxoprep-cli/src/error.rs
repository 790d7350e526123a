//! Error types for the taxoprep CLI
//!
//! All errors are designed to be user-facing with clear messages that name
//! the offending path or columns.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for the prep pipeline
#[derive(Error, Debug)]
pub enum CliError {
    /// Input path does not exist
    #[error("Input file not found: '{0}'. Verify the file path exists and you have read permissions.")]
    InputNotFound(String),

    /// Input has no readable first line
    #[error("Input file appears to be empty: '{0}'.")]
    EmptyInput(String),

    /// Required header columns are absent
    #[error(
        "Input must contain columns named 'species', 'genus', and 'kingdom' (case-insensitive).\n  Missing: {missing:?}\n  Found: {found:?}"
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Record-layer parsing failed
    #[error("Failed to parse delimited input: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound(path.into())
    }

    /// Create an empty-input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput(path.into())
    }

    /// Create a missing-columns error
    pub fn missing_columns(missing: Vec<String>, found: Vec<String>) -> Self {
        Self::MissingColumns { missing, found }
    }
}
