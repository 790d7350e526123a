//! Taxoprep Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared logging configuration for the taxoprep workspace members.
//!
//! # Example
//!
//! ```no_run
//! use taxoprep_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod logging;
