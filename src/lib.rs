//! hypocat library
//!
//! A Rust library for converting fixed-column seismic hypocenter catalogs
//! into clean, strictly-typed CSV tables for downstream analysis.
//!
//! This library provides tools for:
//! - Decoding catalog lines with fixed character columns and sexagesimal coordinates
//! - Converting degrees/minutes with hemisphere letters to signed decimal degrees
//! - Isolating malformed lines so one bad event never aborts a conversion
//! - Writing the ordered record table as CSV with a fixed header
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hypocat::{ConverterConfig, convert_file};
//! use std::path::Path;
//!
//! # async fn example() -> hypocat::Result<()> {
//! let stats = convert_file(
//!     Path::new("catalog.txt"),
//!     Path::new("catalog.csv"),
//!     &ConverterConfig::default(),
//! )
//! .await?;
//!
//! println!("Wrote {} records", stats.records_parsed);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod models;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use config::ConverterConfig;
pub use converter::{CatalogConverter, ConversionResult, convert_file};
pub use error::{CatalogError, LineError, LineErrorKind, Result};
pub use models::{CatalogRecord, ConversionStats};
pub use parser::{CatalogLineParser, LineFailure, LineOutcome};
