//! Error handling for catalog conversion.
//!
//! Two layers: [`CatalogError`] covers failures that stop a whole conversion
//! (unreadable input, unwritable output, bad configuration), while
//! [`LineError`] describes why a single catalog line could not be decoded.
//! Line errors are recovered by the converter and never abort a batch.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read catalog {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write table {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Output file already exists: {path} (use --force to overwrite)")]
    OutputExists { path: PathBuf },
}

impl CatalogError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Broad category of a per-line failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineErrorKind {
    /// A token or column held text that does not convert to the expected value
    FieldParse,
    /// The line is too short for the fixed column layout
    ColumnBounds,
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineErrorKind::FieldParse => write!(f, "field parse error"),
            LineErrorKind::ColumnBounds => write!(f, "column bounds error"),
        }
    }
}

/// Why a single catalog line could not be decoded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("missing {field} token")]
    MissingToken { field: &'static str },

    #[error("invalid integer for {field}: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("invalid number for {field}: '{value}'")]
    InvalidFloat { field: &'static str, value: String },

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}.{millis:03}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millis: u32,
    },

    #[error("fractional seconds must have one or two digits, got '{value}'")]
    InvalidFraction { value: String },

    #[error("{field} column {start}-{end} runs past end of line ({width} characters)")]
    ColumnOutOfBounds {
        field: &'static str,
        start: usize,
        end: usize,
        width: usize,
    },
}

impl LineError {
    pub fn kind(&self) -> LineErrorKind {
        match self {
            LineError::ColumnOutOfBounds { .. } => LineErrorKind::ColumnBounds,
            _ => LineErrorKind::FieldParse,
        }
    }
}
