//! Fixed-column parser for hypocenter catalog lines
//!
//! Each catalog line describes one earthquake. The first five whitespace
//! tokens carry the origin date and time; everything else sits at fixed
//! character columns described by a [`ColumnLayout`]:
//!
//! ```text
//! 2025  5  3 09:47 10.2  33° 43.2'N 130° 11.8'E    5     0.2  福岡県北西沖
//! ```
//!
//! ## Architecture
//!
//! - [`columns`] - Named column ranges and character-indexed slicing
//! - [`fields`] - Token and column value conversion
//!
//! Parsing never panics on bad input. [`CatalogLineParser::parse`] returns a
//! [`LineOutcome`] so callers decide what to do with blank, comment and
//! malformed lines.

pub mod columns;
pub mod fields;

#[cfg(test)]
pub mod tests;

pub use columns::{ColumnLayout, ColumnRange, LineColumns};

use std::fmt;

use crate::config::ConverterConfig;
use crate::error::LineError;
use crate::models::CatalogRecord;
use fields::{
    format_coordinate, parse_date, parse_float, parse_magnitude, parse_time,
    sexagesimal_to_decimal,
};

/// Result of handing one raw line to the parser
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line decoded into a record
    Record(CatalogRecord),
    /// Blank or comment line, not a parse attempt
    Skipped,
    /// The line was attempted and could not be decoded
    Failed(LineFailure),
}

/// A line that failed to decode, with its cause
#[derive(Debug, Clone, PartialEq)]
pub struct LineFailure {
    pub line: String,
    pub error: LineError,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in line {:?}", self.error, self.line)
    }
}

/// Decoder for one catalog dialect
#[derive(Debug, Clone)]
pub struct CatalogLineParser {
    layout: ColumnLayout,
    comment_marker: char,
    missing_magnitude_marker: char,
    southern_marker: char,
    western_marker: char,
}

impl Default for CatalogLineParser {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl CatalogLineParser {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            layout: config.layout.clone(),
            comment_marker: config.comment_marker,
            missing_magnitude_marker: config.missing_magnitude_marker,
            southern_marker: config.southern_marker,
            western_marker: config.western_marker,
        }
    }

    /// True for blank lines and comment lines
    pub fn is_skippable(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.is_empty() || trimmed.starts_with(self.comment_marker)
    }

    /// Classify and decode one raw line
    pub fn parse(&self, line: &str) -> LineOutcome {
        if self.is_skippable(line) {
            return LineOutcome::Skipped;
        }

        match self.decode(line) {
            Ok(record) => LineOutcome::Record(record),
            Err(error) => LineOutcome::Failed(LineFailure {
                line: line.to_string(),
                error,
            }),
        }
    }

    /// Decode a line known not to be blank or a comment
    pub fn decode(&self, line: &str) -> Result<CatalogRecord, LineError> {
        let mut tokens = line.split_whitespace();
        let mut next_token =
            |field: &'static str| tokens.next().ok_or(LineError::MissingToken { field });

        let year = next_token("year")?;
        let month = next_token("month")?;
        let day = next_token("day")?;
        let hour_minute = next_token("hour:minute")?;
        let seconds = next_token("seconds")?;

        let date = parse_date(year, month, day)?;
        let time = parse_time(hour_minute, seconds)?;

        let columns = LineColumns::new(line);
        let layout = &self.layout;

        let lat = sexagesimal_to_decimal(
            column_float(&columns, "latitude degrees", layout.lat_degrees)?,
            column_float(&columns, "latitude minutes", layout.lat_minutes)?,
            columns.char_at("latitude hemisphere", layout.lat_hemisphere)? == self.southern_marker,
        );

        let lon = sexagesimal_to_decimal(
            column_float(&columns, "longitude degrees", layout.lon_degrees)?,
            column_float(&columns, "longitude minutes", layout.lon_minutes)?,
            columns.char_at("longitude hemisphere", layout.lon_hemisphere)? == self.western_marker,
        );

        let dep = column_float(&columns, "depth", layout.depth)?;
        let mjma = parse_magnitude(
            columns.slice("magnitude", layout.magnitude)?,
            self.missing_magnitude_marker,
        )?;
        let location = columns
            .tail("location", layout.location_start)?
            .trim()
            .to_string();

        Ok(CatalogRecord {
            date,
            time,
            lat: format_coordinate(lat),
            lon: format_coordinate(lon),
            dep,
            mjma,
            location,
        })
    }
}

/// Slice a fixed column and parse it as a float
fn column_float(
    columns: &LineColumns<'_>,
    field: &'static str,
    range: ColumnRange,
) -> Result<f64, LineError> {
    parse_float(field, columns.slice(field, range)?)
}
