//! Tests for the catalog line parser
//!
//! Fixture lines below follow the fixed layout exactly: degrees at 23-25,
//! minutes at 28-31, hemisphere at 33, and so on.

use crate::models::CatalogRecord;
use crate::parser::{CatalogLineParser, LineOutcome};


/// Fukuoka offshore event, magnitude 0.2
pub const FUKUOKA_LINE: &str =
    "2025  5  3 09:47 10.2  33° 43.2'N 130° 11.8'E    5     0.2  福岡県北西沖";

/// Same event moved to the southern and western hemispheres
pub const FUKUOKA_SOUTH_WEST_LINE: &str =
    "2025  5  3 09:47 10.2  33° 43.2'S 130° 11.8'W    5     0.2  福岡県北西沖";

/// Same event with the magnitude column marked missing
pub const MISSING_MAGNITUDE_LINE: &str =
    "2025  5  3 09:47 10.2  33° 43.2'N 130° 11.8'E    5      -   福岡県北西沖";

/// Two-digit fraction, single-digit degrees, ASCII location
pub const SUMATRA_LINE: &str =
    "2024 12 31 23:59 9.25   5°  7.5'N  98° 59.9'E 12.5     4.1  SUMATRA";

/// Parse with the default layout, panicking unless a record comes back
pub fn parse_record(line: &str) -> CatalogRecord {
    match CatalogLineParser::default().parse(line) {
        LineOutcome::Record(record) => record,
        other => panic!("expected a record for {:?}, got {:?}", line, other),
    }
}
