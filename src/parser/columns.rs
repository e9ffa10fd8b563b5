//! Named column ranges for the fixed-width catalog layout
//!
//! Positions are 1-based, inclusive and counted in characters. Catalog lines
//! carry `°` and CJK place names, so byte offsets would drift.

use serde::{Deserialize, Serialize};

use crate::constants::layout;
use crate::error::LineError;
use crate::{CatalogError, Result};

/// Inclusive 1-based character range within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn single(column: usize) -> Self {
        Self::new(column, column)
    }

    pub fn width(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_valid(&self) -> bool {
        self.start >= 1 && self.end >= self.start
    }
}

/// Column table for one catalog dialect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub lat_degrees: ColumnRange,
    pub lat_minutes: ColumnRange,
    pub lat_hemisphere: ColumnRange,
    pub lon_degrees: ColumnRange,
    pub lon_minutes: ColumnRange,
    pub lon_hemisphere: ColumnRange,
    pub depth: ColumnRange,
    pub magnitude: ColumnRange,
    pub location_start: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            lat_degrees: layout::LAT_DEGREES,
            lat_minutes: layout::LAT_MINUTES,
            lat_hemisphere: layout::LAT_HEMISPHERE,
            lon_degrees: layout::LON_DEGREES,
            lon_minutes: layout::LON_MINUTES,
            lon_hemisphere: layout::LON_HEMISPHERE,
            depth: layout::DEPTH,
            magnitude: layout::MAGNITUDE,
            location_start: layout::LOCATION_START,
        }
    }
}

impl ColumnLayout {
    fn named_ranges(&self) -> [(&'static str, ColumnRange); 8] {
        [
            ("lat_degrees", self.lat_degrees),
            ("lat_minutes", self.lat_minutes),
            ("lat_hemisphere", self.lat_hemisphere),
            ("lon_degrees", self.lon_degrees),
            ("lon_minutes", self.lon_minutes),
            ("lon_hemisphere", self.lon_hemisphere),
            ("depth", self.depth),
            ("magnitude", self.magnitude),
        ]
    }

    /// Reject zero-based or inverted ranges and multi-column hemisphere fields
    pub fn validate(&self) -> Result<()> {
        for (name, range) in self.named_ranges() {
            if !range.is_valid() {
                return Err(CatalogError::configuration(format!(
                    "Column range for {} must be 1-based with start <= end, got {}-{}",
                    name, range.start, range.end
                )));
            }
        }

        for (name, range) in [
            ("lat_hemisphere", self.lat_hemisphere),
            ("lon_hemisphere", self.lon_hemisphere),
        ] {
            if range.width() != 1 {
                return Err(CatalogError::configuration(format!(
                    "Column range for {} must be a single column, got {}-{}",
                    name, range.start, range.end
                )));
            }
        }

        if self.location_start == 0 {
            return Err(CatalogError::configuration(
                "location_start is 1-based and cannot be 0",
            ));
        }

        Ok(())
    }
}

/// Character-indexed view of one catalog line
#[derive(Debug)]
pub struct LineColumns<'a> {
    line: &'a str,
    /// Byte offset of every character, plus the line length as a sentinel
    offsets: Vec<usize>,
}

impl<'a> LineColumns<'a> {
    pub fn new(line: &'a str) -> Self {
        let mut offsets: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
        offsets.push(line.len());
        Self { line, offsets }
    }

    /// Number of characters in the line
    pub fn width(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Text covered by `range`, untrimmed
    pub fn slice(
        &self,
        field: &'static str,
        range: ColumnRange,
    ) -> std::result::Result<&'a str, LineError> {
        if range.start == 0 || range.end < range.start || range.end > self.width() {
            return Err(LineError::ColumnOutOfBounds {
                field,
                start: range.start,
                end: range.end,
                width: self.width(),
            });
        }

        Ok(&self.line[self.offsets[range.start - 1]..self.offsets[range.end]])
    }

    /// Text from column `start` to end of line, untrimmed
    pub fn tail(
        &self,
        field: &'static str,
        start: usize,
    ) -> std::result::Result<&'a str, LineError> {
        if start == 0 || start > self.width() {
            return Err(LineError::ColumnOutOfBounds {
                field,
                start,
                end: start,
                width: self.width(),
            });
        }

        Ok(&self.line[self.offsets[start - 1]..])
    }

    /// First character of a single-column range
    pub fn char_at(
        &self,
        field: &'static str,
        range: ColumnRange,
    ) -> std::result::Result<char, LineError> {
        // slice() has already checked the range is non-empty
        Ok(self
            .slice(field, range)?
            .chars()
            .next()
            .unwrap_or_default())
    }
}
