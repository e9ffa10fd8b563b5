//! Application constants for hypocat
//!
//! This module contains the fixed-width catalog layout, marker characters,
//! output column names and CLI defaults used throughout the converter.

use crate::parser::columns::ColumnRange;

// =============================================================================
// Fixed-Column Catalog Layout
// =============================================================================

/// Column positions of the hypocenter catalog format.
///
/// All positions are 1-based and inclusive, counted in characters. This table
/// is the single place to update if the catalog layout ever changes.
pub mod layout {
    use super::ColumnRange;

    /// Latitude whole degrees
    pub const LAT_DEGREES: ColumnRange = ColumnRange::new(23, 25);

    /// Latitude minutes with one decimal place
    pub const LAT_MINUTES: ColumnRange = ColumnRange::new(28, 31);

    /// Latitude hemisphere letter (N/S)
    pub const LAT_HEMISPHERE: ColumnRange = ColumnRange::single(33);

    /// Longitude whole degrees
    pub const LON_DEGREES: ColumnRange = ColumnRange::new(35, 37);

    /// Longitude minutes with one decimal place
    pub const LON_MINUTES: ColumnRange = ColumnRange::new(40, 43);

    /// Longitude hemisphere letter (E/W)
    pub const LON_HEMISPHERE: ColumnRange = ColumnRange::single(45);

    /// Focal depth
    pub const DEPTH: ColumnRange = ColumnRange::new(47, 50);

    /// JMA magnitude, or the missing marker
    pub const MAGNITUDE: ColumnRange = ColumnRange::new(56, 58);

    /// Free-text epicenter name runs from this column to end of line
    pub const LOCATION_START: usize = 61;
}

// =============================================================================
// Markers
// =============================================================================

/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '#';

/// A magnitude column starting with this character has no reading
pub const MISSING_MAGNITUDE_MARKER: char = '-';

/// Hemisphere letter that negates latitude
pub const SOUTHERN_MARKER: char = 'S';

/// Hemisphere letter that negates longitude
pub const WESTERN_MARKER: char = 'W';

/// UTF-8 byte order mark some editors write at the start of a catalog
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// =============================================================================
// Decoding
// =============================================================================

/// Decimal places kept for latitude and longitude
pub const COORDINATE_DECIMALS: usize = 4;

/// Minutes per degree for sexagesimal conversion
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Maximum number of digits accepted after the seconds decimal point
pub const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Output Table
// =============================================================================

/// Header row of the output table, in column order
pub const OUTPUT_COLUMNS: [&str; 7] = ["date", "time", "lat", "lon", "dep", "Mjma", "location"];

/// Extension given to the output file when no output path is supplied
pub const OUTPUT_EXTENSION: &str = "csv";

// =============================================================================
// Reporting and Configuration
// =============================================================================

/// Default number of failed lines listed in the final report
pub const DEFAULT_MAX_REPORTED_ERRORS: usize = 20;

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "hypocat";

/// Config file name looked up when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_columns_do_not_overlap() {
        let ordered = [
            layout::LAT_DEGREES,
            layout::LAT_MINUTES,
            layout::LAT_HEMISPHERE,
            layout::LON_DEGREES,
            layout::LON_MINUTES,
            layout::LON_HEMISPHERE,
            layout::DEPTH,
            layout::MAGNITUDE,
        ];

        for pair in ordered.windows(2) {
            assert!(pair[0].end < pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
        assert!(layout::MAGNITUDE.end < layout::LOCATION_START);
    }

    #[test]
    fn test_output_columns() {
        assert_eq!(OUTPUT_COLUMNS.join(","), "date,time,lat,lon,dep,Mjma,location");
    }
}
