//! Core data structures for catalog conversion.
//!
//! Defines the decoded catalog record and the statistics gathered while
//! converting a whole catalog.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::LineErrorKind;

/// One decoded hypocenter catalog event
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    /// Origin date
    pub date: NaiveDate,

    /// Origin time with millisecond precision
    pub time: NaiveTime,

    /// Signed decimal latitude, fixed at four decimal places
    pub lat: String,

    /// Signed decimal longitude, fixed at four decimal places
    pub lon: String,

    /// Focal depth as given in the catalog
    pub dep: f64,

    /// JMA magnitude; `None` when the catalog marks it absent
    pub mjma: Option<f64>,

    /// Trimmed epicenter name
    pub location: String,
}

impl CatalogRecord {
    /// Date as `YYYY-MM-DD`
    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Time as `HH:MM:SS` plus the fractional second with trailing zeros removed
    pub fn formatted_time(&self) -> String {
        let whole = self.time.format("%H:%M:%S").to_string();
        let millis = self.time.nanosecond() / 1_000_000;
        if millis == 0 {
            return whole;
        }

        let fraction = format!("{:03}", millis);
        format!("{}.{}", whole, fraction.trim_end_matches('0'))
    }

    /// Magnitude text, empty when missing
    pub fn formatted_magnitude(&self) -> String {
        self.mjma.map(|m| m.to_string()).unwrap_or_default()
    }

    /// Output row in `date,time,lat,lon,dep,Mjma,location` order
    pub fn to_row(&self) -> [String; 7] {
        [
            self.formatted_date(),
            self.formatted_time(),
            self.lat.clone(),
            self.lon.clone(),
            self.dep.to_string(),
            self.formatted_magnitude(),
            self.location.clone(),
        ]
    }
}

/// Statistics for one catalog conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionStats {
    /// Every line read from the input, including blanks and comments
    pub total_lines: usize,

    /// Blank and comment lines
    pub skipped_lines: usize,

    /// Lines decoded into records
    pub records_parsed: usize,

    /// Lines that failed to decode
    pub lines_failed: usize,

    /// Failures where a token or column did not convert
    pub field_errors: usize,

    /// Failures where the line was too short for the column layout
    pub bounds_errors: usize,

    /// First failures, formatted for the final report
    pub errors: Vec<String>,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that were decode attempts (neither blank nor comment)
    pub fn attempted_lines(&self) -> usize {
        self.records_parsed + self.lines_failed
    }

    /// Percentage of attempted lines that decoded
    pub fn success_rate(&self) -> f64 {
        let attempted = self.attempted_lines();
        if attempted == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / attempted as f64) * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.lines_failed > 0
    }

    /// Count a failed line by kind, keeping its description while under `limit`
    pub fn record_failure(&mut self, kind: LineErrorKind, description: String, limit: usize) {
        self.lines_failed += 1;
        match kind {
            LineErrorKind::FieldParse => self.field_errors += 1,
            LineErrorKind::ColumnBounds => self.bounds_errors += 1,
        }
        if self.errors.len() < limit {
            self.errors.push(description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: NaiveTime, mjma: Option<f64>) -> CatalogRecord {
        CatalogRecord {
            date: NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(),
            time,
            lat: "33.7200".to_string(),
            lon: "130.1967".to_string(),
            dep: 5.0,
            mjma,
            location: "福岡県北西沖".to_string(),
        }
    }

    #[test]
    fn test_formatted_time_trims_fraction() {
        let r = record(NaiveTime::from_hms_milli_opt(9, 47, 10, 200).unwrap(), None);
        assert_eq!(r.formatted_time(), "09:47:10.2");

        let r = record(NaiveTime::from_hms_milli_opt(9, 47, 10, 250).unwrap(), None);
        assert_eq!(r.formatted_time(), "09:47:10.25");

        let r = record(NaiveTime::from_hms_milli_opt(9, 47, 10, 5).unwrap(), None);
        assert_eq!(r.formatted_time(), "09:47:10.005");

        let r = record(NaiveTime::from_hms_milli_opt(9, 47, 10, 0).unwrap(), None);
        assert_eq!(r.formatted_time(), "09:47:10");
    }

    #[test]
    fn test_to_row() {
        let r = record(
            NaiveTime::from_hms_milli_opt(9, 47, 10, 200).unwrap(),
            Some(0.2),
        );
        assert_eq!(
            r.to_row().join(","),
            "2025-05-03,09:47:10.2,33.7200,130.1967,5,0.2,福岡県北西沖"
        );
    }

    #[test]
    fn test_missing_magnitude_is_empty() {
        let r = record(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), None);
        assert_eq!(r.formatted_magnitude(), "");
        assert_eq!(r.to_row()[5], "");
    }

    #[test]
    fn test_stats_success_rate() {
        let mut stats = ConversionStats::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert!(!stats.has_failures());

        stats.records_parsed = 3;
        stats.record_failure(LineErrorKind::FieldParse, "line 2: bad".to_string(), 10);
        assert_eq!(stats.attempted_lines(), 4);
        assert_eq!(stats.success_rate(), 75.0);
        assert!(stats.has_failures());
    }

    #[test]
    fn test_record_failure_caps_descriptions() {
        let mut stats = ConversionStats::new();
        for i in 0..5 {
            let kind = if i % 2 == 0 {
                LineErrorKind::FieldParse
            } else {
                LineErrorKind::ColumnBounds
            };
            stats.record_failure(kind, format!("line {}", i), 2);
        }
        assert_eq!(stats.lines_failed, 5);
        assert_eq!(stats.field_errors, 3);
        assert_eq!(stats.bounds_errors, 2);
        assert_eq!(stats.errors, vec!["line 0", "line 1"]);
    }
}
