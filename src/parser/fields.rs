//! Field parsing utilities for catalog lines
//!
//! Helpers that turn individual tokens and column slices into typed values,
//! each failing with a [`LineError`] that names the offending field.

use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

use crate::constants::{COORDINATE_DECIMALS, MAX_FRACTION_DIGITS, MINUTES_PER_DEGREE};
use crate::error::LineError;

type FieldResult<T> = std::result::Result<T, LineError>;

/// Parse a trimmed integer field
pub fn parse_integer<T: FromStr>(field: &'static str, raw: &str) -> FieldResult<T> {
    let trimmed = raw.trim();
    trimmed.parse::<T>().map_err(|_| LineError::InvalidInteger {
        field,
        value: trimmed.to_string(),
    })
}

/// Parse a trimmed floating-point field
pub fn parse_float(field: &'static str, raw: &str) -> FieldResult<f64> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| LineError::InvalidFloat {
        field,
        value: trimmed.to_string(),
    })
}

/// Build the origin date from year, month and day tokens
pub fn parse_date(year: &str, month: &str, day: &str) -> FieldResult<NaiveDate> {
    let year: i32 = parse_integer("year", year)?;
    let month: u32 = parse_integer("month", month)?;
    let day: u32 = parse_integer("day", day)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(LineError::InvalidDate { year, month, day })
}

/// Build the origin time from an `HH:MM` token and an `SS.f` token
pub fn parse_time(hour_minute: &str, seconds: &str) -> FieldResult<NaiveTime> {
    let (hour, minute) = hour_minute
        .split_once(':')
        .ok_or_else(|| LineError::InvalidInteger {
            field: "hour:minute",
            value: hour_minute.to_string(),
        })?;
    let hour: u32 = parse_integer("hour", hour)?;
    let minute: u32 = parse_integer("minute", minute)?;

    let (whole, fraction) = seconds
        .split_once('.')
        .ok_or_else(|| LineError::InvalidFraction {
            value: seconds.to_string(),
        })?;
    let second: u32 = parse_integer("second", whole)?;
    let millis = fraction_to_millis(fraction)?;

    NaiveTime::from_hms_milli_opt(hour, minute, second, millis).ok_or(LineError::InvalidTime {
        hour,
        minute,
        second,
        millis,
    })
}

/// Convert the digits after the seconds point into milliseconds.
///
/// One digit is tenths (`"2"` -> 200), two digits are hundredths
/// (`"10"` -> 100). Anything else is rejected rather than guessed.
pub fn fraction_to_millis(digits: &str) -> FieldResult<u32> {
    if digits.is_empty()
        || digits.len() > MAX_FRACTION_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(LineError::InvalidFraction {
            value: digits.to_string(),
        });
    }

    let value: u32 = parse_integer("fractional second", digits)?;
    let scale = 10u32.pow((3 - digits.len()) as u32);
    Ok(value * scale)
}

/// Degrees plus minutes as signed decimal degrees
pub fn sexagesimal_to_decimal(degrees: f64, minutes: f64, negative: bool) -> f64 {
    let value = degrees + minutes / MINUTES_PER_DEGREE;
    if negative { -value } else { value }
}

/// Round to the coordinate precision and render with exactly that many decimals
pub fn format_coordinate(value: f64) -> String {
    let factor = 10f64.powi(COORDINATE_DECIMALS as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}", COORDINATE_DECIMALS, rounded)
}

/// Parse the magnitude column; a value starting with `missing_marker` has no reading
pub fn parse_magnitude(raw: &str, missing_marker: char) -> FieldResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.starts_with(missing_marker) {
        return Ok(None);
    }
    parse_float("magnitude", trimmed).map(Some)
}
