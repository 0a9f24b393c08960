//! Timestamp parsing for mixed-format workbook columns.
//!
//! The record-time column is filled by several upstream systems, so a single
//! column routinely mixes precisions and separators:
//!
//! ```text
//! 2024-03-01 08:15:00
//! 2024/03/01 08:15
//! 2024-03-01T08:15:00.250
//! 2024/3/1 下午 02:15:00
//! 45352.34375            (Excel serial day number)
//! ```
//!
//! Everything is normalised to a naive local wall-clock time. Offsets in
//! RFC 3339 input are dropped after conversion to the local reading.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Accepted date-time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %p %I:%M:%S",
    "%Y/%m/%d %p %I:%M",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    "%Y-%m-%d %p %I:%M:%S",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y%m%d %H:%M:%S",
    "%Y%m%d%H%M%S",
];

/// Accepted date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Excel's day zero for the 1900 date system (accounts for the 1900 leap bug).
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Largest serial Excel accepts (9999-12-31).
pub(crate) const EXCEL_MAX_SERIAL: f64 = 2_958_465.999_999;

/// Errors from timestamp parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Cell was empty or whitespace.
    #[error("empty timestamp")]
    Empty,

    /// No known layout matched.
    #[error("unrecognized timestamp '{0}'")]
    Unrecognized(String),

    /// Numeric serial outside the range Excel can represent.
    #[error("excel serial out of range: {0}")]
    SerialOutOfRange(String),
}

/// Parse a textual timestamp in any of the supported layouts.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let text = normalize(raw);
    if text.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&text) {
        return Ok(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&text, fmt) {
            return Ok(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&text, fmt) {
            return Ok(date.and_time(chrono::NaiveTime::MIN));
        }
    }

    // Text cells that hold a bare serial number ("45352.5").
    if let Ok(serial) = text.parse::<f64>() {
        return from_excel_serial(serial);
    }

    Err(TimestampError::Unrecognized(raw.trim().to_string()))
}

/// Convert an Excel serial day number into a timestamp.
///
/// The fractional part is the time of day; it is rounded to the millisecond.
pub fn from_excel_serial(serial: f64) -> Result<NaiveDateTime, TimestampError> {
    if !serial.is_finite() || !(0.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return Err(TimestampError::SerialOutOfRange(serial.to_string()));
    }

    let (y, m, d) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)
        .map(|date| date.and_time(chrono::NaiveTime::MIN))
        .ok_or_else(|| TimestampError::SerialOutOfRange(serial.to_string()))?;

    let millis = (serial * 86_400_000.0).round() as i64;
    epoch
        .checked_add_signed(Duration::milliseconds(millis))
        .ok_or_else(|| TimestampError::SerialOutOfRange(serial.to_string()))
}

/// Collapse whitespace and map zh-TW meridiem markers onto AM/PM.
fn normalize(raw: &str) -> String {
    raw.replace("上午", " AM ")
        .replace("下午", " PM ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
