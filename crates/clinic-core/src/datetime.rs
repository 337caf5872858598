//! Heterogeneous date parsing.
//!
//! Event sources encode dates inconsistently: ISO datetimes, `YYYY-MM-DD`,
//! `DD-MM-YYYY`, epoch timestamps. Everything funnels through [`parse_day`]
//! and collapses to a canonical [`DayKey`]. Input that fails every format
//! yields `DayKey::Invalid`, never an error and never a silent default to
//! "today", which would corrupt historical aggregates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use clinic_model::DayKey;

/// Day-only formats tried in order. `%Y-%m-%d` must come first: it rejects
/// `05-03-2025` (no year 5 has a day 2025), so the orderings cannot collide.
const DAY_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Datetime formats for sources that store a full timestamp in the date field.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Epoch values at or above this magnitude are milliseconds, below it seconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Parse a raw date string into a canonical day key. Total: never fails.
pub fn parse_day(raw: &str) -> DayKey {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DayKey::Invalid;
    }
    if trimmed.contains('T') {
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return DayKey::from_date(datetime.date_naive());
        }
        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return DayKey::from_date(datetime.date());
            }
        }
        return DayKey::Invalid;
    }
    for format in DAY_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return DayKey::from_date(date);
        }
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        return day_from_epoch(epoch);
    }
    DayKey::Invalid
}

/// Parse a raw JSON date field. Numbers are epoch timestamps.
pub fn parse_day_value(raw: Option<&Value>) -> DayKey {
    match raw {
        Some(Value::String(text)) => parse_day(text),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(epoch) => day_from_epoch(epoch),
            None => DayKey::Invalid,
        },
        _ => DayKey::Invalid,
    }
}

/// Parse a createdAt-equivalent field into epoch milliseconds.
///
/// Missing or unparseable values become 0, which sorts before any real
/// event so a genuine record always wins the tie-break.
pub fn parse_timestamp_ms(raw: Option<&Value>) -> i64 {
    match raw {
        Some(Value::Number(number)) => number.as_i64().map_or(0, scale_epoch_ms),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if let Ok(epoch) = trimmed.parse::<i64>() {
                return scale_epoch_ms(epoch);
            }
            if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
                return datetime.timestamp_millis();
            }
            for format in DATETIME_FORMATS {
                if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                    return datetime.and_utc().timestamp_millis();
                }
            }
            match parse_day(trimmed).date() {
                Some(date) => date
                    .and_hms_opt(0, 0, 0)
                    .map_or(0, |midnight| midnight.and_utc().timestamp_millis()),
                None => 0,
            }
        }
        _ => 0,
    }
}

fn scale_epoch_ms(epoch: i64) -> i64 {
    if epoch <= 0 {
        0
    } else if epoch >= EPOCH_MILLIS_THRESHOLD {
        epoch
    } else {
        epoch.saturating_mul(1000)
    }
}

fn day_from_epoch(epoch: i64) -> DayKey {
    let timestamp = if epoch.abs() >= EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(epoch)
    } else {
        DateTime::from_timestamp(epoch, 0)
    };
    match timestamp {
        Some(datetime) => DayKey::from_date(datetime.date_naive()),
        None => DayKey::Invalid,
    }
}
