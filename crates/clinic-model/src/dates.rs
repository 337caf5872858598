use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{ModelError, Result};

/// Canonical calendar-day key (`YYYY-MM-DD`).
///
/// `Invalid` is an explicit sentinel for dates that could not be parsed.
/// It never matches a day or window filter; callers that care surface it
/// as an "undated" diagnostic instead of letting the record vanish or be
/// coerced into today's date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayKey {
    Day(NaiveDate),
    Invalid,
}

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Day(date)
    }

    /// Build a key from calendar components; out-of-range input yields
    /// `Invalid` rather than an error.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self::Day(date),
            None => Self::Invalid,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(date) => Some(*date),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Day(_))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Invalid => Ok(()),
        }
    }
}

impl serde::Serialize for DayKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DayKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => Ok(Self::Day(date)),
            Err(_) => Ok(Self::Invalid),
        }
    }
}

/// A (month, year) reporting period, inclusive of every day that belongs
/// to it. Day counts come from the calendar, never a hard-coded 30/31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MonthWindow {
    month: u32,
    year: i32,
}

impl MonthWindow {
    pub fn new(month: u32, year: i32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ModelError::InvalidMonth(month));
        }
        if !(1..=9999).contains(&year) {
            return Err(ModelError::InvalidYear(year));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of days in this month (28-31, leap-year aware).
    pub fn day_count(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1);
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
        match (first, next) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Every day of the window, in calendar order.
    pub fn days(&self) -> Vec<DayKey> {
        (1..=self.day_count())
            .map(|day| DayKey::from_ymd(self.year, self.month, day))
            .collect()
    }

    pub fn contains(&self, day: DayKey) -> bool {
        match day.date() {
            Some(date) => date.year() == self.year && date.month() == self.month,
            None => false,
        }
    }

    /// `YYYY-MM` label used for export filenames.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
