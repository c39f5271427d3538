//! Derived display values of a resolved instant.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone};
use serde::Serialize;

use super::format::{format_display, format_local, format_utc, DisplayFormat};
use super::relative::relative_time;

/// Placeholder shown for every derived value when there is no instant.
pub const PLACEHOLDER: &str = "-";

/// One rendering from [`DisplayFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedValue {
    pub format: DisplayFormat,
    pub pattern: &'static str,
    pub value: String,
}

/// One displayed value: a stable key, its human label, and the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

const FIXED_ROWS: [(&str, &str); 7] = [
    ("local", "Local"),
    ("utc", "UTC (ISO 8601)"),
    ("relative", "Relative"),
    ("unix", "Unix time"),
    ("day_of_year", "Day of year"),
    ("week_of_year", "Week of year"),
    ("is_leap_year", "Is leap year?"),
];

/// Every value shown for a valid instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeDetails {
    pub local: String,
    pub utc: String,
    pub relative: String,
    pub unix: i64,
    pub day_of_year: u32,
    pub week_of_year: u32,
    pub is_leap_year: bool,
    pub formats: Vec<FormattedValue>,
}

impl TimeDetails {
    /// Compute the details of `instant`, with relative time measured from `now`.
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            local: format_local(instant),
            utc: format_utc(instant),
            relative: relative_time(instant, now),
            unix: instant.timestamp(),
            day_of_year: instant.ordinal(),
            week_of_year: instant.iso_week().week(),
            is_leap_year: is_leap_year(instant.year()),
            formats: DisplayFormat::ALL
                .iter()
                .map(|format| FormattedValue {
                    format: *format,
                    pattern: format.label(),
                    value: format_display(instant, *format),
                })
                .collect(),
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> Vec<DetailRow> {
        let values = [
            self.local.clone(),
            self.utc.clone(),
            self.relative.clone(),
            self.unix.to_string(),
            self.day_of_year.to_string(),
            self.week_of_year.to_string(),
            self.is_leap_year.to_string(),
        ];
        let mut rows: Vec<DetailRow> = FIXED_ROWS
            .iter()
            .zip(values)
            .map(|(&(key, label), value)| DetailRow { key, label, value })
            .collect();
        rows.extend(self.formats.iter().map(|f| DetailRow {
            key: f.format.as_str(),
            label: f.pattern,
            value: f.value.clone(),
        }));
        rows
    }

    /// Rows for the absent-instant case, every value [`PLACEHOLDER`].
    pub fn placeholder_rows() -> Vec<DetailRow> {
        let fixed = FIXED_ROWS.iter().map(|(key, label)| (*key, *label));
        let formats = DisplayFormat::ALL.iter().map(|f| (f.as_str(), f.label()));
        fixed
            .chain(formats)
            .map(|(key, label)| DetailRow {
                key,
                label,
                value: PLACEHOLDER.to_string(),
            })
            .collect()
    }
}

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
