//! Input formats and display renderings.

use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DevUtilsError, Result};

/// Characters a numeric (expression) input may contain, besides whitespace.
const NUMERIC_CHARS: &str = "0123456789+-*/().";

/// Characters an ISO-8601 input may contain.
const ISO_CHARS: &str = "0123456789-:T.Z+";

/// How the raw time input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Seconds since the epoch (arithmetic allowed)
    #[default]
    Unix,
    /// Milliseconds since the epoch (arithmetic allowed)
    Ms,
    /// ISO-8601 timestamp
    Iso,
}

impl InputFormat {
    pub const ALL: [InputFormat; 3] = [InputFormat::Unix, InputFormat::Ms, InputFormat::Iso];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Ms => "ms",
            Self::Iso => "iso",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unix => "Unix time (seconds since epoch)",
            Self::Ms => "Milliseconds since epoch",
            Self::Iso => "ISO 8601",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Unix => "1704067200",
            Self::Ms => "1704067200000",
            Self::Iso => "2024-01-01T00:00:00.000+07:00",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Iso => "Format: YYYY-MM-DDTHH:mm:ss.SSS\u{00B1}HH:mm",
            Self::Unix | Self::Ms => "Tips: Mathematical operators + - * / are supported",
        }
    }

    /// Keystroke filter: whether `text` may stand as the raw input.
    pub fn accepts(self, text: &str) -> bool {
        match self {
            Self::Unix | Self::Ms => text
                .chars()
                .all(|c| c.is_whitespace() || NUMERIC_CHARS.contains(c)),
            Self::Iso => text.chars().all(|c| ISO_CHARS.contains(c)),
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Iso)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = DevUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "s" | "seconds" => Ok(Self::Unix),
            "ms" | "millis" | "milliseconds" => Ok(Self::Ms),
            "iso" | "iso8601" | "iso-8601" => Ok(Self::Iso),
            other => Err(DevUtilsError::InvalidArgument(format!(
                "unknown input format \"{}\" (use unix, ms, or iso)",
                other
            ))),
        }
    }
}

/// The "other formats" renderings, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// `Monday, Jan 1, 2024`
    LongDate,
    /// `01/01/2024`
    LocaleDate,
    /// `2024-01-01`
    IsoDate,
    /// `01-01-2024 00:00`
    DateTime,
    /// `Jan 1, 12:00 AM`
    ShortDateTime,
    /// `January 2024`
    MonthYear,
}

impl DisplayFormat {
    pub const ALL: [DisplayFormat; 6] = [
        DisplayFormat::LongDate,
        DisplayFormat::LocaleDate,
        DisplayFormat::IsoDate,
        DisplayFormat::DateTime,
        DisplayFormat::ShortDateTime,
        DisplayFormat::MonthYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LongDate => "long_date",
            Self::LocaleDate => "locale_date",
            Self::IsoDate => "iso_date",
            Self::DateTime => "date_time",
            Self::ShortDateTime => "short_date_time",
            Self::MonthYear => "month_year",
        }
    }

    /// Token-style name of the rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::LongDate => "dddd, MMM D, YYYY",
            Self::LocaleDate => "L",
            Self::IsoDate => "YYYY-MM-DD",
            Self::DateTime => "MM-DD-YYYY HH:mm",
            Self::ShortDateTime => "MMM D, h:mm A",
            Self::MonthYear => "MMMM YYYY",
        }
    }

    fn strftime(self) -> &'static str {
        match self {
            Self::LongDate => "%A, %b %-d, %Y",
            Self::LocaleDate => "%m/%d/%Y",
            Self::IsoDate => "%Y-%m-%d",
            Self::DateTime => "%m-%d-%Y %H:%M",
            Self::ShortDateTime => "%b %-d, %-I:%M %p",
            Self::MonthYear => "%B %Y",
        }
    }
}

/// Canonical input text for `instant` in `format`.
///
/// `unix` floors to whole seconds, `ms` is the integer millisecond count, and
/// `iso` is wall-clock time in the instant's zone with its offset.
pub fn format_time<Tz: TimeZone>(instant: &DateTime<Tz>, format: InputFormat) -> String
where
    Tz::Offset: fmt::Display,
{
    match format {
        InputFormat::Unix => instant.timestamp().to_string(),
        InputFormat::Ms => instant.timestamp_millis().to_string(),
        InputFormat::Iso => instant.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
    }
}

/// Render one of the fixed display formats.
pub fn format_display<Tz: TimeZone>(instant: &DateTime<Tz>, format: DisplayFormat) -> String
where
    Tz::Offset: fmt::Display,
{
    instant.format(format.strftime()).to_string()
}

/// `ddd MMM DD HH:mm:ss Z YYYY` in the instant's zone.
pub fn format_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    instant.format("%a %b %d %H:%M:%S %:z %Y").to_string()
}

/// ISO-8601 in UTC with millisecond precision and a literal `Z`.
pub fn format_utc<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Render a caller-supplied `strftime` pattern.
///
/// # Errors
///
/// Returns [`DevUtilsError::InvalidArgument`] if the pattern contains an
/// unknown specifier.
pub fn format_pattern<Tz: TimeZone>(instant: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz::Offset: fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DevUtilsError::InvalidArgument(format!(
            "invalid format pattern \"{}\"",
            pattern
        )));
    }
    Ok(instant.format_with_items(items.into_iter()).to_string())
}
