//! Time converter state machine.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

use super::details::TimeDetails;
use super::format::{format_time, InputFormat};
use super::parse::parse_time;

/// Message surfaced for non-empty input that does not parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Where the converter stands after the last event.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeState<Tz: TimeZone> {
    /// No input
    Empty,
    /// Input resolved to an instant
    Valid(DateTime<Tz>),
    /// Non-empty input that does not parse under the active format
    Invalid,
}

/// Raw input, active format, and resolved instant of the time converter.
///
/// The instant is recomputed on every input or format change and is present
/// exactly when the raw input parses under the active format.
#[derive(Debug, Clone)]
pub struct TimeConverter<Tz: TimeZone> {
    tz: Tz,
    input: String,
    format: InputFormat,
    date: Option<DateTime<Tz>>,
    error: Option<&'static str>,
}

impl<Tz: TimeZone> TimeConverter<Tz>
where
    Tz::Offset: fmt::Display,
{
    /// Empty converter rendering in `tz`.
    pub fn new(tz: Tz, format: InputFormat) -> Self {
        Self {
            tz,
            input: String::new(),
            format,
            date: None,
            error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn date(&self) -> Option<&DateTime<Tz>> {
        self.date.as_ref()
    }

    /// Error message while the input is invalid.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn placeholder(&self) -> &'static str {
        self.format.placeholder()
    }

    pub fn state(&self) -> TimeState<Tz> {
        match (&self.date, self.input.is_empty()) {
            (Some(date), _) => TimeState::Valid(date.clone()),
            (None, true) => TimeState::Empty,
            (None, false) => TimeState::Invalid,
        }
    }

    /// Typed edit of the raw input.
    ///
    /// Text with characters the active format never accepts is discarded and
    /// the previous input kept. Returns `false` in that case.
    pub fn set_input(&mut self, text: &str) -> bool {
        if !text.is_empty() && !self.format.accepts(text) {
            debug!(format = %self.format, text, "keystroke filtered");
            return false;
        }
        self.input = text.to_string();
        self.recompute();
        true
    }

    /// Switch formats, carrying the current instant over as the new input.
    pub fn set_format(&mut self, format: InputFormat) {
        self.input = match &self.date {
            Some(date) => format_time(date, format),
            None => String::new(),
        };
        self.format = format;
        self.recompute();
    }

    /// "Now" action: write the current instant as if typed.
    pub fn set_now(&mut self) {
        self.set_instant(&Utc::now());
    }

    /// Write `instant` in the active format as if typed.
    pub fn set_instant(&mut self, instant: &DateTime<Utc>) {
        let local = instant.with_timezone(&self.tz);
        self.input = format_time(&local, self.format);
        self.recompute();
    }

    /// Derived values, with relative time measured from `now`.
    pub fn details(&self, now: &DateTime<Utc>) -> Option<TimeDetails> {
        self.date
            .as_ref()
            .map(|date| TimeDetails::new(date, &now.with_timezone(&self.tz)))
    }

    fn recompute(&mut self) {
        if self.input.is_empty() {
            self.date = None;
            self.error = None;
            return;
        }
        match parse_time(&self.input, self.format, &self.tz) {
            Ok(date) => {
                self.date = Some(date);
                self.error = None;
            }
            Err(_) => {
                self.date = None;
                self.error = Some(INVALID_INPUT_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> TimeConverter<Utc> {
        TimeConverter::new(Utc, InputFormat::Unix)
    }

    #[test]
    fn test_starts_empty() {
        let conv = converter();
        assert_eq!(conv.state(), TimeState::Empty);
        assert_eq!(conv.placeholder(), "1704067200");
        assert!(conv.error().is_none());
    }

    #[test]
    fn test_valid_then_invalid_then_empty() {
        let mut conv = converter();
        assert!(conv.set_input("1704067200"));
        assert_eq!(
            conv.state(),
            TimeState::Valid(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );

        assert!(conv.set_input("1704067200+"));
        assert_eq!(conv.state(), TimeState::Invalid);
        assert_eq!(conv.error(), Some(INVALID_INPUT_MESSAGE));
        assert!(conv.details(&Utc::now()).is_none());

        assert!(conv.set_input(""));
        assert_eq!(conv.state(), TimeState::Empty);
        assert!(conv.error().is_none());
    }

    #[test]
    fn test_filtered_keystroke_keeps_previous_input() {
        let mut conv = converter();
        conv.set_input("17");
        assert!(!conv.set_input("17a"));
        assert_eq!(conv.input(), "17");
    }

    #[test]
    fn test_format_change_follows_instant() {
        let mut conv = converter();
        conv.set_input("1704067200");
        let before = conv.date().cloned();

        conv.set_format(InputFormat::Ms);
        assert_eq!(conv.input(), "1704067200000");
        assert_eq!(conv.date().cloned(), before);

        conv.set_format(InputFormat::Iso);
        assert_eq!(conv.input(), "2024-01-01T00:00:00.000+00:00");
        assert_eq!(conv.date().cloned(), before);
        assert_eq!(conv.placeholder(), "2024-01-01T00:00:00.000+07:00");

        conv.set_format(InputFormat::Unix);
        assert_eq!(conv.input(), "1704067200");
        assert_eq!(conv.date().cloned(), before);
    }

    #[test]
    fn test_format_change_without_instant_clears_input() {
        let mut conv = converter();
        conv.set_input("12*");
        assert_eq!(conv.state(), TimeState::Invalid);
        conv.set_format(InputFormat::Iso);
        assert_eq!(conv.input(), "");
        assert_eq!(conv.state(), TimeState::Empty);
    }

    #[test]
    fn test_format_change_switches_filter() {
        let mut conv = converter();
        conv.set_format(InputFormat::Iso);
        assert!(!conv.set_input("60*60"));
        assert!(conv.set_input("2024-01-01T00:00:00Z"));
        assert!(matches!(conv.state(), TimeState::Valid(_)));
    }

    #[test]
    fn test_set_instant_writes_canonical_text() {
        let mut conv = TimeConverter::new(Utc, InputFormat::Ms);
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        conv.set_instant(&instant);
        assert_eq!(conv.input(), "1704067200000");
        assert_eq!(conv.date(), Some(&instant));
    }

    #[test]
    fn test_now_is_valid() {
        let mut conv = converter();
        conv.set_now();
        assert!(matches!(conv.state(), TimeState::Valid(_)));
        assert!(!conv.input().is_empty());
    }

    #[test]
    fn test_details_measure_from_now() {
        let mut conv = converter();
        conv.set_input("1704067200");
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 0, 0, 0).unwrap();
        let details = conv.details(&now).unwrap();
        assert_eq!(details.relative, "1yr 2mo 3d ago");
    }
}
