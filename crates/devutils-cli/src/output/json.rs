//! JSON output formatting for converter state.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use devutils_core::time::TimeConverter;
use devutils_core::{BaseValues, TimeState};

/// Convert the five base fields to JSON for output.
pub fn base_values_json(state: &BaseValues) -> serde_json::Value {
    serde_json::json!({
        "binary": state.binary,
        "octal": state.octal,
        "decimal": state.decimal,
        "hex": state.hex,
        "custom": state.custom,
        "custom_base": state.custom_base.get(),
    })
}

/// Convert the time converter state to JSON for output.
///
/// `details` is `null` unless the input resolved to an instant.
pub fn time_json<Tz>(conv: &TimeConverter<Tz>, zone: &str, now: &DateTime<Utc>) -> serde_json::Value
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let state = match conv.state() {
        TimeState::Empty => "empty",
        TimeState::Valid(_) => "valid",
        TimeState::Invalid => "invalid",
    };
    serde_json::json!({
        "input": conv.input(),
        "format": conv.format(),
        "timezone": zone,
        "state": state,
        "error": conv.error(),
        "details": conv.details(now),
    })
}
