//! Unix time / date converter.
//!
//! - [`parse_time`]: raw input under an [`InputFormat`] to an instant
//! - [`format_time`], [`format_display`], [`format_pattern`]: renderings
//! - [`relative_time`]: exact calendar-aware distance from now
//! - [`TimeConverter`]: input/format/instant state machine

mod converter;
mod details;
mod format;
mod parse;
mod relative;

pub use converter::{TimeConverter, TimeState, INVALID_INPUT_MESSAGE};
pub use details::{is_leap_year, DetailRow, FormattedValue, TimeDetails, PLACEHOLDER};
pub use format::{
    format_display, format_local, format_pattern, format_time, format_utc, DisplayFormat,
    InputFormat,
};
pub use parse::{parse_time, MAX_EPOCH_MILLIS};
pub use relative::{relative_time, RelativeTime};
