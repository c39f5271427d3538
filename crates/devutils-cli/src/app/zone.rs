//! Display time zone selection.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

use crate::errors::CliError;

/// Zone instants are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The system zone (honors `TZ`)
    #[default]
    Local,
    /// An IANA zone such as `Europe/Berlin`
    Named(Tz),
}

impl FromStr for Zone {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("local") {
            return Ok(Zone::Local);
        }
        name.parse::<Tz>().map(Zone::Named).map_err(|_| {
            CliError::invalid_input_with_hint(
                format!("Unknown time zone \"{}\"", name),
                "Use an IANA name such as Europe/Berlin, UTC, or `local`.",
            )
        })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Local => f.write_str("local"),
            Zone::Named(tz) => f.write_str(tz.name()),
        }
    }
}
