//! Parsing raw time input under an [`InputFormat`].

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use tracing::{debug, instrument};

use super::format::InputFormat;
use crate::error::{DevUtilsError, Result};
use crate::expr;

/// Largest distance from the epoch, in milliseconds, that an instant may have.
pub const MAX_EPOCH_MILLIS: f64 = 8.64e15;

const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
];

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse `text` as an instant, rendering it in `tz`.
///
/// Numeric formats evaluate `text` as an arithmetic expression; `iso` accepts
/// RFC 3339 timestamps and offset-less dates/times, the latter read as
/// wall-clock time in `tz`. Sub-millisecond precision is truncated.
///
/// # Errors
///
/// Returns [`DevUtilsError::Parse`] for unparseable text and
/// [`DevUtilsError::InvalidInput`] for values that are not finite or fall
/// outside the representable range.
#[instrument(level = "debug", skip(tz))]
pub fn parse_time<Tz: TimeZone>(text: &str, format: InputFormat, tz: &Tz) -> Result<DateTime<Tz>> {
    let result = match format {
        InputFormat::Unix => expr::evaluate(text).and_then(|secs| from_epoch_millis(secs * 1000.0)),
        InputFormat::Ms => expr::evaluate(text).and_then(from_epoch_millis),
        InputFormat::Iso => parse_iso(text.trim(), tz).map(|dt| dt.with_timezone(&Utc)),
    };
    match result {
        Ok(instant) => Ok(instant.with_timezone(tz)),
        Err(err) => {
            debug!(%err, "time input rejected");
            Err(err)
        }
    }
}

fn from_epoch_millis(millis: f64) -> Result<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(DevUtilsError::InvalidInput(format!(
            "{} is not a finite timestamp",
            millis
        )));
    }
    let millis = millis.trunc();
    if millis.abs() > MAX_EPOCH_MILLIS {
        return Err(DevUtilsError::InvalidInput(format!(
            "timestamp {} ms is out of range",
            millis
        )));
    }
    match Utc.timestamp_millis_opt(millis as i64) {
        LocalResult::Single(instant) => Ok(instant),
        _ => Err(DevUtilsError::InvalidInput(format!(
            "timestamp {} ms is out of range",
            millis
        ))),
    }
}

fn parse_iso<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<DateTime<FixedOffset>> {
    if text.is_empty() {
        return Err(DevUtilsError::Parse("empty timestamp".to_string()));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed);
    }

    let with_offset = match text.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&with_offset, fmt) {
            return Ok(parsed);
        }
    }

    let naive = parse_naive(text)?;
    resolve_local(tz, naive)
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| DevUtilsError::InvalidInput(format!("{} does not exist locally", text)))
}

/// Offset-less forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and date-times.
fn parse_naive(text: &str) -> Result<NaiveDateTime> {
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Ok(naive);
        }
    }

    let mut parts = text.splitn(3, '-');
    let year = parts.next().filter(|y| y.len() == 4).and_then(|y| y.parse::<i32>().ok());
    let month = parts.next().map(|m| m.parse::<u32>().ok());
    let day = parts.next().map(|d| d.parse::<u32>().ok());
    let date = match (year, month, day) {
        (Some(year), None, None) => NaiveDate::from_ymd_opt(year, 1, 1),
        (Some(year), Some(Some(month)), None) => NaiveDate::from_ymd_opt(year, month, 1),
        (Some(year), Some(Some(month)), Some(Some(day))) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DevUtilsError::Parse(format!("\"{}\" is not an ISO-8601 timestamp", text)))
}

/// Map a wall-clock time to an instant; times skipped by a DST jump move
/// forward by an hour.
pub(crate) fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        naive
            .checked_add_signed(Duration::hours(1))
            .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn utc_ms(text: &str, format: InputFormat) -> i64 {
        parse_time(text, format, &Utc).unwrap().timestamp_millis()
    }

    #[test]
    fn test_unix_seconds() {
        let instant = parse_time("1704067200", InputFormat::Unix, &Utc).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_unix_expression() {
        assert_eq!(utc_ms("60*60*24", InputFormat::Unix), 86_400_000);
        assert_eq!(utc_ms("1704067200 + 60 * 60", InputFormat::Unix), 1_704_070_800_000);
    }

    #[test]
    fn test_unix_fraction_truncates_to_millis() {
        assert_eq!(utc_ms("1.5", InputFormat::Unix), 1500);
        assert_eq!(utc_ms("0.0019", InputFormat::Unix), 1);
    }

    #[test]
    fn test_milliseconds() {
        assert_eq!(utc_ms("1704067200000", InputFormat::Ms), 1_704_067_200_000);
        assert_eq!(utc_ms("-1", InputFormat::Ms), -1);
        assert_eq!(utc_ms("10.9", InputFormat::Ms), 10);
    }

    #[test]
    fn test_non_finite_is_invalid_input() {
        assert!(matches!(
            parse_time("1/0", InputFormat::Unix, &Utc),
            Err(DevUtilsError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_time("9000000000000000", InputFormat::Ms, &Utc),
            Err(DevUtilsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_expression_is_parse_error() {
        assert!(matches!(
            parse_time("12+", InputFormat::Unix, &Utc),
            Err(DevUtilsError::Parse(_))
        ));
    }

    #[test]
    fn test_iso_with_offset() {
        assert_eq!(
            utc_ms("2024-01-01T00:00:00.000+07:00", InputFormat::Iso),
            1_704_042_000_000
        );
        assert_eq!(utc_ms("2024-01-01T00:00:00Z", InputFormat::Iso), 1_704_067_200_000);
        assert_eq!(utc_ms("2024-01-01T00:00Z", InputFormat::Iso), 1_704_067_200_000);
        assert_eq!(utc_ms("2024-01-01T07:00+07:00", InputFormat::Iso), 1_704_067_200_000);
        assert_eq!(utc_ms("2024-01-01T00:00:00.250+0000", InputFormat::Iso), 1_704_067_200_250);
    }

    #[test]
    fn test_iso_without_offset_uses_zone() {
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();
        let instant = parse_time("2024-01-01T07:00:00", InputFormat::Iso, &tz).unwrap();
        assert_eq!(instant.timestamp(), 1_704_067_200);

        let date_only = parse_time("2024-02-29", InputFormat::Iso, &Utc).unwrap();
        assert_eq!(date_only.ordinal(), 60);

        assert_eq!(utc_ms("2024-03", InputFormat::Iso), utc_ms("2024-03-01", InputFormat::Iso));
        assert_eq!(utc_ms("2024", InputFormat::Iso), 1_704_067_200_000);
    }

    #[test]
    fn test_iso_rejects_invalid_dates() {
        for text in ["", "2024-13-01", "2023-02-29", "2024-01-01T25:00", "T", "12", "2024-1-1-1"] {
            assert!(parse_time(text, InputFormat::Iso, &Utc).is_err(), "{:?}", text);
        }
    }

    #[test]
    fn test_dst_gap_moves_forward() {
        let tz = chrono_tz::America::New_York;
        let instant = parse_time("2024-03-10T02:30", InputFormat::Iso, &tz).unwrap();
        assert_eq!(
            instant.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 3, 10, 7, 30, 0).unwrap()
        );
    }
}
