//! Exact calendar-aware relative time ("1yr 2mo 3d ago").

use std::fmt;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime, TimeZone};
use serde::Serialize;

/// Mixed-radix breakdown of the distance between two instants.
///
/// Each component is below its natural modulus relative to the next larger
/// unit; `past` is true when the instant lies before the reference point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RelativeTime {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub past: bool,
}

impl RelativeTime {
    /// Break down the distance from `now` to `instant`.
    ///
    /// Years and months come from calendar field differences, days from the
    /// wall-clock day count after advancing by those months, and the rest
    /// from the absolute time left after the day step, so a span crossing a
    /// DST change counts the hours that actually elapsed. Calendar arithmetic
    /// happens in the zone of `instant`.
    pub fn between<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        let past = instant < now;
        let (earlier, later) = if past { (instant, now) } else { (now, instant) };
        let tz = instant.timezone();
        let later_abs = later.with_timezone(&tz);
        let earlier = earlier.with_timezone(&tz).naive_local();
        let later = later_abs.naive_local();

        let mut total_months = i64::from(later.year() - earlier.year()) * 12
            + i64::from(later.month()) - i64::from(earlier.month());
        let mut cursor = add_months(earlier, total_months);
        // Month-end clamping or a later day-of-month can overshoot; borrow back.
        while total_months > 0 && cursor.map_or(true, |c| c > later) {
            total_months -= 1;
            cursor = add_months(earlier, total_months);
        }
        let cursor = cursor.unwrap_or(earlier);

        let mut days = (later - cursor).num_days();
        let remaining = loop {
            let anchor = cursor + Duration::days(days);
            let remaining = match tz.from_local_datetime(&anchor).earliest() {
                Some(anchor) => later_abs.clone() - anchor,
                // Anchor inside a DST gap: fall back to wall-clock distance.
                None => later - anchor,
            };
            if remaining < Duration::zero() && days > 0 {
                days -= 1;
                continue;
            }
            break remaining.max(Duration::zero());
        };
        let hours = remaining.num_hours();
        let remaining = remaining - Duration::hours(hours);
        let minutes = remaining.num_minutes();
        let remaining = remaining - Duration::minutes(minutes);

        Self {
            years: total_months / 12,
            months: total_months % 12,
            days,
            hours,
            minutes,
            seconds: remaining.num_seconds(),
            past,
        }
    }

    fn components(&self) -> [(i64, &'static str); 6] {
        [
            (self.years, "yr"),
            (self.months, "mo"),
            (self.days, "d"),
            (self.hours, "hr"),
            (self.minutes, "min"),
            (self.seconds, "sec"),
        ]
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .components()
            .iter()
            .filter(|(value, _)| *value > 0)
            .map(|(value, label)| format!("{}{}", value, label))
            .collect();
        let body = if parts.is_empty() {
            "0sec".to_string()
        } else {
            parts.join(" ")
        };
        let suffix = if self.past { "ago" } else { "from now" };
        write!(f, "{} {}", body, suffix)
    }
}

fn add_months(start: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let months = u32::try_from(months).ok()?;
    start.checked_add_months(Months::new(months))
}

/// Exact relative time of `instant` as seen from `now`.
pub fn relative_time<Tz: TimeZone>(instant: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    RelativeTime::between(instant, now).to_string()
}
