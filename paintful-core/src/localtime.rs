//! Local date/time derivation for provider timestamps.
//!
//! The provider reports a UTC unix timestamp plus the location's UTC offset in
//! seconds. Adding the two and formatting the result *as UTC* yields the
//! location's wall-clock time; no device-local offset is ever applied.

use chrono::{DateTime, Utc};

/// Night covers `[NIGHT_STARTS_AT, 24)` and `[0, NIGHT_ENDS_AT)`.
pub const NIGHT_STARTS_AT: u32 = 18;
pub const NIGHT_ENDS_AT: u32 = 6;

/// Shift a UTC timestamp by `offset_secs` and return it as a naive wall clock
/// (still typed as UTC). `None` if the result is outside chrono's range.
pub fn shifted(dt: i64, offset_secs: i64) -> Option<DateTime<Utc>> {
    let local = dt.checked_add(offset_secs)?;
    DateTime::<Utc>::from_timestamp(local, 0)
}

/// `HH:MM`, 24-hour.
pub fn clock_time(dt: i64, offset_secs: i64) -> Option<String> {
    shifted(dt, offset_secs).map(|t| t.format("%H:%M").to_string())
}

/// Long calendar date, e.g. `May 15, 2024`.
pub fn long_date(dt: i64, offset_secs: i64) -> Option<String> {
    shifted(dt, offset_secs).map(|t| t.format("%B %-d, %Y").to_string())
}

/// Short calendar date, e.g. `May 16`.
pub fn short_date(dt: i64, offset_secs: i64) -> Option<String> {
    shifted(dt, offset_secs).map(|t| t.format("%b %-d").to_string())
}

/// Hour component of an `HH:MM` string.
pub fn hour_of(time: &str) -> Option<u32> {
    let (hour, _) = time.split_once(':')?;
    hour.trim().parse().ok().filter(|h| *h < 24)
}

/// Whether an `HH:MM` wall-clock time falls in the night window.
/// Unparsable input counts as day.
pub fn is_night(time: &str) -> bool {
    hour_of(time).is_some_and(|h| h >= NIGHT_STARTS_AT || h < NIGHT_ENDS_AT)
}

/// Rounded display temperature, e.g. `22°`. Halves round up.
pub fn format_temperature(celsius: f64) -> String {
    let rounded = (celsius + 0.5).floor() as i64;
    format!("{rounded}°")
}
