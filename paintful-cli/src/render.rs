use anyhow::{Context, Result};
use paintful_core::{
    Advisory, AdvisorySink, CanonicalCondition, GeolocationError, WeatherSnapshot,
    localtime::format_temperature,
};

/// Prints advisories the way a toast would show them: on stderr, next to
/// the output rather than in it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrAdvisories;

impl AdvisorySink for StderrAdvisories {
    fn advise(&self, advisory: &Advisory) {
        eprintln!("warning: {advisory}");
    }

    fn notice(&self, message: &str) {
        eprintln!("note: {message}");
    }
}

pub fn print(snapshot: &WeatherSnapshot, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
        println!("{out}");
    } else {
        print!("{}", snapshot_text(snapshot));
    }
    Ok(())
}

pub fn glyph(condition: CanonicalCondition, night: bool) -> &'static str {
    if night && condition == CanonicalCondition::Clear {
        return "☾";
    }
    match condition.icon_name() {
        "sun" => "☀",
        "cloud" => "☁",
        "cloud-rain" => "🌧",
        "cloud-lightning" => "⛈",
        "snowflake" => "❄",
        _ => "🌫",
    }
}

pub fn snapshot_text(snapshot: &WeatherSnapshot) -> String {
    let c = &snapshot.current;

    let mut out = format!(
        "{}  {} {}\n  {} {}  {}\n  Feels like {}  Humidity {}%  Wind {:.1} m/s\n",
        c.location,
        c.local_date,
        c.local_time,
        glyph(c.condition, c.is_night()),
        format_temperature(c.temperature_c),
        c.description,
        format_temperature(c.feels_like_c),
        c.humidity_pct,
        c.wind_speed_ms,
    );

    if !snapshot.forecast.is_empty() {
        out.push_str("\nForecast\n");
    }
    for day in &snapshot.forecast {
        out.push_str(&format!(
            "  {:<7} {} {:>4} / {:<4} {}\n",
            day.date,
            glyph(day.condition, day.is_night()),
            format_temperature(day.temp_min_c),
            format_temperature(day.temp_max_c),
            day.condition
        ));
    }

    out
}

pub fn geolocation_message(err: GeolocationError) -> String {
    match err {
        GeolocationError::Unsupported => format!(
            "{err}.\nHint: run `paintful configure` and store a home position."
        ),
        GeolocationError::PermissionDenied
        | GeolocationError::PositionUnavailable
        | GeolocationError::Timeout
        | GeolocationError::Unknown => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paintful_core::sample::sample_snapshot;

    #[test]
    fn text_includes_current_and_forecast() {
        let text = snapshot_text(&sample_snapshot());

        assert!(text.starts_with("New York  May 15, 2024 14:30\n"));
        assert!(text.contains("☀ 22°  Clear sky"));
        assert!(text.contains("Feels like 23°  Humidity 65%  Wind 5.2 m/s"));
        assert!(text.contains("Forecast"));
        assert!(text.contains("May 18"));
        assert_eq!(text.lines().filter(|l| l.contains(" / ")).count(), 5);
    }

    #[test]
    fn text_layout_is_line_per_item() {
        let text = snapshot_text(&sample_snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 2 + 5);
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Forecast");
        assert_eq!(lines[5], "  May 16  ☀  18° / 25°  clear");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn empty_forecast_omits_heading() {
        let mut snap = sample_snapshot();
        snap.forecast.clear();
        assert!(!snapshot_text(&snap).contains("Forecast"));
    }

    #[test]
    fn clear_night_gets_moon() {
        assert_eq!(glyph(CanonicalCondition::Clear, true), "☾");
        assert_eq!(glyph(CanonicalCondition::Clear, false), "☀");
        assert_eq!(glyph(CanonicalCondition::Rain, true), "🌧");
        assert_eq!(glyph(CanonicalCondition::Fog, false), "🌫");
    }

    #[test]
    fn every_geolocation_error_has_its_own_message() {
        let all = [
            GeolocationError::Unsupported,
            GeolocationError::PermissionDenied,
            GeolocationError::PositionUnavailable,
            GeolocationError::Timeout,
            GeolocationError::Unknown,
        ];
        let mut messages: Vec<_> = all.into_iter().map(geolocation_message).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), 5);
        assert!(geolocation_message(GeolocationError::Unsupported).contains("paintful configure"));
    }
}
