use crate::{
    condition::CanonicalCondition,
    model::{CurrentConditions, ForecastDay, WeatherSnapshot},
};

pub const DEFAULT_LOCATION: &str = "New York";

/// Fixed snapshot returned whenever a live fetch fails.
pub fn sample_snapshot() -> WeatherSnapshot {
    let day = |date: &str, min: f64, max: f64, condition: CanonicalCondition, icon: &str| ForecastDay {
        date: date.to_string(),
        local_time: "14:30".to_string(),
        temp_min_c: min,
        temp_max_c: max,
        condition,
        icon_ref: icon.to_string(),
    };

    WeatherSnapshot {
        current: CurrentConditions {
            location: DEFAULT_LOCATION.to_string(),
            temperature_c: 22.0,
            condition: CanonicalCondition::Clear,
            description: "Clear sky".to_string(),
            icon_ref: "01d".to_string(),
            feels_like_c: 23.0,
            humidity_pct: 65,
            wind_speed_ms: 5.2,
            local_time: "14:30".to_string(),
            local_date: "May 15, 2024".to_string(),
        },
        forecast: vec![
            day("May 16", 18.0, 25.0, CanonicalCondition::Clear, "01d"),
            day("May 17", 17.0, 24.0, CanonicalCondition::Clouds, "02d"),
            day("May 18", 16.0, 23.0, CanonicalCondition::Rain, "10d"),
            day("May 19", 15.0, 22.0, CanonicalCondition::Clouds, "03d"),
            day("May 20", 19.0, 26.0, CanonicalCondition::Clear, "01d"),
        ],
    }
}
