use serde::{Deserialize, Serialize};

use crate::{condition::CanonicalCondition, localtime};

/// What to ask the provider about.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Name(String),
    Coordinates(Coordinates),
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationQuery::Name(name) => f.write_str(name),
            LocationQuery::Coordinates(c) => write!(f, "{:.4},{:.4}", c.latitude, c.longitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub location: String,
    pub temperature_c: f64,
    pub condition: CanonicalCondition,
    pub description: String,
    pub icon_ref: String,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    /// Location wall clock, `HH:MM`.
    pub local_time: String,
    pub local_date: String,
}

impl CurrentConditions {
    pub fn is_night(&self) -> bool {
        localtime::is_night(&self.local_time)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub local_time: String,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub condition: CanonicalCondition,
    pub icon_ref: String,
}

impl ForecastDay {
    pub fn is_night(&self) -> bool {
        localtime::is_night(&self.local_time)
    }
}

/// One complete current + forecast result as of a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}
