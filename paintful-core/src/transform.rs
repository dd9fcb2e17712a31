//! Provider payloads and their conversion into [`WeatherSnapshot`].

use serde::Deserialize;

use crate::{
    condition::normalize,
    localtime,
    model::{CurrentConditions, ForecastDay, WeatherSnapshot},
};

/// Forecast series step: 3-hour samples, 8 per day.
pub const SAMPLES_PER_DAY: usize = 8;
pub const FORECAST_DAYS: usize = 5;

pub const MAX_HUMIDITY_PCT: u8 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("Malformed payload: missing `{0}`")]
    MissingField(&'static str),

    #[error("Malformed payload: timestamp {0} is out of range")]
    TimestampOutOfRange(i64),

    #[error("Malformed payload: humidity {0}% is above {MAX_HUMIDITY_PCT}%")]
    HumidityOutOfRange(u8),
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherTag {
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Body of the current-conditions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPayload {
    pub name: String,
    pub dt: i64,
    /// Offset from UTC in seconds.
    pub timezone: i64,
    pub main: CurrentMain,
    pub weather: Vec<WeatherTag>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    pub weather: Vec<WeatherTag>,
}

/// Body of the forecast endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub list: Vec<ForecastEntry>,
}

/// Build a snapshot from a current payload and its matching forecast.
///
/// The forecast keeps every [`SAMPLES_PER_DAY`]th entry starting at index 0,
/// capped at [`FORECAST_DAYS`]. A short series yields a short forecast. All
/// forecast times use the *current* payload's UTC offset.
pub fn transform(
    current: &CurrentPayload,
    forecast: &ForecastPayload,
) -> Result<WeatherSnapshot, TransformError> {
    let offset = current.timezone;

    Ok(WeatherSnapshot {
        current: transform_current(current)?,
        forecast: forecast
            .list
            .iter()
            .step_by(SAMPLES_PER_DAY)
            .take(FORECAST_DAYS)
            .map(|entry| transform_entry(entry, offset))
            .collect::<Result<Vec<_>, _>>()?,
    })
}

fn transform_current(p: &CurrentPayload) -> Result<CurrentConditions, TransformError> {
    let tag = primary_tag(&p.weather)?;
    if p.main.humidity > MAX_HUMIDITY_PCT {
        return Err(TransformError::HumidityOutOfRange(p.main.humidity));
    }

    Ok(CurrentConditions {
        location: p.name.clone(),
        temperature_c: p.main.temp,
        condition: normalize(&tag.main.to_lowercase()),
        description: tag.description.clone(),
        icon_ref: tag.icon.clone(),
        feels_like_c: p.main.feels_like,
        humidity_pct: p.main.humidity,
        wind_speed_ms: p.wind.speed,
        local_time: localtime::clock_time(p.dt, p.timezone)
            .ok_or(TransformError::TimestampOutOfRange(p.dt))?,
        local_date: localtime::long_date(p.dt, p.timezone)
            .ok_or(TransformError::TimestampOutOfRange(p.dt))?,
    })
}

fn transform_entry(e: &ForecastEntry, offset: i64) -> Result<ForecastDay, TransformError> {
    let tag = primary_tag(&e.weather)?;

    Ok(ForecastDay {
        date: localtime::short_date(e.dt, offset)
            .ok_or(TransformError::TimestampOutOfRange(e.dt))?,
        local_time: localtime::clock_time(e.dt, offset)
            .ok_or(TransformError::TimestampOutOfRange(e.dt))?,
        temp_min_c: e.main.temp_min,
        temp_max_c: e.main.temp_max,
        condition: normalize(&tag.main.to_lowercase()),
        icon_ref: tag.icon.clone(),
    })
}

fn primary_tag(tags: &[WeatherTag]) -> Result<&WeatherTag, TransformError> {
    tags.first().ok_or(TransformError::MissingField("weather[0]"))
}
