//! Core library for Paintful Weather.
//!
//! This crate defines:
//! - Normalization of provider weather categories and timestamps
//! - Conversion of OpenWeather payloads into [`WeatherSnapshot`]
//! - The weather service with its sample-data fallback
//! - Device location lookup
//!
//! It is used by `paintful-cli`, but can also be reused by other front ends.

pub mod advisory;
pub mod condition;
pub mod config;
pub mod geolocation;
pub mod localtime;
pub mod model;
pub mod provider;
pub mod sample;
pub mod service;
pub mod transform;

pub use advisory::{Advisory, AdvisorySink, LogAdvisories, SAMPLE_DATA_NOTICE};
pub use condition::{CanonicalCondition, normalize};
pub use config::Config;
pub use geolocation::{GeolocationError, Geolocator, PositionOptions, PositionSource};
pub use model::{Coordinates, CurrentConditions, ForecastDay, LocationQuery, WeatherSnapshot};
pub use provider::{FetchError, OpenWeatherProvider, WeatherProvider};
pub use service::{ServiceConfig, WeatherService};
pub use transform::{TransformError, transform};
