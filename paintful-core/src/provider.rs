use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    model::LocationQuery,
    transform::{CurrentPayload, ForecastPayload, TransformError},
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Everything that can go wrong between issuing a request and holding a
/// normalized snapshot.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API key is not configured")]
    MissingCredential,

    #[error("Weather provider rejected the API key (401)")]
    Unauthorized,

    #[error("Weather provider rate limit exceeded (429)")]
    RateLimited,

    #[error("Weather provider request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to reach weather provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse weather provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Upstream REST boundary: one call per endpoint, metric units.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentPayload, FetchError>;

    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastPayload, FetchError>;
}
