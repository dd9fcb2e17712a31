//! Weather acquisition: two sequential provider calls, normalization, and the
//! sample-data fallback.
//!
//! `fetch_by_*` never fail. Any error (missing key, HTTP status, transport,
//! malformed body) is reported through the [`AdvisorySink`] and the configured
//! fallback snapshot is returned instead. Callers that need the error use
//! [`WeatherService::try_fetch`].

use std::sync::Arc;

use crate::{
    advisory::{Advisory, AdvisorySink, LogAdvisories, SAMPLE_DATA_NOTICE},
    model::{Coordinates, LocationQuery, WeatherSnapshot},
    provider::{FetchError, WeatherProvider},
    sample::{DEFAULT_LOCATION, sample_snapshot},
    transform::transform,
};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Used by `fetch_by_location_name(None)`.
    pub default_location: String,
    /// Returned in place of live data on any failure.
    pub fallback: WeatherSnapshot,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION.to_string(),
            fallback: sample_snapshot(),
        }
    }
}

pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    config: ServiceConfig,
    advisories: Arc<dyn AdvisorySink>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &self.provider)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>, config: ServiceConfig) -> Self {
        Self::with_advisories(provider, config, Arc::new(LogAdvisories))
    }

    pub fn with_advisories(
        provider: Box<dyn WeatherProvider>,
        config: ServiceConfig,
        advisories: Arc<dyn AdvisorySink>,
    ) -> Self {
        Self { provider, config, advisories }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Weather for a named place, `default_location` when `name` is `None`.
    pub async fn fetch_by_location_name(&self, name: Option<&str>) -> WeatherSnapshot {
        let name = name.unwrap_or(&self.config.default_location);
        self.fetch_or_fallback(&LocationQuery::Name(name.to_string())).await
    }

    pub async fn fetch_by_coordinates(&self, coords: Coordinates) -> WeatherSnapshot {
        self.fetch_or_fallback(&LocationQuery::Coordinates(coords)).await
    }

    /// Current conditions, then forecast, then normalization. Errors propagate.
    pub async fn try_fetch(&self, query: &LocationQuery) -> Result<WeatherSnapshot, FetchError> {
        let current = self.provider.current(query).await?;
        let forecast = self.provider.forecast(query).await?;

        let snapshot = transform(&current, &forecast)?;
        tracing::debug!(
            %query,
            location = %snapshot.current.location,
            days = snapshot.forecast.len(),
            "weather fetched"
        );
        Ok(snapshot)
    }

    async fn fetch_or_fallback(&self, query: &LocationQuery) -> WeatherSnapshot {
        match self.try_fetch(query).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(%query, error = %err, "using sample data due to API error");
                self.advisories.advise(&Advisory::from(&err));
                self.advisories.notice(SAMPLE_DATA_NOTICE);
                self.config.fallback.clone()
            }
        }
    }
}
