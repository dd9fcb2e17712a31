use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    model::LocationQuery,
    transform::{CurrentPayload, ForecastPayload},
};

use super::{FetchError, WeatherProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Value shipped in sample env files; never a real key.
pub const PLACEHOLDER_API_KEY: &str = "your-openweathermap-api-key";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    fn credential(&self) -> Result<&str, FetchError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if is_usable_api_key(key) => Ok(key),
            _ => Err(FetchError::MissingCredential),
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &LocationQuery,
    ) -> Result<T, FetchError> {
        let api_key = self.credential()?;
        let url = format!("{}/{endpoint}", self.base_url);

        let mut params: Vec<(&str, String)> = match query {
            LocationQuery::Name(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(c) => {
                vec![("lat", c.latitude.to_string()), ("lon", c.longitude.to_string())]
            }
        };
        params.push(("units", "metric".to_string()));
        params.push(("appid", api_key.to_string()));

        tracing::debug!(%query, endpoint, "requesting OpenWeather");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        match status {
            s if s.is_success() => Ok(serde_json::from_str(&body)?),
            StatusCode::UNAUTHORIZED => Err(FetchError::Unauthorized),
            StatusCode::TOO_MANY_REQUESTS => Err(FetchError::RateLimited),
            s => Err(FetchError::Status {
                status: s.as_u16(),
                message: error_message(&body),
            }),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &LocationQuery) -> Result<CurrentPayload, FetchError> {
        self.get("weather", query).await
    }

    async fn forecast(&self, query: &LocationQuery) -> Result<ForecastPayload, FetchError> {
        self.get("forecast", query).await
    }
}

pub fn is_usable_api_key(key: &str) -> bool {
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

#[derive(Debug, Deserialize)]
struct OwError {
    message: String,
}

/// Prefer the provider's own `message` field; fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<OwError>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ => truncate_body(body),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_keys_are_missing() {
        for key in [None, Some(""), Some("   "), Some(PLACEHOLDER_API_KEY)] {
            let provider = OpenWeatherProvider::new(key.map(str::to_string));
            assert!(matches!(provider.credential(), Err(FetchError::MissingCredential)));
        }
    }

    #[test]
    fn real_key_is_used_trimmed() {
        let provider = OpenWeatherProvider::new(Some(" abc123 ".to_string()));
        assert_eq!(provider.credential().unwrap(), "abc123");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider = OpenWeatherProvider::with_base_url(None, "http://localhost:1234/");
        assert_eq!(provider.base_url, "http://localhost:1234");
    }

    #[test]
    fn error_message_prefers_provider_message() {
        assert_eq!(error_message(r#"{"cod":"404","message":"city not found"}"#), "city not found");
        assert_eq!(error_message("gateway down"), "gateway down");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "é".repeat(300);
        let out = truncate_body(&body);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
    }
}
