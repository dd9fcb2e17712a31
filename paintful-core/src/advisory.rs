//! User-facing advisories emitted when the service falls back to sample data.

use crate::provider::FetchError;

pub const SAMPLE_DATA_NOTICE: &str = "Using sample weather data because the weather service is \
     unavailable. This is a fallback to ensure you can still preview the app's features.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    MissingCredential,
    InvalidCredential,
    RateLimited,
    ServiceError(String),
    Unknown,
}

impl Advisory {
    pub fn message(&self) -> String {
        match self {
            Advisory::MissingCredential => {
                "Weather service is not properly configured. Please check your API key.".into()
            }
            Advisory::InvalidCredential => {
                "Invalid API key. Please check your OpenWeatherMap API key.".into()
            }
            Advisory::RateLimited => "Too many requests. Please try again later.".into(),
            Advisory::ServiceError(detail) => format!("Weather service error: {detail}"),
            Advisory::Unknown => "Failed to fetch weather data. Using sample data instead.".into(),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<&FetchError> for Advisory {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::MissingCredential => Advisory::MissingCredential,
            FetchError::Unauthorized => Advisory::InvalidCredential,
            FetchError::RateLimited => Advisory::RateLimited,
            FetchError::Status { .. } | FetchError::Decode(_) | FetchError::Transform(_) => {
                Advisory::ServiceError(err.to_string())
            }
            FetchError::Network(_) => Advisory::Unknown,
        }
    }
}

/// Where advisories go; the front end decides how to show them.
pub trait AdvisorySink: Send + Sync {
    fn advise(&self, advisory: &Advisory);

    fn notice(&self, message: &str);
}

/// Sink that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAdvisories;

impl AdvisorySink for LogAdvisories {
    fn advise(&self, advisory: &Advisory) {
        tracing::warn!("{advisory}");
    }

    fn notice(&self, message: &str) {
        tracing::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::TransformError;

    #[test]
    fn fetch_errors_map_to_categories() {
        assert_eq!(Advisory::from(&FetchError::MissingCredential), Advisory::MissingCredential);
        assert_eq!(Advisory::from(&FetchError::Unauthorized), Advisory::InvalidCredential);
        assert_eq!(Advisory::from(&FetchError::RateLimited), Advisory::RateLimited);

        let status = FetchError::Status { status: 404, message: "city not found".into() };
        match Advisory::from(&status) {
            Advisory::ServiceError(detail) => assert!(detail.contains("city not found")),
            other => panic!("unexpected advisory {other:?}"),
        }

        let malformed = FetchError::Transform(TransformError::MissingField("weather[0]"));
        assert!(matches!(Advisory::from(&malformed), Advisory::ServiceError(_)));
    }

    #[test]
    fn messages_are_distinct() {
        let all = [
            Advisory::MissingCredential,
            Advisory::InvalidCredential,
            Advisory::RateLimited,
            Advisory::ServiceError("boom".into()),
            Advisory::Unknown,
        ];
        let mut messages: Vec<_> = all.iter().map(Advisory::message).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }
}
