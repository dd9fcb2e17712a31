use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::Arc};

use crate::{
    advisory::AdvisorySink,
    geolocation::{FixedPosition, Geolocator, PositionSource},
    model::Coordinates,
    provider::{
        OpenWeatherProvider,
        openweather::{DEFAULT_BASE_URL, is_usable_api_key},
    },
    sample::DEFAULT_LOCATION,
    service::{ServiceConfig, WeatherService},
};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHERMAP_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_location = "Lisbon"
///
/// [home]
/// latitude = 38.72
/// longitude = -9.14
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_location: String,
    pub base_url: String,
    /// Position reported by `paintful here`.
    pub home: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_location: DEFAULT_LOCATION.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            home: None,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults on first run), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_stored()?;
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Load only what is on disk, without environment overrides.
    pub fn load_stored() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "paintful", "paintful")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().map(str::trim).is_some_and(is_usable_api_key)
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_location: self.default_location.clone(),
            ..ServiceConfig::default()
        }
    }

    /// Build a service talking to OpenWeather with this configuration.
    pub fn weather_service(&self, advisories: Arc<dyn AdvisorySink>) -> WeatherService {
        let provider = OpenWeatherProvider::with_base_url(self.api_key.clone(), &self.base_url);
        WeatherService::with_advisories(Box::new(provider), self.service_config(), advisories)
    }

    /// Location lookup backed by `home`; unsupported when none is stored.
    pub fn geolocator(&self) -> Geolocator {
        let source = self
            .home
            .map(|c| Box::new(FixedPosition(c)) as Box<dyn PositionSource>);
        Geolocator::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geolocation::GeolocationError;

    #[test]
    fn defaults_point_at_new_york_and_openweather() {
        let cfg = Config::default();
        assert_eq!(cfg.default_location, "New York");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg = Config::from_toml(
            r#"
            api_key = "KEY"

            [home]
            latitude = 38.72
            longitude = -9.14
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.default_location, "New York");
        assert_eq!(cfg.home, Some(Coordinates::new(38.72, -9.14)));
        assert!(cfg.has_api_key());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("api_key = [").is_err());
    }

    #[test]
    fn toml_roundtrip_keeps_fields() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            default_location: "Lisbon".into(),
            ..Config::default()
        };

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back = Config::from_toml(&text).unwrap();
        assert_eq!(back.api_key.as_deref(), Some("KEY"));
        assert_eq!(back.default_location, "Lisbon");
    }

    #[test]
    fn env_overrides_stored_key() {
        let mut cfg = Config { api_key: Some("FILE".into()), ..Config::default() };
        cfg.apply_env(|k| (k == API_KEY_ENV).then(|| "ENV".to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("ENV"));

        cfg.apply_env(|_| Some("  ".to_string()));
        assert_eq!(cfg.api_key.as_deref(), Some("ENV"));
    }

    #[test]
    fn placeholder_key_does_not_count() {
        let cfg = Config {
            api_key: Some("your-openweathermap-api-key".into()),
            ..Config::default()
        };
        assert!(!cfg.has_api_key());
    }

    #[test]
    fn service_config_carries_default_location() {
        let cfg = Config { default_location: "Lisbon".into(), ..Config::default() };
        assert_eq!(cfg.service_config().default_location, "Lisbon");
    }

    #[tokio::test]
    async fn geolocator_without_home_is_unsupported() {
        let cfg = Config::default();
        assert_eq!(cfg.geolocator().current_location().await, Err(GeolocationError::Unsupported));

        let cfg = Config { home: Some(Coordinates::new(1.0, 2.0)), ..Config::default() };
        assert_eq!(cfg.geolocator().current_location().await, Ok(Coordinates::new(1.0, 2.0)));
    }
}
