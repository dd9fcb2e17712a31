use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use inquire::{Confirm, CustomType, Password, PasswordDisplayMode, Text};
use paintful_core::{Config, Coordinates, LocationQuery, WeatherService, WeatherSnapshot};

use crate::render::{self, StderrAdvisories};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "paintful",
    version,
    about = "Current conditions and a five-day forecast"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print the snapshot as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Fail on provider errors instead of showing sample data.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, default location and home position.
    Configure,

    /// Show weather for a location name or explicit coordinates.
    Show {
        /// Location name; the configured default when omitted.
        #[arg(conflicts_with = "lat")]
        location: Option<String>,

        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show weather for the device's current position.
    Here {
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, lat, lon, output } => {
                let config = Config::load()?;
                let service = config.weather_service(Arc::new(StderrAdvisories));

                let query = match (lat, lon) {
                    (Some(lat), Some(lon)) => LocationQuery::Coordinates(Coordinates::new(lat, lon)),
                    _ => LocationQuery::Name(
                        location.unwrap_or_else(|| service.config().default_location.clone()),
                    ),
                };

                let snapshot = fetch(&service, query, output.strict).await?;
                render::print(&snapshot, output.json)
            }
            Command::Here { output } => {
                let config = Config::load()?;
                let coords = config
                    .geolocator()
                    .current_location()
                    .await
                    .map_err(|err| anyhow!(render::geolocation_message(err)))?;

                let service = config.weather_service(Arc::new(StderrAdvisories));
                let snapshot =
                    fetch(&service, LocationQuery::Coordinates(coords), output.strict).await?;
                render::print(&snapshot, output.json)
            }
        }
    }
}

async fn fetch(
    service: &WeatherService,
    query: LocationQuery,
    strict: bool,
) -> Result<WeatherSnapshot> {
    tracing::debug!(%query, strict, "fetching weather");

    if strict {
        return service.try_fetch(&query).await.map_err(|err| {
            tracing::debug!(%query, error = %err, "strict fetch failed");
            anyhow::Error::new(err).context(format!("Failed to fetch weather for {query}"))
        });
    }

    Ok(match query {
        LocationQuery::Name(name) => service.fetch_by_location_name(Some(&name)).await,
        LocationQuery::Coordinates(coords) => service.fetch_by_coordinates(coords).await,
    })
}

fn configure() -> Result<()> {
    let mut config = Config::load_stored()?;

    let api_key = Password::new("OpenWeatherMap API key (blank keeps the current one):")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let location = Text::new("Default location:")
        .with_default(&config.default_location)
        .prompt()?;
    config.default_location = location;

    let store_home = Confirm::new("Store a home position for `paintful here`?")
        .with_default(config.home.is_some())
        .prompt()?;
    config.home = if store_home {
        let latitude = CustomType::<f64>::new("Latitude:")
            .with_error_message("Please enter a number, e.g. 40.71")
            .prompt()?;
        let longitude = CustomType::<f64>::new("Longitude:")
            .with_error_message("Please enter a number, e.g. -74.01")
            .prompt()?;
        Some(Coordinates::new(latitude, longitude))
    } else {
        None
    };

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    if !config.has_api_key() {
        println!("No API key stored; sample data will be shown until one is configured.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["paintful", "show", "--lat", "40.7", "--lon", "-74.0"])
            .expect("should parse");
        match cli.command {
            Command::Show { location, lat, lon, .. } => {
                assert_eq!(location, None);
                assert_eq!(lat, Some(40.7));
                assert_eq!(lon, Some(-74.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn show_rejects_location_with_coordinates() {
        let res =
            Cli::try_parse_from(["paintful", "show", "Paris", "--lat", "1", "--lon", "2"]);
        assert!(res.is_err());
    }

    #[test]
    fn lat_requires_lon() {
        assert!(Cli::try_parse_from(["paintful", "show", "--lat", "1"]).is_err());
    }

    #[tokio::test]
    async fn strict_fetch_reports_the_query_and_lenient_fetch_falls_back() {
        let service = Config::default().weather_service(Arc::new(StderrAdvisories));
        let query = LocationQuery::Name("Paris".into());

        let err = fetch(&service, query.clone(), true).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch weather for Paris");
        assert!(format!("{err:#}").contains("API key is not configured"));

        let snap = fetch(&service, query, false).await.unwrap();
        assert_eq!(snap, paintful_core::sample::sample_snapshot());
    }

    #[test]
    fn here_takes_output_flags() {
        let cli = Cli::try_parse_from(["paintful", "here", "--json", "--strict"]).unwrap();
        match cli.command {
            Command::Here { output } => assert!(output.json && output.strict),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
