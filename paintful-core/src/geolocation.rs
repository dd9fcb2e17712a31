//! One-shot device location lookup with categorized failures.

use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

use crate::model::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the platform may hand back. Zero forces a fresh one.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(5),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Raw failure code reported by a platform location service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionErrorCode(pub u16);

impl PositionErrorCode {
    pub const PERMISSION_DENIED: Self = Self(1);
    pub const POSITION_UNAVAILABLE: Self = Self(2);
    pub const TIMEOUT: Self = Self(3);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Geolocation is not supported on this device")]
    Unsupported,

    #[error("Location access was denied. Please allow location access in your settings.")]
    PermissionDenied,

    #[error("Location information is unavailable. Please check your device's location services.")]
    PositionUnavailable,

    #[error("Location request timed out. Please check your connection and try again.")]
    Timeout,

    #[error("An unknown error occurred while getting your location.")]
    Unknown,
}

impl From<PositionErrorCode> for GeolocationError {
    fn from(code: PositionErrorCode) -> Self {
        match code {
            PositionErrorCode::PERMISSION_DENIED => GeolocationError::PermissionDenied,
            PositionErrorCode::POSITION_UNAVAILABLE => GeolocationError::PositionUnavailable,
            PositionErrorCode::TIMEOUT => GeolocationError::Timeout,
            _ => GeolocationError::Unknown,
        }
    }
}

/// Platform location capability.
#[async_trait]
pub trait PositionSource: Send + Sync + Debug {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinates, PositionErrorCode>;
}

/// Source that always reports the same, preconfigured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub Coordinates);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Coordinates, PositionErrorCode> {
        Ok(self.0)
    }
}

#[derive(Debug)]
pub struct Geolocator {
    source: Option<Box<dyn PositionSource>>,
    options: PositionOptions,
}

impl Geolocator {
    /// `None` means the platform has no location capability.
    pub fn new(source: Option<Box<dyn PositionSource>>) -> Self {
        Self { source, options: PositionOptions::default() }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    /// Single-shot lookup. A source slower than `options.timeout` is a
    /// [`GeolocationError::Timeout`] even if it never reports one itself.
    pub async fn current_location(&self) -> Result<Coordinates, GeolocationError> {
        let source = self.source.as_ref().ok_or(GeolocationError::Unsupported)?;

        let lookup = source.current_position(&self.options);
        let result = tokio::time::timeout(self.options.timeout, lookup)
            .await
            .map_err(|_| GeolocationError::Timeout)?
            .map_err(GeolocationError::from);

        if let Err(err) = &result {
            tracing::debug!(error = ?err, "location lookup failed");
        }
        result
    }
}
