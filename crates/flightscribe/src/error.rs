//! Error types for flightscribe.
//!
//! Lookup failures never reach the end user as raw errors; they surface as
//! plain sentences. These types exist so the resolver chain can tell a
//! transient outage apart from a flight that genuinely has no data.

use thiserror::Error;

/// The main error type for flightscribe operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Remote API Errors ===
    /// The HTTP request could not be completed (connect, TLS, timeout, body).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The flight-data API answered with a non-success status.
    #[error("flight data API returned HTTP {status}")]
    UpstreamStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// No API key is configured for the remote source.
    #[error("no API key configured for the flight data API")]
    MissingApiKey,

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

/// A specialized Result type for flightscribe operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error is likely to clear up on its own.
    ///
    /// Connection failures, timeouts, rate limiting and 5xx responses are
    /// transient. Malformed payloads and configuration problems are not.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::UpstreamStatus { status } => *status == 429 || *status >= 500,
            Self::MissingApiKey
            | Self::Json(_)
            | Self::ConfigLoad(_)
            | Self::ConfigValidation { .. } => false,
        }
    }

    /// Check if this error comes from configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigLoad(_) | Self::ConfigValidation { .. } | Self::MissingApiKey
        )
    }
}
