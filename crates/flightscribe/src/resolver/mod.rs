//! Flight resolution.
//!
//! A [`ResolverChain`] holds an ordered list of [`FlightSource`]s and asks
//! each in turn; the first record wins. The default chain is the live
//! AeroDataBox API followed by the compiled-in fallback table.
//!
//! Every source distinguishes "no data" (`Ok(None)`) from "could not
//! answer" (`Err`). The chain keeps that distinction in [`Resolution`] so a
//! caller can tell an outage from a flight that genuinely does not exist,
//! while [`ResolverChain::resolve`] collapses both into `None`.
//!
//! # Example
//!
//! ```
//! use flightscribe::resolver::{ResolverChain, StaticTableSource};
//! use flightscribe::FlightIdentifier;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let chain = ResolverChain::new().with_source(StaticTableSource::new());
//! let record = chain.resolve(&FlightIdentifier::new("ai123")).await.unwrap();
//! assert_eq!(record.destination, "Delhi");
//! # }
//! ```

mod fallback;
mod remote;

use async_trait::async_trait;
use tracing::{debug, info, warn};

pub use fallback::{static_table, StaticTableSource};
pub use remote::{format_local_time, ApiFlight, RemoteSource};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::{FlightIdentifier, FlightRecord};

/// A strategy for looking up flight records.
#[async_trait]
pub trait FlightSource: Send + Sync + std::fmt::Debug {
    /// The name of this source (for logging).
    fn name(&self) -> &'static str;

    /// Look up a flight.
    ///
    /// Returns `Ok(None)` when the source answered but has no data for the
    /// flight.
    ///
    /// # Errors
    ///
    /// Returns an error when the source could not answer at all.
    async fn lookup(&self, identifier: &FlightIdentifier) -> Result<Option<FlightRecord>>;
}

/// A source that failed while resolving a flight.
#[derive(Debug)]
pub struct SourceFailure {
    /// Name of the failing source.
    pub source: &'static str,
    /// What went wrong.
    pub error: Error,
}

/// Detailed outcome of running the chain for one flight.
#[derive(Debug)]
pub enum Resolution {
    /// A source produced a record.
    Found {
        /// The record.
        record: FlightRecord,
        /// Name of the source that produced it.
        source: &'static str,
        /// Sources tried earlier that failed.
        failures: Vec<SourceFailure>,
    },

    /// Every source answered and none had the flight.
    NotFound,

    /// No record, and at least one source could not answer.
    Unavailable {
        /// The failures, in chain order.
        failures: Vec<SourceFailure>,
    },
}

impl Resolution {
    /// The record, if one was found.
    #[must_use]
    pub fn record(&self) -> Option<&FlightRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::NotFound | Self::Unavailable { .. } => None,
        }
    }

    /// Consume the resolution, keeping only the record.
    #[must_use]
    pub fn into_record(self) -> Option<FlightRecord> {
        match self {
            Self::Found { record, .. } => Some(record),
            Self::NotFound | Self::Unavailable { .. } => None,
        }
    }

    /// Check if a retry might produce a different answer.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable { failures } => failures.iter().any(|f| f.error.is_transient()),
            Self::Found { .. } | Self::NotFound => false,
        }
    }
}

/// Ordered list of flight sources.
#[derive(Debug, Default)]
pub struct ResolverChain {
    sources: Vec<Box<dyn FlightSource>>,
}

impl ResolverChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source to the end of the chain.
    #[must_use]
    pub fn with_source(mut self, source: impl FlightSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Build the standard chain from configuration.
    ///
    /// The remote source is skipped, with a warning, when it is enabled but
    /// has no usable API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source is misconfigured in a way other
    /// than a missing key.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with(config, false)
    }

    /// Build the chain from configuration, optionally without the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote source is misconfigured in a way other
    /// than a missing key.
    pub fn from_config_with(config: &Config, offline: bool) -> Result<Self> {
        let mut chain = Self::new();

        if config.api.enabled && !offline {
            match RemoteSource::from_config(&config.api) {
                Ok(remote) => chain = chain.with_source(remote),
                Err(Error::MissingApiKey) => {
                    warn!("No API key configured; skipping live flight data");
                }
                Err(e) => return Err(e),
            }
        }

        if config.fallback.enabled {
            chain = chain.with_source(StaticTableSource::new());
        }

        Ok(chain)
    }

    /// Names of the sources, in order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Check if the chain has no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve a flight, collapsing failures into `None`.
    pub async fn resolve(&self, identifier: &FlightIdentifier) -> Option<FlightRecord> {
        self.resolve_detailed(identifier).await.into_record()
    }

    /// Resolve a flight, keeping track of which sources failed.
    pub async fn resolve_detailed(&self, identifier: &FlightIdentifier) -> Resolution {
        debug!(flight = %identifier, sources = ?self.source_names(), "Resolving flight");
        let mut failures = Vec::new();

        for source in &self.sources {
            match source.lookup(identifier).await {
                Ok(Some(record)) => {
                    if failures.is_empty() {
                        debug!(flight = %identifier, source = source.name(), "Flight resolved");
                    } else {
                        info!(
                            flight = %identifier,
                            source = source.name(),
                            failed = failures.len(),
                            "Flight resolved from fallback source"
                        );
                    }
                    return Resolution::Found {
                        record,
                        source: source.name(),
                        failures,
                    };
                }
                Ok(None) => {
                    debug!(flight = %identifier, source = source.name(), "No data from source");
                }
                Err(error) => {
                    warn!(
                        flight = %identifier,
                        source = source.name(),
                        transient = error.is_transient(),
                        error = %error,
                        "Flight source failed"
                    );
                    failures.push(SourceFailure {
                        source: source.name(),
                        error,
                    });
                }
            }
        }

        if failures.is_empty() {
            Resolution::NotFound
        } else {
            Resolution::Unavailable { failures }
        }
    }
}
