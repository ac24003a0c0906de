//! AeroDataBox flight source.
//!
//! Issues one `GET /flights/number/{id}` per lookup and maps the first
//! returned flight into a [`FlightRecord`].

use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::FlightSource;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::flight::{FlightIdentifier, FlightRecord, FlightStatus};

/// Placeholder for fields the API did not report.
const UNKNOWN: &str = "Unknown";

/// Flight source backed by the AeroDataBox REST API.
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteSource {
    /// Build a remote source from API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when no key is configured, and a
    /// validation error when the key or host cannot be used as a header or
    /// the base URL cannot take path segments.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                Error::config_validation(format!(
                    "api.base_url is not a usable base URL ({})",
                    config.base_url
                ))
            })?;

        let mut key_header = HeaderValue::from_str(api_key)
            .map_err(|_| Error::config_validation("api.api_key is not a valid header value"))?;
        key_header.set_sensitive(true);
        let host_header = HeaderValue::from_str(&config.host)
            .map_err(|_| Error::config_validation("api.host is not a valid header value"))?;

        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-key", key_header);
        headers.insert("x-rapidapi-host", host_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The request URL for a flight.
    ///
    /// The identifier always becomes a single percent-encoded path segment
    /// under `/flights/number/`, so `/`, `?` and `#` in it cannot change the
    /// route or the query.
    #[must_use]
    pub fn flight_url(&self, identifier: &FlightIdentifier) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["flights", "number", identifier.as_str()]);
        }
        url.set_query(Some("withAircraftImage=false&withLocation=false"));
        url.set_fragment(None);
        url
    }
}

#[async_trait]
impl FlightSource for RemoteSource {
    fn name(&self) -> &'static str {
        "aerodatabox"
    }

    async fn lookup(&self, identifier: &FlightIdentifier) -> Result<Option<FlightRecord>> {
        let url = self.flight_url(identifier);
        debug!(%url, "Requesting flight data");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        // AeroDataBox answers 204 when it has nothing for a flight
        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            debug!(status = status.as_u16(), "No flight data available");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let flights: Vec<ApiFlight> = serde_json::from_slice(&body)?;
        debug!(count = flights.len(), "Flight data received");
        Ok(flights
            .into_iter()
            .next()
            .map(|flight| flight.into_record(identifier.clone())))
    }
}

/// One entry of the `/flights/number` response.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFlight {
    #[serde(default)]
    departure: Option<ApiMovement>,
    #[serde(default)]
    arrival: Option<ApiMovement>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    aircraft: Option<ApiAircraft>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMovement {
    #[serde(default)]
    airport: Option<ApiAirport>,
    #[serde(default)]
    scheduled_time: Option<ScheduledTime>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiAirport {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiAircraft {
    #[serde(default)]
    model: Option<String>,
}

/// `scheduledTime` is an object with `utc`/`local` in current API versions
/// and a bare string in older ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScheduledTime {
    Bare(String),
    Zoned {
        #[serde(default)]
        local: Option<String>,
    },
    Unrecognized(serde::de::IgnoredAny),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ApiFlight {
    /// Map the API entry into a record for `identifier`.
    #[must_use]
    pub fn into_record(self, identifier: FlightIdentifier) -> FlightRecord {
        let (departure_airport, scheduled) = match self.departure {
            Some(dep) => (dep.airport.and_then(|a| a.name), dep.scheduled_time),
            None => (None, None),
        };

        let raw_time = match scheduled {
            Some(ScheduledTime::Bare(s)) => non_empty(Some(s)),
            Some(ScheduledTime::Zoned { local }) => non_empty(local),
            Some(ScheduledTime::Unrecognized(_)) | None => None,
        };
        let departure_time = raw_time.map_or_else(|| UNKNOWN.to_string(), |t| format_local_time(&t));

        let destination = non_empty(self.arrival.and_then(|a| a.airport).and_then(|a| a.name))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let status = non_empty(self.status).map_or_else(
            || FlightStatus::Other(FlightStatus::UNKNOWN.to_string()),
            |s| FlightStatus::parse(&s),
        );

        FlightRecord {
            flight_number: identifier,
            departure_time,
            departure_airport: non_empty(departure_airport),
            destination,
            status,
            aircraft: non_empty(self.aircraft.and_then(|a| a.model)),
        }
    }
}

fn local_time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})[T\s]([0-9]{2}:[0-9]{2}).*")
            .expect("Invalid regex pattern")
    })
}

/// Reduce a timestamp to `YYYY-MM-DD HH:MM`.
///
/// Seconds, fractions and the UTC offset are dropped. Text that holds no
/// date-time is returned unchanged.
#[must_use]
pub fn format_local_time(raw: &str) -> String {
    local_time_regex().replacen(raw, 1, "$1 $2").into_owned()
}
