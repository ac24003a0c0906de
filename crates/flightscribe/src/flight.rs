//! Core flight types for flightscribe.
//!
//! This module defines the identifier, status and record types that flow
//! through the resolution pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract;

/// A normalized flight identifier such as `AI123` or `UAE42X`.
///
/// Construction strips every whitespace character and uppercases the rest,
/// so `"ai 123"` and `"AI123"` name the same flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FlightIdentifier(String);

impl FlightIdentifier {
    /// Normalize raw input into an identifier.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase(),
        )
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier has the shape of a flight number.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        extract::is_flight_number(&self.0)
    }

    /// Check if the identifier is empty after normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FlightIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for FlightIdentifier {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<&str> for FlightIdentifier {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<FlightIdentifier> for String {
    fn from(id: FlightIdentifier) -> Self {
        id.0
    }
}

impl AsRef<str> for FlightIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Operational status of a flight.
///
/// A status whose text is exactly one of the display forms below (`"On Time"`,
/// `"Delayed"`, ...) gets its own variant. Any other text, including case or
/// punctuation variants such as `"on-time"`, is kept verbatim in
/// [`FlightStatus::Other`]. Either way [`FlightStatus::as_str`] returns the
/// source's text with surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FlightStatus {
    /// Departing on schedule.
    OnTime,
    /// Running behind schedule.
    Delayed,
    /// Passengers are boarding.
    Boarding,
    /// Scheduled, no live information yet.
    Scheduled,
    /// Already left the gate.
    Departed,
    /// Any other status string.
    Other(String),
}

impl FlightStatus {
    /// Placeholder used when the source reports no status.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Parse a status string reported by a source.
    ///
    /// Blank input becomes [`FlightStatus::UNKNOWN`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "On Time" => Self::OnTime,
            "Delayed" => Self::Delayed,
            "Boarding" => Self::Boarding,
            "Scheduled" => Self::Scheduled,
            "Departed" => Self::Departed,
            "" => Self::Other(Self::UNKNOWN.to_string()),
            other => Self::Other(other.to_string()),
        }
    }

    /// The display form of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OnTime => "On Time",
            Self::Delayed => "Delayed",
            Self::Boarding => "Boarding",
            Self::Scheduled => "Scheduled",
            Self::Departed => "Departed",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FlightStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for FlightStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<FlightStatus> for String {
    fn from(status: FlightStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Schedule and status information for one flight.
///
/// Records are produced fresh for each lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// The flight this record describes.
    pub flight_number: FlightIdentifier,

    /// Scheduled departure, as reported by the source.
    pub departure_time: String,

    /// Name of the departure airport, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_airport: Option<String>,

    /// Name of the arrival airport.
    pub destination: String,

    /// Current status.
    pub status: FlightStatus,

    /// Aircraft model, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
}

impl FlightRecord {
    /// Create a record with only the required fields set.
    #[must_use]
    pub fn new(
        flight_number: FlightIdentifier,
        departure_time: impl Into<String>,
        destination: impl Into<String>,
        status: FlightStatus,
    ) -> Self {
        Self {
            flight_number,
            departure_time: departure_time.into(),
            departure_airport: None,
            destination: destination.into(),
            status,
            aircraft: None,
        }
    }

    /// Set the departure airport.
    #[must_use]
    pub fn with_departure_airport(mut self, airport: impl Into<String>) -> Self {
        self.departure_airport = Some(airport.into());
        self
    }

    /// Set the aircraft model.
    #[must_use]
    pub fn with_aircraft(mut self, aircraft: impl Into<String>) -> Self {
        self.aircraft = Some(aircraft.into());
        self
    }

    /// Check that all required fields carry a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.flight_number.is_empty()
            && !self.departure_time.is_empty()
            && !self.destination.is_empty()
            && !self.status.as_str().is_empty()
    }
}
