//! Natural-language answers.
//!
//! Turns a question like "is AI123 delayed?" into a single sentence by
//! extracting the flight number, resolving it and describing the record.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::extract::extract;
use crate::flight::{FlightIdentifier, FlightRecord};
use crate::resolver::ResolverChain;

/// Reply when the query holds nothing that looks like a flight number.
pub const UNIDENTIFIED_MESSAGE: &str = "Sorry, I couldn't identify a flight number in your query.";

/// JSON envelope for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightResponse {
    /// The answer sentence.
    pub answer: String,
}

impl From<String> for FlightResponse {
    fn from(answer: String) -> Self {
        Self { answer }
    }
}

/// Describe a lookup result in one sentence.
#[must_use]
pub fn format_answer(
    identifier: Option<&FlightIdentifier>,
    record: Option<&FlightRecord>,
) -> String {
    let Some(identifier) = identifier else {
        return UNIDENTIFIED_MESSAGE.to_string();
    };
    let Some(record) = record else {
        return format!("Flight {identifier} not found in database.");
    };

    let mut text = format!("Flight {} ", record.flight_number);
    if let Some(airport) = &record.departure_airport {
        let _ = write!(text, "departs from {airport} ");
    }
    let _ = write!(
        text,
        "at {} to {}. Current status: {}.",
        record.departure_time, record.destination, record.status
    );
    if let Some(aircraft) = &record.aircraft {
        let _ = write!(text, " Aircraft: {aircraft}.");
    }
    text
}

/// Answer a free-form question about a flight.
pub async fn answer_query(resolver: &ResolverChain, text: &str) -> String {
    let identifier = extract(text);
    let record = match &identifier {
        Some(id) => resolver.resolve(id).await,
        None => {
            tracing::debug!(query = text, "No flight number in query");
            None
        }
    };
    format_answer(identifier.as_ref(), record.as_ref())
}
