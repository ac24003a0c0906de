//! `flightscribe` - Flight status lookup with a static fallback table
//!
//! This library resolves free-form questions about flights: it extracts a
//! flight number from text, looks the flight up in the AeroDataBox API,
//! falls back to a compiled-in table when the API has nothing, and phrases
//! the result as a sentence.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod answer;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod flight;
pub mod logging;
pub mod resolver;

pub use answer::{answer_query, format_answer, FlightResponse};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::extract;
pub use flight::{FlightIdentifier, FlightRecord, FlightStatus};
pub use logging::init_logging;
pub use resolver::{FlightSource, Resolution, ResolverChain};
