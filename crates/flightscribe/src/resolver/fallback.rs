//! Compiled-in fallback table.
//!
//! Last-resort data used when the live API is unreachable or has nothing
//! for a flight. Built once on first use and never modified.

use std::collections::HashMap;
use std::sync::OnceLock;

use async_trait::async_trait;

use super::FlightSource;
use crate::error::Result;
use crate::flight::{FlightIdentifier, FlightRecord, FlightStatus};

/// The process-wide fallback table, keyed by normalized identifier.
#[must_use]
pub fn static_table() -> &'static HashMap<FlightIdentifier, FlightRecord> {
    static TABLE: OnceLock<HashMap<FlightIdentifier, FlightRecord>> = OnceLock::new();
    TABLE.get_or_init(|| {
        builtin_records()
            .into_iter()
            .map(|record| (record.flight_number.clone(), record))
            .collect()
    })
}

fn builtin_records() -> Vec<FlightRecord> {
    vec![
        FlightRecord::new("AI123".into(), "08:00 AM", "Delhi", FlightStatus::Delayed),
        FlightRecord::new("BA456".into(), "10:15 AM", "London", FlightStatus::OnTime),
        FlightRecord::new("DL789".into(), "02:30 PM", "New York", FlightStatus::Boarding),
        FlightRecord::new("EK101".into(), "11:45 PM", "Dubai", FlightStatus::Scheduled),
        FlightRecord::new("EI525".into(), "10:30 AM", "Dublin", FlightStatus::OnTime),
        FlightRecord::new("UAE42X".into(), "12:46 PM", "Dubai", FlightStatus::Departed)
            .with_departure_airport("Dubai International"),
        FlightRecord::new(
            "DL47".into(),
            "10:05 AM",
            "New York John F Kennedy",
            FlightStatus::Departed,
        )
        .with_departure_airport("London Heathrow")
        .with_aircraft("Boeing 777-200"),
    ]
}

/// Flight source backed by [`static_table`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTableSource;

impl StaticTableSource {
    /// Create a new static table source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Look up a flight synchronously.
    #[must_use]
    pub fn get(&self, identifier: &FlightIdentifier) -> Option<FlightRecord> {
        static_table().get(identifier).cloned()
    }

    /// All records in the table, sorted by flight number.
    #[must_use]
    pub fn records(&self) -> Vec<&'static FlightRecord> {
        let mut records: Vec<_> = static_table().values().collect();
        records.sort_by(|a, b| a.flight_number.cmp(&b.flight_number));
        records
    }
}

#[async_trait]
impl FlightSource for StaticTableSource {
    fn name(&self) -> &'static str {
        "static_table"
    }

    async fn lookup(&self, identifier: &FlightIdentifier) -> Result<Option<FlightRecord>> {
        Ok(self.get(identifier))
    }
}
