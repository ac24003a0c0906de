//! Flight number extraction from free-form text.
//!
//! Recognizes two shapes of flight number, tried in this order at every
//! position of the input:
//!
//! - two letters followed by one to four digits (`AI123`, `DL47`)
//! - three letters, one to three digits and a trailing letter (`UAE42X`)
//!
//! Matching is case-insensitive; the result is always uppercase.
//!
//! ```
//! use flightscribe::extract::extract;
//!
//! let id = extract("what's the status of ai123?").unwrap();
//! assert_eq!(id.as_str(), "AI123");
//! assert!(extract("no flight here").is_none());
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::flight::FlightIdentifier;

/// Unanchored pattern for flight numbers embedded in text.
const FLIGHT_NUMBER_PATTERN: &str = r"[A-Za-z]{2}[0-9]{1,4}|[A-Za-z]{3}[0-9]{1,3}[A-Za-z]";

fn embedded_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FLIGHT_NUMBER_PATTERN).expect("Invalid regex pattern"))
}

fn whole_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^(?:{FLIGHT_NUMBER_PATTERN})$")).expect("Invalid regex pattern")
    })
}

/// Find the first flight number in `text`.
///
/// Returns `None` when nothing in the text looks like a flight number.
#[must_use]
pub fn extract(text: &str) -> Option<FlightIdentifier> {
    let found = embedded_regex().find(text)?;
    tracing::trace!(matched = found.as_str(), start = found.start(), "Flight number found");
    Some(FlightIdentifier::new(found.as_str()))
}

/// Check whether `token` is exactly one flight number and nothing else.
#[must_use]
pub fn is_flight_number(token: &str) -> bool {
    whole_token_regex().is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(text: &str) -> Option<String> {
        extract(text).map(String::from)
    }

    #[test]
    fn test_extract_embedded() {
        assert_eq!(extracted("flight AI123 status?"), Some("AI123".to_string()));
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(extracted("no flight here"), None);
        assert_eq!(extracted(""), None);
        assert_eq!(extracted("123 456"), None);
    }

    #[test]
    fn test_extract_three_letter_form() {
        assert_eq!(extracted("uae42x"), Some("UAE42X".to_string()));
        assert_eq!(
            extracted("Is UAE42X on time?"),
            Some("UAE42X".to_string())
        );
    }

    #[test]
    fn test_extract_lowercase_is_normalized() {
        assert_eq!(extracted("where is dl47 going"), Some("DL47".to_string()));
    }

    #[test]
    fn test_extract_first_match_wins() {
        assert_eq!(
            extracted("compare BA456 with EK101"),
            Some("BA456".to_string())
        );
    }

    #[test]
    fn test_extract_caps_digit_run() {
        // Two-letter form takes at most four digits
        assert_eq!(extracted("AI1234567"), Some("AI1234".to_string()));
    }

    #[test]
    fn test_extract_two_letter_form_preferred() {
        // "EK101X" matches the two-letter alternative before the three-letter one is tried
        assert_eq!(extracted("EK101X"), Some("EK101".to_string()));
    }

    #[test]
    fn test_is_flight_number() {
        assert!(is_flight_number("AI123"));
        assert!(is_flight_number("ai1"));
        assert!(is_flight_number("UAE42X"));
        assert!(!is_flight_number("AI123 "));
        assert!(!is_flight_number("flight AI123"));
        assert!(!is_flight_number("AIR12345"));
    }
}
