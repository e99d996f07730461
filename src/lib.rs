//! # Travel Extraction
//!
//! Text-extraction core for a travel planning assistant: reads destinations,
//! personality preferences, and dates out of free-form user requests, and
//! reads day structure and place names back out of the generated itinerary
//! text.
//!
//! ## Architecture
//!
//! ```text
//! user text ──► destination ─┐
//!          ──► personality ──┼─► prompt (TravelRequest, search query,
//!          ──► dates ────────┘            itinerary prompt)
//!
//! itinerary ──► itinerary (per-day blocks)
//!           ──► places    (matcher battery + filter + dedup)
//! ```
//!
//! Every extractor is configuration-driven through [`Config`] and fails
//! soft: unrecognized input yields `None`, an empty list, or a default
//! rather than an error.
//!
//! ## Quick Start
//!
//! ```
//! use travel_extraction::{extract_destination, detect_personality_prefs};
//!
//! let text = "I'm a foodie planning a trip to Barcelona";
//! assert_eq!(extract_destination(text), Some("Barcelona".to_string()));
//! assert_eq!(detect_personality_prefs(text), vec!["Foodie".to_string()]);
//! ```

pub mod config;
pub mod dates;
pub mod destination;
pub mod errors;
pub mod itinerary;
pub mod personality;
pub mod places;
pub mod prompt;
pub mod utils;

pub use config::{Config, DestinationConfig, PersonalityConfig, PlaceConfig};
pub use errors::{ExtractError, Result};
pub use prompt::TravelRequest;

use chrono::NaiveDate;
use destination::DestinationExtractor;
use personality::PersonalityDetector;
use places::PlaceExtractor;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static DEFAULT_CONFIG: LazyLock<Config> = LazyLock::new(Config::default);

static DEFAULT_DESTINATION: LazyLock<DestinationExtractor> =
    LazyLock::new(|| DestinationExtractor::new(&DEFAULT_CONFIG.destination));

static DEFAULT_PERSONALITY: LazyLock<PersonalityDetector> =
    LazyLock::new(|| PersonalityDetector::new(&DEFAULT_CONFIG.personality));

static DEFAULT_PLACES: LazyLock<PlaceExtractor> =
    LazyLock::new(|| PlaceExtractor::new(&DEFAULT_CONFIG.places));

/// Extract the travel destination from user text, using the default
/// configuration. See [`destination::DestinationExtractor`].
pub fn extract_destination(text: &str) -> Option<String> {
    DEFAULT_DESTINATION.extract(text)
}

/// Detect personality preference tags in user text, using the default
/// configuration. Never returns an empty list.
pub fn detect_personality_prefs(text: &str) -> Vec<String> {
    DEFAULT_PERSONALITY.detect(text)
}

/// Resolve a natural-language date reference anchored on today.
pub fn parse_natural_date(text: &str) -> Option<NaiveDate> {
    dates::parse_natural_date(text)
}

/// Split an itinerary document into per-day blocks keyed by day number.
pub fn parse_itinerary_to_days(text: &str) -> BTreeMap<u32, String> {
    itinerary::parse_itinerary_to_days(text)
}

/// Extract place names from itinerary text, using the default
/// configuration. Result is de-duplicated, first-seen order.
pub fn extract_places_from_itinerary(text: &str) -> Vec<String> {
    DEFAULT_PLACES.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_end_to_end() {
        let user = "I'm adventurous, planning a trip to Tokyo tomorrow";
        let request = TravelRequest::from_text(user, &DEFAULT_CONFIG).unwrap();
        assert_eq!(request.destination, "Tokyo");
        assert_eq!(request.personalities, vec!["Adventurous"]);
        assert!(request.travel_date.is_some());

        let itinerary = "\
# Day 1
- Morning: Visit the Senso-ji Temple (4.6/5)
- Evening: Eat at Ichiran Ramen

# Day 2
- Morning: Explore Meiji Shrine";

        let days = parse_itinerary_to_days(itinerary);
        assert_eq!(days.len(), 2);

        let places = extract_places_from_itinerary(&days[&1]);
        assert!(places.contains(&"Senso-ji Temple".to_string()));
        assert!(places.contains(&"Ichiran Ramen".to_string()));
    }

    #[test]
    fn convenience_functions_use_defaults() {
        assert_eq!(extract_destination(""), None);
        assert_eq!(detect_personality_prefs("nothing"), vec!["Relaxed"]);
        assert_eq!(parse_natural_date("nothing"), None);
    }
}
