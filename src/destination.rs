//! # Destination Extractor Module
//!
//! ## Purpose
//! Identifies the single most likely travel destination in free-form user
//! text. Ordered cue-phrase templates take precedence because they
//! generalize to unlisted destinations; a fixed city list recovers bare
//! mentions ("Paris next week") when no template matches.
//!
//! ## Input/Output Specification
//! - **Input**: Free-form user text
//! - **Output**: `Some(destination)` (trimmed, never empty) or `None`
//! - **Priority**: First matching template wins; no scoring across templates

use crate::config::DestinationConfig;
use crate::utils::TextUtils;
use regex::Regex;
use std::sync::LazyLock;

/// Cue-phrase templates, in fixed priority order
static TEMPLATES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Destination after a cue phrase, up to a stop word or punctuation
        r"(?i)(?:trip to|visit|going to|travel to|in|at|destination|vacation in) ([a-zA-Z\s',]+?)(?:\s+(?:for|on|in|with|and|to)|[.,?!]|$)",
        // "plan a trip to X" phrasing
        r"(?i)(?:plan|planning|create|designing) (?:a|an|my) (?:trip|vacation|visit|itinerary) (?:to|for|in) ([a-zA-Z\s',]+?)(?:\s+(?:for|on|in|with|and|to)|[.,?!]|$)",
        // Command style: "/add dinner in X"
        r"(?i)/add .+? (?:in|to|at) ([a-zA-Z\s',]+)(?:\s+|$|[.,?!])",
        // "X itinerary" / "X vacation" phrasing
        r"(?i)([a-zA-Z\s',]+?) (?:itinerary|vacation|trip|travel plan)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("destination template is valid"))
    .collect()
});

/// Single leading article stripped from template captures
static RE_LEADING_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:the|a|an) ").unwrap());

/// Extractor over the configured city lists
pub struct DestinationExtractor {
    compound_prefixes: Vec<String>,
    compound_cities: Vec<String>,
    known_cities: Vec<String>,
}

impl DestinationExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &DestinationConfig) -> Self {
        Self {
            compound_prefixes: config.compound_prefixes.clone(),
            compound_cities: config.compound_cities.clone(),
            known_cities: config.known_cities.clone(),
        }
    }

    /// Extract the destination from user input.
    ///
    /// Tries the cue-phrase templates in priority order, then falls back to
    /// the known-city scan. Returns `None` when nothing matches.
    pub fn extract(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        for template in TEMPLATES.iter() {
            if let Some(caps) = template.captures(text) {
                let destination = caps[1].trim();
                let destination = RE_LEADING_ARTICLE.replace(destination, "");
                let destination = destination.trim();
                if !destination.is_empty() {
                    tracing::debug!(
                        "Template match for destination: {}",
                        TextUtils::truncate(destination, 60)
                    );
                    return Some(destination.to_string());
                }
            }
        }

        self.scan_known_cities(text)
    }

    /// Token scan for bare city mentions: compound names first, then
    /// single-word matches, left to right.
    fn scan_known_cities(&self, text: &str) -> Option<String> {
        let words: Vec<&str> = text.split_whitespace().collect();

        for (i, word) in words.iter().enumerate() {
            let folded = TextUtils::capitalize(word);

            if self.compound_prefixes.contains(&folded) {
                if let Some(next) = words.get(i + 1) {
                    let compound = format!("{} {}", folded, TextUtils::capitalize(next));
                    if self.compound_cities.contains(&compound) {
                        return Some(compound);
                    }
                }
            }

            if self.known_cities.contains(&folded) {
                return Some(folded);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DestinationConfig;

    fn extractor() -> DestinationExtractor {
        DestinationExtractor::new(&DestinationConfig::default())
    }

    #[test]
    fn trip_to_phrase() {
        assert_eq!(
            extractor().extract("I want to plan a trip to Paris for next week"),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn visit_phrase_with_compound_city() {
        assert_eq!(
            extractor().extract("Let's visit New York in the fall"),
            Some("New York".to_string())
        );
    }

    #[test]
    fn leading_article_is_stripped() {
        assert_eq!(
            extractor().extract("I'm going to the Netherlands for a month"),
            Some("Netherlands".to_string())
        );
    }

    #[test]
    fn command_style_add() {
        assert_eq!(
            extractor().extract("/add a museum day in Florence"),
            Some("Florence".to_string())
        );
    }

    #[test]
    fn itinerary_suffix_phrase() {
        assert_eq!(
            extractor().extract("Lisbon itinerary please"),
            Some("Lisbon".to_string())
        );
    }

    #[test]
    fn bare_city_mention_via_fallback() {
        assert_eq!(
            extractor().extract("Paris next week maybe?"),
            Some("Paris".to_string())
        );
    }

    #[test]
    fn bare_compound_city_via_fallback() {
        assert_eq!(
            extractor().extract("thinking Hong Kong sometime soon"),
            Some("Hong Kong".to_string())
        );
    }

    #[test]
    fn city_folding_is_case_insensitive() {
        assert_eq!(
            extractor().extract("TOKYO sounds fun"),
            Some("Tokyo".to_string())
        );
    }

    #[test]
    fn no_destination_returns_none() {
        assert_eq!(extractor().extract("hello there"), None);
    }

    #[test]
    fn empty_input_returns_none() {
        assert_eq!(extractor().extract(""), None);
        assert_eq!(extractor().extract("   "), None);
    }
}
