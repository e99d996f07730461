//! # Place Extractor Module
//!
//! ## Purpose
//! Extracts point-of-interest names from itinerary text by running a battery
//! of independent regex families over the input and funneling every capture
//! through a shared filter and de-duplication stage.
//!
//! ## Input/Output Specification
//! - **Input**: A per-day block or a whole itinerary document
//! - **Output**: Ordered, de-duplicated list of place names
//! - **Filter**: trailing `.,;:` stripped, length must exceed the configured
//!   minimum, stoplist words rejected case-insensitively
//!
//! ## Key Features
//! - Named matcher units, each independently testable via [`MatcherOutcome`]
//! - A pattern failure in one family is reported as a diagnostic and never
//!   suppresses the other families
//! - The quoted/emphasized span families run twice (main battery plus a
//!   dedicated quote pass); the resulting overlap collapses in de-duplication
//!
//! The pattern families over-generate candidates from many structural cues
//! (verbs, suffix nouns, emphasis, ratings) because the itinerary layout is
//! only loosely guaranteed by the generation prompt; the filter stage keeps
//! the result usable. Candidate spans are capitalized-word runs (with
//! of/de/la connectors) so multi-word names survive intact.

use crate::config::PlaceConfig;
use crate::errors::{ExtractError, Result};
use crate::utils::{TextUtils, Timer};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A capitalized-word run: "Eiffel Tower", "Museum of Modern Art"
const NAME: &str = r"[A-Z][\w'&-]*(?:[ \t]+(?:of|de|la|du|des)[ \t]+[A-Z][\w'&-]*|[ \t]+[A-Z][\w'&-]*)*";

/// Diagnostic for a pattern that failed to compile or apply
#[derive(Debug, Clone)]
pub struct MatcherFailure {
    /// The offending pattern source
    pub pattern: String,
    /// Compiler/matcher diagnostic text
    pub details: String,
}

/// Result of running one matcher family over a text
#[derive(Debug, Clone)]
pub struct MatcherOutcome {
    /// Family name
    pub matcher: &'static str,
    /// Raw candidate spans, unfiltered, in match order
    pub candidates: Vec<String>,
    /// Per-pattern failures; observable, never fatal
    pub failures: Vec<MatcherFailure>,
}

impl MatcherOutcome {
    /// This family's pattern failures as typed errors.
    pub fn errors(&self) -> Vec<ExtractError> {
        self.failures
            .iter()
            .map(|f| ExtractError::Pattern {
                matcher: self.matcher.to_string(),
                pattern: f.pattern.clone(),
                details: f.details.clone(),
            })
            .collect()
    }
}

/// One named regex family
struct PlaceMatcher {
    name: &'static str,
    patterns: Vec<(String, std::result::Result<Regex, regex::Error>)>,
}

impl PlaceMatcher {
    fn new(name: &'static str, patterns: Vec<String>) -> Self {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let compiled = Regex::new(&p);
                (p, compiled)
            })
            .collect();
        Self { name, patterns }
    }

    /// Run every pattern of this family, accumulating capture-group-1 spans.
    fn run(&self, text: &str) -> MatcherOutcome {
        let mut outcome = MatcherOutcome {
            matcher: self.name,
            candidates: Vec::new(),
            failures: Vec::new(),
        };

        for (pattern, compiled) in &self.patterns {
            match compiled {
                Ok(regex) => {
                    for caps in regex.captures_iter(text) {
                        if let Some(span) = caps.get(1) {
                            outcome.candidates.push(span.as_str().to_string());
                        }
                    }
                }
                Err(e) => outcome.failures.push(MatcherFailure {
                    pattern: pattern.clone(),
                    details: e.to_string(),
                }),
            }
        }

        outcome
    }
}

/// The full battery, in fixed order. Compiled once.
static MATCHERS: LazyLock<Vec<PlaceMatcher>> = LazyLock::new(|| {
    vec![
        PlaceMatcher::new(
            "action-verbs",
            vec![format!(
                r"(?:Visit|Explore|Check out|Go to|See|Head to|Stop by|Enjoy|Experience)(?:[ \t]+(?:the|a|an))?[ \t]+({NAME})"
            )],
        ),
        PlaceMatcher::new(
            "ratings",
            vec![format!(r"({NAME})[ \t]*\([ \t]*[\d.]+[ \t]*/[ \t]*[\d.]+[ \t]*\)")],
        ),
        PlaceMatcher::new(
            "landmarks",
            vec![format!(
                r"((?:[A-Z][\w'&-]*[ \t]+)+(?:Museum|Temple|Cathedral|Church|Palace|Castle|Park|Garden|Monument|Square|Tower|Bridge|Market|Restaurant|Café|Bistro|Hotel|Resort))"
            )],
        ),
        PlaceMatcher::new(
            "time-prefixed",
            vec![format!(
                r"\d{{1,2}}(?::\d{{2}})?[ \t]*(?:AM|PM|am|pm):[ \t]*({NAME})"
            )],
        ),
        PlaceMatcher::new(
            "emphasis",
            vec![
                format!("\"({NAME})\""),
                format!(r"\*\*({NAME})\*\*"),
            ],
        ),
        PlaceMatcher::new(
            "at-the",
            vec![format!(r"(?:at|to|in)[ \t]+the[ \t]+({NAME})")],
        ),
        PlaceMatcher::new(
            "rating-suffix",
            vec![format!(
                r"({NAME})(?:[ \t]*-[ \t]*|[ \t]*\([ \t]*)(?:\d(?:\.\d)?[ \t]*/[ \t]*\d|\d(?:\.\d)?[ \t]*stars?|\d(?:\.\d)?[ \t]*★|\d(?:\.\d)?\b)"
            )],
        ),
        PlaceMatcher::new(
            "lodging",
            vec![
                format!(r"((?:[A-Z][\w'&-]*[ \t]+)+(?:Hotel|Resort|Inn|Suites|B&B))"),
                format!(r"Stay at[ \t]+(?:the[ \t]+)?({NAME})"),
            ],
        ),
        PlaceMatcher::new(
            "dining",
            vec![
                format!(r"((?:[A-Z][\w'&-]*[ \t]+)+(?:Restaurant|Café|Bistro|Eatery|Diner))"),
                format!(r"Eat at[ \t]+(?:the[ \t]+)?({NAME})"),
            ],
        ),
        // Dedicated quote pass: re-captures spans the emphasis family may
        // already have seen; de-duplication collapses the overlap.
        PlaceMatcher::new(
            "quotes",
            vec![
                "\"([^\"\n]+)\"".to_string(),
                r"'([^'\n]+)'".to_string(),
                r"\*\*([^*\n]+)\*\*".to_string(),
                r"\*([^*\n]+)\*".to_string(),
            ],
        ),
    ]
});

/// Run the whole battery and return one outcome per family, unfiltered.
pub fn run_matchers(text: &str) -> Vec<MatcherOutcome> {
    MATCHERS.iter().map(|m| m.run(text)).collect()
}

/// Check that every built-in pattern compiles, reporting the first failure.
pub fn verify_patterns() -> Result<()> {
    for outcome in run_matchers("") {
        if let Some(err) = outcome.errors().into_iter().next() {
            return Err(err);
        }
    }
    Ok(())
}

/// Extractor applying the configured filter over the matcher battery
pub struct PlaceExtractor {
    stoplist: HashSet<String>,
    min_candidate_len: usize,
}

impl PlaceExtractor {
    /// Create an extractor from configuration
    pub fn new(config: &PlaceConfig) -> Self {
        Self {
            stoplist: config.stoplist.iter().map(|w| w.to_lowercase()).collect(),
            min_candidate_len: config.min_candidate_len,
        }
    }

    /// Extract place names from itinerary text.
    ///
    /// Runs every matcher family, logs (but never propagates) family
    /// failures, then filters and de-duplicates preserving first-seen order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let timer = Timer::new("place-extraction");
        let normalized = TextUtils::normalize_quotes(text);

        let mut places: Vec<String> = Vec::new();
        for outcome in run_matchers(&normalized) {
            for failure in &outcome.failures {
                tracing::warn!(
                    "Matcher '{}' pattern failed: {}: {}",
                    outcome.matcher,
                    failure.pattern,
                    failure.details
                );
            }
            for candidate in &outcome.candidates {
                if let Some(place) = self.accept(candidate) {
                    if !places.contains(&place) {
                        places.push(place);
                    }
                }
            }
        }

        tracing::debug!("Extracted {} unique places", places.len());
        timer.stop();
        places
    }

    /// Filter stage: trim, strip trailing punctuation, enforce length and
    /// stoplist. Returns the cleaned place name when accepted.
    fn accept(&self, candidate: &str) -> Option<String> {
        let place = candidate.trim().trim_end_matches(['.', ',', ';', ':']).trim();

        if place.chars().count() <= self.min_candidate_len {
            return None;
        }
        if self.stoplist.contains(&place.to_lowercase()) {
            return None;
        }

        Some(place.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaceConfig;

    fn extractor() -> PlaceExtractor {
        PlaceExtractor::new(&PlaceConfig::default())
    }

    fn outcome_for<'a>(outcomes: &'a [MatcherOutcome], name: &str) -> &'a MatcherOutcome {
        outcomes.iter().find(|o| o.matcher == name).unwrap()
    }

    // ── Individual families ─────────────────────────────────────────

    #[test]
    fn action_verb_family() {
        let outcomes = run_matchers("Visit the Eiffel Tower in the morning");
        let action = outcome_for(&outcomes, "action-verbs");
        assert_eq!(action.candidates, vec!["Eiffel Tower"]);
        assert!(action.failures.is_empty());
    }

    #[test]
    fn ratings_family_does_not_swallow_verbs() {
        let outcomes = run_matchers("Visit the Eiffel Tower (4.8/5) early");
        let ratings = outcome_for(&outcomes, "ratings");
        assert_eq!(ratings.candidates, vec!["Eiffel Tower"]);
    }

    #[test]
    fn landmark_family_keeps_suffix() {
        let outcomes = run_matchers("walk past the Sagrada Familia Cathedral today");
        let landmarks = outcome_for(&outcomes, "landmarks");
        assert!(landmarks
            .candidates
            .contains(&"Sagrada Familia Cathedral".to_string()));
    }

    #[test]
    fn connector_words_survive_in_runs() {
        let outcomes = run_matchers("Explore Museum of Modern Art afterwards");
        let action = outcome_for(&outcomes, "action-verbs");
        assert!(action.candidates.contains(&"Museum of Modern Art".to_string()));
    }

    #[test]
    fn time_prefixed_family() {
        let outcomes = run_matchers("9:00 AM: Borough Market then coffee");
        let timed = outcome_for(&outcomes, "time-prefixed");
        assert_eq!(timed.candidates, vec!["Borough Market"]);
    }

    #[test]
    fn at_the_family() {
        let outcomes = run_matchers("dinner at the Gothic Quarter tonight");
        let at_the = outcome_for(&outcomes, "at-the");
        assert_eq!(at_the.candidates, vec!["Gothic Quarter"]);
    }

    #[test]
    fn rating_suffix_family() {
        let outcomes = run_matchers("try Joe's Diner - 4.5 or Hotel Lux (5 stars)");
        let suffix = outcome_for(&outcomes, "rating-suffix");
        assert!(suffix.candidates.contains(&"Joe's Diner".to_string()));
        assert!(suffix.candidates.contains(&"Hotel Lux".to_string()));
    }

    #[test]
    fn lodging_family() {
        let outcomes = run_matchers("Stay at the Ritz Carlton near Central Park");
        let lodging = outcome_for(&outcomes, "lodging");
        assert!(lodging.candidates.contains(&"Ritz Carlton".to_string()));
    }

    #[test]
    fn dining_family() {
        let outcomes = run_matchers("Eat at Chez Marie afterwards");
        let dining = outcome_for(&outcomes, "dining");
        assert!(dining.candidates.contains(&"Chez Marie".to_string()));
    }

    #[test]
    fn quote_pass_captures_plain_spans() {
        let outcomes = run_matchers("the locals call it \"the hidden terrace\"");
        let quotes = outcome_for(&outcomes, "quotes");
        assert!(quotes.candidates.contains(&"the hidden terrace".to_string()));
    }

    #[test]
    fn all_builtin_patterns_compile() {
        assert!(verify_patterns().is_ok());
        for outcome in run_matchers("") {
            assert!(
                outcome.failures.is_empty(),
                "family '{}' has pattern failures: {:?}",
                outcome.matcher,
                outcome.failures
            );
        }
    }

    #[test]
    fn pattern_failure_is_reported_not_fatal() {
        let matcher = PlaceMatcher::new(
            "custom",
            vec!["[unclosed".to_string(), format!("({NAME})")],
        );
        let outcome = matcher.run("Eiffel Tower at dusk");

        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].pattern.contains("[unclosed"));
        assert!(outcome.candidates.contains(&"Eiffel Tower".to_string()));

        let errors = outcome.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category(), "pattern");
        assert!(errors[0].to_string().contains("custom"));
    }

    // ── Filter and de-duplication ───────────────────────────────────

    #[test]
    fn eiffel_tower_extracted_and_morning_excluded() {
        let places = extractor().extract("Visit the Eiffel Tower (4.8/5) in the morning");
        assert!(places.contains(&"Eiffel Tower".to_string()));
        assert!(!places.iter().any(|p| p.eq_ignore_ascii_case("morning")));
    }

    #[test]
    fn no_duplicates_and_first_seen_order() {
        let text = "Visit Eiffel Tower then See Louvre Museum and again \"Eiffel Tower\"";
        let places = extractor().extract(text);
        let eiffel_count = places.iter().filter(|p| *p == "Eiffel Tower").count();
        assert_eq!(eiffel_count, 1);
        let eiffel_pos = places.iter().position(|p| p == "Eiffel Tower").unwrap();
        let louvre_pos = places.iter().position(|p| p == "Louvre Museum").unwrap();
        assert!(eiffel_pos < louvre_pos);
    }

    #[test]
    fn short_and_stoplisted_candidates_rejected() {
        let places = extractor().extract("Enjoy \"tea\" at the Breakfast spot, **breakfast** daily");
        assert!(places.iter().all(|p| p.len() > 3));
        assert!(!places.iter().any(|p| p.eq_ignore_ascii_case("breakfast")));
        assert!(!places.iter().any(|p| p.eq_ignore_ascii_case("tea")));
    }

    #[test]
    fn length_filter_counts_characters_not_bytes() {
        let places = extractor().extract("ski week in \"Åre\" then \"Çeşme\" beaches");
        assert!(!places.iter().any(|p| p == "Åre"));
        assert!(places.contains(&"Çeşme".to_string()));
    }

    #[test]
    fn trailing_punctuation_is_stripped() {
        let places = extractor().extract("Head to Trevi Fountain.");
        assert!(places.contains(&"Trevi Fountain".to_string()));
        assert!(!places.iter().any(|p| p.ends_with('.')));
    }

    #[test]
    fn curly_quotes_are_folded_before_matching() {
        let places = extractor().extract("they call it \u{201C}Gran Mercado\u{201D} downtown");
        assert!(places.contains(&"Gran Mercado".to_string()));
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "# Day 1\n- Morning: Visit Park Güell (4.6/5)\n- Evening: Eat at Bar Brutal";
        let first = extractor().extract(text);
        let second = extractor().extract(text);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn full_day_block() {
        let text = "\
# Day 2
- Morning: Coffee and pastries at the Boqueria Market (4.7/5)
- Afternoon: Explore Casa Batlló, a local secret
- Evening: Dinner at **Quimet y Quimet** then Stay at Hotel Neri";
        let places = extractor().extract(text);
        assert!(places.contains(&"Boqueria Market".to_string()));
        assert!(places.contains(&"Casa Batlló".to_string()));
        assert!(places.contains(&"Quimet y Quimet".to_string()));
        assert!(places.contains(&"Hotel Neri".to_string()));
    }
}
