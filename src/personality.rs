//! # Personality Detector Module
//!
//! ## Purpose
//! Detects travel-personality tags mentioned in free-form user text via
//! case-insensitive substring containment against the configured tag set.
//!
//! ## Input/Output Specification
//! - **Input**: Free-form user text
//! - **Output**: Non-empty list of tags in configured declaration order
//! - **Fallback**: The configured default tag when nothing matches

use crate::config::PersonalityConfig;

/// Detector over a configured tag set
pub struct PersonalityDetector {
    tags: Vec<String>,
    default_tag: String,
}

impl PersonalityDetector {
    /// Create a detector from configuration
    pub fn new(config: &PersonalityConfig) -> Self {
        Self {
            tags: config.tags.clone(),
            default_tag: config.default_tag.clone(),
        }
    }

    /// Detect travel personality preferences from user input.
    ///
    /// Tags are matched case-insensitively and returned in configured
    /// declaration order, not input order. The result is never empty.
    pub fn detect(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        let found: Vec<String> = self
            .tags
            .iter()
            .filter(|tag| haystack.contains(&tag.to_lowercase()))
            .cloned()
            .collect();

        if found.is_empty() {
            vec![self.default_tag.clone()]
        } else {
            found
        }
    }
}
