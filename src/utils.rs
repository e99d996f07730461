//! # Utilities Module
//!
//! ## Purpose
//! Common text helpers shared by the extraction components, plus a debug
//! timer for measuring matcher-battery runs.
//!
//! ## Input/Output Specification
//! - **Input**: Raw text needing folding, normalization, or cleanup
//! - **Output**: Processed text, timing measurements
//! - **Functions**: Truncation, capitalization folding, quote normalization,
//!   geocoding-query cleanup

use std::time::Instant;
use unicode_normalization::UnicodeNormalization;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

/// Text processing utilities
pub struct TextUtils;

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Stop timer and log duration
    pub fn stop(self) -> u64 {
        let elapsed = self.elapsed_ms();
        tracing::debug!("Timer '{}' completed in {}ms", self.name, elapsed);
        elapsed
    }
}

impl TextUtils {
    /// Truncate text to specified length with ellipsis
    pub fn truncate(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            let cut = max_length.saturating_sub(3);
            let boundary = text
                .char_indices()
                .map(|(i, _)| i)
                .take_while(|&i| i <= cut)
                .last()
                .unwrap_or(0);
            format!("{}...", &text[..boundary])
        }
    }

    /// Fold a word to first-letter-uppercase, remainder-lowercase form.
    ///
    /// Matches the folding applied to tokens before comparing them against
    /// the city lists, so "PARIS" and "paris" both hit "Paris".
    pub fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
            None => String::new(),
        }
    }

    /// Count words in text
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// NFC-normalize text and fold curly quotes to their straight forms.
    ///
    /// The quote-based place matchers only understand straight `"` and `'`.
    pub fn normalize_quotes(text: &str) -> String {
        text.nfc()
            .collect::<String>()
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2018}', '\u{2019}'], "'")
    }

    /// Strip characters that confuse geocoding services, keeping
    /// alphanumerics, whitespace, commas, hyphens, and periods.
    ///
    /// The external geocoding collaborator retries with this cleaned form
    /// when a raw place name fails to resolve.
    pub fn geocoding_query(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '-' | '.'))
            .collect::<String>()
            .trim()
            .to_string()
    }
}
