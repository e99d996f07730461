//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration for the travel extraction engine. All fixed
//! lookup lists (known cities, compound-city prefixes, personality tags, the
//! place-name stoplist) live here as immutable configuration data so they can
//! be extended without touching matching logic.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Non-empty lists, threshold sanity, default-tag membership
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use crate::errors::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure containing all extraction settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Destination extractor settings
    pub destination: DestinationConfig,
    /// Personality detector settings
    pub personality: PersonalityConfig,
    /// Place extractor settings
    pub places: PlaceConfig,
}

/// Destination extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationConfig {
    /// First tokens of two-word compound city names
    pub compound_prefixes: Vec<String>,
    /// Known two-word compound cities
    pub compound_cities: Vec<String>,
    /// Known single-word major cities
    pub known_cities: Vec<String>,
}

/// Personality detector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityConfig {
    /// Recognized travel-personality tags, in declaration order
    pub tags: Vec<String>,
    /// Tag returned when no tag keyword occurs in the input
    pub default_tag: String,
}

/// Place extractor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceConfig {
    /// Generic words that are never place names (matched case-insensitively)
    pub stoplist: Vec<String>,
    /// Candidates at or below this length are rejected
    pub min_candidate_len: usize,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            compound_prefixes: to_strings(&["New", "Los", "San", "Las", "Hong", "Tel", "Rio"]),
            compound_cities: to_strings(&[
                "New York",
                "Los Angeles",
                "San Francisco",
                "Las Vegas",
                "Hong Kong",
                "Tel Aviv",
                "Rio Janeiro",
                "New Orleans",
                "New Delhi",
                "San Diego",
                "San Jose",
                "San Antonio",
            ]),
            known_cities: to_strings(&[
                "Paris",
                "London",
                "Tokyo",
                "Rome",
                "Dubai",
                "Berlin",
                "Madrid",
                "Barcelona",
                "Vienna",
                "Amsterdam",
                "Prague",
                "Singapore",
                "Sydney",
                "Istanbul",
                "Bangkok",
                "Seoul",
                "Cairo",
                "Vancouver",
                "Toronto",
                "Chicago",
                "Boston",
                "Miami",
                "Seattle",
                "Denver",
                "Austin",
            ]),
        }
    }
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            tags: to_strings(&[
                "Adventurous",
                "Relaxed",
                "Foodie",
                "Cultural Explorer",
                "Party Animal",
                "Solo Traveler",
                "Family-Oriented",
            ]),
            default_tag: "Relaxed".to_string(),
        }
    }
}

impl Default for PlaceConfig {
    fn default() -> Self {
        Self {
            stoplist: to_strings(&[
                "the",
                "your",
                "this",
                "that",
                "these",
                "those",
                "then",
                "there",
                "here",
                "where",
                "what",
                "when",
                "breakfast",
                "lunch",
                "dinner",
                "brunch",
                "day",
                "morning",
                "afternoon",
                "evening",
                "night",
                "noon",
            ]),
            min_candidate_len: 3,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("travel-extraction.toml")
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; the built-in defaults are used.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|e| ExtractError::Config {
                message: format!("Failed to read config file {:?}: {}", path, e),
            })?;
            toml::from_str(&content).map_err(ExtractError::Toml)?
        } else {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(tag) = std::env::var("TRAVEL_EXTRACTION_DEFAULT_TAG") {
            self.personality.default_tag = tag;
        }
        if let Ok(len) = std::env::var("TRAVEL_EXTRACTION_MIN_PLACE_LEN") {
            self.places.min_candidate_len =
                len.parse().map_err(|_| ExtractError::Config {
                    message: "Invalid length in TRAVEL_EXTRACTION_MIN_PLACE_LEN".to_string(),
                })?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.personality.tags.is_empty() {
            return Err(ExtractError::ValidationFailed {
                field: "personality.tags".to_string(),
                reason: "At least one personality tag is required".to_string(),
            });
        }

        if !self
            .personality
            .tags
            .iter()
            .any(|t| t == &self.personality.default_tag)
        {
            return Err(ExtractError::ValidationFailed {
                field: "personality.default_tag".to_string(),
                reason: format!(
                    "Default tag '{}' is not in personality.tags",
                    self.personality.default_tag
                ),
            });
        }

        if self.destination.known_cities.is_empty() {
            return Err(ExtractError::ValidationFailed {
                field: "destination.known_cities".to_string(),
                reason: "The city fallback list cannot be empty".to_string(),
            });
        }

        if self.places.min_candidate_len == 0 {
            return Err(ExtractError::ValidationFailed {
                field: "places.min_candidate_len".to_string(),
                reason: "Minimum candidate length must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ExtractError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
