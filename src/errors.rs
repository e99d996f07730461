//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the travel extraction engine, covering
//! configuration loading, list validation, and matcher diagnostics.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from configuration and matcher construction
//! - **Output**: Structured error types with context
//! - **Error Categories**: Configuration, Validation, Pattern
//!
//! The five extraction contracts themselves are total: they signal
//! unparseable input with `None` or a default collection and never return an
//! `ExtractError` past their boundary. Pattern failures inside the place
//! pipeline are carried as diagnostics on `MatcherOutcome` instead of being
//! propagated.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Error types for the travel extraction engine
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Configuration errors (file access, parsing)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors for configured lists and thresholds
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// A regex family failed to compile
    #[error("Matcher '{matcher}' failed to compile pattern `{pattern}`: {details}")]
    Pattern {
        matcher: String,
        pattern: String,
        details: String,
    },

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            ExtractError::Config { .. } | ExtractError::Toml(_) => "configuration",
            ExtractError::ValidationFailed { .. } => "validation",
            ExtractError::Pattern { .. } => "pattern",
            ExtractError::Io(_) => "io",
        }
    }
}
