//! Error types for skein.

use thiserror::Error;

use crate::{PatternType, Size};

/// Result type alias for skein operations.
pub type Result<T> = std::result::Result<T, SkeinError>;

/// Errors that can occur across the skein crates.
#[derive(Error, Debug)]
pub enum SkeinError {
    /// Request fields failed validation.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// A catalog record does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// Kind of record that was looked up (e.g., "user").
        resource: &'static str,
        /// The identifier that was requested.
        id: u64,
    },

    /// A record collides with an existing one.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkeinError {
    /// Creates a not-found error for the given record kind.
    #[must_use]
    pub const fn not_found(resource: &'static str, id: u64) -> Self {
        Self::NotFound { resource, id }
    }
}

/// Rejected request input.
///
/// Every variant carries enough context to tell the caller which values
/// are accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Unknown pattern type string.
    #[error("invalid pattern type '{0}', expected one of: hat, scarf, sweater, blanket")]
    PatternType(String),

    /// Unknown size string.
    #[error(
        "invalid size '{0}', expected one of: baby, child, adult, short, medium, long, throw, full"
    )]
    Size(String),

    /// Known size that is not offered for the pattern type.
    #[error("size '{size}' does not apply to {pattern_type}, expected one of: {expected}")]
    SizeForPattern {
        /// The requested project.
        pattern_type: PatternType,
        /// The requested size.
        size: Size,
        /// Comma separated list of sizes the project offers.
        expected: String,
    },

    /// Unknown yarn weight string.
    #[error("invalid yarn weight '{0}', expected one of: lace, fingering, dk, worsted, chunky")]
    YarnWeight(String),

    /// Gauge outside the accepted stitches-per-inch range.
    #[error("invalid gauge {0}, expected between 1 and 20 stitches per inch")]
    Gauge(i64),

    /// A required text field was empty.
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// A catalog enum value was not recognized.
    #[error("invalid {field} '{value}', expected one of: {expected}")]
    Choice {
        /// Name of the field being parsed.
        field: &'static str,
        /// The value that was supplied.
        value: String,
        /// Comma separated list of accepted values.
        expected: &'static str,
    },
}

impl InvalidInput {
    /// Creates a [`InvalidInput::SizeForPattern`] listing the sizes the
    /// project offers.
    #[must_use]
    pub fn size_for_pattern(pattern_type: PatternType, size: Size) -> Self {
        let expected = pattern_type
            .sizes()
            .iter()
            .map(Size::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Self::SizeForPattern {
            pattern_type,
            size,
            expected,
        }
    }
}
