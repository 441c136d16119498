//! Error types for kundli-core

use thiserror::Error;

/// Main error type for the kundli-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A catalog archetype has no insight bundle.
    ///
    /// The catalog and insight table are static data, so this is never
    /// recoverable at runtime.
    #[error("data integrity error: no insight bundle for archetype {0}")]
    MissingInsight(String),

    /// A statement rating outside the 1-5 scale
    #[error("invalid rating {0}: ratings must be between 1 and 5")]
    InvalidRating(u8),

    /// Wrong number of statement ratings for a card
    #[error("expected 3 ratings per card, got {0}")]
    RatingCount(usize),

    /// Archetype id not present in the catalog
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),

    /// Malformed profile share code
    #[error("invalid share code: {0}")]
    ShareCode(String),
}

/// Result type alias for kundli-core
pub type Result<T> = std::result::Result<T, Error>;
