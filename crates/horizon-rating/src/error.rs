//! Error types for the rating widget.
//!
//! Numeric input is never rejected (values are clamped), so the only
//! failures come from reading attribute documents.

/// Result type alias for rating operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading rating attributes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The TOML attribute document could not be parsed.
    #[error("Invalid TOML rating attributes: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON attribute document could not be parsed.
    #[error("Invalid JSON rating attributes: {0}")]
    Json(#[from] serde_json::Error),
}
