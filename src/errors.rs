// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a raw listing could not be turned into a lead.
/// A pattern that simply isn't present in the text is an absent field, not
/// an error. Odd bytes and long text are cleaned, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Digits were matched as a dollar amount but are too large to hold.
    #[error("{field} amount {digits} is too large to represent")]
    AmountOverflow { field: &'static str, digits: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}
