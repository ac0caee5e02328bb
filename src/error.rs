//! Error types for the lzss-rs library

use thiserror::Error;

/// Main error type for lzss-rs operations
#[derive(Debug, Error)]
pub enum LzssError {
    /// Mutually inconsistent codec settings
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type alias for lzss-rs operations
pub type Result<T> = std::result::Result<T, LzssError>;
