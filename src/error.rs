//! Error type for contract violations and config/IO failures
//!
//! Low-confidence landmarks are NOT errors; they produce skipped frames.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepError {
    /// Caller supplied fewer landmarks than the fixed index map needs
    #[error("invalid input: need at least {required} landmarks, got {actual}")]
    InvalidInput { required: usize, actual: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RepError>;
