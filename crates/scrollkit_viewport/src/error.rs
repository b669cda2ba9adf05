//! Viewport error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at viewport setup time
///
/// Scrolling itself never fails; out-of-range requests are clamped.
#[derive(Error, Debug)]
pub enum ViewportError {
    /// A viewport hosts exactly one child
    #[error("Viewport can host only one direct child")]
    MultipleChildren,

    /// Configuration values out of range
    #[error("Invalid viewport config: {0}")]
    InvalidConfig(String),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config could not be written back out
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for viewport setup operations
pub type Result<T> = std::result::Result<T, ViewportError>;
