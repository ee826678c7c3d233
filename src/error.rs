//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring, rendering, or writing an icon
#[derive(Debug, Error)]
pub enum IconError {
    /// The output file could not be created, written, or moved into place
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration was not valid TOML or had the wrong shape
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A code string contained something other than dots and dashes
    #[error("invalid code '{code}': {reason}")]
    InvalidCode { code: String, reason: String },

    /// Canvas dimensions that cannot produce a drawable icon
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
