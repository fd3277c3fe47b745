//! Error types for loading card configuration.
//!
//! Theme resolution itself never fails. Only reading configuration from
//! disk or text can.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a [`DeckConfig`](crate::DeckConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The YAML could not be parsed into a deck.
    #[error("Failed to parse card config: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The YAML in a file could not be parsed into a deck.
    #[error("Failed to parse card config {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// The file involved, if the error came from one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Read { path, .. } | Self::ParseFile { path, .. } => Some(path),
            Self::Parse(_) => None,
        }
    }
}
