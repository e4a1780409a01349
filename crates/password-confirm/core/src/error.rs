use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Submitted confirmation differs from the new password
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MismatchError {
    pub message: String,
}
