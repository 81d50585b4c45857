use crate::core::config::data::path_display;
use std::io;
use std::path::PathBuf;

/// Errors raised while locating, reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `OOPS_CONFIG_DIR` nor the platform config directory is available.
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    /// A filesystem operation on `path` failed.
    #[error("Failed to {action} {}: {source}", path_display(.path))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid config record.
    #[error("Failed to parse config at {}: {source}", path_display(.path))]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
