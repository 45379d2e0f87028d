//! Unified error type for all plugin-log operations.

use std::path::PathBuf;

/// Error type for plugin-log operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config or catalog parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// JSON serialization of a record failed.
    Serialize(serde_json::Error),
    /// A log target could not be opened at registration time.
    TargetUnavailable { path: PathBuf, source: std::io::Error },
    /// A target's writer lock was poisoned by a panicking writer.
    Poisoned(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Serialize(e) => write!(f, "serialization error: {e}"),
            Self::TargetUnavailable { path, source } => {
                write!(f, "log target {} unavailable: {source}", path.display())
            }
            Self::Poisoned(name) => write!(f, "writer for target '{name}' is poisoned"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::TargetUnavailable { source: e, .. } => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::ConfigDirNotFound | Self::Poisoned(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}
