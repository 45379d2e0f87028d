//! Configuration struct definitions.

use crate::fmt::{DEFAULT_FORMAT, DEFAULT_TIMESTAMP_FORMAT};
use serde::Deserialize;
use std::path::PathBuf;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Plugin handle; used as the logger channel and the template-root key.
    pub channel: String,
    /// Development mode. `None` defers to the `DEV_MODE` environment variable.
    pub dev_mode: Option<bool>,
    /// Minimum tier for plugin-log's own diagnostics on stderr.
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            channel: "plugin".to_string(),
            dev_mode: None,
            diagnostics: "warning".to_string(),
        }
    }
}

/// The per-channel log file registered with the dispatcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Register the file target at all.
    pub enabled: bool,
    /// Directory holding `<channel>.log`. `~` is expanded.
    pub base_dir: String,
    /// Line template.
    pub format: String,
    /// strftime pattern for `{timestamp}`.
    pub timestamp_format: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        let base_dir = directories::ProjectDirs::from("", "", "plugin-log").map_or_else(
            || "logs".to_string(),
            |dirs| {
                dirs.state_dir()
                    .unwrap_or_else(|| dirs.data_dir())
                    .join("logs")
                    .to_string_lossy()
                    .into_owned()
            },
        );

        Self {
            enabled: true,
            base_dir,
            format: DEFAULT_FORMAT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl TargetConfig {
    /// `<base_dir>/<channel>.log`, with `~` expanded.
    #[must_use]
    pub fn log_path(&self, channel: &str) -> PathBuf {
        let base = shellexpand::tilde(&self.base_dir);
        PathBuf::from(base.as_ref()).join(format!("{channel}.log"))
    }
}

/// Console echo configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// `false` treats even console invocations as non-interactive.
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Message catalog configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationsConfig {
    /// TOML catalog file. `~` is expanded.
    pub path: Option<String>,
    /// Language used when a lookup names none.
    pub default_language: String,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            path: None,
            default_language: "en".to_string(),
        }
    }
}
