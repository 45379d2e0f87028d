//! TOML configuration loading and the development-mode switch.

mod structs;

pub use structs::{ConsoleConfig, GeneralConfig, TargetConfig, TranslationsConfig};

use crate::internal;
use crate::level::Tier;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `general.dev_mode` is unset.
pub const DEV_MODE_ENV: &str = "DEV_MODE";

/// `#[serde(default)]` on every section so an empty file is a valid config.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub target: TargetConfig,
    pub console: ConsoleConfig,
    pub translations: TranslationsConfig,
}

impl Config {
    /// Loads `~/.config/plugin-log/plugin-log.conf`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("plugin-log").join("plugin-log.conf"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Explicit config wins; otherwise `DEV_MODE` decides, defaulting to off.
    #[must_use]
    pub fn dev_mode(&self) -> bool {
        self.general
            .dev_mode
            .unwrap_or_else(|| std::env::var(DEV_MODE_ENV).is_ok_and(|v| parse_flag(&v)))
    }

    /// Unparseable values fall back to WARNING rather than failing startup.
    #[must_use]
    pub fn diagnostics_tier(&self) -> Tier {
        self.general.diagnostics.parse().unwrap_or(Tier::Warning)
    }

    /// Resolved catalog path, if one is configured.
    #[must_use]
    pub fn translations_path(&self) -> Option<PathBuf> {
        self.translations
            .path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}

/// `1`, `true`, `yes` and `on` (any case) are truthy.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
