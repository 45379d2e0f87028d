//! A plugin's identity in the host, and the setup hooks it runs once at init: its log
//! target, its template root, its logger and its translator.

use crate::backend::{Backend, Dispatcher, StreamTarget};
use crate::config::{Config, TargetConfig};
use crate::fmt::LineFormatter;
use crate::i18n::{Catalog, Translator};
use crate::internal;
use crate::level::Tier;
use crate::logger::LevelLoggerBuilder;
use crate::templates::{TemplateRoots, register_template_roots};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Plugin {
    handle: String,
    base_path: PathBuf,
    dev_mode: bool,
}

impl Plugin {
    #[must_use]
    pub fn new(handle: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            handle: handle.into(),
            base_path: base_path.into(),
            dev_mode: false,
        }
    }

    /// Handle and development mode taken from config.
    #[must_use]
    pub fn from_config(config: &Config, base_path: impl Into<PathBuf>) -> Self {
        Self::new(config.general.channel.clone(), base_path).dev_mode(config.dev_mode())
    }

    #[must_use]
    pub const fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub const fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Lowest tier the plugin's file target forwards.
    #[must_use]
    pub const fn threshold(&self) -> Tier {
        if self.dev_mode {
            Tier::Trace
        } else {
            Tier::Warning
        }
    }

    /// Builds the plugin's file target without registering it.
    ///
    /// # Errors
    /// [`crate::Error::TargetUnavailable`] when the log file can't be opened.
    pub fn log_target(&self, config: &TargetConfig) -> Result<StreamTarget, crate::Error> {
        let formatter = LineFormatter::new(&config.format)
            .dev_mode(self.dev_mode)
            .timestamp_format(&config.timestamp_format);

        Ok(
            StreamTarget::file(&self.handle, &config.log_path(&self.handle))?
                .formatter(formatter)
                .categories([self.handle.as_str()])
                .min_tier(self.threshold()),
        )
    }

    /// Adds the plugin's file target to `dispatcher`.
    ///
    /// Never fails: a target that can't be built is reported once as an ERROR on the
    /// dispatcher's default channel and the plugin carries on without it.
    pub fn register_log_target(&self, dispatcher: &mut Dispatcher, config: &TargetConfig) -> bool {
        match self.log_target(config) {
            Ok(target) => {
                internal::debug(
                    "PLUGIN",
                    &format!(
                        "Log target registered: target={}, threshold={}, pretty={}",
                        target.name(),
                        target.threshold(),
                        target.line_formatter().is_pretty()
                    ),
                );
                dispatcher.push(target);
                true
            }
            Err(e) => {
                dispatcher.report(Tier::Error, &e.to_string());
                false
            }
        }
    }

    pub fn register_template_roots(&self, roots: &mut TemplateRoots) -> bool {
        register_template_roots(roots, &self.handle, &self.base_path)
    }

    /// Logger builder with the handle as channel.
    #[must_use]
    pub fn logger(&self, backend: Arc<dyn Backend>) -> LevelLoggerBuilder {
        LevelLoggerBuilder::new(self.handle.clone(), backend)
    }

    #[must_use]
    pub fn translator(&self, catalog: Arc<dyn Catalog>) -> Translator {
        Translator::new(self.handle.clone(), catalog)
    }
}
