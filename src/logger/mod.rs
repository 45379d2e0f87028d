//! The plugin-facing leveled logger.
//!
//! Each call maps its severity to a color and dispatcher tier and echoes a colored line
//! when running in a console. Errors and worse get the ambient request snapshot merged
//! into their context. The record is then handed to the backend under the logger's
//! channel, and emergency/alert/critical end the process afterwards.

mod builder;

pub use builder::LevelLoggerBuilder;

use crate::backend::{Backend, LogRecord};
use crate::context::{AmbientSource, Context};
use crate::level::{Mapping, Severity, color, title_case};
use crate::runtime::{Console, ExecutionContext, Terminate};
use std::convert::Infallible;
use std::sync::Arc;

/// Exit status used by the fatal-class entry points.
pub const FATAL_EXIT_STATUS: i32 = 1;

/// `\x1b[{color}m{label}\x1b[39m {message}\n`
#[must_use]
pub fn format_echo(color_code: u8, label: &str, message: &str) -> String {
    format!(
        "\x1b[{color_code}m{label}\x1b[{reset}m {message}\n",
        reset = color::DEFAULT
    )
}

/// Immutable after build: the channel and every collaborator are fixed for the logger's lifetime.
pub struct LevelLogger {
    channel: String,
    backend: Arc<dyn Backend>,
    execution: Box<dyn ExecutionContext>,
    console: Box<dyn Console>,
    ambient: Box<dyn AmbientSource>,
    terminator: Box<dyn Terminate>,
}

impl LevelLogger {
    #[must_use]
    pub fn builder(channel: impl Into<String>, backend: Arc<dyn Backend>) -> LevelLoggerBuilder {
        LevelLoggerBuilder::new(channel, backend)
    }

    /// Channel every record from this logger is tagged with.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// System is unusable. Logs, then terminates with status 1.
    ///
    /// # Errors
    /// Only returns if the backend rejects the record; the process is not terminated then.
    pub fn emergency(&self, message: &str, context: Context) -> Result<Infallible, crate::Error> {
        self.fatal(Severity::Emergency, message, context)
    }

    /// Action must be taken immediately. Logs, then terminates with status 1.
    ///
    /// # Errors
    /// Only returns if the backend rejects the record; the process is not terminated then.
    pub fn alert(&self, message: &str, context: Context) -> Result<Infallible, crate::Error> {
        self.fatal(Severity::Alert, message, context)
    }

    /// Critical conditions. Logs, then terminates with status 1.
    ///
    /// # Errors
    /// Only returns if the backend rejects the record; the process is not terminated then.
    pub fn critical(&self, message: &str, context: Context) -> Result<Infallible, crate::Error> {
        self.fatal(Severity::Critical, message, context)
    }

    /// # Errors
    /// Backend submission errors.
    pub fn error(&self, message: &str, context: Context) -> Result<(), crate::Error> {
        self.log_severity(Severity::Error, message, context)
    }

    /// # Errors
    /// Backend submission errors.
    pub fn warning(&self, message: &str, context: Context) -> Result<(), crate::Error> {
        self.log_severity(Severity::Warning, message, context)
    }

    /// # Errors
    /// Backend submission errors.
    pub fn notice(&self, message: &str, context: Context) -> Result<(), crate::Error> {
        self.log_severity(Severity::Notice, message, context)
    }

    /// # Errors
    /// Backend submission errors.
    pub fn info(&self, message: &str, context: Context) -> Result<(), crate::Error> {
        self.log_severity(Severity::Info, message, context)
    }

    /// # Errors
    /// Backend submission errors.
    pub fn debug(&self, message: &str, context: Context) -> Result<(), crate::Error> {
        self.log_severity(Severity::Debug, message, context)
    }

    /// Typed form of [`LevelLogger::log`]. Never terminates, even for fatal-class severities.
    ///
    /// # Errors
    /// Backend submission errors.
    pub fn log_severity(
        &self,
        severity: Severity,
        message: &str,
        context: Context,
    ) -> Result<(), crate::Error> {
        self.log(severity.as_str(), message, context)
    }

    /// Generic entry point. Unknown names log at INFO with the default color and still
    /// receive the ambient snapshot.
    ///
    /// # Errors
    /// Whatever the backend's `submit` fails with.
    pub fn log(&self, level: &str, message: &str, context: Context) -> Result<(), crate::Error> {
        let mapping = Mapping::lookup(level);

        if self.execution.is_interactive() {
            let line = format_echo(mapping.color, &title_case(level), message);
            let _ = self.console.echo(&line);
        }

        let enriched = level
            .parse::<Severity>()
            .ok()
            .is_none_or(Severity::is_enriched);
        let context = if enriched {
            self.ambient.snapshot().merge_into(context)
        } else {
            context
        };

        let record = LogRecord::new(level, message, context);
        self.backend.submit(&record, mapping.tier, &self.channel)
    }

    fn fatal(
        &self,
        severity: Severity,
        message: &str,
        context: Context,
    ) -> Result<Infallible, crate::Error> {
        self.log_severity(severity, message, context)?;
        let _ = self.backend.flush();
        self.terminator.terminate(FATAL_EXIT_STATUS)
    }
}
