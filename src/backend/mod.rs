//! The host-side log dispatcher: the [`Backend`] seam the plugin logger submits to, and a
//! [`Dispatcher`] that fans records out to registered [`Target`]s.
//!
//! Storage, rotation and delivery live in targets; the dispatcher only routes.

mod stream;

pub use stream::StreamTarget;

use crate::context::Context;
use crate::level::Tier;
use chrono::{DateTime, Local};
use serde_json::Value;
use std::sync::Arc;

/// Category the host uses for its own messages, including failed target registrations.
pub const DEFAULT_CHANNEL: &str = "application";

/// One leveled call, as the plugin logger hands it to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity name exactly as passed to the logger.
    pub level: String,
    pub message: String,
    pub context: Context,
}

impl LogRecord {
    #[must_use]
    pub fn new(level: impl Into<String>, message: impl Into<String>, context: Context) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            context,
        }
    }
}

/// Accepts finished records. `Send + Sync` so one dispatcher can serve many loggers.
pub trait Backend: Send + Sync {
    /// # Errors
    /// Whatever the backend's sinks fail with; the logger propagates it unchanged.
    fn submit(&self, record: &LogRecord, tier: Tier, channel: &str) -> Result<(), crate::Error>;

    /// Fatal-class calls flush before the process ends.
    ///
    /// # Errors
    /// I/O errors from buffered sinks.
    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn submit(&self, record: &LogRecord, tier: Tier, channel: &str) -> Result<(), crate::Error> {
        (**self).submit(record, tier, channel)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}

/// What a target renders: the record plus routing data the dispatcher attaches.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    pub level: &'a str,
    pub message: &'a str,
    pub context: &'a Context,
    pub tier: Tier,
    pub channel: &'a str,
    /// Dispatcher-added metadata, rendered by `{extra}`.
    pub extra: Context,
    pub time: DateTime<Local>,
}

impl<'a> Entry<'a> {
    #[must_use]
    pub fn new(record: &'a LogRecord, tier: Tier, channel: &'a str) -> Self {
        let mut extra = Context::new();
        extra.insert("category".to_string(), Value::String(channel.to_string()));
        Self {
            level: &record.level,
            message: &record.message,
            context: &record.context,
            tier,
            channel,
            extra,
            time: Local::now(),
        }
    }
}

/// A registered destination with its own filter.
pub trait Target: Send + Sync {
    /// Filtering belongs to targets, not to the plugin logger.
    fn accepts(&self, tier: Tier, channel: &str) -> bool;

    /// # Errors
    /// Formatting or I/O errors from the sink.
    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Routes each record to every target that accepts it. Targets are added during setup
/// and the dispatcher is read-only afterwards.
#[derive(Default)]
pub struct Dispatcher {
    targets: Vec<Box<dyn Target>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chaining form of [`Dispatcher::push`] for setup code.
    #[must_use]
    pub fn with_target(mut self, target: impl Target + 'static) -> Self {
        self.push(target);
        self
    }

    pub fn push(&mut self, target: impl Target + 'static) {
        self.targets.push(Box::new(target));
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Host-level message on [`DEFAULT_CHANNEL`]. Setup failures are reported this way.
    pub fn report(&self, tier: Tier, message: &str) {
        let record = LogRecord::new(tier.as_str().to_lowercase(), message, Context::new());
        let _ = self.submit(&record, tier, DEFAULT_CHANNEL);
    }
}

impl Backend for Dispatcher {
    /// Every accepting target gets the record even if an earlier one fails; the first
    /// failure is returned.
    fn submit(&self, record: &LogRecord, tier: Tier, channel: &str) -> Result<(), crate::Error> {
        let entry = Entry::new(record, tier, channel);
        let mut first_err = None;

        for target in &self.targets {
            if !target.accepts(tier, channel) {
                continue;
            }
            if let Err(e) = target.write(&entry) {
                first_err.get_or_insert(e);
            }
        }

        first_err.map_or(Ok(()), Err)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        for target in &self.targets {
            target.flush()?;
        }
        Ok(())
    }
}
