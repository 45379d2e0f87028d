//! Line-oriented target over any writer: stderr for diagnostics, an appended file for plugin logs.

use super::{Entry, Target};
use crate::fmt::LineFormatter;
use crate::internal;
use crate::level::Tier;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Formats entries with a [`LineFormatter`] and writes them to a shared writer.
pub struct StreamTarget {
    name: String,
    writer: Mutex<Box<dyn Write + Send>>,
    formatter: LineFormatter,
    /// Channels this target accepts. Empty accepts every channel.
    categories: Vec<String>,
    min_tier: Tier,
}

impl StreamTarget {
    /// Accepts everything and writes compact lines to `writer`.
    #[must_use]
    pub fn new(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(Box::new(writer)),
            formatter: LineFormatter::default(),
            categories: Vec::new(),
            min_tier: Tier::Trace,
        }
    }

    #[must_use]
    pub fn stderr(name: impl Into<String>) -> Self {
        Self::new(name, io::stderr())
    }

    /// Appends to `path`, creating parent directories as needed.
    ///
    /// # Errors
    /// [`crate::Error::TargetUnavailable`] if the directory or file cannot be opened.
    pub fn file(name: impl Into<String>, path: &Path) -> Result<Self, crate::Error> {
        let unavailable = |source| crate::Error::TargetUnavailable {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(unavailable)?;
            internal::debug("TARGET", &format!("Created directory: {}", parent.display()));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(unavailable)?;
        internal::trace("TARGET", &format!("Opened log file: {}", path.display()));

        Ok(Self::new(name, file))
    }

    #[must_use]
    pub fn formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use]
    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn min_tier(mut self, tier: Tier) -> Self {
        self.min_tier = tier;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn threshold(&self) -> Tier {
        self.min_tier
    }

    #[must_use]
    pub const fn line_formatter(&self) -> &LineFormatter {
        &self.formatter
    }
}

impl Target for StreamTarget {
    fn accepts(&self, tier: Tier, channel: &str) -> bool {
        tier >= self.min_tier
            && (self.categories.is_empty() || self.categories.iter().any(|c| c == channel))
    }

    fn write(&self, entry: &Entry<'_>) -> Result<(), crate::Error> {
        let line = self.formatter.format(entry)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| crate::Error::Poisoned(self.name.clone()))?;
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer
            .lock()
            .map_err(|_| crate::Error::Poisoned(self.name.clone()))?
            .flush()?;
        Ok(())
    }
}
