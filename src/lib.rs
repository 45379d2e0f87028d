//! `plugin-log` - leveled logging, template roots and translations for CMS plugins.
//!
//! The centre of the crate is [`LevelLogger`]: eight severity entry points that map onto
//! the host dispatcher's four tiers, echo a colored line in console contexts, enrich
//! error-class records with the ambient request snapshot and end the process for
//! emergency, alert and critical.
//!
//! # Example
//!
//! ```
//! use plugin_log::context::{self, AmbientSnapshot};
//! use plugin_log::runtime::ExecutionMode;
//! use plugin_log::{Dispatcher, LevelLogger, StreamTarget};
//! use std::sync::Arc;
//!
//! let dispatcher = Dispatcher::new().with_target(StreamTarget::new("memory", std::io::sink()));
//! let logger = LevelLogger::builder("myplugin", Arc::new(dispatcher))
//!     .execution(ExecutionMode::Request)
//!     .ambient(AmbientSnapshot::new().query_param("page", "2"))
//!     .build();
//!
//! logger.info("Cache warmed", context::Context::new()).unwrap();
//! logger
//!     .warning("Disk low on {volume}", context::from_pairs([("volume", "/data")]))
//!     .unwrap();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `plugin-log` command-line binary

pub mod backend;
pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod i18n;
pub mod internal;
pub mod level;
pub mod logger;
pub mod plugin;
pub mod runtime;
pub mod templates;

#[cfg(feature = "cli")]
pub mod cli;

pub use backend::{Backend, Dispatcher, LogRecord, StreamTarget, Target};
pub use config::Config;
pub use context::{AmbientSnapshot, AmbientSource, Context};
pub use error::Error;
pub use fmt::LineFormatter;
pub use i18n::{Catalog, MemoryCatalog, Translator};
pub use level::{Mapping, Severity, Tier};
pub use logger::{LevelLogger, LevelLoggerBuilder};
pub use plugin::Plugin;
pub use templates::TemplateRoots;
