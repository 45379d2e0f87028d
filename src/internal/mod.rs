//! plugin-log's own diagnostics (config loading, target setup), kept apart from the
//! plugin loggers it builds so a misconfigured plugin target can't swallow them.
//!
//! `OnceLock` makes the first `init` win; calls before init are dropped.

use crate::backend::{Backend, Dispatcher, LogRecord, StreamTarget};
use crate::config::Config;
use crate::context::Context;
use crate::fmt::LineFormatter;
use crate::level::Tier;
use std::sync::OnceLock;

static INTERNAL: OnceLock<Dispatcher> = OnceLock::new();

const FORMAT: &str = "[{level}] {channel}  {message}\n";

/// Initializer for callers without a config. Diagnostics go to stderr at WARNING and above.
pub fn init() {
    INTERNAL.get_or_init(|| build(Tier::Warning));
}

/// Preferred initializer; the diagnostics threshold comes from `general.diagnostics`.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL.get().is_some();
    INTERNAL.get_or_init(|| build(config.diagnostics_tier()));
    if !was_init {
        debug(
            "INTERNAL",
            &format!(
                "Diagnostics ready: channel={}, dev_mode={}",
                config.general.channel,
                config.dev_mode()
            ),
        );
    }
}

fn build(threshold: Tier) -> Dispatcher {
    Dispatcher::new().with_target(
        StreamTarget::stderr("internal")
            .formatter(LineFormatter::new(FORMAT))
            .min_tier(threshold),
    )
}

fn log(tier: Tier, scope: &str, msg: &str) {
    if let Some(dispatcher) = INTERNAL.get() {
        let record = LogRecord::new(tier.as_str().to_lowercase(), msg, Context::new());
        let _ = dispatcher.submit(&record, tier, scope);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Tier::Trace, scope, msg);
}

/// Tier has no DEBUG; debug diagnostics share TRACE.
pub fn debug(scope: &str, msg: &str) {
    log(Tier::Trace, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Tier::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Tier::Warning, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Tier::Error, scope, msg);
}
