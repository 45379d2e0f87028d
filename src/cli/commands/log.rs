//! `plugin-log log <severity> <message>`: one record through a freshly set-up plugin.

use crate::backend::{Backend, DEFAULT_CHANNEL, Dispatcher, StreamTarget};
use crate::config::Config;
use crate::context::{Context, ProcessAmbient};
use crate::internal;
use crate::level::{Severity, Tier};
use crate::plugin::Plugin;
use crate::runtime::ExecutionMode;
use std::process::ExitCode;
use std::sync::Arc;

/// Sets up the dispatcher the way a host would at plugin init, then logs once.
///
/// Fatal-class severities end the process inside this call.
#[must_use]
pub fn cmd_log(config: &Config, severity: &str, message: &str, context: Context) -> ExitCode {
    let base_path = std::env::current_dir().unwrap_or_default();
    let plugin = Plugin::from_config(config, base_path);

    // Host-channel messages (failed registrations) stay visible on stderr
    let mut dispatcher = Dispatcher::new().with_target(
        StreamTarget::stderr(DEFAULT_CHANNEL)
            .categories([DEFAULT_CHANNEL])
            .min_tier(Tier::Warning),
    );
    if config.target.enabled {
        plugin.register_log_target(&mut dispatcher, &config.target);
    }
    let dispatcher = Arc::new(dispatcher);

    let execution = if config.console.enabled {
        ExecutionMode::Console
    } else {
        ExecutionMode::Request
    };
    let logger = plugin
        .logger(dispatcher.clone())
        .execution(execution)
        .ambient(ProcessAmbient)
        .build();

    let result = match severity.parse::<Severity>() {
        Ok(Severity::Emergency) => logger.emergency(message, context).map(|never| match never {}),
        Ok(Severity::Alert) => logger.alert(message, context).map(|never| match never {}),
        Ok(Severity::Critical) => logger.critical(message, context).map(|never| match never {}),
        Ok(severity) => logger.log_severity(severity, message, context),
        Err(_) => {
            internal::debug("CLI", &format!("Unknown severity '{severity}', logging at INFO"));
            logger.log(severity, message, context)
        }
    };

    if let Err(e) = result.and_then(|()| dispatcher.flush()) {
        internal::error("CLI", &format!("Log submission failed: {e}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
