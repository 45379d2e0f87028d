//! Helpers shared by the subcommands.

use super::Cli;
use crate::config::Config;
use crate::context::Context;
use serde_json::Value;

/// clap value parser for `key=value`.
///
/// # Errors
/// Input without `=` or with an empty key.
pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// `5` becomes a number and `{"a":1}` an object; anything that isn't JSON stays a string.
#[must_use]
pub fn to_context(pairs: &[(String, String)]) -> Context {
    pairs
        .iter()
        .map(|(k, v)| {
            let value = serde_json::from_str(v).unwrap_or_else(|_| Value::String(v.clone()));
            (k.clone(), value)
        })
        .collect()
}

/// Loads the config named by `--config` (or the default one) and applies the global flags.
///
/// # Errors
/// Unreadable or malformed config.
pub fn load_config(cli: &Cli) -> Result<Config, crate::Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(channel) = &cli.channel {
        config.general.channel.clone_from(channel);
    }
    if cli.dev {
        config.general.dev_mode = Some(true);
    }
    Ok(config)
}
