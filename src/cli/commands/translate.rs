//! `plugin-log translate <message>`: look a message up the way the plugin would.

use crate::config::Config;
use crate::context::Context;
use crate::i18n::MemoryCatalog;
use crate::internal;
use crate::plugin::Plugin;
use std::process::ExitCode;
use std::sync::Arc;

/// Prints the translation, or the source text when the catalog has none.
#[must_use]
pub fn cmd_translate(
    config: &Config,
    message: &str,
    language: Option<&str>,
    params: &Context,
) -> ExitCode {
    let catalog = match config.translations_path() {
        Some(path) => match MemoryCatalog::load(&path) {
            Ok(catalog) => catalog,
            Err(e) => {
                internal::error(
                    "CLI",
                    &format!("Failed to load catalog {}: {e}", path.display()),
                );
                return ExitCode::FAILURE;
            }
        },
        None => {
            internal::warn("CLI", "No translations.path configured");
            MemoryCatalog::new()
        }
    }
    .default_language(&config.translations.default_language);

    let plugin = Plugin::from_config(config, std::env::current_dir().unwrap_or_default());
    let translator = plugin.translator(Arc::new(catalog));
    println!("{}", translator.t(message, params, language));
    ExitCode::SUCCESS
}
