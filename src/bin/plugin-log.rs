//! `plugin-log` binary.
//!
//! Usage:
//!   plugin-log log <severity> <message...> [-c key=value]...
//!   plugin-log translate <message...> [--lang L] [-p key=value]...
//!
//! Global flags: `--config PATH`, `--channel NAME`, `--dev`.

use clap::Parser;
use plugin_log::cli::{Cli, Command, cmd_log, cmd_translate, load_config, to_context};
use plugin_log::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config decides the channel, dev mode and target paths, so it loads before anything logs
    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };
    internal::init_with_config(&config);

    match cli.command {
        Command::Log {
            severity,
            message,
            context,
        } => cmd_log(&config, &severity, &message.join(" "), to_context(&context)),
        Command::Translate {
            message,
            lang,
            params,
        } => cmd_translate(
            &config,
            &message.join(" "),
            lang.as_deref(),
            &to_context(&params),
        ),
    }
}
