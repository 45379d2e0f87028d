//! Command-line interface. A `plugin-log` invocation is always a console context, so every
//! log call echoes its colored line before the record reaches the dispatcher.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// plugin-log - Log through a plugin channel from the command line.
#[derive(Parser)]
#[command(
    name = "plugin-log",
    version,
    about = "Log through a plugin channel from the command line"
)]
pub struct Cli {
    /// Config file (default: ~/.config/plugin-log/plugin-log.conf)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Channel / plugin handle, overrides `general.channel`
    #[arg(long, global = true)]
    pub channel: Option<String>,
    /// Force development mode
    #[arg(long, global = true)]
    pub dev: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message. emergency, alert and critical exit with status 1.
    Log {
        /// Severity name (emergency … debug); unknown names log at INFO
        severity: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// Context entry; values that parse as JSON are stored as JSON
        #[arg(short, long = "context", value_name = "KEY=VALUE", value_parser = util::parse_pair)]
        context: Vec<(String, String)>,
    },
    /// Translate a message with the configured catalog.
    Translate {
        /// Source message
        #[arg(required = true)]
        message: Vec<String>,
        /// Target language (default: catalog default)
        #[arg(long)]
        lang: Option<String>,
        /// Placeholder value
        #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = util::parse_pair)]
        params: Vec<(String, String)>,
    },
}

pub use commands::{cmd_log, cmd_translate};
pub use util::{load_config, parse_pair, to_context};
