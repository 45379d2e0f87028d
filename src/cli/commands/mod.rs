//! One file per subcommand so each handler owns its argument handling and error reporting.

mod log;
mod translate;

pub use log::cmd_log;
pub use translate::cmd_translate;
