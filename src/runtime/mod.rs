//! Process-level collaborators: the execution-context query, the console stream the
//! echo goes to, and process termination for fatal-class severities.

use std::io::{self, Write};

/// Answers whether the current call runs in an interactive console context.
pub trait ExecutionContext: Send + Sync {
    fn is_interactive(&self) -> bool;
}

/// Console invocations echo log lines; server requests never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Console,
    #[default]
    Request,
}

impl ExecutionMode {
    /// CGI-style servers export `GATEWAY_INTERFACE` / `REQUEST_METHOD`; anything else is a console.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("GATEWAY_INTERFACE").is_some()
            || std::env::var_os("REQUEST_METHOD").is_some()
        {
            Self::Request
        } else {
            Self::Console
        }
    }
}

impl ExecutionContext for ExecutionMode {
    fn is_interactive(&self) -> bool {
        matches!(self, Self::Console)
    }
}

/// Sink for the colorized echo line. Best effort: failures are the caller's to ignore.
pub trait Console: Send + Sync {
    /// # Errors
    /// I/O errors from the underlying stream.
    fn echo(&self, text: &str) -> io::Result<()>;
}

/// Writes the echo to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn echo(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Ends the process. Implementations never return.
pub trait Terminate: Send + Sync {
    fn terminate(&self, status: i32) -> !;
}

/// Flushes the standard streams and calls [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&self, status: i32) -> ! {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(status)
    }
}
