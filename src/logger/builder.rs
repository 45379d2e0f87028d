//! Stepwise construction for [`LevelLogger`]. Only the channel and backend are required;
//! every other collaborator has a process default.

use super::LevelLogger;
use crate::backend::Backend;
use crate::context::{AmbientSource, NoAmbient};
use crate::internal;
use crate::runtime::{Console, ExecutionContext, ExecutionMode, ProcessExit, Stdout, Terminate};
use std::sync::Arc;

pub struct LevelLoggerBuilder {
    channel: String,
    backend: Arc<dyn Backend>,
    execution: Box<dyn ExecutionContext>,
    console: Box<dyn Console>,
    ambient: Box<dyn AmbientSource>,
    terminator: Box<dyn Terminate>,
}

impl LevelLoggerBuilder {
    /// Defaults: execution mode from the environment, echo to stdout, no ambient data,
    /// real process exit.
    #[must_use]
    pub fn new(channel: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            channel: channel.into(),
            backend,
            execution: Box::new(ExecutionMode::from_env()),
            console: Box::new(Stdout),
            ambient: Box::new(NoAmbient),
            terminator: Box::new(ProcessExit),
        }
    }

    #[must_use]
    pub fn execution(mut self, execution: impl ExecutionContext + 'static) -> Self {
        self.execution = Box::new(execution);
        self
    }

    #[must_use]
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    #[must_use]
    pub fn ambient(mut self, ambient: impl AmbientSource + 'static) -> Self {
        self.ambient = Box::new(ambient);
        self
    }

    /// Tests swap this out; production code keeps [`ProcessExit`].
    #[must_use]
    pub fn terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    #[must_use]
    pub fn build(self) -> LevelLogger {
        internal::debug(
            "LOGGER",
            &format!(
                "Logger ready: channel={}, interactive={}",
                self.channel,
                self.execution.is_interactive()
            ),
        );
        LevelLogger {
            channel: self.channel,
            backend: self.backend,
            execution: self.execution,
            console: self.console,
            ambient: self.ambient,
            terminator: self.terminator,
        }
    }
}
