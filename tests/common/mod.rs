//! Test doubles for the logger's collaborators.

#![allow(dead_code)]

use plugin_log::backend::{Backend, LogRecord};
use plugin_log::runtime::{Console, Terminate};
use plugin_log::{Error, Tier};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// One `submit` call as the backend saw it.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub record: LogRecord,
    pub tier: Tier,
    pub channel: String,
}

/// Backend that remembers every submission and can be told to fail.
#[derive(Default)]
pub struct RecordingBackend {
    submitted: Mutex<Vec<Submitted>>,
    flushes: Mutex<usize>,
    fail: bool,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn submitted(&self) -> Vec<Submitted> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn last(&self) -> Submitted {
        self.submitted().pop().expect("nothing submitted")
    }

    pub fn flushes(&self) -> usize {
        *self.flushes.lock().unwrap()
    }
}

impl Backend for RecordingBackend {
    fn submit(&self, record: &LogRecord, tier: Tier, channel: &str) -> Result<(), Error> {
        if self.fail {
            return Err(Error::Io(io::Error::other("backend down")));
        }
        self.submitted.lock().unwrap().push(Submitted {
            record: record.clone(),
            tier,
            channel: channel.to_string(),
        });
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

/// Console that captures the echo text.
#[derive(Clone, Default)]
pub struct CaptureConsole(Arc<Mutex<String>>);

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl Console for CaptureConsole {
    fn echo(&self, text: &str) -> io::Result<()> {
        self.0.lock().unwrap().push_str(text);
        Ok(())
    }
}

/// Panic payload standing in for process exit.
#[derive(Debug, PartialEq, Eq)]
pub struct Exit(pub i32);

/// Terminator that unwinds with [`Exit`] instead of ending the test process.
pub struct PanicTerminator;

impl Terminate for PanicTerminator {
    fn terminate(&self, status: i32) -> ! {
        std::panic::panic_any(Exit(status))
    }
}

/// Runs `f`, expecting it to "terminate"; returns the exit status.
pub fn exit_status<F: FnOnce()>(f: F) -> Option<i32> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    match result {
        Ok(()) => None,
        Err(payload) => payload.downcast_ref::<Exit>().map(|e| e.0),
    }
}

/// In-memory writer for stream targets.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
