//! Driver lifecycle used by the `ava` console.
//!
//! A driver is started with the program arguments, kept alive while the
//! console reads input, then stopped. Its [`result`](Driver::result) becomes
//! the process exit code.

use tracing::debug;

/// Lifecycle hooks for a console session.
pub trait Driver {
    /// Put the driver into its initial state.
    fn init(&mut self);

    /// Return to the initial state.
    fn reset(&mut self) {
        self.init();
    }

    /// Begin a session. Returns `false` to skip the console loop.
    fn start(&mut self, args: &[String]) -> bool;

    /// End a session started by [`start`](Driver::start).
    fn stop(&mut self);

    /// Exit code for the session.
    fn result(&self) -> i32;
}

/// Driver that does nothing: every session starts, and exits with `0`.
///
/// Built through [`IdleDriver::new`] (or `Default`), which runs `init`.
/// Dropping it runs `reset`.
#[derive(Debug, PartialEq, Eq)]
pub struct IdleDriver;

impl IdleDriver {
    pub fn new() -> Self {
        let mut driver = IdleDriver;
        driver.init();
        driver
    }
}

impl Default for IdleDriver {
    fn default() -> Self {
        IdleDriver::new()
    }
}

impl Driver for IdleDriver {
    fn init(&mut self) {
        debug!("idle driver init");
    }

    fn start(&mut self, args: &[String]) -> bool {
        debug!(?args, "idle driver start");
        true
    }

    fn stop(&mut self) {
        debug!("idle driver stop");
    }

    fn result(&self) -> i32 {
        0
    }
}

impl Drop for IdleDriver {
    fn drop(&mut self) {
        self.reset();
    }
}
