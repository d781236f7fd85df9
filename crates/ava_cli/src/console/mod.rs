//! The `ava` console loop.
//!
//! Starts a [`Driver`], consumes input lines until EOF or the `exit`
//! command, then stops the driver. Lines are raw bytes and are not
//! interpreted otherwise, so input need not be UTF-8.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::driver::Driver;
use crate::error::CliError;

/// Line that ends a console session.
pub const EXIT: &str = "exit";

/// Run one console session and return the driver's exit code.
///
/// If [`Driver::start`] refuses the session, no input is read and `stop`
/// is not called. Once started, `stop` always runs, also when reading
/// fails.
pub fn run_console<D: Driver + ?Sized>(
    driver: &mut D,
    args: &[String],
    mut input: impl BufRead,
) -> Result<i32, CliError> {
    if !driver.start(args) {
        debug!("driver refused session");
        return Ok(driver.result());
    }
    let session = read_until_exit(&mut input);
    driver.stop();
    session?;
    Ok(driver.result())
}

fn read_until_exit(input: &mut impl BufRead) -> Result<(), CliError> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .map_err(CliError::ReadInput)?;
        if read == 0 {
            debug!("end of input");
            return Ok(());
        }
        let command = strip_line_ending(&line);
        trace!(command = %command.escape_ascii(), "console line");
        if command == EXIT.as_bytes() {
            debug!("exit requested");
            return Ok(());
        }
    }
}

/// Drop one trailing `\n`, then one trailing `\r`.
///
/// Shared by both front ends so a line typed on either ends the same way.
pub(crate) fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
