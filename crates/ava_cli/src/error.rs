//! Errors surfaced by the command-line front ends.

use std::io;

use thiserror::Error;

/// Front-end failure. Only I/O on the standard streams can fail.
#[derive(Error, Debug)]
pub enum CliError {
    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    ReadInput(#[source] io::Error),

    /// Standard output could not be written.
    #[error("failed to write standard output: {0}")]
    WriteOutput(#[source] io::Error),
}
