//! The `testava` harness: banner, command parsing, and the completion report.
//!
//! No tests are executed. A `test` command only records its options and
//! reports completion.

use std::io::{BufRead, Write};

use tracing::info;

use crate::args::{TestCommand, TestOptions};
use crate::error::CliError;

pub const BANNER: &str = "Ava Test Program [0.X]\nCopyright 2010 David J. Walling. MIT License.\n";
pub const USAGE: &str = "Usage: testava test [all] [dump]\n";
pub const COMPLETED: &str = "\nTests Completed\n";

/// Run the harness and return the process exit code.
///
/// `args` excludes the program name. When it is empty the command is read
/// from `input` instead.
pub fn run_testava(
    args: &[String],
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<i32, CliError> {
    write_all(out, BANNER)?;

    let command = if args.is_empty() {
        TestCommand::read_from(input)?
    } else {
        TestCommand::parse(args)
    };

    match command {
        TestCommand::Run(options) => run_tests(options, out)?,
        TestCommand::Usage => write_all(out, USAGE)?,
    }
    Ok(0)
}

fn run_tests(options: TestOptions, out: &mut impl Write) -> Result<(), CliError> {
    info!(all = options.all, dump = options.dump, "running tests");
    write_all(out, COMPLETED)
}

fn write_all(out: &mut impl Write, text: &str) -> Result<(), CliError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::WriteOutput)
}
