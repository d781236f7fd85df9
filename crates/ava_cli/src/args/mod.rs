//! Command parsing for the `testava` harness.
//!
//! The accepted grammar is `testava test [all] [dump]`. Words come either
//! from argv or, when argv is empty, from one line of standard input split
//! with [`ava_tokstr::split_line`].

use std::io::BufRead;

use tracing::debug;

use crate::console::strip_line_ending;
use crate::error::CliError;

pub const TEST: &str = "test";
pub const ALL: &str = "all";
pub const DUMP: &str = "dump";
pub const HELP: &str = "help";

/// Most words a command line may carry (`test` plus two options).
pub const MAX_WORDS: usize = 3;

/// Most bytes of standard input considered for a command line.
pub const MAX_LINE: u64 = 254;

/// Options for a test run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestOptions {
    /// Run every test, not only the default selection.
    pub all: bool,
    /// Dump intermediate state while running.
    pub dump: bool,
}

/// What `testava` was asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestCommand {
    /// `test [all] [dump]`
    Run(TestOptions),
    /// Anything else, including `help`.
    Usage,
}

impl TestCommand {
    /// Interpret command words (program name excluded).
    ///
    /// Unknown option words after `test` are ignored.
    pub fn parse<S: AsRef<str>>(words: &[S]) -> TestCommand {
        if words.len() > MAX_WORDS {
            debug!(count = words.len(), "too many arguments");
            return TestCommand::Usage;
        }

        let mut words = words.iter().map(AsRef::as_ref);
        match words.next() {
            Some(TEST) => {}
            Some(HELP) => {
                debug!("help requested");
                return TestCommand::Usage;
            }
            other => {
                debug!(command = ?other, "not a test command");
                return TestCommand::Usage;
            }
        }

        let mut options = TestOptions::default();
        for word in words {
            match word {
                ALL => options.all = true,
                DUMP => options.dump = true,
                _ => debug!(word, "ignoring unknown option"),
            }
        }
        TestCommand::Run(options)
    }

    /// Read one command line from `input` and interpret it.
    ///
    /// At most [`MAX_LINE`] bytes are read. A trailing `\n` or `\r\n` is
    /// dropped, as the `ava` console does. EOF reads as an empty line.
    pub fn read_from(input: impl BufRead) -> Result<TestCommand, CliError> {
        let mut line = Vec::new();
        input
            .take(MAX_LINE)
            .read_until(b'\n', &mut line)
            .map_err(CliError::ReadInput)?;
        let line = String::from_utf8_lossy(strip_line_ending(&line));
        let words = ava_tokstr::split_line(&line, MAX_WORDS);
        debug!(?words, "read command line");
        Ok(TestCommand::parse(&words))
    }
}
