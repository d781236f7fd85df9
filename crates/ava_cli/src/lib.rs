//! Ava command-line front ends.
//!
//! Two programs share this library:
//!
//! - `testava`: parses `test [all] [dump]` from argv or from one line of
//!   standard input (split with [`ava_tokstr`]) and reports completion.
//! - `ava`: runs an [`IdleDriver`] console session until `exit`.

pub mod args;
pub mod console;
pub mod driver;
pub mod error;
pub mod harness;
mod tracing_setup;

pub use args::{TestCommand, TestOptions};
pub use console::run_console;
pub use driver::{Driver, IdleDriver};
pub use error::CliError;
pub use harness::run_testava;
pub use tracing_setup::init_tracing;
