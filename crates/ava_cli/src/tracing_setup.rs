//! Log output for the front ends.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber for `ava` and `testava`.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, for example
/// `RUST_LOG=ava_cli=debug` or `RUST_LOG=ava_tokstr=trace`. Repeated calls
/// are no-ops. Events are written to stderr; stdout carries program output
/// only.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(filter)
            .init();
    });
}
