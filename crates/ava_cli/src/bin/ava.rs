//! Ava console CLI.
//!
//! Reads lines until `exit` or end of input.

use ava_cli::{init_tracing, run_console, IdleDriver};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut driver = IdleDriver::new();

    let result = run_console(&mut driver, &args, std::io::stdin().lock());
    // `process::exit` skips destructors; reset the driver first.
    drop(driver);

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
