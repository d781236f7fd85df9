//! Ava test harness CLI.

use ava_cli::{init_tracing, run_testava};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match run_testava(&args, stdin.lock(), &mut stdout.lock()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
