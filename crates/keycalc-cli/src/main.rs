//! keycalc: pocket calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! keycalc eval "2+3*4"          # 20, strictly left to right
//! keycalc press 5 MOD 3 =       # 2
//! keycalc press --trace 9 DEL 4 # display after every press
//! keycalc repl                  # buttons from stdin, one line at a time
//! keycalc keypad                # show the layout
//! ```

use clap::Parser;
use keycalc_cli::{logging, Cli, CliResult, Runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(config.verbosity);
    tracing::debug!(?config, "starting");

    let runner = Runner::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    runner.run(&cli.command, stdin.lock(), &mut stdout)
}
