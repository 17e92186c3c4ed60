//! Grz CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use grz_runtime::cli::{parse_args, run};
use grz_runtime::logging;

fn main() -> ExitCode {
    let config = match parse_args(env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Run `grz --help` for usage.");
            return ExitCode::FAILURE;
        }
    };

    logging::init(config.verbose);

    let mut stdout = io::stdout().lock();
    match run(&config, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}
