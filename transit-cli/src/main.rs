//! Entry point for the `transit-guide` command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use transit_cli::CliError;

fn main() -> ExitCode {
    match transit_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("transit-guide: {err}");
            ExitCode::FAILURE
        }
    }
}
