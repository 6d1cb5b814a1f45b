//! Command-line interface for querying transit catalogues and drawing
//! their maps.
//!
//! Both subcommands read a JSON input document from a file or standard
//! input, build the catalogue and write their result to a file or standard
//! output. Diagnostics go to standard error through `env_logger`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use env_logger::Env;

mod document_io;
mod error;
mod query;
mod render;

pub use error::CliError;

use query::QueryArgs;
use render::RenderArgs;

const ARG_OUTPUT: &str = "output";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] describing the first failure.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    init_logging(cli.verbose);
    match cli.command {
        Command::Query(args) => query::run_query(args),
        Command::Render(args) => render::run_render(args),
    }
}

/// Install the stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise warnings are shown, or debug
/// output when `verbose` is set. A logger that is already installed is
/// left in place.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
    if installed.is_err() {
        log::debug!("logger already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "transit-guide",
    about = "Answer bus network queries and draw network maps",
    version
)]
struct Cli {
    /// Log debug details to standard error.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer the stat requests of an input document as JSON.
    Query(QueryArgs),
    /// Draw the network of an input document as SVG.
    Render(RenderArgs),
}

#[cfg(test)]
mod tests;
