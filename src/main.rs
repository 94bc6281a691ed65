//! Binary entry point for daytools.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use daytools::cli::output::{OutputFormat, format_error, write_output};
use daytools::cli::{Cli, execute};
use daytools::error::{Error, IoError};
use daytools::logging;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    tracing::debug!(command = ?cli.command, "starting");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Output piped to something like `head` that exited early.
        Err(Error::Io(IoError::BrokenPipe)) => ExitCode::SUCCESS,
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    if let Err(write_err) = write_output(&mut io::stdout(), &error_output) {
                        eprintln!("Error: {write_err}");
                    }
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
