//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::calc::{evaluate_args, greet};
use crate::cli::output::{
    OutputFormat, format_calc, format_folder_listing, format_greeting, format_listing_report,
    format_missing_folder,
};
use crate::cli::parser::{Cli, Commands};
use crate::error::Result;
use crate::io::read_prompted_line;
use crate::lister::{FOLDER_PROMPT, list_folders, list_folders_each, parse_folder_names};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Executes the CLI command against the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_with_input(cli, &mut stdin.lock(), &mut stdout.lock())
}

/// Executes the CLI command with explicit input and output streams.
///
/// `input` is only read when a command needs interactive input. The
/// interactive prompt and all command output are written to `output`.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute_with_input<R, W>(cli: &Cli, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::List { folders } => cmd_list(folders, input, output, format),
        Commands::Calc { name, args } => cmd_calc(name.as_deref(), args, output, format),
    }
}

// ==================== Command Implementations ====================

fn cmd_list<R, W>(
    folders: &[PathBuf],
    input: &mut R,
    output: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let folders = if folders.is_empty() {
        // JSON output stays parseable, so the prompt is text-only.
        let prompt = if format == OutputFormat::Text { FOLDER_PROMPT } else { "" };
        read_prompted_line(input, output, prompt)?
            .map(parse_folder_names)
            .unwrap_or_default()
    } else {
        folders.to_vec()
    };

    match format {
        OutputFormat::Text => {
            // Each folder is written as soon as it is read.
            let report = list_folders_each(&folders, |listing| {
                output.write_all(format_folder_listing(listing).as_bytes())?;
                output.flush()
            })?;
            if let Some(ref folder) = report.missing {
                output.write_all(format_missing_folder(folder).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            let report = list_folders(&folders);
            output.write_all(format_listing_report(&report, format).as_bytes())?;
        }
    }
    output.flush()?;
    Ok(())
}

fn cmd_calc<W: Write>(
    name: Option<&OsStr>,
    args: &[OsString],
    output: &mut W,
    format: OutputFormat,
) -> Result<()> {
    let name = name.map(OsStr::to_string_lossy);
    let greeting = greet(name.as_deref());
    let args: Vec<Cow<'_, str>> = args.iter().map(|arg| arg.to_string_lossy()).collect();

    match evaluate_args(&args) {
        Ok(calculation) => {
            output.write_all(format_calc(&greeting, &calculation, format).as_bytes())?;
            output.flush()?;
            Ok(())
        }
        Err(e) => {
            // The greeting precedes argument checks, so text output keeps it.
            if format == OutputFormat::Text {
                output.write_all(format_greeting(&greeting).as_bytes())?;
                output.flush()?;
            }
            Err(e.into())
        }
    }
}
