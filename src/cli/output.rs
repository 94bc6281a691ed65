//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::calc::{Calculation, Greeting};
use crate::error::Error;
use crate::lister::{FolderListing, ListingReport};
use serde::Serialize;
use std::fmt::Write;
use std::io;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Header printed before a folder's entries.
#[must_use]
pub fn listing_header(folder: &str) -> String {
    format!("=========== Listing files in folder - {folder}")
}

/// Formats a folder batch.
#[must_use]
pub fn format_listing_report(report: &ListingReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_listing_report_text(report),
        OutputFormat::Json => format_json(report),
    }
}

fn format_listing_report_text(report: &ListingReport) -> String {
    let mut output: String = report.listings.iter().map(format_folder_listing).collect();
    if let Some(ref folder) = report.missing {
        output.push_str(&format_missing_folder(folder));
    }
    output
}

/// Formats one listed folder as text: the header, then one entry per line.
#[must_use]
pub fn format_folder_listing(listing: &FolderListing) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", listing_header(&listing.folder));
    for entry in &listing.entries {
        let _ = writeln!(output, "{entry}");
    }
    output
}

/// Formats the line that ends a batch at a missing folder.
#[must_use]
pub fn format_missing_folder(folder: &str) -> String {
    format!("please provide valid folder name, looks like the folder does not exist - {folder}\n")
}

/// Formats the greeting alone, used when the calculation fails.
#[must_use]
pub fn format_greeting(greeting: &Greeting) -> String {
    format!("{greeting}\n")
}

/// Formats a greeting followed by its calculation.
#[must_use]
pub fn format_calc(greeting: &Greeting, calculation: &Calculation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{greeting}\n{calculation}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CalcOutput<'a> {
                greeting: &'a Greeting,
                calculation: &'a Calculation,
            }
            format_json(&CalcOutput {
                greeting,
                calculation,
            })
        }
    }
}

/// Formats an error for the given output format.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": error.to_string() })),
    }
}

/// Writes `text` to `out` and flushes.
///
/// A reader that has gone away (e.g. output piped to `head`) is not an
/// error.
///
/// # Errors
///
/// Returns any other write error.
pub fn write_output<W: io::Write>(out: &mut W, text: &str) -> io::Result<()> {
    match out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}
