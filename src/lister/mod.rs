//! Folder lister.
//!
//! Enumerates the immediate entries of folders in the order they were given
//! and stops the whole batch at the first folder that cannot be read.

pub mod listing;

pub use listing::{FolderListing, ListingReport, list_folder, list_folders, list_folders_each};

use std::ffi::OsStr;
use std::path::PathBuf;

/// Prompt shown when folder names are read interactively.
pub const FOLDER_PROMPT: &str = "give folder names with spaces in between: ";

/// Splits one line of input into folder names.
///
/// Any run of whitespace separates names; empty tokens are dropped. Names
/// that are not UTF-8 are kept as-is on Unix.
#[must_use]
pub fn parse_folder_names<S: AsRef<OsStr>>(line: S) -> Vec<PathBuf> {
    split_whitespace(line.as_ref())
}

#[cfg(unix)]
fn split_whitespace(line: &OsStr) -> Vec<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    line.as_bytes()
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty())
        .map(|token| PathBuf::from(OsStr::from_bytes(token)))
        .collect()
}

#[cfg(not(unix))]
fn split_whitespace(line: &OsStr) -> Vec<PathBuf> {
    line.to_string_lossy()
        .split_whitespace()
        .map(PathBuf::from)
        .collect()
}
