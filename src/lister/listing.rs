//! Directory enumeration and batch processing.

use crate::error::ListingError;
use serde::Serialize;
use std::convert::Infallible;
use std::fs;
use std::path::Path;

/// Entries of one successfully enumerated folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderListing {
    /// Folder name as given by the user.
    pub folder: String,
    /// Immediate entry names, sorted.
    pub entries: Vec<String>,
}

/// Outcome of processing a batch of folders.
///
/// Folders after `missing` are never visited, so they appear in neither
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingReport {
    /// Folders enumerated before the batch stopped.
    pub listings: Vec<FolderListing>,
    /// The folder that stopped the batch.
    pub missing: Option<String>,
}

impl ListingReport {
    /// Returns true if every requested folder was listed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.missing.is_none()
    }
}

/// Enumerates the immediate entries of a folder.
///
/// Folder and entry names that are not valid UTF-8 are rendered lossily.
///
/// # Errors
///
/// Returns [`ListingError::FolderNotFound`] if the folder is missing, is not
/// a directory, or cannot be read.
pub fn list_folder<P: AsRef<Path>>(folder: P) -> Result<FolderListing, ListingError> {
    let path = folder.as_ref();
    let name = path.to_string_lossy().into_owned();
    let not_found = |e: std::io::Error| ListingError::FolderNotFound {
        folder: name.clone(),
        reason: e.to_string(),
    };

    let mut entries = fs::read_dir(path)
        .map_err(not_found)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(not_found)?;
    entries.sort();

    tracing::debug!(folder = %name, count = entries.len(), "listed folder");

    Ok(FolderListing {
        folder: name,
        entries,
    })
}

/// Lists each folder in order, stopping at the first one that fails.
pub fn list_folders<P: AsRef<Path>>(folders: &[P]) -> ListingReport {
    match list_folders_each(folders, |_| Ok::<(), Infallible>(())) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Lists each folder in order, handing every listing to `on_listing` as
/// soon as it is read.
///
/// The batch stops at the first unreadable folder, or at the first error
/// returned by `on_listing`.
///
/// # Errors
///
/// Returns the first error from `on_listing`.
pub fn list_folders_each<P, E, F>(folders: &[P], mut on_listing: F) -> Result<ListingReport, E>
where
    P: AsRef<Path>,
    F: FnMut(&FolderListing) -> Result<(), E>,
{
    let mut report = ListingReport::default();

    for folder in folders {
        match list_folder(folder) {
            Ok(listing) => {
                on_listing(&listing)?;
                report.listings.push(listing);
            }
            Err(ListingError::FolderNotFound { folder, reason }) => {
                tracing::debug!(folder = %folder, %reason, "folder unreadable, stopping batch");
                report.missing = Some(folder);
                break;
            }
        }
    }

    tracing::info!(
        listed = report.listings.len(),
        requested = folders.len(),
        stopped = !report.is_complete(),
        "folder batch finished"
    );

    Ok(report)
}
