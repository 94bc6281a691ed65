//! # daytools
//!
//! Two small command-line utilities sharing one binary.
//!
//! ## Features
//!
//! - **Folder lister**: prints the entries of each folder in order and stops
//!   the whole batch at the first folder that does not exist
//! - **Calculator**: greets the user by name, then adds two numbers given on
//!   the command line
//! - **Output formats**: plain text or JSON

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod calc;
pub mod cli;
pub mod error;
pub mod io;
pub mod lister;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export utility types
pub use calc::{
    Calculation, Greeting, Operation, evaluate, evaluate_args, format_number, greet,
};
pub use lister::{
    FolderListing, ListingReport, list_folder, list_folders, list_folders_each, parse_folder_names,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
