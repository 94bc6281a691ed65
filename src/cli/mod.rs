//! CLI layer for daytools.
//!
//! Provides the command-line interface using clap, with one subcommand
//! per utility.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, execute_with_input};
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
