//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::calc::NAME_VAR;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// daytools: a folder lister and a greeting calculator.
#[derive(Parser, Debug)]
#[command(name = "daytools")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the entries of each folder, stopping at the first missing one.
    ///
    /// Folder names are read from a prompt when none are given.
    #[command(name = "list", alias = "ls")]
    List {
        /// Folders to list, in order.
        folders: Vec<PathBuf>,
    },

    /// Greet the user, then apply an operation to two numbers.
    ///
    /// The argument count is checked after the greeting is printed.
    Calc {
        /// Name to greet.
        #[arg(long, env = NAME_VAR, value_parser = clap::value_parser!(OsString))]
        name: Option<OsString>,

        /// `<num1> <operation> <num2>`, e.g. `8 add 7`.
        #[arg(
            value_name = "ARGS",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(OsString)
        )]
        args: Vec<OsString>,
    },
}
