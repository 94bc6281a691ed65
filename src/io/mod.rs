//! I/O utilities for daytools.
//!
//! Provides prompted line input used by interactive commands.

pub mod prompt;

pub use prompt::read_prompted_line;
