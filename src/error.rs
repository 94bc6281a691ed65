//! Error types for daytools operations.
//!
//! This module provides the error hierarchy using `thiserror` for the
//! folder lister, the calculator, and the CLI layer around them.

use thiserror::Error;

/// Result type alias for daytools operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Folder listing errors.
    #[error("{0}")]
    Listing(#[from] ListingError),

    /// Calculator errors (operand parsing, operation lookup).
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// Folder lister errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The folder is missing or cannot be read. Stops the whole batch.
    #[error("please provide valid folder name, looks like the folder does not exist - {folder}")]
    FolderNotFound {
        /// Folder name as the user typed it.
        folder: String,
        /// Underlying I/O reason, kept for logs.
        reason: String,
    },
}

/// Calculator errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Wrong number of positional arguments.
    #[error("expected 3 arguments <num1> <operation> <num2>, got {found}")]
    ArgumentCount {
        /// Number of arguments given.
        found: usize,
    },

    /// Operand text is not a number.
    #[error("could not convert string to float: '{value}'")]
    InvalidOperand {
        /// The offending text.
        value: String,
    },

    /// Operation name outside the supported set.
    #[error("unsupported operation: {name} (supported: add)")]
    UnsupportedOperation {
        /// The unrecognized operation name.
        name: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    InputFailed(String),
}

/// I/O-specific errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// The reader of our output went away (e.g. piped to `head`).
    #[error("broken pipe")]
    BrokenPipe,

    /// Generic I/O error wrapper.
    #[error("{0}")]
    Generic(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            return Self::Io(IoError::BrokenPipe);
        }
        Self::Io(IoError::Generic(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_not_found_display() {
        let err = ListingError::FolderNotFound {
            folder: "B".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "please provide valid folder name, looks like the folder does not exist - B"
        );
    }

    #[test]
    fn test_calc_error_display() {
        let err = CalcError::InvalidOperand {
            value: "eight".to_string(),
        };
        assert_eq!(err.to_string(), "could not convert string to float: 'eight'");

        let err = CalcError::UnsupportedOperation {
            name: "subtract".to_string(),
        };
        assert!(err.to_string().contains("subtract"));

        let err = CalcError::ArgumentCount { found: 2 };
        assert_eq!(
            err.to_string(),
            "expected 3 arguments <num1> <operation> <num2>, got 2"
        );
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::InputFailed("stream closed".to_string());
        assert_eq!(err.to_string(), "failed to read input: stream closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(IoError::Generic(_))));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_broken_pipe() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(IoError::BrokenPipe)));
    }

    #[test]
    fn test_error_from_listing_keeps_message() {
        let err: Error = ListingError::FolderNotFound {
            folder: "docs".to_string(),
            reason: "denied".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Listing(_)));
        assert!(err.to_string().ends_with("does not exist - docs"));
    }

    #[test]
    fn test_error_from_calc_keeps_message() {
        let err: Error = CalcError::UnsupportedOperation {
            name: "mul".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Calc(_)));
        assert!(err.to_string().starts_with("unsupported operation: mul"));
    }
}
