//! Supported arithmetic operations.

use crate::error::CalcError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Named arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Sum of two operands.
    Add,
}

impl Operation {
    /// All supported operations.
    pub const ALL: &'static [Self] = &[Self::Add];

    /// Name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
        }
    }

    /// Label used in the result line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Addition",
        }
    }

    /// Applies the operation.
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => add(lhs, rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::UnsupportedOperation {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adds two numbers.
#[must_use]
pub fn add(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}
