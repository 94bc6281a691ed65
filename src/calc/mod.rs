//! Greeting calculator.
//!
//! Greets the user by name, then applies a named arithmetic operation to
//! two operands given as text.

pub mod greeting;
pub mod number;
pub mod operation;

pub use greeting::{Greeting, NAME_VAR, greet};
pub use number::{format_number, parse_operand};
pub use operation::{Operation, add};

use crate::error::CalcError;
use serde::Serialize;
use std::fmt;

/// A completed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    /// Left operand.
    pub lhs: f64,
    /// Operation applied.
    pub operation: Operation,
    /// Right operand.
    pub rhs: f64,
    /// Result of the operation.
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of two numbers is: {}",
            self.operation.label(),
            format_number(self.result)
        )
    }
}

/// Parses the three calculator tokens and applies the operation.
///
/// Operands are parsed before the operation name is checked, so a bad
/// operand is reported even when the operation is also unknown.
///
/// # Errors
///
/// Returns [`CalcError::InvalidOperand`] for a non-numeric operand and
/// [`CalcError::UnsupportedOperation`] for an unknown operation name.
pub fn evaluate(lhs: &str, operation: &str, rhs: &str) -> Result<Calculation, CalcError> {
    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let operation: Operation = operation.parse()?;

    let result = operation.apply(lhs, rhs);
    tracing::debug!(lhs, rhs, %operation, result, "evaluated");

    Ok(Calculation {
        lhs,
        operation,
        rhs,
        result,
    })
}

/// Checks that exactly three arguments were given, then evaluates them.
///
/// # Errors
///
/// Returns [`CalcError::ArgumentCount`] unless there are exactly three
/// arguments, otherwise the errors of [`evaluate`].
pub fn evaluate_args<S: AsRef<str>>(args: &[S]) -> Result<Calculation, CalcError> {
    match args {
        [lhs, operation, rhs] => evaluate(lhs.as_ref(), operation.as_ref(), rhs.as_ref()),
        _ => Err(CalcError::ArgumentCount { found: args.len() }),
    }
}
