//! Operand parsing and result formatting.

use crate::error::CalcError;

/// Magnitude at and above which results switch to exponent form.
const EXPONENT_UPPER: f64 = 1e16;

/// Magnitude below which non-zero results switch to exponent form.
const EXPONENT_LOWER: f64 = 1e-4;

/// Parses an operand.
///
/// Surrounding whitespace is ignored. `inf`, `infinity` and `nan` are
/// accepted in any case, with an optional sign.
///
/// # Errors
///
/// Returns [`CalcError::InvalidOperand`] if the text is not a number.
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand {
            value: text.to_string(),
        })
}

/// Formats a number with the shortest digits that round-trip.
///
/// Integral values keep one fractional digit (`15.0`). Magnitudes at or
/// above `1e16` or below `1e-4` use exponent form with a signed exponent of
/// at least two digits (`1e+16`, `2.5e-05`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return exponent_form(value);
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    if let Some((mantissa, exponent)) = text.split_once('e')
        && let Ok(exponent) = exponent.parse::<i32>()
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
    text
}
