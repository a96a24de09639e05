//! Validation of raw input into the evaluator's domain
//!
//! Indices arrive either as text (a command-line argument) or as a signed
//! integer (a config file value). Anything that is not a non-negative integer
//! is rejected with [`FibError::InvalidArgument`].

use crate::FibError;

/// Parse a decimal index such as `"40"` or `"+7"`
///
/// Surrounding whitespace is ignored. Values that are valid non-negative
/// integers but do not fit in a `u32` are reported as [`FibError::Overflow`],
/// since no such index can be evaluated anyway.
pub fn parse_index(input: &str) -> Result<u32, FibError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FibError::InvalidArgument(
            "expected a non-negative integer, got an empty string".to_string(),
        ));
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        let reason = if is_decimal(rest) {
            "is negative"
        } else {
            "is not an integer"
        };
        return Err(FibError::InvalidArgument(format!(
            "'{}' {}",
            trimmed, reason
        )));
    }

    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if !is_decimal(digits) {
        return Err(FibError::InvalidArgument(format!(
            "'{}' is not a non-negative integer",
            trimmed
        )));
    }

    let value: u64 = digits.parse().map_err(|_| {
        FibError::InvalidArgument(format!("'{}' is too large to be an index", trimmed))
    })?;
    u32::try_from(value).map_err(|_| FibError::Overflow { n: value })
}

/// Convert a signed integer (e.g. from a config file) into an index
pub fn index_from_i64(value: i64) -> Result<u32, FibError> {
    if value < 0 {
        return Err(FibError::InvalidArgument(format!("{} is negative", value)));
    }
    u32::try_from(value).map_err(|_| FibError::Overflow { n: value as u64 })
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
