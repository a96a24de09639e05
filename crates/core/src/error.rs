//! Evaluation errors
//!
//! Two kinds of failure exist:
//! - `InvalidArgument`: the input is not a non-negative integer
//! - `Overflow`: the result does not fit in a `u64`
//!
//! Both are reported before any recursion starts.

use crate::MAX_INDEX;

/// Error returned by the evaluators and input parsers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibError {
    /// Input outside the non-negative integers (carries a description of the input)
    InvalidArgument(String),
    /// fib(n) exceeds `u64::MAX`
    Overflow { n: u64 },
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            FibError::Overflow { n } => write!(
                f,
                "fib({}) overflows a 64-bit unsigned integer (largest supported n is {})",
                n, MAX_INDEX
            ),
        }
    }
}

impl std::error::Error for FibError {}
