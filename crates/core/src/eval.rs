//! Fibonacci evaluators
//!
//! [`fib`] is the reference algorithm: a direct transcription of
//!
//! ```text
//! fib(0) = 0
//! fib(1) = 1
//! fib(n) = fib(n - 1) + fib(n - 2)
//! ```
//!
//! with no memoization, so it makes `2 * fib(n + 1) - 1` calls for one
//! evaluation. [`fib_iterative`] is a linear-time alternative kept alongside
//! it for cross-checking and speed comparison.
//!
//! # Overflow Behavior
//!
//! Results are `u64`. Any `n > MAX_INDEX` is rejected with
//! [`FibError::Overflow`] before evaluation starts; sums are never wrapped.

use crate::FibError;
use std::fmt;
use std::str::FromStr;

/// Largest index whose Fibonacci number fits in a `u64`
///
/// fib(93) = 12200160415121876738, fib(94) > u64::MAX.
pub const MAX_INDEX: u32 = 93;

/// Compute fib(n) by naive double recursion
pub fn fib(n: u32) -> Result<u64, FibError> {
    check_range(n)?;
    Ok(naive(n))
}

/// Compute fib(n) by naive double recursion, also returning the number of
/// recursive calls made (including the top-level one)
pub fn fib_counted(n: u32) -> Result<(u64, u64), FibError> {
    check_range(n)?;
    let mut calls = 0;
    let value = naive_counted(n, &mut calls);
    Ok((value, calls))
}

/// Compute fib(n) in linear time
pub fn fib_iterative(n: u32) -> Result<u64, FibError> {
    check_range(n)?;
    if n < 2 {
        return Ok(u64::from(n));
    }
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for _ in 1..n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Number of calls the naive recursion makes for `n`: `2 * fib(n + 1) - 1`
///
/// Returns `None` when the count itself does not fit in a `u64`.
pub fn expected_calls(n: u32) -> Option<u64> {
    let next = fib_iterative(n.checked_add(1)?).ok()?;
    next.checked_mul(2).map(|c| c - 1)
}

fn check_range(n: u32) -> Result<(), FibError> {
    if n > MAX_INDEX {
        return Err(FibError::Overflow { n: u64::from(n) });
    }
    Ok(())
}

fn naive(n: u32) -> u64 {
    if n < 2 {
        u64::from(n)
    } else {
        naive(n - 1) + naive(n - 2)
    }
}

fn naive_counted(n: u32, calls: &mut u64) -> u64 {
    *calls += 1;
    if n < 2 {
        u64::from(n)
    } else {
        naive_counted(n - 1, calls) + naive_counted(n - 2, calls)
    }
}

/// Which evaluator to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Unmemoized double recursion (exponential time)
    #[default]
    Naive,
    /// Two-accumulator loop (linear time)
    Iterative,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::Iterative];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Iterative => "iterative",
        }
    }

    pub fn evaluate(self, n: u32) -> Result<u64, FibError> {
        match self {
            Algorithm::Naive => fib(n),
            Algorithm::Iterative => fib_iterative(n),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                FibError::InvalidArgument(format!(
                    "unknown algorithm '{}' (expected 'naive' or 'iterative')",
                    wanted
                ))
            })
    }
}
