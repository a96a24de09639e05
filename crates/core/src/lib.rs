//! fib-core: Fibonacci numbers by naive recursion
//!
//! This crate provides the evaluator behind the `fib` command. The main
//! entry point, [`fib`], deliberately keeps the exponential double-recursive
//! structure of the mathematical definition. A linear-time
//! [`fib_iterative`] sits next to it as a reference to check against and
//! to measure the naive version by.
//!
//! # Modules
//!
//! - `eval`: the evaluators, call counting, and [`Algorithm`] selection
//! - `input`: validation of raw text/integer input into an index
//! - `error`: [`FibError`]
//!
//! # Example
//!
//! ```
//! use fib_core::{fib, parse_index, FibError};
//!
//! let n = parse_index("10")?;
//! assert_eq!(fib(n)?, 55);
//!
//! assert!(matches!(parse_index("-1"), Err(FibError::InvalidArgument(_))));
//! # Ok::<(), FibError>(())
//! ```

pub mod error;
pub mod eval;
pub mod input;

pub use error::FibError;
pub use eval::{Algorithm, MAX_INDEX, expected_calls, fib, fib_counted, fib_iterative};
pub use input::{index_from_i64, parse_index};
