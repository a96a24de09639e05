//! `fib bench`: time both evaluators against known values
//!
//! Output format: `BENCH:fibonacci:<test>:<result>:<time_ms>`

use fib_core::{FibError, fib, fib_iterative};
use std::time::Instant;
use tracing::debug;

/// Default upper bound on n for the naive cases
pub const DEFAULT_MAX_NAIVE: u32 = 35;

/// One timed case
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub result: Result<u64, FibError>,
    pub expected: u64,
    pub elapsed_ms: u128,
}

impl BenchResult {
    pub fn passed(&self) -> bool {
        self.result.as_ref().is_ok_and(|v| *v == self.expected)
    }

    pub fn result_text(&self) -> String {
        match &self.result {
            Ok(v) => v.to_string(),
            Err(e) => format!("error({})", e),
        }
    }

    pub fn line(&self) -> String {
        format!(
            "BENCH:fibonacci:{}:{}:{}",
            self.name,
            self.result_text(),
            self.elapsed_ms
        )
    }
}

type Evaluator = fn(u32) -> Result<u64, FibError>;

fn bench(name: String, n: u32, expected: u64, f: Evaluator) -> BenchResult {
    let start = Instant::now();
    let result = f(n);
    let elapsed_ms = start.elapsed().as_millis();
    debug!(%name, n, elapsed_ms, "bench case finished");
    BenchResult {
        name,
        result,
        expected,
        elapsed_ms,
    }
}

fn bench_repeated(
    name: String,
    n: u32,
    iterations: u32,
    expected: u64,
    f: Evaluator,
) -> BenchResult {
    let start = Instant::now();
    let mut result = Ok(0);
    for _ in 0..iterations {
        result = f(n);
        if result.is_err() {
            break;
        }
    }
    let elapsed_ms = start.elapsed().as_millis();
    debug!(%name, n, iterations, elapsed_ms, "repeated bench case finished");
    BenchResult {
        name,
        result,
        expected,
        elapsed_ms,
    }
}

/// Run the benchmark suite; naive cases above `max_naive` are skipped
pub fn run_benchmarks(max_naive: u32) -> Vec<BenchResult> {
    const NAIVE: [(u32, u64); 4] = [
        (20, 6_765),
        (30, 832_040),
        (35, 9_227_465),
        (40, 102_334_155),
    ];
    const ITERATIVE: [(u32, u64); 4] = [
        (30, 832_040),
        (50, 12_586_269_025),
        (70, 190_392_490_709_135),
        (93, 12_200_160_415_121_876_738),
    ];

    let mut results = Vec::new();

    for (n, expected) in NAIVE.into_iter().filter(|(n, _)| *n <= max_naive) {
        results.push(bench(format!("fib-naive-{}", n), n, expected, fib));
    }
    for (n, expected) in ITERATIVE {
        results.push(bench(
            format!("fib-iterative-{}", n),
            n,
            expected,
            fib_iterative,
        ));
    }

    if max_naive >= 20 {
        results.push(bench_repeated(
            "fib-naive-20-x1000".to_string(),
            20,
            1000,
            6_765,
            fib,
        ));
    }
    results.push(bench_repeated(
        "fib-iterative-20-x1000".to_string(),
        20,
        1000,
        6_765,
        fib_iterative,
    ));

    results
}
