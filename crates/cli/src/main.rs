//! fib CLI
//!
//! Computes the nth Fibonacci number by naive recursion and prints it.
//! With no arguments it prints fib(40).

mod bench;
mod config;
mod report;

use clap::{Args, CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use config::{FileConfig, Overrides, Settings};
use fib_core::{Algorithm, FibError};
use report::RunReport;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute Fibonacci numbers by naive recursion", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(allow_negative_numbers = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    eval: EvalArgs,
}

#[derive(Args)]
struct EvalArgs {
    /// Index of the Fibonacci number to compute (default: 40)
    n: Option<String>,

    /// Evaluator to use: naive or iterative
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Path to a TOML config file (overrides FIB_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit a run report: human, json, or json:/path
    #[arg(long, value_name = "SPEC")]
    report: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Time both evaluators against known values
    Bench {
        /// Largest n to run through the naive evaluator
        #[arg(long, default_value_t = bench::DEFAULT_MAX_NAIVE)]
        max_naive: u32,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Bench { max_naive }) => run_bench(max_naive),
        Some(Commands::Completions { shell }) => {
            run_completions(shell);
            Ok(())
        }
        None => run_eval(&cli.eval),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fib", &mut io::stdout());
}

fn run_eval(args: &EvalArgs) -> Result<(), String> {
    let file = match config::config_path(args.config.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            FileConfig::load(&path)?
        }
        None => FileConfig::default(),
    };

    let overrides = Overrides {
        n: args.n.as_deref(),
        algorithm: args.algorithm,
        report: args.report.as_deref(),
    };
    let settings = Settings::resolve(&overrides, &file)?;
    debug!(
        n = settings.n,
        algorithm = %settings.algorithm,
        report = settings.report.is_some(),
        "resolved settings"
    );

    // Calls are only counted when a report or INFO log will show them
    let count_calls = settings.report.is_some() || tracing::enabled!(tracing::Level::INFO);
    let run =
        evaluate(settings.n, settings.algorithm, count_calls).map_err(|e| e.to_string())?;

    writeln!(io::stdout().lock(), "{}", run.value)
        .map_err(|e| format!("Failed to write result: {}", e))?;

    if let Some(report_config) = &settings.report {
        run.emit(report_config)?;
    }
    Ok(())
}

fn evaluate(n: u32, algorithm: Algorithm, count_calls: bool) -> Result<RunReport, FibError> {
    let start = Instant::now();
    let (value, calls) = match algorithm {
        Algorithm::Naive if count_calls => {
            let (value, calls) = fib_core::fib_counted(n)?;
            (value, Some(calls))
        }
        _ => (algorithm.evaluate(n)?, None),
    };
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(n, %algorithm, value, ?calls, elapsed_ms, "evaluation finished");

    Ok(RunReport {
        n,
        value,
        algorithm: algorithm.to_string(),
        calls,
        elapsed_ms,
    })
}

fn run_bench(max_naive: u32) -> Result<(), String> {
    let results = bench::run_benchmarks(max_naive);
    let mut stdout = io::stdout().lock();
    let mut failed = 0;
    for result in &results {
        writeln!(stdout, "{}", result.line())
            .map_err(|e| format!("Failed to write benchmark line: {}", e))?;
        if !result.passed() {
            writeln!(
                stdout,
                "ERROR: {} expected {}, got {}",
                result.name,
                result.expected,
                result.result_text()
            )
            .map_err(|e| format!("Failed to write benchmark line: {}", e))?;
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} benchmark cases failed", failed, results.len()));
    }
    Ok(())
}
