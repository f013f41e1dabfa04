//! subset-bench library crate
//!
//! This crate provides the core functionality for the `subset-bench` CLI. It
//! is organized into small modules: `subsets` (subset enumeration strategies),
//! `bench` (the timed size sweep), `format` (compact number formatting for
//! report lines) and `error`. The binary `src/main.rs` calls
//! `subset_bench_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `bench::run_sweep()` — the sweep itself, generic over the generator and
//!   the output sink.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod bench;
pub mod error;
pub mod format;
pub mod subsets;

use std::io::{self, Write};

use clap::{ArgAction, Parser};

use crate::bench::{
    BANNER, BenchConfig, DEFAULT_MAX, DEFAULT_THRESHOLD_SECS, SweepOutcome, run_sweep,
};
use crate::error::BenchError;
use crate::subsets::Strategy;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Exclusive upper bound of the input sizes to measure
    #[arg(long = "max", default_value_t = DEFAULT_MAX)]
    max: usize,

    /// Stop once a single step takes longer than this many seconds
    #[arg(
        long = "threshold",
        default_value_t = DEFAULT_THRESHOLD_SECS,
        allow_negative_numbers = true
    )]
    threshold: f64,

    /// Subset generator to time
    #[arg(long = "strategy", value_enum, default_value_t = Strategy::Concat)]
    strategy: Strategy,

    /// Sweep every strategy in turn (overrides --strategy)
    #[arg(long = "all", action = ArgAction::SetTrue)]
    all: bool,

    /// Untimed warm-up run on an input of this size before sweeping
    #[arg(long = "warmup")]
    warmup: Option<usize>,

    /// Log level for stderr diagnostics (trace, debug, info, warn, error)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: tracing::Level,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            max: self.max,
            threshold: self.threshold,
            warmup: self.warmup,
        }
    }
}

/// Run the subset-bench CLI.
///
/// With no arguments this prints the banner and one `size,seconds` line per
/// input size from 0 up to 99, stopping after the first size that takes more
/// than three seconds. Both endings exit with status 0, as do `--help` and
/// `--version`. Unparseable arguments, invalid settings and failures writing
/// stdout are printed to stderr and exit with status 1.
///
/// Example:
///
/// ```no_run
/// subset_bench_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = usage_exit_code(&e);
        let _ = e.print();
        std::process::exit(code);
    });
    init_logging(cli.log_level);
    let config = cli.config();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if cli.all {
        run_all(&config, &mut out)
    } else {
        run_one(&config, cli.strategy, BANNER, &mut out).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Sweep a single strategy under `banner`.
pub fn run_one<W: Write>(
    config: &BenchConfig,
    strategy: Strategy,
    banner: &str,
    out: &mut W,
) -> Result<SweepOutcome, BenchError> {
    tracing::debug!(strategy = strategy.label(), "running strategy");
    run_sweep(config, banner, |input: &[usize]| strategy.generate(input), out)
}

/// Sweep every [`Strategy`] in turn. The threshold ends only the sweep of the
/// strategy that crossed it.
pub fn run_all<W: Write>(config: &BenchConfig, out: &mut W) -> Result<(), BenchError> {
    for strategy in Strategy::ALL {
        let banner = format!("================ {} subset performance test", strategy.label());
        let outcome = run_one(config, strategy, &banner, out)?;
        tracing::info!(strategy = strategy.label(), ?outcome, "strategy finished");
    }
    Ok(())
}

/// Exit status for an argument parsing failure: 0 when clap is only showing
/// help or version, 1 for anything the user got wrong.
fn usage_exit_code(err: &clap::Error) -> i32 {
    if err.exit_code() == 0 { 0 } else { 1 }
}

fn init_logging(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
