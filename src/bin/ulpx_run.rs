//! `ulpx_run`: histogram the ULP error of the fast approximations against
//! their standard-library references.
//!
//! ```text
//! ulpx_run [-n COUNT] [-s SEED] [-r] [-i LB UB] [SUITE]...
//! ```

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ulpx::harness::{DEFAULT_COUNT, DEFAULT_SEED};
use ulpx::{harness, Interval, Options, RenderOptions, Suite, DEFAULT_BAR_WIDTH, DEFAULT_MAX_LINES};

/// Measure the ULP error of fast exp/log approximations.
#[derive(Parser, Debug)]
#[command(name = "ulpx_run")]
struct Args {
    /// Suites to run: exp, log, expm1, log1p (default: all).
    #[arg(value_name = "SUITE")]
    suites: Vec<Suite>,

    /// Number of samples per interval.
    #[arg(short = 'n', long = "count", value_name = "COUNT", default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Seed of the generator for each interval.
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Print raw values instead of a summary.
    #[arg(short, long)]
    raw: bool,

    /// Sample on [LB, UB) instead of the suite's own intervals.
    #[arg(
        short,
        long,
        num_args = 2,
        value_names = ["LB", "UB"],
        allow_negative_numbers = true
    )]
    interval: Option<Vec<f64>>,

    /// Most histogram rows before truncating.
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Width of the longest bar.
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    bar_width: usize,

    /// Write one JSON object per interval.
    #[cfg(feature = "serde")]
    #[arg(long, conflicts_with = "raw")]
    json: bool,

    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        emit::Level::Debug
    } else {
        emit::Level::Warn
    };
    let rt = emit::setup()
        .emit_to(emit_term::stderr())
        .emit_when(emit::level::min_filter(level))
        .init();

    let result = run(&args);

    rt.blocking_flush(Duration::from_secs(5));
    result
}

fn run(args: &Args) -> Result<()> {
    let options = Options {
        count: args.count,
        seed: args.seed,
        raw: args.raw,
        #[cfg(feature = "serde")]
        json: args.json,
        render: RenderOptions {
            max_lines: args.max_lines,
            bar_width: args.bar_width,
        },
    };

    let interval = match args.interval.as_deref() {
        None => None,
        Some(&[lb, ub]) => Some(Interval::new(lb, ub)?),
        Some(bounds) => bail!("expected two interval bounds, got {}", bounds.len()),
    };

    let suites = if args.suites.is_empty() {
        Suite::ALL.to_vec()
    } else {
        args.suites.clone()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for suite in suites {
        let reference = suite.reference();
        let candidate = suite.candidate();
        let intervals = match interval {
            Some(interval) => vec![interval],
            None => suite.intervals()?,
        };

        for interval in intervals {
            harness(&mut out, &options, &reference, &candidate, interval)
                .with_context(|| format!("{suite} on {interval}"))?;
        }
    }

    out.flush()?;
    Ok(())
}
