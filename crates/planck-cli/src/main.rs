//! planck - blackbody color table generator
//!
//! Reads a color-matching dataset, integrates blackbody spectra over the
//! temperature range, and writes the display color table as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use planck_table::{DEFAULT_MAX_K, DEFAULT_MIN_K, TempRange, generate};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, debug, info};

#[derive(Parser)]
#[command(name = "planck")]
#[command(author, version, about = "Blackbody color table generator")]
#[command(long_about = "
Computes the display color of blackbody thermal radiation for every integer
Kelvin temperature in a range and writes the result as a JSON lookup table.

A run with no arguments performs the canonical batch: read CIE_1964.csv from
the working directory, write black_body.json next to it.

Examples:
  planck                                   # canonical batch
  planck -i data/cmf.csv -o out/table.json
  planck --min-temp 1000 --max-temp 10000 -v
")]
struct Cli {
    /// Color-matching dataset (header: lambda,xbar,ybar,zbar; lambda in nm)
    #[arg(short, long, default_value = "CIE_1964.csv")]
    input: PathBuf,

    /// Output JSON table
    #[arg(short, long, default_value = "black_body.json")]
    output: PathBuf,

    /// Lower bound of the temperature range (K, inclusive)
    #[arg(long, default_value_t = DEFAULT_MIN_K)]
    min_temp: u32,

    /// Upper bound of the temperature range (K, exclusive)
    #[arg(long, default_value_t = DEFAULT_MAX_K)]
    max_temp: u32,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let range = TempRange::new(cli.min_temp, cli.max_temp).with_context(|| {
        format!(
            "invalid temperature range [{}, {})",
            cli.min_temp, cli.max_temp
        )
    })?;

    info!(
        "generating {} entries from {}",
        range.len(),
        cli.input.display()
    );

    let start = Instant::now();
    let table = generate(&cli.input, &cli.output, range).with_context(|| {
        format!(
            "failed to generate {} from {}",
            cli.output.display(),
            cli.input.display()
        )
    })?;
    debug!("sweep and export took {:?}", start.elapsed());

    info!("wrote {} entries to {}", table.len(), cli.output.display());
    Ok(())
}
