//! Finds dictionary words hidden in the rows and columns of a letter grid.
//!
//! # Usage
//!
//! Scan a grid read left to right, validating against the online dictionary:
//!
//! ```sh
//! wordgrid grid.txt
//! ```
//!
//! Scan every direction against a local word list, reading the grid from stdin:
//!
//! ```sh
//! cat grid.txt | wordgrid --dictionary words_alpha.txt - RIGHT LEFT UP DOWN
//! ```
//!
//! Print the results as JSON, with progress and matches logged:
//!
//! ```sh
//! RUST_LOG=debug wordgrid --json grid.txt DOWN
//! ```

use std::{
    path::PathBuf,
    process::ExitCode,
    sync::LazyLock,
    time::{Duration, Instant},
};

use clap::{Parser, builder::RangedU64ValueParser};
use wordgrid_cli::{CliError, input, output, version};
use wordgrid_oracle::{LocalOracle, Oracle, RemoteConfig, RemoteOracle, WordList};
use wordgrid_scanner::{LogObserver, ScanConfig, WordScanner};

static VERSION: LazyLock<String> = LazyLock::new(version::build_version);

#[derive(Debug, Parser)]
#[command(author, version = VERSION.as_str(), about)]
struct Args {
    /// Grid file, one row per line. Use `-` to read standard input.
    #[arg(value_name = "GRID")]
    grid: PathBuf,

    /// Directions to scan: RIGHT, LEFT, UP or DOWN (default: RIGHT).
    #[arg(value_name = "DIRECTION")]
    directions: Vec<String>,

    /// Shortest word, in letters, to look up.
    #[arg(
        short,
        long,
        value_name = "LETTERS",
        default_value_t = ScanConfig::DEFAULT_MIN_WORD_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    min_length: usize,

    /// Maximum number of dictionary lookups in flight.
    #[arg(
        short,
        long,
        value_name = "COUNT",
        default_value_t = ScanConfig::DEFAULT_WORKERS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    workers: usize,

    /// Validate words against this word list instead of the online dictionary.
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with_all = ["endpoint", "timeout_secs"]
    )]
    dictionary: Option<PathBuf>,

    /// Online dictionary URL; the lower-cased word is appended to it.
    #[arg(long, value_name = "URL", default_value = RemoteConfig::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Online dictionary request timeout.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = RemoteConfig::DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_status())
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let directions = input::parse_directions(&args.directions)?;
    let grid = input::read_grid(&args.grid)?;
    log::info!("grid:\n{grid}");

    let oracle = build_oracle(args)?;
    log::info!("validating words with the {} dictionary", oracle.backend_name());

    let config = ScanConfig::default()
        .with_min_word_length(args.min_length)
        .with_workers(args.workers);
    let scanner = WordScanner::new(oracle, config)?;

    let start = Instant::now();
    let results = scanner.scan_with_observer(&grid, &directions, &LogObserver::new())?;
    log::info!(
        "found {} word(s) in {:.2?}",
        results.total_matches(),
        start.elapsed()
    );

    if args.json {
        println!("{}", output::render_json(&results)?);
    } else {
        print!("{}", output::render_text(&results));
    }
    Ok(())
}

fn build_oracle(args: &Args) -> Result<Oracle, CliError> {
    if let Some(path) = &args.dictionary {
        let words = WordList::load_from_path(path)?;
        return Ok(LocalOracle::new(words).into());
    }
    let config = RemoteConfig::default()
        .with_endpoint(args.endpoint.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    Ok(RemoteOracle::new(config)?.into())
}
