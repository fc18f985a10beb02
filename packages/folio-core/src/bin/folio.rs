//! Folio CLI - compute portfolio analytics from JSON price data.
//!
//! Emits JSON on stdout for integration with UI layers; logs go to stderr
//! and are controlled by `RUST_LOG`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use folio_core::{
    compute_metrics, validate, ApiResponse, Portfolio, PortfolioEntry, PricePoint, Timeframe,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio performance analytics over historical price data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a portfolio definition
    Validate {
        /// Portfolio JSON file: [{"ticker": "AAPL", "weight": 60.0}, ...],
        /// weights in percent
        #[arg(short, long)]
        portfolio: PathBuf,
    },
    /// Compute metrics and history for a portfolio
    Metrics {
        /// Portfolio JSON file, weights in percent
        #[arg(short, long)]
        portfolio: PathBuf,
        /// Price series JSON files, one per portfolio entry, in entry order
        #[arg(short = 's', long = "series", num_args = 1..)]
        series: Vec<PathBuf>,
        /// Benchmark price series JSON file
        #[arg(short, long)]
        benchmark: PathBuf,
        /// Notional starting basket value
        #[arg(long, default_value = "100")]
        initial_value: f64,
    },
    /// Resolve a timeframe selector to concrete date bounds
    Timeframe {
        /// One of 6M, 1Y, 2Y, 5Y, 10Y
        selector: String,
    },
}

/// One row of the portfolio file; the weight is a percentage as entered in
/// a UI, divided by 100 before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    ticker: String,
    weight: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Validate { portfolio } => handle_validate(&portfolio),
        Commands::Metrics {
            portfolio,
            series,
            benchmark,
            initial_value,
        } => handle_metrics(&portfolio, &series, &benchmark, initial_value),
        Commands::Timeframe { selector } => handle_timeframe(&selector),
    };

    println!("{}", output);
}

fn handle_validate(path: &Path) -> String {
    let portfolio = match load_portfolio(path) {
        Ok(p) => p,
        Err(e) => return error_response(e),
    };

    let violations = validate::violations(&portfolio);
    let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
    serde_json::to_string_pretty(&ApiResponse::ok(json!({
        "valid": violations.is_empty(),
        "violations": messages,
    })))
    .unwrap()
}

fn handle_metrics(
    portfolio_path: &Path,
    series_paths: &[PathBuf],
    benchmark_path: &Path,
    initial_value: f64,
) -> String {
    let result = (|| -> folio_core::Result<String> {
        let portfolio = load_portfolio(portfolio_path)?;
        let per_ticker = series_paths
            .iter()
            .map(|p| load_series(p))
            .collect::<folio_core::Result<Vec<_>>>()?;
        let benchmark = load_series(benchmark_path)?;

        let (metrics, history) =
            compute_metrics(&portfolio, &per_ticker, &benchmark, initial_value)?;
        Ok(serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "metrics": metrics,
            "history": history,
        })))
        .unwrap())
    })();

    match result {
        Ok(output) => output,
        Err(e) => error_response(e),
    }
}

fn handle_timeframe(selector: &str) -> String {
    match selector.parse::<Timeframe>() {
        Ok(timeframe) => {
            let (start, end) = timeframe.date_range(chrono::Utc::now());
            serde_json::to_string_pretty(&ApiResponse::ok(json!({
                "timeframe": timeframe,
                "start": start.to_rfc3339(),
                "end": end.to_rfc3339(),
            })))
            .unwrap()
        }
        Err(e) => error_response(e),
    }
}

fn load_portfolio(path: &Path) -> folio_core::Result<Portfolio> {
    let content = fs::read_to_string(path)?;
    let raw: Vec<RawEntry> = serde_json::from_str(&content)?;
    Ok(Portfolio::from_entries(
        raw.iter()
            .map(|e| PortfolioEntry::new(&e.ticker, e.weight / 100.0))
            .collect(),
    ))
}

fn load_series(path: &Path) -> folio_core::Result<Vec<PricePoint>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn error_response(e: folio_core::Error) -> String {
    serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string())).unwrap()
}
