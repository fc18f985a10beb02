//! Folio Core - portfolio performance analytics library.
//!
//! This crate computes performance metrics for a user-defined, weighted
//! basket of securities over a historical window, optionally compared
//! against a benchmark index:
//!
//! - **Alignment**: trim independently fetched price series to a common window
//! - **Composition**: normalize and weight them into one portfolio value series
//! - **Statistics**: total return, annualized volatility, daily change
//! - **Benchmark comparison**: covariance-based beta and excess-return alpha
//!
//! The core is pure and stateless. Fetching prices, rendering charts, and
//! persisting anything are collaborator concerns; see [`fetch::PriceSource`]
//! for the fetch seam.
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use folio_core::{compute_metrics, Portfolio, PortfolioEntry, PricePoint};
//!
//! fn day(i: i64) -> DateTime<Utc> {
//!     DateTime::from_timestamp(i * 86_400, 0).unwrap()
//! }
//!
//! fn series(closes: &[f64]) -> Vec<PricePoint> {
//!     closes
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &c)| PricePoint::new(day(i as i64), c))
//!         .collect()
//! }
//!
//! let portfolio = Portfolio::from_entries(vec![
//!     PortfolioEntry::new("AAA", 0.5),
//!     PortfolioEntry::new("BBB", 0.5),
//! ]);
//! let per_ticker = vec![
//!     series(&[100.0, 110.0, 105.0, 115.0]),
//!     series(&[50.0, 52.0, 51.0, 56.0]),
//! ];
//! let benchmark = series(&[1000.0, 1020.0, 1010.0, 1040.0]);
//!
//! let (metrics, history) =
//!     compute_metrics(&portfolio, &per_ticker, &benchmark, 100.0).unwrap();
//! assert_eq!(history.len(), 4);
//! assert!(metrics.total_return > 0.0);
//! ```

pub mod analytics;
pub mod engine;
pub mod fetch;
pub mod timeframe;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use types::{
    ApiResponse, Metrics, Portfolio, PortfolioEntry, PortfolioHistory, PricePoint, ValuePoint,
};

// Re-export main functionality
pub use analytics::{
    align_to_common_start, annualized_volatility, beta, compare_to_benchmark, compose_history,
    daily_change, daily_returns, normalize_series, total_return, BenchmarkComparison,
    DEFAULT_INITIAL_VALUE, TRADING_DAYS_PER_YEAR,
};
pub use engine::compute_metrics;
pub use fetch::{fetch_portfolio_series, PriceSource};
pub use timeframe::Timeframe;
pub use validate::{validate_portfolio, violations, Violation, WEIGHT_SUM_TOLERANCE};

/// Error types for folio-core operations.
///
/// A computation either fully succeeds or fails with exactly one of these;
/// no stage ever substitutes NaN or zero for an undefined statistic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid portfolio: {0}")]
    Validation(String),

    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("alignment mismatch: {0}")]
    AlignmentMismatch(String),

    #[error("benchmark variance is zero; beta is undefined")]
    DegenerateBenchmark,

    #[error("invalid price data: {0}")]
    InvalidPrice(String),

    #[error("price source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for folio-core operations.
pub type Result<T> = std::result::Result<T, Error>;
