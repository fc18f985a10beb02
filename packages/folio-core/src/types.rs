//! Core data types for portfolio analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single daily closing price for one ticker.
///
/// Produced by the price source with missing closes already filtered out.
/// A series of these is ordered ascending by date with no duplicate dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading day (millisecond epoch on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(date: DateTime<Utc>, close: f64) -> Self {
        Self { date, close }
    }
}

/// A dated value of the composed portfolio.
///
/// A sequence of these is the portfolio history, the canonical output
/// consumed by both the return calculator and any external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    /// Trading day (millisecond epoch on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Portfolio value in currency units
    pub value: f64,
}

impl ValuePoint {
    /// Create a new value point.
    pub fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// The composed portfolio value series.
pub type PortfolioHistory = Vec<ValuePoint>;

/// One ticker and its weight in the portfolio.
///
/// Weights are fractions in `[0, 1]`; a UI collecting percentages divides
/// by 100 before constructing entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Stock ticker symbol (uppercase)
    pub ticker: String,
    /// Fraction of the portfolio allocated to this ticker
    pub weight: f64,
}

impl PortfolioEntry {
    /// Create a new entry. The ticker is uppercased.
    pub fn new(ticker: &str, weight: f64) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            weight,
        }
    }
}

/// An ordered set of weighted tickers.
///
/// Entry order matters: fetched price series are matched to entries
/// positionally, not by ticker lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Portfolio {
    /// The weighted entries, in fetch order
    pub entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    /// Create an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a portfolio from a list of entries.
    pub fn from_entries(entries: Vec<PortfolioEntry>) -> Self {
        Self { entries }
    }

    /// Add an entry.
    pub fn push(&mut self, entry: PortfolioEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the portfolio has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The weights, in entry order.
    pub fn weights(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.weight).collect()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }
}

/// The externally visible result of a metrics computation.
///
/// Percentages are expressed `x100` (21% total return is `21.0`); `beta` is
/// a plain ratio and `portfolio_value` is in currency units. Serialized in
/// camelCase to match the JSON contract consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Total return over the window, percent
    pub total_return: f64,
    /// Final portfolio value, currency units
    pub portfolio_value: f64,
    /// Annualized volatility of daily returns, percent
    pub volatility: f64,
    /// Most recent single-day return, percent
    pub daily_change: f64,
    /// Excess return beyond the beta-scaled benchmark return, percent
    pub alpha: f64,
    /// Market sensitivity versus the benchmark
    pub beta: f64,
    /// Benchmark total return over the window, percent
    pub benchmark_return: f64,
}

/// API response wrapper for success cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn err(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
