//! The price-source collaborator seam.
//!
//! Retrieving historical prices is outside the analytics core. This module
//! defines the contract a source must satisfy and a sequential fetch helper
//! with optional inter-request pacing for rate-limited upstreams. Transport,
//! retries, and caching all belong to the source implementation.

use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::types::{Portfolio, PricePoint};
use crate::{Error, Result};

/// A source of historical daily closing prices.
///
/// Implementations must return points in ascending date order with no
/// duplicate dates and missing closes already filtered out. Failures
/// (network, unknown ticker, rate limiting) surface as [`Error::Source`]
/// and are propagated without retry.
pub trait PriceSource {
    /// Fetch the daily closes for `ticker` over `[start, end]`.
    fn fetch_series(
        &self,
        ticker: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PricePoint>>;
}

/// Fetch one price series per portfolio entry, in entry order.
///
/// `pacing` inserts a fixed delay after each request so a rate-limited
/// upstream is not hammered, including after the last one since a benchmark
/// fetch typically follows. An entry with no data in the window is an error
/// here, before the aligner ever sees a mix of empty and non-empty series.
pub fn fetch_portfolio_series<S: PriceSource>(
    source: &S,
    portfolio: &Portfolio,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    pacing: Option<Duration>,
) -> Result<Vec<Vec<PricePoint>>> {
    let mut all_series = Vec::with_capacity(portfolio.len());
    for entry in &portfolio.entries {
        debug!(ticker = %entry.ticker, "fetching price series");
        let series = source.fetch_series(&entry.ticker, start, end)?;
        if series.is_empty() {
            return Err(Error::InsufficientData(format!(
                "no data found for ticker {}",
                entry.ticker
            )));
        }
        all_series.push(series);
        if let Some(delay) = pacing {
            thread::sleep(delay);
        }
    }
    Ok(all_series)
}
