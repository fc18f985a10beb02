//! Benchmark-relative performance: beta, alpha, and benchmark return.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::{returns, stats};
use crate::types::{PricePoint, ValuePoint};
use crate::{Error, Result};

/// Benchmark-relative metrics for a portfolio history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    /// Excess return beyond the beta-scaled benchmark return, percent
    pub alpha: f64,
    /// Market sensitivity: covariance of returns over benchmark variance
    pub beta: f64,
    /// Benchmark total return over the common window, percent
    pub benchmark_return: f64,
}

/// Covariance-based market sensitivity.
///
/// # Arguments
///
/// * `portfolio_returns` - Daily portfolio returns.
/// * `benchmark_returns` - Daily benchmark returns.
///
/// Both covariance and variance use the unbiased (n - 1) divisor over the
/// first `min(len)` paired observations. A flat benchmark has zero return
/// variance, which leaves beta undefined rather than infinite.
pub fn beta(portfolio_returns: &[f64], benchmark_returns: &[f64]) -> Result<f64> {
    let n = portfolio_returns.len().min(benchmark_returns.len());
    if n < 2 {
        return Err(Error::InsufficientData(format!(
            "beta needs at least 2 paired return observations, got {n}"
        )));
    }
    let variance = stats::sample_variance(&benchmark_returns[..n]);
    if variance == 0.0 {
        return Err(Error::DegenerateBenchmark);
    }
    Ok(stats::sample_covariance(&portfolio_returns[..n], &benchmark_returns[..n]) / variance)
}

/// Compare a portfolio history against a benchmark price series.
///
/// The benchmark is fetched independently of the portfolio tickers, so its
/// window can differ. Both series are reduced to their common dates before
/// any statistic is computed; fewer than 2 shared dates means no common
/// window exists.
///
/// Alpha is the simplified excess-return measure
/// `portfolio_total_return - benchmark_total_return * beta`, with both
/// total returns in percent over the common window. No risk-free-rate
/// adjustment is applied.
pub fn compare_to_benchmark(
    history: &[ValuePoint],
    benchmark: &[PricePoint],
) -> Result<BenchmarkComparison> {
    let (portfolio_values, benchmark_values) = common_window(history, benchmark)?;

    let portfolio_returns = returns::daily_returns(&portfolio_values);
    let benchmark_returns = returns::daily_returns(&benchmark_values);
    let beta = beta(&portfolio_returns, &benchmark_returns)?;

    let portfolio_total = returns::total_return(&portfolio_values)?;
    let benchmark_total = returns::total_return(&benchmark_values)?;

    Ok(BenchmarkComparison {
        alpha: portfolio_total - benchmark_total * beta,
        beta,
        benchmark_return: benchmark_total,
    })
}

/// Reduce both series to the dates they share, in ascending order.
fn common_window(
    history: &[ValuePoint],
    benchmark: &[PricePoint],
) -> Result<(Vec<f64>, Vec<f64>)> {
    let benchmark_by_date: BTreeMap<DateTime<Utc>, f64> =
        benchmark.iter().map(|p| (p.date, p.close)).collect();

    let mut portfolio_values = Vec::new();
    let mut benchmark_values = Vec::new();
    for point in history {
        if let Some(&close) = benchmark_by_date.get(&point.date) {
            portfolio_values.push(point.value);
            benchmark_values.push(close);
        }
    }

    if portfolio_values.len() < 2 {
        return Err(Error::AlignmentMismatch(format!(
            "portfolio and benchmark share {} dates, need at least 2",
            portfolio_values.len()
        )));
    }

    Ok((portfolio_values, benchmark_values))
}
