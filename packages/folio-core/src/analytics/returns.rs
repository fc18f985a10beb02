//! Period-over-period returns and the statistics derived from them.
//!
//! Everything here works on plain value slices so the same functions serve
//! the composed portfolio history and raw benchmark closes alike.

use crate::analytics::stats;
use crate::types::{PricePoint, ValuePoint};
use crate::{Error, Result};

/// Assumed trading days per year for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Extract the value column from a portfolio history.
pub fn values(history: &[ValuePoint]) -> Vec<f64> {
    history.iter().map(|p| p.value).collect()
}

/// Extract the close column from a price series.
pub fn closes(series: &[PricePoint]) -> Vec<f64> {
    series.iter().map(|p| p.close).collect()
}

/// Daily returns `v[i] / v[i-1] - 1`, one observation per consecutive pair.
pub fn daily_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Total return over the window, as a percentage.
///
/// # Arguments
///
/// * `values` - A value series with at least 2 points and a positive first
///   value.
pub fn total_return(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "total return needs at least 2 points, got {}",
            values.len()
        )));
    }
    let first = values[0];
    if first <= 0.0 {
        return Err(Error::InvalidPrice(format!(
            "leading value {first} is not strictly positive"
        )));
    }
    Ok((values[values.len() - 1] - first) / first * 100.0)
}

/// Annualized volatility of daily returns, as a percentage.
///
/// Sample standard deviation of the daily returns (unbiased, n - 1
/// divisor) scaled by `sqrt(252)`. Needs at least 2 return observations,
/// i.e. at least 3 value points; anything shorter is a hard failure rather
/// than a silent zero.
pub fn annualized_volatility(values: &[f64]) -> Result<f64> {
    let returns = daily_returns(values);
    if returns.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "volatility needs at least 2 return observations, got {}",
            returns.len()
        )));
    }
    let variance = stats::sample_variance(&returns);
    Ok((variance * TRADING_DAYS_PER_YEAR).sqrt() * 100.0)
}

/// The most recent single-day return as a percentage, or 0 when the series
/// is too short to have one.
///
/// A display convenience, not a risk metric, so the short-series default is
/// 0 rather than an error.
pub fn daily_change(values: &[f64]) -> f64 {
    daily_returns(values).last().map_or(0.0, |r| r * 100.0)
}
