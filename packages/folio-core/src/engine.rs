//! The end-to-end metrics computation.

use tracing::debug;

use crate::analytics::{
    align_to_common_start, annualized_volatility, compare_to_benchmark, compose_history,
    daily_change, normalize_series, total_return, values,
};
use crate::types::{Metrics, Portfolio, PortfolioHistory, PricePoint};
use crate::validate::validate_portfolio;
use crate::{Error, Result};

/// Compute performance metrics for a weighted portfolio against a benchmark.
///
/// The single entry point of the analytics core. Pure and stateless; every
/// invocation works only on its arguments, so independent computations can
/// run concurrently without coordination.
///
/// # Arguments
///
/// * `portfolio` - The weighted tickers, validated before anything runs.
/// * `per_ticker_series` - One fully fetched price series per entry, in
///   entry order.
/// * `benchmark_series` - The benchmark's price series, fetched over the
///   same requested window but aligned here by date.
/// * `initial_value` - Notional starting basket value, conventionally
///   [`crate::analytics::DEFAULT_INITIAL_VALUE`].
///
/// # Returns
///
/// The metrics and the composed portfolio history, or the first typed
/// error encountered. No partial results: a failing stage fails the whole
/// computation.
pub fn compute_metrics(
    portfolio: &Portfolio,
    per_ticker_series: &[Vec<PricePoint>],
    benchmark_series: &[PricePoint],
    initial_value: f64,
) -> Result<(Metrics, PortfolioHistory)> {
    validate_portfolio(portfolio)?;
    if per_ticker_series.len() != portfolio.len() {
        return Err(Error::DimensionMismatch(format!(
            "{} portfolio entries but {} price series",
            portfolio.len(),
            per_ticker_series.len()
        )));
    }

    debug!(tickers = portfolio.len(), "aligning price series");
    let aligned = align_to_common_start(per_ticker_series)?;
    let normalized = aligned
        .iter()
        .map(|series| normalize_series(series))
        .collect::<Result<Vec<_>>>()?;

    let history = compose_history(&normalized, &portfolio.weights(), initial_value)?;
    let history_values = values(&history);
    debug!(points = history.len(), "composed portfolio history");

    let total_return = total_return(&history_values)?;
    let volatility = annualized_volatility(&history_values)?;
    let daily_change = daily_change(&history_values);

    let comparison = compare_to_benchmark(&history, benchmark_series)?;
    debug!(
        total_return,
        volatility,
        beta = comparison.beta,
        "metrics computed"
    );

    let metrics = Metrics {
        total_return,
        portfolio_value: history_values[history_values.len() - 1],
        volatility,
        daily_change,
        alpha: comparison.alpha,
        beta: comparison.beta,
        benchmark_return: comparison.benchmark_return,
    };

    Ok((metrics, history))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PortfolioEntry;
    use approx::assert_relative_eq;
    use chrono::{DateTime, Utc};

    fn day(i: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(i * 86_400, 0).unwrap()
    }

    fn series(start_day: i64, closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(day(start_day + i as i64), c))
            .collect()
    }

    fn half_and_half() -> Portfolio {
        Portfolio::from_entries(vec![
            PortfolioEntry::new("AAA", 0.5),
            PortfolioEntry::new("BBB", 0.5),
        ])
    }

    #[test]
    fn test_two_ticker_pipeline() {
        // normalized: AAA [1, 1.1, 1.05, 1.15], BBB [1, 1.04, 1.02, 1.12]
        // history: [100, 107, 103.5, 113.5]
        let aaa = series(0, &[100.0, 110.0, 105.0, 115.0]);
        let bbb = series(0, &[50.0, 52.0, 51.0, 56.0]);
        let benchmark = series(0, &[1000.0, 1020.0, 1010.0, 1040.0]);

        let (metrics, history) =
            compute_metrics(&half_and_half(), &[aaa, bbb], &benchmark, 100.0).unwrap();

        assert_eq!(history.len(), 4);
        assert_relative_eq!(history[0].value, 100.0, epsilon = 1e-9);
        assert_relative_eq!(history[3].value, 113.5, epsilon = 1e-9);
        assert_relative_eq!(metrics.total_return, 13.5, epsilon = 1e-9);
        assert_relative_eq!(metrics.portfolio_value, 113.5, epsilon = 1e-9);
        assert_relative_eq!(
            metrics.daily_change,
            (113.5 / 103.5 - 1.0) * 100.0,
            epsilon = 1e-9
        );
        assert!(metrics.volatility > 0.0);
        assert_relative_eq!(metrics.benchmark_return, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_misaligned_starts_trimmed_before_composition() {
        let aaa = series(0, &[90.0, 95.0, 100.0, 110.0, 105.0, 115.0]);
        let bbb = series(2, &[50.0, 52.0, 51.0, 56.0]);
        let benchmark = series(0, &[1.0, 1.0, 1000.0, 1020.0, 1010.0, 1040.0]);

        let (metrics, history) =
            compute_metrics(&half_and_half(), &[aaa, bbb], &benchmark, 100.0).unwrap();

        // window starts at day 2, where AAA is 100
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].date, day(2));
        assert_relative_eq!(metrics.total_return, 13.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unvalidated_portfolio_never_computed() {
        let portfolio = Portfolio::from_entries(vec![
            PortfolioEntry::new("AAA", 0.9),
            PortfolioEntry::new("BBB", 0.5),
        ]);
        let aaa = series(0, &[100.0, 110.0, 105.0]);
        let bbb = series(0, &[50.0, 52.0, 51.0]);
        let benchmark = series(0, &[10.0, 11.0, 12.0]);

        assert!(matches!(
            compute_metrics(&portfolio, &[aaa, bbb], &benchmark, 100.0),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_series_count_mismatch_rejected() {
        let aaa = series(0, &[100.0, 110.0, 105.0]);
        let benchmark = series(0, &[10.0, 11.0, 12.0]);

        assert!(matches!(
            compute_metrics(&half_and_half(), &[aaa], &benchmark, 100.0),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_two_point_history_fails_atomically() {
        // total return would be defined, but volatility is not; the whole
        // computation fails rather than emitting a partial result
        let aaa = series(0, &[100.0, 110.0]);
        let bbb = series(0, &[50.0, 52.0]);
        let benchmark = series(0, &[10.0, 11.0]);

        assert!(matches!(
            compute_metrics(&half_and_half(), &[aaa, bbb], &benchmark, 100.0),
            Err(Error::InsufficientData(_))
        ));
    }

    #[test]
    fn test_flat_benchmark_fails() {
        let aaa = series(0, &[100.0, 110.0, 105.0]);
        let bbb = series(0, &[50.0, 52.0, 51.0]);
        let benchmark = series(0, &[10.0, 10.0, 10.0]);

        assert!(matches!(
            compute_metrics(&half_and_half(), &[aaa, bbb], &benchmark, 100.0),
            Err(Error::DegenerateBenchmark)
        ));
    }

    #[test]
    fn test_benchmark_outside_window_fails() {
        let aaa = series(0, &[100.0, 110.0, 105.0]);
        let bbb = series(0, &[50.0, 52.0, 51.0]);
        let benchmark = series(30, &[10.0, 11.0, 12.0]);

        assert!(matches!(
            compute_metrics(&half_and_half(), &[aaa, bbb], &benchmark, 100.0),
            Err(Error::AlignmentMismatch(_))
        ));
    }
}
