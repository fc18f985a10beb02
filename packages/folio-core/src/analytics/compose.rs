//! Weighted combination of normalized series into one portfolio history.

use crate::types::{PortfolioHistory, PricePoint, ValuePoint};
use crate::{Error, Result};

/// Notional starting basket value, by convention.
pub const DEFAULT_INITIAL_VALUE: f64 = 100.0;

/// Combine normalized, aligned series into one value series.
///
/// `value[i] = sum_j normalized[j][i] * weight[j] * initial_value`, dated
/// from the first series (all series share dates post-alignment).
///
/// Weight semantics are the validator's concern, but the shapes are checked
/// here: the weight count must match the series count and every series must
/// have the same length.
pub fn compose_history(
    normalized: &[Vec<PricePoint>],
    weights: &[f64],
    initial_value: f64,
) -> Result<PortfolioHistory> {
    if normalized.len() != weights.len() {
        return Err(Error::DimensionMismatch(format!(
            "{} price series but {} weights",
            normalized.len(),
            weights.len()
        )));
    }
    let first = normalized.first().ok_or_else(|| {
        Error::InsufficientData("no price series to compose".to_string())
    })?;
    for (i, s) in normalized.iter().enumerate() {
        if s.len() != first.len() {
            return Err(Error::DimensionMismatch(format!(
                "series {i} has {} points, expected {}",
                s.len(),
                first.len()
            )));
        }
    }

    let history = first
        .iter()
        .enumerate()
        .map(|(i, lead)| {
            let value = normalized
                .iter()
                .zip(weights)
                .map(|(s, &w)| s[i].close * w * initial_value)
                .sum();
            ValuePoint::new(lead.date, value)
        })
        .collect();

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::normalize::normalize_series;
    use approx::assert_relative_eq;
    use chrono::DateTime;

    fn series(closes: &[f64]) -> Vec<PricePoint> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                PricePoint::new(DateTime::from_timestamp(i as i64 * 86_400, 0).unwrap(), c)
            })
            .collect()
    }

    #[test]
    fn test_proportional_series_compose_to_scaled_copy() {
        // [100,110,121] and [50,55,60.5] are proportionally identical
        let a = normalize_series(&series(&[100.0, 110.0, 121.0])).unwrap();
        let b = normalize_series(&series(&[50.0, 55.0, 60.5])).unwrap();

        let history = compose_history(&[a, b], &[0.5, 0.5], 100.0).unwrap();
        let values: Vec<f64> = history.iter().map(|p| p.value).collect();
        assert_relative_eq!(values[0], 100.0, epsilon = 1e-9);
        assert_relative_eq!(values[1], 110.0, epsilon = 1e-9);
        assert_relative_eq!(values[2], 121.0, epsilon = 1e-9);
    }

    #[test]
    fn test_starts_at_initial_value() {
        let a = normalize_series(&series(&[10.0, 12.0])).unwrap();
        let b = normalize_series(&series(&[400.0, 390.0])).unwrap();
        let history = compose_history(&[a, b], &[0.25, 0.75], 100.0).unwrap();
        assert_eq!(history[0].value, 100.0);
    }

    #[test]
    fn test_single_ticker_round_trip() {
        // weight 1.0 reproduces the normalized series scaled by initial value
        let normalized = normalize_series(&series(&[80.0, 88.0, 70.0, 92.0])).unwrap();
        let history = compose_history(std::slice::from_ref(&normalized), &[1.0], 100.0).unwrap();
        for (point, source) in history.iter().zip(&normalized) {
            assert_eq!(point.value, 100.0 * source.close);
            assert_eq!(point.date, source.date);
        }
    }

    #[test]
    fn test_output_length_matches_input() {
        let a = normalize_series(&series(&[1.0, 2.0, 3.0, 4.0, 5.0])).unwrap();
        let history = compose_history(&[a.clone(), a], &[0.5, 0.5], 100.0).unwrap();
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn test_weight_count_mismatch_rejected() {
        let a = series(&[1.0, 2.0]);
        assert!(matches!(
            compose_history(&[a], &[0.5, 0.5], 100.0),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let a = series(&[1.0, 2.0, 3.0]);
        let b = series(&[1.0, 2.0]);
        assert!(matches!(
            compose_history(&[a, b], &[0.5, 0.5], 100.0),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_no_series_rejected() {
        assert!(matches!(
            compose_history(&[], &[], 100.0),
            Err(Error::InsufficientData(_))
        ));
    }
}
