//! Price series normalization.

use crate::types::PricePoint;
use crate::{Error, Result};

/// Rescale a series so it starts at exactly 1.0.
///
/// Dividing every close by the leading close makes series with different
/// absolute price scales dimensionally comparable before weighting. The
/// leading close must be strictly positive; anything else is bad input
/// data, not a computation failure.
pub fn normalize_series(series: &[PricePoint]) -> Result<Vec<PricePoint>> {
    let first = series.first().ok_or_else(|| {
        Error::InsufficientData("cannot normalize an empty price series".to_string())
    })?;
    if first.close <= 0.0 {
        return Err(Error::InvalidPrice(format!(
            "leading close {} is not strictly positive",
            first.close
        )));
    }
    Ok(series
        .iter()
        .map(|p| PricePoint::new(p.date, p.close / first.close))
        .collect())
}
