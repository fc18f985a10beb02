//! Common-window alignment of independently fetched price series.

use chrono::{DateTime, Utc};

use crate::types::PricePoint;
use crate::{Error, Result};

/// Trim every series to the latest of the individual start dates.
///
/// Independently fetched series can start on different calendar days
/// (listing dates, data gaps). Discarding everything before
/// `max(first dates)` yields the longest window covered by all of them.
///
/// Downstream combination is positional, so the trimmed series must agree
/// exactly in length; a disagreement means the trading calendars diverge
/// mid-window and the data cannot be combined safely.
pub fn align_to_common_start(series: &[Vec<PricePoint>]) -> Result<Vec<Vec<PricePoint>>> {
    let mut latest_start: Option<DateTime<Utc>> = None;
    for (i, s) in series.iter().enumerate() {
        let first = s.first().ok_or_else(|| {
            Error::InsufficientData(format!("price series {i} is empty"))
        })?;
        latest_start = Some(latest_start.map_or(first.date, |d| d.max(first.date)));
    }
    let Some(latest_start) = latest_start else {
        return Err(Error::InsufficientData(
            "no price series to align".to_string(),
        ));
    };

    let trimmed: Vec<Vec<PricePoint>> = series
        .iter()
        .map(|s| {
            s.iter()
                .copied()
                .filter(|p| p.date >= latest_start)
                .collect()
        })
        .collect();

    let expected = trimmed[0].len();
    for (i, s) in trimmed.iter().enumerate() {
        if s.is_empty() {
            return Err(Error::InsufficientData(format!(
                "price series {i} has no data on or after the common start date"
            )));
        }
        if s.len() != expected {
            return Err(Error::InsufficientData(format!(
                "price series {i} has {} points after trimming, expected {expected}; \
                 trading calendars do not match",
                s.len()
            )));
        }
    }

    Ok(trimmed)
}
