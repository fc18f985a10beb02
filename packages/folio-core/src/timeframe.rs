//! Coarse historical window selectors.
//!
//! A timeframe maps a selector like `1Y` to concrete date bounds for the
//! price source. The analytics core itself treats the bounds as opaque;
//! this type lives at the edge of the crate as a caller convenience.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A selectable lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "2Y")]
    TwoYears,
    #[serde(rename = "5Y")]
    FiveYears,
    #[serde(rename = "10Y")]
    TenYears,
}

impl Timeframe {
    /// All selectors, in ascending window order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::SixMonths,
        Timeframe::OneYear,
        Timeframe::TwoYears,
        Timeframe::FiveYears,
        Timeframe::TenYears,
    ];

    /// Calendar days covered by this selector.
    pub fn lookback_days(self) -> i64 {
        match self {
            Timeframe::SixMonths => 180,
            Timeframe::OneYear => 365,
            Timeframe::TwoYears => 730,
            Timeframe::FiveYears => 1825,
            Timeframe::TenYears => 3650,
        }
    }

    /// Concrete `(start, end)` bounds for a window ending at `end`.
    pub fn date_range(self, end: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        (end - Duration::days(self.lookback_days()), end)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::SixMonths => "6M",
            Timeframe::OneYear => "1Y",
            Timeframe::TwoYears => "2Y",
            Timeframe::FiveYears => "5Y",
            Timeframe::TenYears => "10Y",
        };
        f.write_str(s)
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "6M" => Ok(Timeframe::SixMonths),
            "1Y" => Ok(Timeframe::OneYear),
            "2Y" => Ok(Timeframe::TwoYears),
            "5Y" => Ok(Timeframe::FiveYears),
            "10Y" => Ok(Timeframe::TenYears),
            other => Err(Error::Validation(format!(
                "unknown timeframe {other}, expected one of 6M, 1Y, 2Y, 5Y, 10Y"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_round_trip() {
        for timeframe in Timeframe::ALL {
            let parsed: Timeframe = timeframe.to_string().parse().unwrap();
            assert_eq!(parsed, timeframe);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("6m".parse::<Timeframe>().unwrap(), Timeframe::SixMonths);
        assert_eq!("10y".parse::<Timeframe>().unwrap(), Timeframe::TenYears);
    }

    #[test]
    fn test_unknown_selector_rejected() {
        assert!("3W".parse::<Timeframe>().is_err());
        assert!("".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_date_range_spans_lookback() {
        let end = Utc::now();
        let (start, range_end) = Timeframe::OneYear.date_range(end);
        assert_eq!(range_end, end);
        assert_eq!(end - start, Duration::days(365));
    }

    #[test]
    fn test_serde_uses_selector_strings() {
        let json = serde_json::to_string(&Timeframe::FiveYears).unwrap();
        assert_eq!(json, "\"5Y\"");
        let back: Timeframe = serde_json::from_str("\"6M\"").unwrap();
        assert_eq!(back, Timeframe::SixMonths);
    }
}
