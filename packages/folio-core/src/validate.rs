//! Portfolio validation.
//!
//! Every proposed portfolio passes through here before any computation
//! runs; downstream stages assume a validated portfolio.

use crate::types::Portfolio;
use crate::{Error, Result};

/// Permitted deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

/// A single violated validation rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    #[error("portfolio has no entries")]
    Empty,

    #[error("entry {index} has an empty ticker")]
    EmptyTicker { index: usize },

    #[error("weight for entry {index} is not a finite number")]
    NonFiniteWeight { index: usize },

    #[error("weight for entry {index} is {weight}, outside [0, 1]")]
    WeightOutOfRange { index: usize, weight: f64 },

    #[error("weights sum to {sum}, expected 1.0 within 1e-4")]
    WeightSumMismatch { sum: f64 },
}

/// Collect every rule the portfolio violates.
///
/// The weight-sum rule is only checked once every individual weight is a
/// finite number, since a NaN weight would poison the sum.
pub fn violations(portfolio: &Portfolio) -> Vec<Violation> {
    let mut found = Vec::new();

    if portfolio.is_empty() {
        found.push(Violation::Empty);
        return found;
    }

    let mut weights_usable = true;
    for (index, entry) in portfolio.entries.iter().enumerate() {
        if entry.ticker.trim().is_empty() {
            found.push(Violation::EmptyTicker { index });
        }
        if !entry.weight.is_finite() {
            found.push(Violation::NonFiniteWeight { index });
            weights_usable = false;
        } else if !(0.0..=1.0).contains(&entry.weight) {
            found.push(Violation::WeightOutOfRange {
                index,
                weight: entry.weight,
            });
        }
    }

    if weights_usable {
        let sum = portfolio.total_weight();
        if (sum - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
            found.push(Violation::WeightSumMismatch { sum });
        }
    }

    found
}

/// Validate a portfolio, failing with every violated rule at once.
pub fn validate_portfolio(portfolio: &Portfolio) -> Result<()> {
    let found = violations(portfolio);
    if found.is_empty() {
        Ok(())
    } else {
        let joined = found
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::Validation(joined))
    }
}
