//! The portfolio analytics pipeline.
//!
//! Stages run in a fixed order, each a stateless transformation over the
//! previous stage's output:
//!
//! align -> normalize -> compose -> returns/volatility -> benchmark
//!
//! [`crate::engine::compute_metrics`] wires them together; each stage is
//! also usable on its own.

mod align;
mod benchmark;
mod compose;
mod normalize;
mod returns;
mod stats;

pub use align::align_to_common_start;
pub use benchmark::{beta, compare_to_benchmark, BenchmarkComparison};
pub use compose::{compose_history, DEFAULT_INITIAL_VALUE};
pub use normalize::normalize_series;
pub use returns::{
    annualized_volatility, closes, daily_change, daily_returns, total_return, values,
    TRADING_DAYS_PER_YEAR,
};
pub use stats::{mean, sample_covariance, sample_variance};
