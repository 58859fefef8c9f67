//! Statistical core: descriptive statistics and ordinary least squares.

pub mod descriptive;
pub mod regression;
pub mod summary;

pub use descriptive::{mean, std_dev, variance};
pub use regression::{linear_regression, regress_series, Regression};
pub use summary::{summarize, TrendSummary};
