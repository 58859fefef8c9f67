//! Trend classification: direction, strength, and confidence from a linear fit.
//!
//! Volatility overrides the slope-based direction when consecutive deltas
//! keep flipping sign and the series is dispersed.

pub mod classifier;
pub mod types;
pub mod volatility;

pub use classifier::{ClassifierParams, TrendClassifier};
pub use types::{Qualitative, TrendDirection, TrendPoint, TrendResult};
pub use volatility::VolatilityProfile;
