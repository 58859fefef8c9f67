/// Vitals version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Normalized per-step slope below which a series is considered stable.
pub const DEFAULT_SENSITIVITY: f64 = 0.01;

/// Fraction of direction flips between consecutive deltas that marks a series as choppy.
pub const DEFAULT_VOLATILITY_RATIO: f64 = 0.6;

/// Coefficient of variation a choppy series must reach to be classified volatile.
pub const DEFAULT_DISPERSION_THRESHOLD: f64 = 0.05;

/// Minimum non-zero consecutive deltas before volatility is judged at all.
pub const MIN_VOLATILITY_DELTAS: usize = 3;

/// Upper bound on linear extrapolation steps.
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 30;

/// Deviation score thresholds (standard deviations) for anomaly severities.
pub const SEVERITY_LOW: f64 = 1.5;
pub const SEVERITY_MEDIUM: f64 = 2.0;
pub const SEVERITY_HIGH: f64 = 2.5;
pub const SEVERITY_CRITICAL: f64 = 3.0;

/// Qualitative bucket boundaries shared by strength and confidence.
pub const QUALITATIVE_MODERATE: f64 = 0.5;
pub const QUALITATIVE_STRONG: f64 = 0.8;

/// Seconds per day.
pub const SECONDS_PER_DAY: i64 = 86_400;
