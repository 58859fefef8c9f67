//! Measurement model and analysis windows.

pub mod measurement;
pub mod timeframe;

pub use measurement::{DataType, Measurement};
pub use timeframe::{DateRange, Timeframe};
