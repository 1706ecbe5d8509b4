//! Volatility indicators.

pub mod bollinger;

pub use bollinger::bollinger;
