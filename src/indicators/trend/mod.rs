//! Trend-following indicators.

pub mod aroon;
pub mod ema;
pub mod sma;

pub use aroon::aroon;
pub use ema::ema;
pub use sma::{ma_ratio, sma};
