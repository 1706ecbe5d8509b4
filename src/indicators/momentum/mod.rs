//! Momentum oscillators.

pub mod cci;
pub mod macd;
pub mod rsi;
pub mod stochastic;
pub mod williams;

pub use cci::cci;
pub use macd::macd;
pub use rsi::rsi;
pub use stochastic::stochastic;
pub use williams::williams_r;
