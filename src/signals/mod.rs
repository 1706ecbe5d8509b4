//! Signal engine: lag-1 crossing rules over prices and indicator columns.

pub mod crossover;
pub mod engine;
pub mod threshold;

pub use crossover::{aroon_signal, bollinger_signal, macd_signal, moving_average_crossover};
pub use engine::SignalKind;
pub use threshold::{cci_signal, rsi_signal, stochastic_signal, williams_signal};
