//! Technical-analysis computation engine for daily OHLCV series.
//!
//! Three stateless layers over aligned, oldest-first price columns:
//!
//! - [`indicators`] derives named series (moving averages, oscillators,
//!   bands) from raw prices.
//! - [`signals`] turns raw prices plus indicator output into ternary
//!   buy/sell event series via lag-1 crossing rules.
//! - [`patterns`] evaluates fixed-shape candlestick predicates over up to
//!   three consecutive bars.
//!
//! Every operation returns a series of the same length as its input.
//! Positions without enough history are `NaN` (indicators) or
//! [`Signal::Hold`](models::Signal::Hold) (signals and patterns). The crate
//! does no I/O; callers persist [`models::IndicatorSet`] however they like.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod patterns;
pub mod signals;

pub use error::AnalysisError;
pub use models::{Candle, IndicatorSet, OhlcvSeries, Signal};
pub use patterns::Pattern;
pub use signals::SignalKind;
