//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod series;
pub mod signal;

pub use candle::Candle;
pub use indicators::{
    AroonSeries, BollingerSeries, IndicatorSet, MacdSeries, MovingAverageSeries, RatioSeries,
    StochasticSeries,
};
pub use series::OhlcvSeries;
pub use signal::Signal;
