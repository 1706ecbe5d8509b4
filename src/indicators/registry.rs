//! Closed indicator registry.

use std::fmt;
use std::str::FromStr;

use crate::config::IndicatorConfig;
use crate::error::AnalysisError;
use crate::indicators::momentum::{cci, macd, rsi, stochastic, williams_r};
use crate::indicators::trend::{aroon, ema, sma};
use crate::indicators::volatility::bollinger;
use crate::models::OhlcvSeries;

/// Indicator category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
}

/// Every indicator operation the engine implements. The set is closed:
/// name lookup on anything else fails with
/// [`AnalysisError::UnknownIndicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma,
    Ema,
    Aroon,
    Rsi,
    Macd,
    Stochastic,
    WilliamsR,
    Cci,
    Bollinger,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 9] = [
        IndicatorKind::Sma,
        IndicatorKind::Ema,
        IndicatorKind::Aroon,
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::Stochastic,
        IndicatorKind::WilliamsR,
        IndicatorKind::Cci,
        IndicatorKind::Bollinger,
    ];

    /// Display label, matching the dashboard's dropdown entries.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Aroon => "Aroon",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Stochastic => "Stochastic",
            IndicatorKind::WilliamsR => "Williams %R",
            IndicatorKind::Cci => "CCI",
            IndicatorKind::Bollinger => "Bollinger",
        }
    }

    /// Compute this indicator's named column(s) from raw history.
    ///
    /// Multi-output indicators return one entry per column under its
    /// dashboard name ("MACD Histogram", "Bollinger Upper", ...); the
    /// moving-average kinds return one column per configured period.
    pub fn compute(
        &self,
        series: &OhlcvSeries,
        config: &IndicatorConfig,
    ) -> Result<Vec<(String, Vec<f64>)>, AnalysisError> {
        match self {
            IndicatorKind::Sma => Ok(config
                .ma_periods
                .iter()
                .map(|&p| (format!("SMA {p}"), sma(&series.close, p as usize)))
                .collect()),
            IndicatorKind::Ema => Ok(config
                .ma_periods
                .iter()
                .map(|&p| (format!("EMA {p}"), ema(&series.close, p as usize)))
                .collect()),
            IndicatorKind::Aroon => {
                let out = aroon(&series.high, &series.low, config.aroon_period as usize)?;
                Ok(vec![
                    ("Aroon Up".to_string(), out.up),
                    ("Aroon Down".to_string(), out.down),
                ])
            }
            IndicatorKind::Rsi => Ok(vec![(
                "RSI".to_string(),
                rsi(&series.close, config.rsi_period as usize),
            )]),
            IndicatorKind::Macd => {
                let out = macd(
                    &series.close,
                    config.macd_slow_period as usize,
                    config.macd_fast_period as usize,
                    config.macd_signal_period as usize,
                );
                Ok(vec![
                    ("MACD".to_string(), out.macd),
                    ("MACD Signal".to_string(), out.signal),
                    ("MACD Histogram".to_string(), out.histogram),
                ])
            }
            IndicatorKind::Stochastic => {
                let out = stochastic(
                    &series.high,
                    &series.low,
                    &series.close,
                    config.stochastic_period as usize,
                    config.stochastic_d_period as usize,
                )?;
                Ok(vec![
                    ("Stochastic %K".to_string(), out.k),
                    ("Stochastic %D".to_string(), out.d),
                ])
            }
            IndicatorKind::WilliamsR => Ok(vec![(
                "Williams %R".to_string(),
                williams_r(
                    &series.high,
                    &series.low,
                    &series.close,
                    config.williams_period as usize,
                )?,
            )]),
            IndicatorKind::Cci => Ok(vec![(
                "CCI".to_string(),
                cci(
                    &series.high,
                    &series.low,
                    &series.close,
                    config.cci_period as usize,
                )?,
            )]),
            IndicatorKind::Bollinger => {
                let out = bollinger(
                    &series.high,
                    &series.low,
                    &series.close,
                    config.bollinger_period as usize,
                    config.bollinger_multiplier,
                )?;
                Ok(vec![
                    ("Bollinger Upper".to_string(), out.upper),
                    ("Bollinger Lower".to_string(), out.lower),
                    ("Bollinger %b".to_string(), out.percent_b),
                    ("Bollinger Bandwidth".to_string(), out.bandwidth),
                ])
            }
        }
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorKind::Sma | IndicatorKind::Ema | IndicatorKind::Aroon => {
                IndicatorCategory::Trend
            }
            IndicatorKind::Rsi
            | IndicatorKind::Macd
            | IndicatorKind::Stochastic
            | IndicatorKind::WilliamsR
            | IndicatorKind::Cci => IndicatorCategory::Momentum,
            IndicatorKind::Bollinger => IndicatorCategory::Volatility,
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndicatorKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| AnalysisError::UnknownIndicator(s.to_string()))
    }
}
