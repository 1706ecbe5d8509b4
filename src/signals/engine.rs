//! Named signal dispatch over a computed indicator set.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::{IndicatorConfig, SignalConfig};
use crate::error::AnalysisError;
use crate::indicators::momentum::{cci, macd, rsi, stochastic, williams_r};
use crate::indicators::trend::{aroon, ema, sma};
use crate::indicators::volatility::bollinger;
use crate::models::{IndicatorSet, OhlcvSeries, Signal};
use crate::signals::crossover::{
    aroon_signal, bollinger_signal, macd_signal, moving_average_crossover,
};
use crate::signals::threshold::{cci_signal, rsi_signal, stochastic_signal, williams_signal};

/// Every signal rule the engine implements, keyed by the dashboard's
/// labels ("SMA 10/50", "MACD", ...). The set is closed; unknown labels
/// fail with [`AnalysisError::UnknownSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    SmaCross { fast: u32, slow: u32 },
    EmaCross { fast: u32, slow: u32 },
    Macd,
    Rsi,
    Bollinger,
    Stochastic,
    WilliamsR,
    Cci,
    Aroon,
}

impl SignalKind {
    /// Evaluate this rule against one asset's history and its computed
    /// indicator set.
    ///
    /// Columns missing from `set` (e.g. a moving-average period the full
    /// set was not configured for) are recomputed from the raw series with
    /// default parameters, so a partially persisted set still evaluates.
    pub fn evaluate(
        &self,
        series: &OhlcvSeries,
        set: &IndicatorSet,
        config: &SignalConfig,
    ) -> Result<Vec<Signal>, AnalysisError> {
        debug!(rule = %self, bars = series.len(), "evaluating signal rule");
        let defaults = IndicatorConfig::default();
        match *self {
            SignalKind::SmaCross { fast, slow } => {
                let fast_ma = stored_or(set.sma(fast), || sma(&series.close, fast as usize));
                let slow_ma = stored_or(set.sma(slow), || sma(&series.close, slow as usize));
                moving_average_crossover(&fast_ma, &slow_ma)
            }
            SignalKind::EmaCross { fast, slow } => {
                let fast_ma = stored_or(set.ema(fast), || ema(&series.close, fast as usize));
                let slow_ma = stored_or(set.ema(slow), || ema(&series.close, slow as usize));
                moving_average_crossover(&fast_ma, &slow_ma)
            }
            SignalKind::Macd => {
                let computed;
                let histogram = match &set.macd {
                    Some(m) => &m.histogram,
                    None => {
                        computed = macd(
                            &series.close,
                            defaults.macd_slow_period as usize,
                            defaults.macd_fast_period as usize,
                            defaults.macd_signal_period as usize,
                        );
                        &computed.histogram
                    }
                };
                Ok(macd_signal(histogram))
            }
            SignalKind::Rsi => {
                let values = stored_or(set.rsi.as_deref(), || {
                    rsi(&series.close, defaults.rsi_period as usize)
                });
                Ok(rsi_signal(&values, config.rsi_oversold, config.rsi_overbought))
            }
            SignalKind::Bollinger => {
                let computed;
                let bands = match &set.bollinger {
                    Some(b) => b,
                    None => {
                        computed = bollinger(
                            &series.high,
                            &series.low,
                            &series.close,
                            defaults.bollinger_period as usize,
                            defaults.bollinger_multiplier,
                        )?;
                        &computed
                    }
                };
                bollinger_signal(&series.close, &bands.upper, &bands.lower)
            }
            SignalKind::Stochastic => {
                let computed;
                let d = match &set.stochastic {
                    Some(s) => &s.d,
                    None => {
                        computed = stochastic(
                            &series.high,
                            &series.low,
                            &series.close,
                            defaults.stochastic_period as usize,
                            defaults.stochastic_d_period as usize,
                        )?;
                        &computed.d
                    }
                };
                Ok(stochastic_signal(
                    d,
                    config.stochastic_low,
                    config.stochastic_high,
                ))
            }
            SignalKind::WilliamsR => {
                let values = match set.williams_r.as_deref() {
                    Some(v) => v.to_vec(),
                    None => williams_r(
                        &series.high,
                        &series.low,
                        &series.close,
                        defaults.williams_period as usize,
                    )?,
                };
                Ok(williams_signal(
                    &values,
                    config.williams_low,
                    config.williams_high,
                ))
            }
            SignalKind::Cci => {
                let values = match set.cci.as_deref() {
                    Some(v) => v.to_vec(),
                    None => cci(
                        &series.high,
                        &series.low,
                        &series.close,
                        defaults.cci_period as usize,
                    )?,
                };
                Ok(cci_signal(&values, config.cci_low, config.cci_high))
            }
            SignalKind::Aroon => {
                let computed;
                let pair = match &set.aroon {
                    Some(a) => a,
                    None => {
                        computed =
                            aroon(&series.high, &series.low, defaults.aroon_period as usize)?;
                        &computed
                    }
                };
                aroon_signal(
                    &pair.up,
                    &pair.down,
                    config.aroon_threshold,
                    config.aroon_down_threshold,
                )
            }
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SignalKind::SmaCross { fast, slow } => write!(f, "SMA {fast}/{slow}"),
            SignalKind::EmaCross { fast, slow } => write!(f, "EMA {fast}/{slow}"),
            SignalKind::Macd => f.write_str("MACD"),
            SignalKind::Rsi => f.write_str("RSI"),
            SignalKind::Bollinger => f.write_str("Bollinger"),
            SignalKind::Stochastic => f.write_str("Stochastic"),
            SignalKind::WilliamsR => f.write_str("Williams %R"),
            SignalKind::Cci => f.write_str("CCI"),
            SignalKind::Aroon => f.write_str("Aroon"),
        }
    }
}

impl FromStr for SignalKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MACD" => return Ok(SignalKind::Macd),
            "RSI" => return Ok(SignalKind::Rsi),
            "Bollinger" => return Ok(SignalKind::Bollinger),
            "Stochastic" => return Ok(SignalKind::Stochastic),
            "Williams %R" => return Ok(SignalKind::WilliamsR),
            "CCI" => return Ok(SignalKind::Cci),
            "Aroon" => return Ok(SignalKind::Aroon),
            _ => {}
        }
        if let Some(pair) = parse_cross_label(s, "SMA ") {
            return Ok(SignalKind::SmaCross {
                fast: pair.0,
                slow: pair.1,
            });
        }
        if let Some(pair) = parse_cross_label(s, "EMA ") {
            return Ok(SignalKind::EmaCross {
                fast: pair.0,
                slow: pair.1,
            });
        }
        Err(AnalysisError::UnknownSignal(s.to_string()))
    }
}

/// Parse "SMA 10/50"-style labels into (fast, slow) periods.
fn parse_cross_label(s: &str, prefix: &str) -> Option<(u32, u32)> {
    let rest = s.strip_prefix(prefix)?;
    let (fast, slow) = rest.split_once('/')?;
    Some((fast.parse().ok()?, slow.parse().ok()?))
}

fn stored_or<F>(stored: Option<&[f64]>, compute: F) -> Vec<f64>
where
    F: FnOnce() -> Vec<f64>,
{
    match stored {
        Some(values) => values.to_vec(),
        None => compute(),
    }
}
