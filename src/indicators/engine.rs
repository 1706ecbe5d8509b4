//! Full-set orchestration: every derived column the dashboard persists.

use tracing::{debug, info};

use crate::config::IndicatorConfig;
use crate::error::AnalysisError;
use crate::indicators::momentum::{cci, macd, rsi, stochastic, williams_r};
use crate::indicators::trend::{aroon, ema, ma_ratio, sma};
use crate::indicators::volatility::bollinger;
use crate::models::{IndicatorSet, MovingAverageSeries, OhlcvSeries, RatioSeries};

/// Compute the complete named-column set for one asset.
///
/// The caller persists the returned [`IndicatorSet`] next to the raw
/// history; the signal engine reads its columns back. Fails only on
/// internally inconsistent input lengths; per-position numeric edge cases
/// stay `NaN` in the affected columns.
pub fn compute_full_set(
    series: &OhlcvSeries,
    config: &IndicatorConfig,
) -> Result<IndicatorSet, AnalysisError> {
    debug!(bars = series.len(), "computing indicator set");

    let mut set = IndicatorSet::new();

    for &period in &config.ma_periods {
        set.smas.push(MovingAverageSeries {
            period,
            values: sma(&series.close, period as usize),
        });
        set.emas.push(MovingAverageSeries {
            period,
            values: ema(&series.close, period as usize),
        });
    }

    for &(fast, slow) in &config.ratio_pairs {
        let fast_sma = column_or_compute(set.sma(fast), || sma(&series.close, fast as usize));
        let slow_sma = column_or_compute(set.sma(slow), || sma(&series.close, slow as usize));
        set.sma_ratios.push(RatioSeries {
            fast_period: fast,
            slow_period: slow,
            values: ma_ratio(&fast_sma, &slow_sma)?,
        });

        let fast_ema = column_or_compute(set.ema(fast), || ema(&series.close, fast as usize));
        let slow_ema = column_or_compute(set.ema(slow), || ema(&series.close, slow as usize));
        set.ema_ratios.push(RatioSeries {
            fast_period: fast,
            slow_period: slow,
            values: ma_ratio(&fast_ema, &slow_ema)?,
        });
    }
    debug!(
        periods = config.ma_periods.len(),
        pairs = config.ratio_pairs.len(),
        "moving averages and ratios done"
    );

    set = set
        .with_bollinger(bollinger(
            &series.high,
            &series.low,
            &series.close,
            config.bollinger_period as usize,
            config.bollinger_multiplier,
        )?)
        .with_rsi(rsi(&series.close, config.rsi_period as usize))
        .with_macd(macd(
            &series.close,
            config.macd_slow_period as usize,
            config.macd_fast_period as usize,
            config.macd_signal_period as usize,
        ))
        .with_stochastic(stochastic(
            &series.high,
            &series.low,
            &series.close,
            config.stochastic_period as usize,
            config.stochastic_d_period as usize,
        )?)
        .with_williams_r(williams_r(
            &series.high,
            &series.low,
            &series.close,
            config.williams_period as usize,
        )?)
        .with_cci(cci(
            &series.high,
            &series.low,
            &series.close,
            config.cci_period as usize,
        )?)
        .with_aroon(aroon(
            &series.high,
            &series.low,
            config.aroon_period as usize,
        )?);

    info!(bars = series.len(), "indicator set complete");
    Ok(set)
}

fn column_or_compute<F>(stored: Option<&[f64]>, compute: F) -> Vec<f64>
where
    F: FnOnce() -> Vec<f64>,
{
    match stored {
        Some(values) => values.to_vec(),
        None => compute(),
    }
}
