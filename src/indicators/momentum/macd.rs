//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::MacdSeries;

/// MACD = EMA(fast) - EMA(slow), signal line = exponential pass of the MACD
/// line, histogram = MACD - signal.
///
/// All three exponential passes use alpha = 2 / period directly, not the
/// 2 / (period + 1) span convention of the overlay EMA. They run from
/// position 0 with no warm-up mask. A series shorter than the slow period
/// is all `NaN`.
pub fn macd(
    close: &[f64],
    slow_period: usize,
    fast_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let len = close.len();
    if slow_period == 0 || fast_period == 0 || signal_period == 0 || slow_period > len {
        let nan = vec![f64::NAN; len];
        return MacdSeries {
            macd: nan.clone(),
            signal: nan.clone(),
            histogram: nan,
        };
    }

    let slow = math::ewm_mean(close, 2.0 / slow_period as f64);
    let fast = math::ewm_mean(close, 2.0 / fast_period as f64);
    let macd: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = math::ewm_mean(&macd, 2.0 / signal_period as f64);
    let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}
