//! Band-crossing rules: an oscillator crossing upward through its low
//! threshold (Buy) or downward through its high threshold (Sell).

use crate::models::Signal;

fn band_crossing(series: &[f64], low: f64, high: f64) -> Vec<Signal> {
    (0..series.len())
        .map(|i| {
            if i == 0 {
                Signal::Hold
            } else if series[i] > low && series[i - 1] < low {
                Signal::Buy
            } else if series[i] < high && series[i - 1] > high {
                Signal::Sell
            } else {
                Signal::Hold
            }
        })
        .collect()
}

/// Buy when RSI crosses upward through `oversold`, Sell when it crosses
/// downward through `overbought`.
pub fn rsi_signal(rsi: &[f64], oversold: f64, overbought: f64) -> Vec<Signal> {
    band_crossing(rsi, oversold, overbought)
}

/// Band rule over the %D line.
pub fn stochastic_signal(d: &[f64], low: f64, high: f64) -> Vec<Signal> {
    band_crossing(d, low, high)
}

/// Band rule over Williams %R (thresholds are negative: -80 / -20).
pub fn williams_signal(williams: &[f64], low: f64, high: f64) -> Vec<Signal> {
    band_crossing(williams, low, high)
}

/// Band rule over the CCI (thresholds -100 / +100).
pub fn cci_signal(cci: &[f64], low: f64, high: f64) -> Vec<Signal> {
    band_crossing(cci, low, high)
}
