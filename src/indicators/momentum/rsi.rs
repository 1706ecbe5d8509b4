//! RSI (Relative Strength Index) indicator

use crate::common::math;

/// Wilder-style RSI over closing prices.
///
/// Per-bar upward change = max(close[i] - close[i-1], 0) and downward
/// change = max(close[i-1] - close[i], 0), both zero at position 0. Each is
/// smoothed by the recursive exponential pass with alpha = 1 / period,
/// seeded from the first raw change (no averaging warm-up). Then
/// RSI = 100 - 100 / (1 + smoothed_up / smoothed_down).
///
/// Edge policy: smoothed_down = 0 with smoothed_up > 0 resolves to 100
/// (never silently `NaN`); both zero (no movement yet) resolves to `NaN`.
/// A series shorter than `period` is all `NaN`.
pub fn rsi(close: &[f64], period: usize) -> Vec<f64> {
    let len = close.len();
    if period == 0 || period > len {
        return vec![f64::NAN; len];
    }

    let mut upward = Vec::with_capacity(len);
    let mut downward = Vec::with_capacity(len);
    for i in 0..len {
        let change = if i == 0 { 0.0 } else { close[i] - close[i - 1] };
        upward.push(change.max(0.0));
        downward.push((-change).max(0.0));
    }

    let alpha = 1.0 / period as f64;
    let smoothed_up = math::ewm_mean(&upward, alpha);
    let smoothed_down = math::ewm_mean(&downward, alpha);

    smoothed_up
        .iter()
        .zip(&smoothed_down)
        .map(|(&up, &down)| {
            if down == 0.0 {
                if up == 0.0 {
                    f64::NAN
                } else {
                    100.0
                }
            } else {
                let rs = up / down;
                100.0 - 100.0 / (1.0 + rs)
            }
        })
        .collect()
}
