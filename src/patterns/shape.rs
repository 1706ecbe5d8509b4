//! Per-bar candle geometry.

use crate::models::OhlcvSeries;

/// |Open - Close|.
pub fn real_body(s: &OhlcvSeries, i: usize) -> f64 {
    (s.open[i] - s.close[i]).abs()
}

/// High - Low.
pub fn candle_range(s: &OhlcvSeries, i: usize) -> f64 {
    s.high[i] - s.low[i]
}

/// max(Open, Close).
pub fn body_top(s: &OhlcvSeries, i: usize) -> f64 {
    s.open[i].max(s.close[i])
}

/// min(Open, Close).
pub fn body_bottom(s: &OhlcvSeries, i: usize) -> f64 {
    s.open[i].min(s.close[i])
}

/// High - max(Open, Close).
pub fn upper_shadow(s: &OhlcvSeries, i: usize) -> f64 {
    s.high[i] - body_top(s, i)
}

/// min(Open, Close) - Low.
pub fn lower_shadow(s: &OhlcvSeries, i: usize) -> f64 {
    body_bottom(s, i) - s.low[i]
}

/// Close above open.
pub fn is_bullish(s: &OhlcvSeries, i: usize) -> bool {
    s.close[i] > s.open[i]
}

/// Close below open.
pub fn is_bearish(s: &OhlcvSeries, i: usize) -> bool {
    s.close[i] < s.open[i]
}
