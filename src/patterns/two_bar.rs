//! Two-bar pattern predicates. Callers guarantee `i >= 1`.

use crate::models::OhlcvSeries;
use crate::patterns::shape::{is_bearish, is_bullish};

/// Bullish body fully wrapping the prior bearish body.
pub fn bullish_engulfing(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i)
        && is_bearish(s, i - 1)
        && s.close[i] > s.open[i - 1]
        && s.open[i] < s.close[i - 1]
}

/// Bearish body fully wrapping the prior bullish body.
pub fn bearish_engulfing(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i)
        && is_bullish(s, i - 1)
        && s.close[i] < s.open[i - 1]
        && s.open[i] > s.close[i - 1]
}

/// Small bullish body inside the prior bearish body.
pub fn bullish_harami(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i)
        && is_bearish(s, i - 1)
        && s.close[i] < s.open[i - 1]
        && s.open[i] > s.close[i - 1]
}

/// Small bearish body inside the prior bullish body.
pub fn bearish_harami(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i)
        && is_bullish(s, i - 1)
        && s.close[i] > s.open[i - 1]
        && s.open[i] < s.close[i - 1]
}

/// Two bullish bars sharing an identical low.
pub fn tweezer_bottom(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i) && is_bullish(s, i - 1) && s.low[i] == s.low[i - 1]
}

/// Two bearish bars sharing an identical high.
pub fn tweezer_top(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i) && is_bearish(s, i - 1) && s.high[i] == s.high[i - 1]
}

/// Bullish bar opening below the prior bearish close and closing above the
/// prior body's midpoint.
pub fn piercing_line(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i)
        && is_bearish(s, i - 1)
        && s.open[i] < s.close[i - 1]
        && s.close[i] > (s.open[i - 1] + s.close[i - 1]) / 2.0
}

/// Bearish mirror of the piercing line: closes below the prior bullish
/// body's midpoint while staying above its open.
pub fn dark_cloud_cover(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i)
        && is_bullish(s, i - 1)
        && s.close[i] > s.open[i - 1]
        && s.close[i] < (s.open[i - 1] + s.close[i - 1]) / 2.0
}
