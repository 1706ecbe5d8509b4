//! Three-bar pattern predicates. Callers guarantee `i >= 2`.

use crate::models::OhlcvSeries;
use crate::patterns::shape::{body_bottom, body_top, candle_range, is_bearish, is_bullish, real_body};

/// Minimum body share of the full range for a "soldier"/"crow" bar.
const FULL_BODY_RATIO: f64 = 0.8;

/// Bearish bar, a small body gapping below both neighbors, then a bullish
/// bar recovering past the first bar's midpoint.
pub fn morning_star(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i - 2)
        && is_bullish(s, i)
        && s.open[i] > body_top(s, i - 1)
        && s.close[i - 2] > body_top(s, i - 1)
        && s.close[i] > (s.close[i - 2] + s.open[i - 2]) / 2.0
}

/// Bearish mirror of the morning star.
pub fn evening_star(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i - 2)
        && is_bearish(s, i)
        && s.open[i] < body_bottom(s, i - 1)
        && s.close[i - 2] < body_bottom(s, i - 1)
        && s.close[i] < (s.close[i - 2] + s.open[i - 2]) / 2.0
}

/// Three consecutive near-full-body bullish bars with rising opens and
/// closes, each opening within the prior bar's advance.
pub fn three_white_soldiers(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i)
        && is_bullish(s, i - 1)
        && is_bullish(s, i - 2)
        && s.close[i] > s.close[i - 1]
        && s.close[i - 1] > s.close[i - 2]
        && s.open[i] > s.open[i - 1]
        && s.open[i - 1] > s.open[i - 2]
        && real_body(s, i) > FULL_BODY_RATIO * candle_range(s, i)
        && real_body(s, i - 1) > FULL_BODY_RATIO * candle_range(s, i - 1)
        && real_body(s, i - 2) > FULL_BODY_RATIO * candle_range(s, i - 2)
        && s.open[i] < s.close[i - 1]
        && s.open[i - 1] < s.close[i - 2]
}

/// Three consecutive near-full-body bearish bars with falling opens and
/// closes. The open-versus-prior-close comparisons mirror the soldiers'
/// exactly (below prior close), per the source truth table.
pub fn three_black_crows(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i)
        && is_bearish(s, i - 1)
        && is_bearish(s, i - 2)
        && s.close[i] < s.close[i - 1]
        && s.close[i - 1] < s.close[i - 2]
        && s.open[i] < s.open[i - 1]
        && s.open[i - 1] < s.open[i - 2]
        && real_body(s, i) > FULL_BODY_RATIO * candle_range(s, i)
        && real_body(s, i - 1) > FULL_BODY_RATIO * candle_range(s, i - 1)
        && real_body(s, i - 2) > FULL_BODY_RATIO * candle_range(s, i - 2)
        && s.open[i] < s.close[i - 1]
        && s.open[i - 1] < s.close[i - 2]
}

/// Bearish bar, a bullish bar inside its body, then a bullish confirmation
/// closing higher.
pub fn three_inside_up(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i - 2)
        && is_bullish(s, i - 1)
        && is_bullish(s, i)
        && s.close[i - 1] < s.open[i - 2]
        && s.close[i - 2] < s.open[i - 1]
        && s.close[i] > s.close[i - 1]
        && s.open[i] > s.open[i - 1]
}

/// Bearish mirror of three inside up.
pub fn three_inside_down(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i - 2)
        && is_bearish(s, i - 1)
        && is_bearish(s, i)
        && s.close[i - 1] > s.open[i - 2]
        && s.close[i - 2] > s.open[i - 1]
        && s.close[i] < s.close[i - 1]
        && s.open[i] < s.open[i - 1]
}

/// Bearish bar engulfed by a bullish bar, then a bullish confirmation.
pub fn three_outside_up(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i - 2)
        && is_bullish(s, i - 1)
        && is_bullish(s, i)
        && s.close[i - 1] > s.open[i - 2]
        && s.close[i - 2] > s.open[i - 1]
        && s.close[i] > s.close[i - 1]
        && s.open[i] > s.open[i - 1]
}

/// Bearish mirror of three outside up. Note the middle-bar comparisons
/// match three-inside-down's, per the source truth table.
pub fn three_outside_down(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i - 2)
        && is_bearish(s, i - 1)
        && is_bearish(s, i)
        && s.close[i - 1] > s.open[i - 2]
        && s.close[i - 2] > s.open[i - 1]
        && s.close[i] < s.close[i - 1]
        && s.open[i] < s.open[i - 1]
}

/// Two bullish bars with an upward gap, then a bearish bar opening inside
/// the second body and closing into (but not through) the gap.
pub fn upside_tasuki_gap(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i - 2)
        && is_bullish(s, i - 1)
        && is_bearish(s, i)
        && s.open[i - 1] > s.close[i - 2]
        && s.open[i] > s.open[i - 1]
        && s.close[i] < s.close[i - 2]
        && s.open[i] < s.close[i - 1]
        && s.close[i] > s.open[i - 2]
}

/// Bearish mirror of the upside tasuki gap.
pub fn downside_tasuki_gap(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i - 2)
        && is_bearish(s, i - 1)
        && is_bullish(s, i)
        && s.open[i - 1] < s.close[i - 2]
        && s.open[i] < s.open[i - 1]
        && s.close[i] > s.close[i - 2]
        && s.open[i] > s.close[i - 1]
        && s.close[i] < s.open[i - 2]
}
