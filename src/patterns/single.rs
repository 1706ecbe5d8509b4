//! Single-bar pattern predicates.

use crate::models::OhlcvSeries;
use crate::patterns::shape::{is_bearish, is_bullish};

/// Bullish bar with no shadows at all: the body spans the full range.
/// Uses exact equality; a one-tick shadow disqualifies.
pub fn white_marubozu(s: &OhlcvSeries, i: usize) -> bool {
    is_bullish(s, i) && s.close[i] == s.high[i] && s.open[i] == s.low[i]
}

/// Bearish bar with no shadows at all.
pub fn black_marubozu(s: &OhlcvSeries, i: usize) -> bool {
    is_bearish(s, i) && s.close[i] == s.low[i] && s.open[i] == s.high[i]
}
