//! Pattern engine: fixed-shape candlestick predicates over 1-3 bars.

pub mod shape;
pub mod single;
pub mod three_bar;
pub mod two_bar;

use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;
use crate::models::{OhlcvSeries, Signal};

/// Every candlestick pattern the engine recognizes. Each is inherently
/// bullish or bearish; a pattern never fires in both directions. The set
/// is closed; name lookup on anything else fails with
/// [`AnalysisError::UnknownPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    WhiteMarubozu,
    BlackMarubozu,
    BullishEngulfing,
    BearishEngulfing,
    BullishHarami,
    BearishHarami,
    TweezerBottom,
    TweezerTop,
    PiercingLine,
    DarkCloudCover,
    MorningStar,
    EveningStar,
    ThreeWhiteSoldiers,
    ThreeBlackCrows,
    ThreeInsideUp,
    ThreeInsideDown,
    ThreeOutsideUp,
    ThreeOutsideDown,
    UpsideTasukiGap,
    DownsideTasukiGap,
}

impl Pattern {
    pub const ALL: [Pattern; 20] = [
        Pattern::WhiteMarubozu,
        Pattern::BlackMarubozu,
        Pattern::BullishEngulfing,
        Pattern::BearishEngulfing,
        Pattern::BullishHarami,
        Pattern::BearishHarami,
        Pattern::TweezerBottom,
        Pattern::TweezerTop,
        Pattern::PiercingLine,
        Pattern::DarkCloudCover,
        Pattern::MorningStar,
        Pattern::EveningStar,
        Pattern::ThreeWhiteSoldiers,
        Pattern::ThreeBlackCrows,
        Pattern::ThreeInsideUp,
        Pattern::ThreeInsideDown,
        Pattern::ThreeOutsideUp,
        Pattern::ThreeOutsideDown,
        Pattern::UpsideTasukiGap,
        Pattern::DownsideTasukiGap,
    ];

    /// Display label, matching the dashboard's checklist entries.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::WhiteMarubozu => "White Marubozu",
            Pattern::BlackMarubozu => "Black Marubozu",
            Pattern::BullishEngulfing => "Bullish Engulfing",
            Pattern::BearishEngulfing => "Bearish Engulfing",
            Pattern::BullishHarami => "Bullish Harami",
            Pattern::BearishHarami => "Bearish Harami",
            Pattern::TweezerBottom => "Tweezer Bottom",
            Pattern::TweezerTop => "Tweezer Top",
            Pattern::PiercingLine => "Piercing Line",
            Pattern::DarkCloudCover => "Dark Cloud Cover",
            Pattern::MorningStar => "Morning Star",
            Pattern::EveningStar => "Evening Star",
            Pattern::ThreeWhiteSoldiers => "Three White Soldiers",
            Pattern::ThreeBlackCrows => "Three Black Crows",
            Pattern::ThreeInsideUp => "Three Inside Up",
            Pattern::ThreeInsideDown => "Three Inside Down",
            Pattern::ThreeOutsideUp => "Three Outside Up",
            Pattern::ThreeOutsideDown => "Three Outside Down",
            Pattern::UpsideTasukiGap => "Upside Tasuki Gap",
            Pattern::DownsideTasukiGap => "Downside Tasuki Gap",
        }
    }

    /// The sign this pattern emits when it fires.
    pub fn bias(&self) -> Signal {
        match self {
            Pattern::WhiteMarubozu
            | Pattern::BullishEngulfing
            | Pattern::BullishHarami
            | Pattern::TweezerBottom
            | Pattern::PiercingLine
            | Pattern::MorningStar
            | Pattern::ThreeWhiteSoldiers
            | Pattern::ThreeInsideUp
            | Pattern::ThreeOutsideUp
            | Pattern::UpsideTasukiGap => Signal::Buy,
            Pattern::BlackMarubozu
            | Pattern::BearishEngulfing
            | Pattern::BearishHarami
            | Pattern::TweezerTop
            | Pattern::DarkCloudCover
            | Pattern::EveningStar
            | Pattern::ThreeBlackCrows
            | Pattern::ThreeInsideDown
            | Pattern::ThreeOutsideDown
            | Pattern::DownsideTasukiGap => Signal::Sell,
        }
    }

    /// Prior bars the predicate inspects (0, 1, or 2).
    pub fn lookback(&self) -> usize {
        match self {
            Pattern::WhiteMarubozu | Pattern::BlackMarubozu => 0,
            Pattern::BullishEngulfing
            | Pattern::BearishEngulfing
            | Pattern::BullishHarami
            | Pattern::BearishHarami
            | Pattern::TweezerBottom
            | Pattern::TweezerTop
            | Pattern::PiercingLine
            | Pattern::DarkCloudCover => 1,
            _ => 2,
        }
    }

    /// Evaluate this pattern over a whole series.
    ///
    /// Emits the pattern's bias at every position where the predicate
    /// holds and `Hold` elsewhere, including every position whose required
    /// lookback does not exist.
    pub fn detect(&self, series: &OhlcvSeries) -> Vec<Signal> {
        let predicate = self.predicate();
        let bias = self.bias();
        let lookback = self.lookback();
        (0..series.len())
            .map(|i| {
                if i < lookback {
                    Signal::Hold
                } else if predicate(series, i) {
                    bias
                } else {
                    Signal::Hold
                }
            })
            .collect()
    }

    fn predicate(&self) -> fn(&OhlcvSeries, usize) -> bool {
        match self {
            Pattern::WhiteMarubozu => single::white_marubozu,
            Pattern::BlackMarubozu => single::black_marubozu,
            Pattern::BullishEngulfing => two_bar::bullish_engulfing,
            Pattern::BearishEngulfing => two_bar::bearish_engulfing,
            Pattern::BullishHarami => two_bar::bullish_harami,
            Pattern::BearishHarami => two_bar::bearish_harami,
            Pattern::TweezerBottom => two_bar::tweezer_bottom,
            Pattern::TweezerTop => two_bar::tweezer_top,
            Pattern::PiercingLine => two_bar::piercing_line,
            Pattern::DarkCloudCover => two_bar::dark_cloud_cover,
            Pattern::MorningStar => three_bar::morning_star,
            Pattern::EveningStar => three_bar::evening_star,
            Pattern::ThreeWhiteSoldiers => three_bar::three_white_soldiers,
            Pattern::ThreeBlackCrows => three_bar::three_black_crows,
            Pattern::ThreeInsideUp => three_bar::three_inside_up,
            Pattern::ThreeInsideDown => three_bar::three_inside_down,
            Pattern::ThreeOutsideUp => three_bar::three_outside_up,
            Pattern::ThreeOutsideDown => three_bar::three_outside_down,
            Pattern::UpsideTasukiGap => three_bar::upside_tasuki_gap,
            Pattern::DownsideTasukiGap => three_bar::downside_tasuki_gap,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .find(|pattern| pattern.name() == s)
            .copied()
            .ok_or_else(|| AnalysisError::UnknownPattern(s.to_string()))
    }
}
