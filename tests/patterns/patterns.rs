//! Unit tests for the candlestick pattern engine

use std::str::FromStr;

use marketscope::error::AnalysisError;
use marketscope::models::{OhlcvSeries, Signal};
use marketscope::patterns::Pattern;

/// Build a series from (open, high, low, close) bars.
fn series(bars: &[(f64, f64, f64, f64)]) -> OhlcvSeries {
    OhlcvSeries::new(
        bars.iter().map(|b| b.0).collect(),
        bars.iter().map(|b| b.1).collect(),
        bars.iter().map(|b| b.2).collect(),
        bars.iter().map(|b| b.3).collect(),
        vec![1.0; bars.len()],
    )
    .unwrap()
}

#[test]
fn test_shape_helpers() {
    use marketscope::patterns::shape;

    let s = series(&[(2.0, 5.0, 1.0, 4.0)]);
    assert_eq!(shape::real_body(&s, 0), 2.0);
    assert_eq!(shape::candle_range(&s, 0), 4.0);
    assert_eq!(shape::body_top(&s, 0), 4.0);
    assert_eq!(shape::body_bottom(&s, 0), 2.0);
    assert_eq!(shape::upper_shadow(&s, 0), 1.0);
    assert_eq!(shape::lower_shadow(&s, 0), 1.0);
    assert!(shape::is_bullish(&s, 0));
    assert!(!shape::is_bearish(&s, 0));
}

#[test]
fn test_white_marubozu_requires_no_shadows() {
    let fires = series(&[(1.0, 2.0, 1.0, 2.0)]);
    assert_eq!(Pattern::WhiteMarubozu.detect(&fires), vec![Signal::Buy]);

    // A one-tick upper shadow disqualifies.
    let shadowed = series(&[(1.0, 2.1, 1.0, 2.0)]);
    assert_eq!(Pattern::WhiteMarubozu.detect(&shadowed), vec![Signal::Hold]);
}

#[test]
fn test_black_marubozu() {
    let fires = series(&[(2.0, 2.0, 1.0, 1.0)]);
    assert_eq!(Pattern::BlackMarubozu.detect(&fires), vec![Signal::Sell]);
}

#[test]
fn test_bullish_engulfing() {
    let s = series(&[(10.0, 10.5, 7.5, 8.0), (7.0, 11.5, 6.5, 11.0)]);
    assert_eq!(
        Pattern::BullishEngulfing.detect(&s),
        vec![Signal::Hold, Signal::Buy]
    );
    // The mirror pattern must not fire on the same bars.
    assert_eq!(
        Pattern::BearishEngulfing.detect(&s),
        vec![Signal::Hold, Signal::Hold]
    );
}

#[test]
fn test_bearish_harami() {
    let s = series(&[(5.0, 10.5, 4.5, 10.0), (9.0, 9.5, 5.5, 6.0)]);
    assert_eq!(
        Pattern::BearishHarami.detect(&s),
        vec![Signal::Hold, Signal::Sell]
    );
}

#[test]
fn test_tweezer_bottom_exact_low_match() {
    let s = series(&[(2.0, 3.0, 1.0, 3.0), (2.5, 3.5, 1.0, 3.5)]);
    assert_eq!(
        Pattern::TweezerBottom.detect(&s),
        vec![Signal::Hold, Signal::Buy]
    );

    let near = series(&[(2.0, 3.0, 1.0, 3.0), (2.5, 3.5, 1.01, 3.5)]);
    assert_eq!(
        Pattern::TweezerBottom.detect(&near),
        vec![Signal::Hold, Signal::Hold]
    );
}

#[test]
fn test_piercing_line() {
    // Opens below the prior bearish close, recovers past the midpoint (8).
    let s = series(&[(10.0, 10.0, 6.0, 6.0), (5.0, 9.0, 5.0, 9.0)]);
    assert_eq!(
        Pattern::PiercingLine.detect(&s),
        vec![Signal::Hold, Signal::Buy]
    );
}

#[test]
fn test_morning_star() {
    let s = series(&[
        (10.0, 10.2, 5.8, 6.0),
        (5.0, 5.6, 4.8, 5.5),
        (6.5, 9.2, 6.4, 9.0),
    ]);
    assert_eq!(
        Pattern::MorningStar.detect(&s),
        vec![Signal::Hold, Signal::Hold, Signal::Buy]
    );
}

#[test]
fn test_morning_star_needs_midpoint_recovery() {
    // Final close 7.9 sits just under the first bar's midpoint of 8.
    let s = series(&[
        (10.0, 10.2, 5.8, 6.0),
        (5.0, 5.6, 4.8, 5.5),
        (6.5, 8.0, 6.4, 7.9),
    ]);
    assert_eq!(
        Pattern::MorningStar.detect(&s),
        vec![Signal::Hold, Signal::Hold, Signal::Hold]
    );
}

#[test]
fn test_three_white_soldiers() {
    // Full-body bars (high == close, low == open), each opening inside the
    // prior bar's advance.
    let s = series(&[
        (1.0, 2.0, 1.0, 2.0),
        (1.5, 3.0, 1.5, 3.0),
        (2.5, 4.0, 2.5, 4.0),
    ]);
    assert_eq!(
        Pattern::ThreeWhiteSoldiers.detect(&s),
        vec![Signal::Hold, Signal::Hold, Signal::Buy]
    );
}

#[test]
fn test_three_white_soldiers_rejects_long_shadows() {
    // Same closes, but bodies under 80% of the range.
    let s = series(&[
        (1.0, 2.5, 0.5, 2.0),
        (1.5, 3.5, 1.0, 3.0),
        (2.5, 4.5, 2.0, 4.0),
    ]);
    assert_eq!(
        Pattern::ThreeWhiteSoldiers.detect(&s),
        vec![Signal::Hold, Signal::Hold, Signal::Hold]
    );
}

#[test]
fn test_upside_tasuki_gap() {
    let s = series(&[
        (1.0, 2.1, 0.9, 2.0),
        (3.0, 4.1, 2.9, 4.0),
        (3.5, 3.6, 1.4, 1.5),
    ]);
    // Continuation pattern: the bearish third bar still emits the bullish
    // bias.
    assert_eq!(
        Pattern::UpsideTasukiGap.detect(&s),
        vec![Signal::Hold, Signal::Hold, Signal::Buy]
    );
}

#[test]
fn test_lookback_positions_never_fire() {
    // Bars engineered so predicates would hold if the guard were missing.
    let s = series(&[(7.0, 11.5, 6.5, 11.0), (7.0, 11.5, 6.5, 11.0)]);
    for pattern in Pattern::ALL {
        let out = pattern.detect(&s);
        for i in 0..pattern.lookback().min(out.len()) {
            assert_eq!(out[i], Signal::Hold, "{pattern} fired at position {i}");
        }
    }
}

#[test]
fn test_detect_emits_only_bias_or_hold() {
    let s = series(&[
        (10.0, 10.5, 7.5, 8.0),
        (7.0, 11.5, 6.5, 11.0),
        (10.0, 10.2, 5.8, 6.0),
        (5.0, 5.6, 4.8, 5.5),
        (6.5, 9.2, 6.4, 9.0),
    ]);
    for pattern in Pattern::ALL {
        let bias = pattern.bias();
        for signal in pattern.detect(&s) {
            assert!(signal == bias || signal == Signal::Hold, "{pattern}");
        }
    }
}

#[test]
fn test_pattern_names_round_trip() {
    for pattern in Pattern::ALL {
        assert_eq!(Pattern::from_str(pattern.name()).unwrap(), pattern);
    }
}

#[test]
fn test_pattern_unknown_name() {
    let err = Pattern::from_str("Abandoned Baby").unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownPattern(name) if name == "Abandoned Baby"));
}

#[test]
fn test_pattern_bias_is_fixed() {
    assert_eq!(Pattern::MorningStar.bias(), Signal::Buy);
    assert_eq!(Pattern::EveningStar.bias(), Signal::Sell);
    assert_eq!(Pattern::ThreeBlackCrows.bias(), Signal::Sell);
    assert_eq!(Pattern::UpsideTasukiGap.bias(), Signal::Buy);
}
