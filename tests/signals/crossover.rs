//! Unit tests for crossover signal rules

use marketscope::models::Signal;
use marketscope::signals::{aroon_signal, bollinger_signal, macd_signal, moving_average_crossover};

#[test]
fn test_ma_crossover_buy() {
    let fast = [1.0, 3.0];
    let slow = [2.0, 2.0];
    let out = moving_average_crossover(&fast, &slow).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Buy]);
}

#[test]
fn test_ma_crossover_sell() {
    let fast = [3.0, 1.0];
    let slow = [2.0, 2.0];
    let out = moving_average_crossover(&fast, &slow).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Sell]);
}

#[test]
fn test_ma_crossover_no_event_without_crossing() {
    let fast = [3.0, 4.0, 5.0];
    let slow = [2.0, 2.0, 2.0];
    let out = moving_average_crossover(&fast, &slow).unwrap();
    assert!(out.iter().all(|s| *s == Signal::Hold));
}

#[test]
fn test_ma_crossover_nan_never_fires() {
    let fast = [f64::NAN, 3.0, 3.0];
    let slow = [2.0, 2.0, 2.0];
    let out = moving_average_crossover(&fast, &slow).unwrap();
    assert!(out.iter().all(|s| *s == Signal::Hold));
}

#[test]
fn test_ma_crossover_length_mismatch() {
    assert!(moving_average_crossover(&[1.0], &[1.0, 2.0]).is_err());
}

#[test]
fn test_macd_signal_single_buy_per_crossing() {
    let histogram = [-1.0, -0.5, 0.5, 1.0];
    let out = macd_signal(&histogram);
    assert_eq!(out, vec![Signal::Hold, Signal::Hold, Signal::Buy, Signal::Hold]);
}

#[test]
fn test_macd_signal_zero_boundary() {
    // A bar resting exactly on zero still counts as the "before" side of
    // the crossing in both directions.
    assert_eq!(macd_signal(&[0.0, 1.0]), vec![Signal::Hold, Signal::Buy]);
    assert_eq!(macd_signal(&[0.0, -1.0]), vec![Signal::Hold, Signal::Sell]);
    // But zero itself is never an event bar.
    assert_eq!(macd_signal(&[-1.0, 0.0]), vec![Signal::Hold, Signal::Hold]);
}

#[test]
fn test_bollinger_signal_reentry_from_below() {
    let close = [1.0, 2.0];
    let upper = [10.0, 10.0];
    let lower = [1.5, 1.5];
    let out = bollinger_signal(&close, &upper, &lower).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Buy]);
}

#[test]
fn test_bollinger_signal_reentry_from_above() {
    let close = [10.0, 5.0];
    let upper = [9.0, 9.0];
    let lower = [0.0, 0.0];
    let out = bollinger_signal(&close, &upper, &lower).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Sell]);
}

#[test]
fn test_bollinger_signal_inside_band_is_hold() {
    let close = [5.0, 6.0, 5.5];
    let upper = [9.0, 9.0, 9.0];
    let lower = [1.0, 1.0, 1.0];
    let out = bollinger_signal(&close, &upper, &lower).unwrap();
    assert!(out.iter().all(|s| *s == Signal::Hold));
}

#[test]
fn test_aroon_signal_buy_crossing() {
    let up = [60.0, 80.0];
    let down = [0.0, 0.0];
    let out = aroon_signal(&up, &down, 70.0, 30.0).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Buy]);
}

#[test]
fn test_aroon_signal_sell_uses_lower_prior_threshold() {
    // The Sell branch demands the prior Down value below 30, not below 70.
    let up = [0.0, 0.0];
    let down_from_low = [20.0, 80.0];
    let out = aroon_signal(&up, &down_from_low, 70.0, 30.0).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Sell]);

    let down_from_mid = [50.0, 80.0];
    let out = aroon_signal(&up, &down_from_mid, 70.0, 30.0).unwrap();
    assert_eq!(out, vec![Signal::Hold, Signal::Hold]);
}

#[test]
fn test_aroon_signal_length_mismatch() {
    assert!(aroon_signal(&[1.0], &[1.0, 2.0], 70.0, 30.0).is_err());
}
