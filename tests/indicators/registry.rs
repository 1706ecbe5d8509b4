//! Unit tests for the indicator registry

use std::str::FromStr;

use marketscope::config::IndicatorConfig;
use marketscope::error::AnalysisError;
use marketscope::indicators::{compute_full_set, IndicatorCategory, IndicatorKind};
use marketscope::models::OhlcvSeries;

fn synthetic_series(bars: usize) -> OhlcvSeries {
    let close: Vec<f64> = (0..bars)
        .map(|i| 50.0 + (i as f64 * 0.2).sin() * 4.0)
        .collect();
    let open: Vec<f64> = close.iter().map(|c| c - 0.2).collect();
    let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
    let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
    let volume = vec![100.0; bars];
    OhlcvSeries::new(open, high, low, close, volume).unwrap()
}

#[test]
fn test_registry_names_round_trip() {
    for kind in IndicatorKind::ALL {
        assert_eq!(IndicatorKind::from_str(kind.name()).unwrap(), kind);
    }
}

#[test]
fn test_registry_unknown_name() {
    let err = IndicatorKind::from_str("Ichimoku").unwrap_err();
    assert!(matches!(err, AnalysisError::UnknownIndicator(name) if name == "Ichimoku"));
}

#[test]
fn test_registry_categories() {
    assert_eq!(IndicatorKind::Sma.category(), IndicatorCategory::Trend);
    assert_eq!(IndicatorKind::Aroon.category(), IndicatorCategory::Trend);
    assert_eq!(IndicatorKind::Rsi.category(), IndicatorCategory::Momentum);
    assert_eq!(IndicatorKind::Cci.category(), IndicatorCategory::Momentum);
    assert_eq!(
        IndicatorKind::Bollinger.category(),
        IndicatorCategory::Volatility
    );
}

#[test]
fn test_registry_dispatch_computes_aligned_columns() {
    let series = synthetic_series(60);
    let config = IndicatorConfig::default();
    for kind in IndicatorKind::ALL {
        let columns = kind.compute(&series, &config).unwrap();
        assert!(!columns.is_empty(), "{kind}");
        for (name, values) in &columns {
            assert_eq!(values.len(), series.len(), "{name}");
        }
    }
}

#[test]
fn test_registry_dispatch_column_names() {
    let series = synthetic_series(60);
    let config = IndicatorConfig::default();

    let smas = IndicatorKind::Sma.compute(&series, &config).unwrap();
    let names: Vec<&str> = smas.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["SMA 10", "SMA 20", "SMA 50", "SMA 100", "SMA 200"]);

    let macd = IndicatorKind::Macd.compute(&series, &config).unwrap();
    assert_eq!(macd[2].0, "MACD Histogram");

    let bollinger = IndicatorKind::Bollinger.compute(&series, &config).unwrap();
    assert_eq!(bollinger[0].0, "Bollinger Upper");
    assert_eq!(bollinger[3].0, "Bollinger Bandwidth");
}

#[test]
fn test_registry_dispatch_matches_full_set() {
    let series = synthetic_series(60);
    let config = IndicatorConfig::default();
    let set = compute_full_set(&series, &config).unwrap();

    let rsi = IndicatorKind::Rsi.compute(&series, &config).unwrap();
    let stored = set.rsi.as_ref().unwrap();
    for (a, b) in rsi[0].1.iter().zip(stored) {
        assert!(a == b || (a.is_nan() && b.is_nan()));
    }
}

#[test]
fn test_registry_display_labels() {
    assert_eq!(IndicatorKind::WilliamsR.to_string(), "Williams %R");
    assert_eq!(IndicatorKind::Macd.to_string(), "MACD");
}
