//! Unit tests for Bollinger Bands

use marketscope::indicators::volatility::bollinger;

#[test]
fn test_bollinger_population_deviation_pinned() {
    // High == Low == Close, so the typical price equals the input. Over
    // [1, 2] the population standard deviation is 0.5 (the sample figure
    // would be ~0.707), giving bands at 1.5 +/- 2 * 0.5.
    let v = vec![1.0, 2.0, 3.0, 4.0];
    let out = bollinger(&v, &v, &v, 2, 2.0).unwrap();

    assert!(out.upper[0].is_nan());
    assert!(out.lower[0].is_nan());
    assert_eq!(out.upper[1], 2.5);
    assert_eq!(out.lower[1], 0.5);
    assert_eq!(out.upper[2], 3.5);
    assert_eq!(out.lower[2], 1.5);
}

#[test]
fn test_bollinger_derived_columns() {
    let v = vec![1.0, 2.0, 3.0, 4.0];
    let out = bollinger(&v, &v, &v, 2, 2.0).unwrap();

    // %b = (close - lower) / (upper - lower); bandwidth = width / middle.
    assert_eq!(out.percent_b[1], (2.0 - 0.5) / 2.0);
    assert!((out.bandwidth[1] - 2.0 / 1.5).abs() < 1e-12);
}

#[test]
fn test_bollinger_flat_series_bands_collapse() {
    let v = vec![5.0; 25];
    let out = bollinger(&v, &v, &v, 20, 2.0).unwrap();
    assert_eq!(out.upper[20], 5.0);
    assert_eq!(out.lower[20], 5.0);
    // Zero width makes %b undefined rather than dividing by zero.
    assert!(out.percent_b[20].is_nan());
}

#[test]
fn test_bollinger_insufficient_history() {
    let v = vec![1.0, 2.0, 3.0];
    let out = bollinger(&v, &v, &v, 20, 2.0).unwrap();
    assert!(out.upper.iter().all(|x| x.is_nan()));
    assert!(out.lower.iter().all(|x| x.is_nan()));
}

#[test]
fn test_bollinger_length_mismatch() {
    assert!(bollinger(&[1.0], &[1.0, 2.0], &[1.0, 2.0], 20, 2.0).is_err());
}
