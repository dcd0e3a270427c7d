//! Unit tests for series math

use squeeze_radar::common::math::{
    ema_alpha, ema_series, last_defined, rolling_std_series, sma_series,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_ema_alpha() {
    assert!(approx(ema_alpha(3), 0.5));
    assert!(approx(ema_alpha(20), 2.0 / 21.0));
}

#[test]
fn test_ema_series_seeded_with_first_value() {
    let ema = ema_series(&[1.0, 2.0, 3.0], 3);
    assert_eq!(ema.len(), 3);
    assert!(approx(ema[0], 1.0));
    assert!(approx(ema[1], 1.5));
    assert!(approx(ema[2], 2.25));
}

#[test]
fn test_ema_series_empty() {
    assert!(ema_series(&[], 12).is_empty());
}

#[test]
fn test_ema_of_constant_is_exact() {
    let ema = ema_series(&[42.5; 30], 20);
    assert!(ema.iter().all(|&v| v == 42.5));
}

#[test]
fn test_sma_series_warmup_is_undefined() {
    let sma = sma_series(&[1.0, 2.0, 3.0, 4.0], 2);
    assert_eq!(sma[0], None);
    assert!(approx(sma[1].unwrap(), 1.5));
    assert!(approx(sma[2].unwrap(), 2.5));
    assert!(approx(sma[3].unwrap(), 3.5));
}

#[test]
fn test_sma_series_window_longer_than_input() {
    let sma = sma_series(&[1.0, 2.0], 5);
    assert_eq!(sma, vec![None, None]);
    assert_eq!(last_defined(&sma), None);
}

#[test]
fn test_rolling_std_uses_sample_denominator() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let std = rolling_std_series(&values, values.len());
    let expected = (32.0_f64 / 7.0).sqrt();
    assert!(approx(last_defined(&std).unwrap(), expected));
    assert!(std[..values.len() - 1].iter().all(Option::is_none));
}

#[test]
fn test_rolling_std_constant_window_is_zero() {
    let std = rolling_std_series(&[100.0; 25], 20);
    assert_eq!(last_defined(&std), Some(0.0));
}

#[test]
fn test_rolling_std_needs_two_samples() {
    assert_eq!(rolling_std_series(&[1.0, 2.0, 3.0], 1), vec![None, None, None]);
}
