//! Unit tests for EMA indicator

use crate::fixtures::{flat_candles, trending_candles};
use squeeze_radar::indicators::trend::{calculate_ema, close_prices};

#[test]
fn test_ema_insufficient_data() {
    let candles = trending_candles(10, 100.0, 0.1, 0.05, 1000.0);
    assert!(calculate_ema(&candles, 20).is_none());
}

#[test]
fn test_ema_zero_span() {
    let candles = flat_candles(30, 100.0, 1000.0);
    assert!(calculate_ema(&candles, 0).is_none());
}

#[test]
fn test_ema_lags_uptrend() {
    let candles = trending_candles(50, 100.0, 0.1, 0.05, 1000.0);
    let ema = calculate_ema(&candles, 12).unwrap();
    let last_close = candles.last().unwrap().close;
    assert!(ema.is_finite());
    assert!(ema < last_close);
    assert!(ema > candles[0].close);
}

#[test]
fn test_close_prices() {
    let candles = trending_candles(3, 10.0, 1.0, 0.5, 1.0);
    assert_eq!(close_prices(&candles), vec![10.0, 11.0, 12.0]);
}
