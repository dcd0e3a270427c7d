//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::Candle;

pub fn close_prices(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

/// EMA of closes over the whole series, returning the latest value
pub fn calculate_ema(candles: &[Candle], span: usize) -> Option<f64> {
    if span == 0 || candles.len() < span {
        return None;
    }

    math::ema_series(&close_prices(candles), span).last().copied()
}
