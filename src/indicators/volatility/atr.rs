//! Range-based ATR
//!
//! Averages the plain high-low range of each interval. The previous close is
//! not considered, so gaps between intervals do not widen the range.

use crate::common::math;
use crate::models::indicators::Candle;

/// SMA of `high - low` over `period`, latest value
pub fn calculate_range_atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let ranges: Vec<f64> = candles.iter().map(Candle::range).collect();
    math::last_defined(&math::sma_series(&ranges, period))
}
