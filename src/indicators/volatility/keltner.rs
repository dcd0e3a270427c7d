//! Keltner Channel indicator

use crate::indicators::trend::calculate_ema;
use crate::indicators::volatility::calculate_range_atr;
use crate::models::indicators::{Candle, KeltnerChannel};

/// Middle = EMA(close, period), bands at `multiplier` range-ATRs either side
pub fn calculate_keltner_channel(
    candles: &[Candle],
    period: usize,
    multiplier: f64,
) -> Option<KeltnerChannel> {
    let middle = calculate_ema(candles, period)?;
    let atr = calculate_range_atr(candles, period)?;

    Some(KeltnerChannel {
        upper: middle + multiplier * atr,
        middle,
        lower: middle - multiplier * atr,
        period,
        multiplier,
    })
}
