//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::indicators::trend::close_prices;
use crate::models::indicators::{Candle, MacdIndicator, SqueezeParams};

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD line
/// Histogram = MACD - Signal
///
/// All three averages start at the first sample; the caller decides how much
/// warm-up to require.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if candles.len() < slow_period {
        return None;
    }

    let closes = close_prices(candles);
    let fast = math::ema_series(&closes, fast_period);
    let slow = math::ema_series(&closes, slow_period);
    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = math::ema_series(&macd_line, signal_period);

    let macd = *macd_line.last()?;
    let signal = *signal_line.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(
        candles,
        SqueezeParams::MACD_FAST,
        SqueezeParams::MACD_SLOW,
        SqueezeParams::MACD_SIGNAL,
    )
}
