//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::trend::close_prices;
use crate::models::indicators::{BollingerBandsIndicator, Candle};

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * sample standard deviation)
/// Lower Band = Middle - (std_dev * sample standard deviation)
pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: usize,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if candles.len() < period {
        return None;
    }

    let closes = close_prices(candles);
    let middle = math::last_defined(&math::sma_series(&closes, period))?;
    let std = math::last_defined(&math::rolling_std_series(&closes, period))?;

    Some(BollingerBandsIndicator {
        upper: middle + std_dev * std,
        middle,
        lower: middle - std_dev * std,
        period,
        std_dev,
    })
}
