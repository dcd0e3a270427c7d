use crate::common::math;
use crate::models::indicators::{Candle, VolumeIndicator};

/// Latest volume against its trailing average
pub fn calculate_volume_average(candles: &[Candle], period: usize) -> Option<VolumeIndicator> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let volume_ma = math::last_defined(&math::sma_series(&volumes, period))?;

    Some(VolumeIndicator {
        volume: *volumes.last()?,
        volume_ma,
        volume_ma_period: period,
    })
}

/// Strictly above `multiplier` times the average
pub fn is_volume_surge(indicator: &VolumeIndicator, multiplier: f64) -> bool {
    indicator.volume > multiplier * indicator.volume_ma
}
