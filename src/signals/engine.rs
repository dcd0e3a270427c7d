//! Squeeze engine: fuses volatility contraction, volume surge and MACD momentum.

use chrono::{DateTime, Utc};

use crate::indicators::momentum::calculate_macd_default;
use crate::indicators::volatility::{calculate_bollinger_bands, calculate_keltner_channel};
use crate::indicators::volume::{calculate_volume_average, is_volume_surge};
use crate::indicators::IndicatorError;
use crate::models::indicators::{BollingerBandsIndicator, Candle, KeltnerChannel, SqueezeParams};
use crate::models::signal::{IndicatorResult, SqueezeReading};

/// Fewer normalized candles than this and a symbol is reported as having no data.
pub const MIN_CANDLES: usize = 50;

/// Bollinger Bands strictly inside the Keltner Channel.
///
/// Bands that collapse onto the same point are not a squeeze.
pub fn is_in_squeeze(bb: &BollingerBandsIndicator, kc: &KeltnerChannel) -> bool {
    bb.lower > kc.lower && bb.upper < kc.upper
}

pub struct SqueezeEngine;

impl SqueezeEngine {
    /// Evaluate the latest candle of `candles`.
    pub fn evaluate(
        candles: &[Candle],
        params: &SqueezeParams,
    ) -> Result<SqueezeReading, IndicatorError> {
        let required = params.required_candles();
        if candles.len() < required {
            return Err(IndicatorError::InsufficientData {
                required,
                available: candles.len(),
            });
        }
        check_candles(candles)?;

        let kc = calculate_keltner_channel(candles, params.length, params.kc_mult)
            .ok_or_else(|| undefined("keltner channel", params.length))?;
        ensure_finite("keltner channel", &[kc.upper, kc.middle, kc.lower])?;

        let bb = calculate_bollinger_bands(candles, params.length, params.bb_mult)
            .ok_or_else(|| undefined("bollinger bands", params.length))?;
        ensure_finite("bollinger bands", &[bb.upper, bb.middle, bb.lower])?;

        let volume = calculate_volume_average(candles, params.length)
            .ok_or_else(|| undefined("volume average", params.length))?;
        ensure_finite("volume average", &[volume.volume_ma])?;

        let macd = calculate_macd_default(candles)
            .ok_or_else(|| undefined("macd", SqueezeParams::MACD_SLOW))?;
        ensure_finite("macd", &[macd.macd, macd.signal])?;

        let last = candles
            .last()
            .ok_or_else(|| IndicatorError::ComputationFault("empty series".to_string()))?;

        Ok(SqueezeReading {
            price: last.close,
            volume: last.volume as u64,
            in_squeeze: is_in_squeeze(&bb, &kc),
            high_volume: is_volume_surge(&volume, params.volume_mult),
            macd_bullish: macd.is_bullish(),
        })
    }

    /// Evaluate and wrap the outcome as a snapshot entry stamped with `now`.
    pub fn evaluate_at(
        candles: &[Candle],
        params: &SqueezeParams,
        now: DateTime<Utc>,
    ) -> IndicatorResult {
        IndicatorResult::from_evaluation(Self::evaluate(candles, params), now)
    }
}

fn check_candles(candles: &[Candle]) -> Result<(), IndicatorError> {
    for (i, c) in candles.iter().enumerate() {
        if !(c.close.is_finite() && c.high.is_finite() && c.low.is_finite() && c.volume.is_finite()) {
            return Err(IndicatorError::ComputationFault(format!(
                "non-finite value in candle {}",
                i
            )));
        }
        if c.volume < 0.0 {
            return Err(IndicatorError::ComputationFault(format!(
                "negative volume in candle {}",
                i
            )));
        }
    }
    Ok(())
}

fn ensure_finite(name: &str, values: &[f64]) -> Result<(), IndicatorError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(IndicatorError::ComputationFault(format!("{} is not finite", name)))
    }
}

fn undefined(name: &str, period: usize) -> IndicatorError {
    IndicatorError::ComputationFault(format!("{} undefined for period {}", name, period))
}
