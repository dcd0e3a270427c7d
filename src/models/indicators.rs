use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sampling interval for one instrument.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(close: f64, high: f64, low: f64, volume: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            close,
            high,
            low,
            volume,
            timestamp,
        }
    }

    /// High minus low for the interval.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Parameters of the squeeze computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SqueezeParams {
    /// Lookback shared by the Keltner, Bollinger and volume windows.
    pub length: usize,
    pub bb_mult: f64,
    pub kc_mult: f64,
    pub volume_mult: f64,
}

impl SqueezeParams {
    pub const MACD_FAST: usize = 12;
    pub const MACD_SLOW: usize = 26;
    pub const MACD_SIGNAL: usize = 9;

    /// Minimum series length before any indicator is trusted.
    pub fn required_candles(&self) -> usize {
        self.length + Self::MACD_SLOW
    }
}

impl Default for SqueezeParams {
    fn default() -> Self {
        Self {
            length: 20,
            bb_mult: 2.0,
            kc_mult: 1.5,
            volume_mult: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeltnerChannel {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: usize,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub fn is_bullish(&self) -> bool {
        self.macd > self.signal
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeIndicator {
    pub volume: f64,
    pub volume_ma: f64,
    pub volume_ma_period: usize,
}
