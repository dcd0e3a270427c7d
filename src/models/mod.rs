//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod signal;

pub use indicators::{
    BollingerBandsIndicator, Candle, KeltnerChannel, MacdIndicator, SqueezeParams,
    VolumeIndicator,
};
pub use signal::{IndicatorResult, ScanSnapshot, SqueezeReading, NO_DATA_MESSAGE};
