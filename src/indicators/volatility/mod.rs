//! Volatility indicators: Bollinger Bands, range ATR, Keltner Channel

pub mod atr;
pub mod bollinger;
pub mod keltner;

pub use atr::*;
pub use bollinger::*;
pub use keltner::*;
