//! Momentum indicators: MACD

pub mod macd;

pub use macd::*;
