//! Squeeze Radar: periodic volatility-squeeze scanning over intraday candles.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
