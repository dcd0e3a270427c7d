//! Shared candle builders and test doubles
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use squeeze_radar::models::indicators::Candle;
use squeeze_radar::services::alerts::AlertDispatcher;
use squeeze_radar::services::market_data::{MarketDataError, MarketDataProvider};
use std::collections::HashMap;
use tokio::sync::Mutex;

pub fn minute(i: usize) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + 60 * i as i64, 0).unwrap()
}

/// Linear closes with a symmetric high/low range around each close.
pub fn trending_candles(count: usize, start: f64, step: f64, half_range: f64, volume: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = start + step * i as f64;
            Candle::new(close, close + half_range, close - half_range, volume, minute(i))
        })
        .collect()
}

/// Every field constant: zero volatility, zero momentum.
pub fn flat_candles(count: usize, price: f64, volume: f64) -> Vec<Candle> {
    trending_candles(count, price, 0.0, 0.0, volume)
}

/// Gentle uptrend inside a wide range with a volume spike on the last bar.
/// All three sub-signals fire on the final candle.
pub fn squeeze_candles(count: usize) -> Vec<Candle> {
    let mut candles = trending_candles(count, 100.0, 0.01, 1.0, 1000.0);
    if let Some(last) = candles.last_mut() {
        last.volume = 5000.0;
    }
    candles
}

/// Deterministic zig-zag used where some noise is wanted.
pub fn noisy_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let wobble = ((i * 7) % 5) as f64 * 0.05 - 0.1;
            let close = 50.0 + 0.02 * i as f64 + wobble;
            let half_range = 0.1 + ((i * 3) % 4) as f64 * 0.05;
            let volume = 800.0 + ((i * 11) % 9) as f64 * 100.0;
            Candle::new(close, close + half_range, close - half_range, volume, minute(i))
        })
        .collect()
}

/// Provider serving fixed series; unknown symbols have no chart result.
#[derive(Default)]
pub struct StaticProvider {
    pub series: HashMap<String, Vec<Candle>>,
}

impl StaticProvider {
    pub fn with(mut self, symbol: &str, candles: Vec<Candle>) -> Self {
        self.series.insert(symbol.to_string(), candles);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for StaticProvider {
    async fn fetch_series(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        self.series
            .get(symbol)
            .cloned()
            .ok_or(MarketDataError::MissingResult)
    }
}

#[derive(Default)]
pub struct RecordingAlerts {
    pub sent: Mutex<Vec<(String, f64)>>,
}

#[async_trait::async_trait]
impl AlertDispatcher for RecordingAlerts {
    async fn notify(&self, symbol: &str, price: f64) {
        self.sent.lock().await.push((symbol.to_string(), price));
    }
}
