//! Scan orchestration: fetch, evaluate, publish, alert

use crate::config::normalize_symbol;
use crate::core::store::SnapshotStore;
use crate::metrics::Metrics;
use crate::models::indicators::SqueezeParams;
use crate::models::signal::{IndicatorResult, ScanSnapshot};
use crate::services::alerts::AlertDispatcher;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{SqueezeEngine, MIN_CANDLES};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Summary of one completed scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub symbols: usize,
    pub errors: usize,
    pub signals: usize,
    pub duration: Duration,
}

pub struct Scanner {
    symbols: Vec<String>,
    params: SqueezeParams,
    provider: Arc<dyn MarketDataProvider + Send + Sync>,
    alerts: Arc<dyn AlertDispatcher + Send + Sync>,
    store: SnapshotStore,
    metrics: Option<Arc<Metrics>>,
    running: Mutex<()>,
}

impl Scanner {
    pub fn new(
        symbols: Vec<String>,
        params: SqueezeParams,
        provider: Arc<dyn MarketDataProvider + Send + Sync>,
        alerts: Arc<dyn AlertDispatcher + Send + Sync>,
        store: SnapshotStore,
    ) -> Self {
        Self {
            symbols,
            params,
            provider,
            alerts,
            store,
            metrics: None,
            running: Mutex::new(()),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Scan every configured symbol and publish a fresh snapshot.
    ///
    /// Returns `None` without doing anything if another scan holds the run
    /// lock.
    pub async fn run_scan(&self) -> Option<ScanReport> {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("Scanner: previous scan still running, skipping this one");
            if let Some(ref metrics) = self.metrics {
                metrics.scans_skipped_total.inc();
            }
            return None;
        };

        let start = Instant::now();
        info!(
            symbol_count = self.symbols.len(),
            "Scanner: scanning {} symbols",
            self.symbols.len()
        );

        let mut snapshot = ScanSnapshot::new();
        for raw in &self.symbols {
            let symbol = normalize_symbol(raw);
            if symbol.is_empty() || snapshot.get(&symbol).is_some() {
                continue;
            }
            let result = self.scan_symbol(&symbol).await;
            snapshot.insert(symbol, result);
        }

        let errors = snapshot.iter().filter(|(_, r)| r.is_error()).count();
        let triggered = snapshot.triggered();
        let symbols = snapshot.len();

        self.store.publish(snapshot).await;

        for (symbol, price) in &triggered {
            info!(
                symbol = %symbol,
                price = *price,
                "Scanner: SQUEEZE on {} @ ${:.2}",
                symbol,
                price
            );
            self.alerts.notify(symbol, *price).await;
        }

        let duration = start.elapsed();
        if let Some(ref metrics) = self.metrics {
            metrics.scans_total.inc();
            metrics.scan_duration_seconds.observe(duration.as_secs_f64());
            metrics.scan_symbol_failures_total.inc_by(errors as u64);
            metrics.squeeze_signals_total.inc_by(triggered.len() as u64);
        }

        info!(
            symbols = symbols,
            errors = errors,
            signals = triggered.len(),
            duration_ms = duration.as_millis() as u64,
            "Scanner: scan complete"
        );

        Some(ScanReport {
            symbols,
            errors,
            signals: triggered.len(),
            duration,
        })
    }

    async fn scan_symbol(&self, symbol: &str) -> IndicatorResult {
        let candles = match self.provider.fetch_series(symbol).await {
            Ok(candles) => candles,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Scanner: fetch failed for {}", symbol);
                return IndicatorResult::no_data(Utc::now());
            }
        };

        if candles.len() < MIN_CANDLES {
            warn!(
                symbol = %symbol,
                count = candles.len(),
                min = MIN_CANDLES,
                "Scanner: not enough candles ({} < {}) for {}",
                candles.len(),
                MIN_CANDLES,
                symbol
            );
            return IndicatorResult::no_data(Utc::now());
        }

        let result = SqueezeEngine::evaluate_at(&candles, &self.params, Utc::now());
        match result.message() {
            Some(message) => {
                warn!(symbol = %symbol, error = %message, "Scanner: evaluation failed for {}", symbol)
            }
            None => debug!(symbol = %symbol, "Scanner: evaluated {}", symbol),
        }
        result
    }
}
