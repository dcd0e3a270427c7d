//! Squeeze Radar Server
//!
//! Scans the configured tickers on a fixed period, serves the latest results
//! at /api/signals and posts webhook alerts for triggered squeezes.

use dotenvy::dotenv;
use squeeze_radar::config::ScannerConfig;
use squeeze_radar::core::http::{start_server, AppState};
use squeeze_radar::core::scanner::Scanner;
use squeeze_radar::core::scheduler::ScanScheduler;
use squeeze_radar::core::store::SnapshotStore;
use squeeze_radar::logging;
use squeeze_radar::metrics::Metrics;
use squeeze_radar::services::alerts::{AlertDispatcher, WebhookAlertDispatcher};
use squeeze_radar::services::market_data::MarketDataProvider;
use squeeze_radar::services::yahoo::YahooChartProvider;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = ScannerConfig::from_env();
    let env = squeeze_radar::config::get_environment();
    info!("Starting Squeeze Radar");
    info!(environment = %env, "Environment");
    info!(symbols = ?config.symbols, "Symbols: {}", config.symbols.join(", "));
    info!(
        interval = config.scan_interval_seconds,
        "Scan interval: every {} seconds", config.scan_interval_seconds
    );
    info!(params = ?config.params, "Squeeze parameters");
    if config.symbols.is_empty() {
        warn!("TICKERS is empty - scans will publish empty snapshots");
    }

    let metrics = Arc::new(Metrics::new()?);
    let store = SnapshotStore::new();

    let provider: Arc<dyn MarketDataProvider + Send + Sync> =
        Arc::new(YahooChartProvider::new(&config.chart_api_url)?);

    let dispatcher = WebhookAlertDispatcher::new(config.webhook_url.clone())
        .with_metrics(metrics.clone());
    if dispatcher.is_enabled() {
        info!("Webhook alerts enabled");
    } else {
        info!("Webhook alerts disabled (set DISCORD_WEBHOOK to enable)");
    }
    let alerts: Arc<dyn AlertDispatcher + Send + Sync> = Arc::new(dispatcher);

    let scanner = Arc::new(
        Scanner::new(
            config.symbols.clone(),
            config.params,
            provider,
            alerts,
            store.clone(),
        )
        .with_metrics(metrics.clone()),
    );

    // First scan completes before the server accepts requests
    let scheduler = ScanScheduler::new(scanner, config.scan_interval_seconds)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    let state = AppState::new(store, metrics);
    let port = config.port;
    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Squeeze Radar started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down...");
            scheduler.stop().await;
            info!("Squeeze Radar stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
            scheduler.stop().await;
        }
    }

    Ok(())
}
