//! Best-effort squeeze alerts over a Discord-style webhook.

use crate::metrics::Metrics;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);
pub const ALERT_COLOR: u32 = 15158332;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook returned HTTP {0}")]
    Status(u16),
}

#[async_trait::async_trait]
pub trait AlertDispatcher {
    /// Announce a triggered squeeze. Never fails toward the caller.
    async fn notify(&self, symbol: &str, price: f64);
}

/// Embed payload posted to the webhook.
pub fn alert_payload(symbol: &str, price: f64) -> Value {
    json!({
        "embeds": [{
            "title": format!("🔥 {} SQUEEZE DETECTED", symbol),
            "description": format!("Price: ${:.2}", price),
            "color": ALERT_COLOR,
        }]
    })
}

pub struct WebhookAlertDispatcher {
    client: reqwest::Client,
    webhook_url: Option<String>,
    metrics: Option<Arc<Metrics>>,
}

impl WebhookAlertDispatcher {
    /// `None` disables alerting entirely.
    pub fn new(webhook_url: Option<String>) -> Self {
        Self::with_client(webhook_url, reqwest::Client::new())
    }

    pub fn with_client(webhook_url: Option<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            webhook_url,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Post one alert. `Ok` without a request when no webhook is configured.
    pub async fn send(&self, symbol: &str, price: f64) -> Result<(), AlertError> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Ok(());
        };

        let response = self
            .client
            .post(url)
            .timeout(ALERT_TIMEOUT)
            .json(&alert_payload(symbol, price))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlertError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AlertDispatcher for WebhookAlertDispatcher {
    async fn notify(&self, symbol: &str, price: f64) {
        // Alerts are best-effort: a failed delivery is dropped here.
        if let Err(e) = self.send(symbol, price).await {
            debug!(symbol = %symbol, error = %e, "WebhookAlertDispatcher: alert not delivered");
            if let Some(ref metrics) = self.metrics {
                metrics.alerts_failed_total.inc();
            }
        }
    }
}
