//! Cron-based scheduler driving recurring market scans

use crate::core::scanner::Scanner;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Cron expression firing every `interval_seconds`, if cron can tick at
/// that period evenly.
///
/// Cron format: second minute hour day month weekday. A step only repeats
/// evenly when it divides its field's range, so the interval must be a
/// divisor of a minute, a whole number of minutes dividing an hour, or a
/// whole number of hours dividing a day.
pub fn cron_expression(interval_seconds: u64) -> Option<String> {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    match interval_seconds {
        0 => None,
        s if s < MINUTE => (MINUTE % s == 0).then(|| format!("*/{} * * * * *", s)),
        s if s < HOUR => {
            let minutes = s / MINUTE;
            (s % MINUTE == 0 && HOUR % s == 0).then(|| format!("0 */{} * * * *", minutes))
        }
        DAY => Some("0 0 0 * * *".to_string()),
        s if s < DAY => {
            let hours = s / HOUR;
            (s % HOUR == 0 && DAY % s == 0).then(|| format!("0 0 */{} * * *", hours))
        }
        _ => None,
    }
}

/// Runs the scanner once at startup, then on every cron tick.
///
/// Scans run inside one loop and are awaited in turn, so two scans never
/// overlap; ticks that pass during a slow scan are dropped.
pub struct ScanScheduler {
    scanner: Arc<Scanner>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl ScanScheduler {
    /// Create a new scheduler
    ///
    /// # Arguments
    /// * `scanner` - Scanner invoked on each tick
    /// * `interval_seconds` - Scan period in seconds; 0 and periods cron
    ///   cannot repeat evenly are rejected
    pub fn new(
        scanner: Arc<Scanner>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        let cron_expr = cron_expression(interval_seconds).ok_or_else(|| {
            format!(
                "Scheduler: interval {}s cannot be scheduled evenly; use a divisor of 60s, \
                 whole minutes dividing an hour, or whole hours dividing a day",
                interval_seconds
            )
        })?;
        let schedule = Schedule::from_str(&cron_expr).map_err(|e| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid cron expression '{}': {}", cron_expr, e),
            )) as Box<dyn std::error::Error + Send + Sync>
        })?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?scanner.symbols(),
            "ScanScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            scanner,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    /// Run the initial scan to completion, then start the recurring loop.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.is_running().await {
            return Err("ScanScheduler: already running".into());
        }

        info!("ScanScheduler: running initial scan");
        self.scanner.run_scan().await;

        let scanner = self.scanner.clone();
        let schedule = self.schedule.clone();

        let handle = tokio::spawn(async move {
            info!("ScanScheduler: started, waiting for cron schedule...");

            loop {
                let mut upcoming = schedule.upcoming(chrono::Utc);
                if let Some(next_tick) = upcoming.next() {
                    let now = chrono::Utc::now();
                    if next_tick > now {
                        let duration = (next_tick - now).to_std().unwrap_or_default();
                        tokio::time::sleep(duration).await;
                    }
                } else {
                    tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                    continue;
                }

                scanner.run_scan().await;
            }
        });

        {
            let mut h = self.handle.write().await;
            *h = Some(handle);
        }

        info!("ScanScheduler: started successfully");
        Ok(())
    }

    /// Stop the scheduler
    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("ScanScheduler: stopped");
        }
    }

    /// Check if the scheduler is running
    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
