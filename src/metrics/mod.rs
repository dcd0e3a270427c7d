//! Prometheus metrics for the HTTP surface and the scan loop

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,

    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,

    pub scans_total: IntCounter,
    pub scans_skipped_total: IntCounter,
    pub scan_duration_seconds: Histogram,
    pub scan_symbol_failures_total: IntCounter,
    pub squeeze_signals_total: IntCounter,
    pub alerts_failed_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;

        let scans_total = IntCounter::new("scans_total", "Completed market scans")?;
        let scans_skipped_total = IntCounter::new(
            "scans_skipped_total",
            "Scans skipped because another scan was still running",
        )?;
        let scan_duration_seconds = Histogram::with_opts(
            HistogramOpts::new("scan_duration_seconds", "Wall time of one full scan")
                .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
        )?;
        let scan_symbol_failures_total = IntCounter::new(
            "scan_symbol_failures_total",
            "Symbols recorded as errors during scans",
        )?;
        let squeeze_signals_total =
            IntCounter::new("squeeze_signals_total", "Triggered squeeze signals")?;
        let alerts_failed_total =
            IntCounter::new("alerts_failed_total", "Alerts that could not be delivered")?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(scans_total.clone()))?;
        registry.register(Box::new(scans_skipped_total.clone()))?;
        registry.register(Box::new(scan_duration_seconds.clone()))?;
        registry.register(Box::new(scan_symbol_failures_total.clone()))?;
        registry.register(Box::new(squeeze_signals_total.clone()))?;
        registry.register(Box::new(alerts_failed_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            scans_total,
            scans_skipped_total,
            scan_duration_seconds,
            scan_symbol_failures_total,
            squeeze_signals_total,
            alerts_failed_total,
        })
    }

    /// Render all metrics in the Prometheus text format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
