//! Process-wide configuration loaded from environment variables

use crate::models::indicators::SqueezeParams;
use std::env;

pub const DEFAULT_TICKERS: &str = "TSLA,AMD,GME,NVDA,IONQ";
pub const DEFAULT_CHART_API_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SCAN_INTERVAL_SECONDS: u64 = 120;

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .ok()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Base URL of the chart endpoint; the symbol is appended as a path segment.
pub fn get_chart_api_url() -> String {
    env::var("CHART_API_URL")
        .ok()
        .map(|u| u.trim().trim_end_matches('/').to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| DEFAULT_CHART_API_URL.to_string())
}

/// Trim and upper-case a symbol.
pub fn normalize_symbol(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Split a comma-separated ticker list into normalized symbols.
///
/// Order is preserved; duplicates are kept (the snapshot collapses them).
pub fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_symbol)
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub symbols: Vec<String>,
    pub webhook_url: Option<String>,
    pub port: u16,
    pub scan_interval_seconds: u64,
    pub chart_api_url: String,
    pub params: SqueezeParams,
}

impl ScannerConfig {
    pub fn from_env() -> Self {
        let tickers = env::var("TICKERS").unwrap_or_else(|_| DEFAULT_TICKERS.to_string());

        let webhook_url = env::var("DISCORD_WEBHOOK")
            .ok()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        let defaults = SqueezeParams::default();
        let params = SqueezeParams {
            length: env_parse("SQUEEZE_LENGTH", defaults.length),
            bb_mult: env_parse("SQUEEZE_BB_MULT", defaults.bb_mult),
            kc_mult: env_parse("SQUEEZE_KC_MULT", defaults.kc_mult),
            volume_mult: env_parse("SQUEEZE_VOLUME_MULT", defaults.volume_mult),
        };

        Self {
            symbols: parse_symbols(&tickers),
            webhook_url,
            port: env_parse("PORT", DEFAULT_PORT),
            scan_interval_seconds: env_parse("SCAN_INTERVAL_SECONDS", DEFAULT_SCAN_INTERVAL_SECONDS),
            chart_api_url: get_chart_api_url(),
            params,
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            symbols: parse_symbols(DEFAULT_TICKERS),
            webhook_url: None,
            port: DEFAULT_PORT,
            scan_interval_seconds: DEFAULT_SCAN_INTERVAL_SECONDS,
            chart_api_url: DEFAULT_CHART_API_URL.to_string(),
            params: SqueezeParams::default(),
        }
    }
}
