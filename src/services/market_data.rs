//! Market data provider interface.

use crate::models::indicators::Candle;
use thiserror::Error;

/// Why a provider could not produce a series. Every variant means "no data"
/// to the scanner; the distinction only matters for logs.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("response has no chart result")]
    MissingResult,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait::async_trait]
pub trait MarketDataProvider {
    /// Fetch the recent intraday series for a normalized symbol.
    ///
    /// The returned candles are dense and strictly increasing in time.
    async fn fetch_series(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError>;
}
