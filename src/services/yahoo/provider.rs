//! Yahoo chart market data provider implementation

use crate::models::indicators::Candle;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::messages::ChartResponse;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
pub const CANDLE_INTERVAL: &str = "1m";
pub const CHART_RANGE: &str = "1d";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Fetches one trading day of 1-minute candles per request.
///
/// One attempt per call; a failed fetch waits for the next scan.
pub struct YahooChartProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooChartProvider {
    pub fn new(base_url: &str) -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(MarketDataError::Malformed(format!(
                "chart url cannot take a symbol path: {}",
                base_url
            )));
        }
        Ok(Self { client, base_url })
    }

    /// `{base}/{symbol}?interval=1m&range=1d`
    pub fn chart_url(&self, symbol: &str) -> Result<Url, MarketDataError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MarketDataError::Malformed("chart url cannot be a base".to_string()))?
            .pop_if_empty()
            .push(symbol);
        url.query_pairs_mut()
            .append_pair("interval", CANDLE_INTERVAL)
            .append_pair("range", CHART_RANGE);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooChartProvider {
    async fn fetch_series(&self, symbol: &str) -> Result<Vec<Candle>, MarketDataError> {
        let url = self.chart_url(symbol)?;
        debug!(symbol = %symbol, url = %url, "YahooChartProvider: requesting chart");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status(status.as_u16()));
        }

        let body: ChartResponse = response.json().await?;
        let candles = candles_from_chart(body)?;

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "YahooChartProvider: normalized {} candles for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }
}

/// Turn the first chart result into a dense, time-ordered candle series.
///
/// Rows with a null in any of close/high/low/volume are dropped, as are rows
/// whose timestamp does not move strictly forward.
pub fn candles_from_chart(response: ChartResponse) -> Result<Vec<Candle>, MarketDataError> {
    let result = response
        .chart
        .and_then(|chart| chart.result)
        .and_then(|results| results.into_iter().next())
        .ok_or(MarketDataError::MissingResult)?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| MarketDataError::Malformed("missing timestamp array".to_string()))?;
    let quote = result
        .indicators
        .and_then(|indicators| indicators.quote.into_iter().next())
        .ok_or_else(|| MarketDataError::Malformed("missing quote".to_string()))?;

    let missing = |field: &str| MarketDataError::Malformed(format!("missing {} array", field));
    let close = quote.close.ok_or_else(|| missing("close"))?;
    let high = quote.high.ok_or_else(|| missing("high"))?;
    let low = quote.low.ok_or_else(|| missing("low"))?;
    let volume = quote.volume.ok_or_else(|| missing("volume"))?;

    let len = timestamps.len();
    if [close.len(), high.len(), low.len(), volume.len()]
        .iter()
        .any(|&l| l != len)
    {
        return Err(MarketDataError::Malformed(
            "quote arrays differ in length".to_string(),
        ));
    }

    let mut candles: Vec<Candle> = Vec::with_capacity(len);
    for i in 0..len {
        let (Some(c), Some(h), Some(l), Some(v)) = (close[i], high[i], low[i], volume[i]) else {
            continue;
        };
        let Some(timestamp) = DateTime::<Utc>::from_timestamp(timestamps[i], 0) else {
            continue;
        };
        if candles.last().is_some_and(|prev| prev.timestamp >= timestamp) {
            continue;
        }
        candles.push(Candle::new(c, h, l, v, timestamp));
    }

    Ok(candles)
}
