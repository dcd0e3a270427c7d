//! Yahoo Finance chart API client

pub mod messages;
pub mod provider;

pub use messages::ChartResponse;
pub use provider::{candles_from_chart, YahooChartProvider};
