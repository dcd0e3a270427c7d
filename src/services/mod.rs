//! Outbound integrations: market data and alerts.

pub mod alerts;
pub mod market_data;
pub mod yahoo;
