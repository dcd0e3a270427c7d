//! Per-instrument scan results and the published snapshot.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::indicators::IndicatorError;

pub const NO_DATA_MESSAGE: &str = "no data available";

/// Latest-row values of one squeeze evaluation.
///
/// The fused signal is derived, never stored, so it cannot disagree with
/// its three inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqueezeReading {
    pub price: f64,
    pub volume: u64,
    pub in_squeeze: bool,
    pub high_volume: bool,
    pub macd_bullish: bool,
}

impl SqueezeReading {
    pub fn signal(&self) -> bool {
        self.in_squeeze && self.high_volume && self.macd_bullish
    }
}

/// Outcome of one scan for one instrument.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorResult {
    Error {
        message: String,
        timestamp: DateTime<Utc>,
    },
    Signal {
        reading: SqueezeReading,
        timestamp: DateTime<Utc>,
    },
}

impl IndicatorResult {
    pub fn error(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp,
        }
    }

    pub fn no_data(timestamp: DateTime<Utc>) -> Self {
        Self::error(NO_DATA_MESSAGE, timestamp)
    }

    pub fn from_evaluation(
        evaluation: Result<SqueezeReading, IndicatorError>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        match evaluation {
            Ok(reading) => Self::Signal { reading, timestamp },
            Err(e) => Self::error(e.to_string(), timestamp),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// True only for a Signal variant whose fused signal fired.
    pub fn is_triggered(&self) -> bool {
        match self {
            Self::Signal { reading, .. } => reading.signal(),
            Self::Error { .. } => false,
        }
    }

    pub fn reading(&self) -> Option<&SqueezeReading> {
        match self {
            Self::Signal { reading, .. } => Some(reading),
            Self::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message),
            Self::Signal { .. } => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Error { timestamp, .. } | Self::Signal { timestamp, .. } => *timestamp,
        }
    }
}

impl Serialize for IndicatorResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Error { message, timestamp } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("error", &true)?;
                map.serialize_entry("message", message)?;
                map.serialize_entry("signal", &false)?;
                map.serialize_entry("timestamp", &format_timestamp(timestamp))?;
                map.end()
            }
            Self::Signal { reading, timestamp } => {
                let mut map = serializer.serialize_map(Some(8))?;
                map.serialize_entry("error", &false)?;
                map.serialize_entry("price", &reading.price)?;
                map.serialize_entry("volume", &reading.volume)?;
                map.serialize_entry("in_squeeze", &reading.in_squeeze)?;
                map.serialize_entry("high_volume", &reading.high_volume)?;
                map.serialize_entry("macd_bullish", &reading.macd_bullish)?;
                map.serialize_entry("signal", &reading.signal())?;
                map.serialize_entry("timestamp", &format_timestamp(timestamp))?;
                map.end()
            }
        }
    }
}

/// RFC 3339 in UTC with millisecond precision and a `Z` suffix.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Complete set of results published at the end of one scan.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ScanSnapshot {
    results: BTreeMap<String, IndicatorResult>,
}

impl ScanSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result; a repeated symbol replaces the earlier entry.
    pub fn insert(&mut self, symbol: impl Into<String>, result: IndicatorResult) {
        self.results.insert(symbol.into(), result);
    }

    pub fn get(&self, symbol: &str) -> Option<&IndicatorResult> {
        self.results.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndicatorResult)> {
        self.results.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &String> {
        self.results.keys()
    }

    /// True when the snapshot has entries and every one of them is an error.
    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.results.values().all(IndicatorResult::is_error)
    }

    /// Symbols whose fused signal fired, with their price.
    pub fn triggered(&self) -> Vec<(String, f64)> {
        self.results
            .iter()
            .filter_map(|(symbol, result)| match result {
                IndicatorResult::Signal { reading, .. } if reading.signal() => {
                    Some((symbol.clone(), reading.price))
                }
                _ => None,
            })
            .collect()
    }
}
