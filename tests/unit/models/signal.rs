//! Unit tests for result and snapshot serialization

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use squeeze_radar::models::signal::{
    format_timestamp, IndicatorResult, ScanSnapshot, SqueezeReading,
};

fn at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn reading(in_squeeze: bool, high_volume: bool, macd_bullish: bool) -> SqueezeReading {
    SqueezeReading {
        price: 12.5,
        volume: 4200,
        in_squeeze,
        high_volume,
        macd_bullish,
    }
}

#[test]
fn test_error_variant_shape() {
    let value = serde_json::to_value(IndicatorResult::no_data(at())).unwrap();
    assert_eq!(
        value,
        json!({
            "error": true,
            "message": "no data available",
            "signal": false,
            "timestamp": "2023-11-14T22:13:20.000Z",
        })
    );
}

#[test]
fn test_signal_variant_shape() {
    let result = IndicatorResult::Signal {
        reading: reading(true, true, false),
        timestamp: at(),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["error"], false);
    assert_eq!(value["price"], 12.5);
    assert_eq!(value["volume"], 4200);
    assert_eq!(value["in_squeeze"], true);
    assert_eq!(value["high_volume"], true);
    assert_eq!(value["macd_bullish"], false);
    assert_eq!(value["signal"], false);
    assert!(value.get("message").is_none());
}

#[test]
fn test_signal_requires_all_three_conditions() {
    for mask in 0..8u8 {
        let r = reading(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
        assert_eq!(r.signal(), mask == 7);
    }
}

#[test]
fn test_is_triggered() {
    let fired = IndicatorResult::Signal {
        reading: reading(true, true, true),
        timestamp: at(),
    };
    assert!(fired.is_triggered());
    assert!(!IndicatorResult::no_data(at()).is_triggered());
}

#[test]
fn test_snapshot_is_keyed_by_symbol() {
    let mut snapshot = ScanSnapshot::new();
    snapshot.insert(
        "TSLA",
        IndicatorResult::Signal {
            reading: reading(true, true, true),
            timestamp: at(),
        },
    );
    snapshot.insert("AMD", IndicatorResult::no_data(at()));

    let value: Value = serde_json::to_value(&snapshot).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["TSLA"]["signal"], true);
    assert_eq!(object["AMD"]["error"], true);
    assert_eq!(snapshot.triggered(), vec![("TSLA".to_string(), 12.5)]);
}

#[test]
fn test_snapshot_insert_replaces_existing_symbol() {
    let mut snapshot = ScanSnapshot::new();
    snapshot.insert(
        "GME",
        IndicatorResult::Signal {
            reading: reading(true, true, true),
            timestamp: at(),
        },
    );
    snapshot.insert("GME", IndicatorResult::no_data(at()));
    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.get("GME").unwrap().is_error());
}

#[test]
fn test_empty_snapshot_serializes_to_empty_object() {
    let value = serde_json::to_value(ScanSnapshot::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_all_failed() {
    let mut snapshot = ScanSnapshot::new();
    assert!(!snapshot.all_failed());

    snapshot.insert("AAA", IndicatorResult::no_data(at()));
    assert!(snapshot.all_failed());

    snapshot.insert(
        "BBB",
        IndicatorResult::Signal {
            reading: reading(false, false, false),
            timestamp: at(),
        },
    );
    assert!(!snapshot.all_failed());
}

#[test]
fn test_format_timestamp_uses_millis_and_z() {
    let ts = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
    assert_eq!(format_timestamp(&ts), "2023-11-14T22:13:20.123Z");
}
