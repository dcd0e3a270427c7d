//! Unit tests for alert payloads

use squeeze_radar::services::alerts::{alert_payload, WebhookAlertDispatcher, ALERT_COLOR};

#[test]
fn test_alert_payload() {
    let payload = alert_payload("NVDA", 250.5);
    let embed = &payload["embeds"][0];
    assert_eq!(embed["title"], "🔥 NVDA SQUEEZE DETECTED");
    assert_eq!(embed["description"], "Price: $250.50");
    assert_eq!(embed["color"], ALERT_COLOR);
    assert_eq!(ALERT_COLOR, 15158332);
}

#[tokio::test]
async fn test_disabled_dispatcher_is_a_no_op() {
    let dispatcher = WebhookAlertDispatcher::new(None);
    assert!(!dispatcher.is_enabled());
    assert!(dispatcher.send("NVDA", 1.0).await.is_ok());
}
