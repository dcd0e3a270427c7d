//! Integration tests for the scan scheduler lifecycle

use crate::test_utils::{
    mount_chart, mount_webhook, quiet_body, squeeze_body, webhook_posts, TestScanner,
};
use squeeze_radar::core::scheduler::ScanScheduler;

#[tokio::test]
async fn start_completes_initial_scan_before_returning() {
    let t = TestScanner::new(&["AAA", "BBB"]).await;
    mount_chart(&t.server, "AAA", squeeze_body()).await;
    mount_chart(&t.server, "BBB", quiet_body()).await;
    mount_webhook(&t.server, 204).await;

    let scheduler = ScanScheduler::new(t.scanner.clone(), 120).unwrap();
    assert!(t.store.current().await.is_empty());

    scheduler.start().await.unwrap();

    let snapshot = t.store.current().await;
    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.get("AAA").unwrap().is_triggered());
    assert_eq!(webhook_posts(&t.server).await.len(), 1);
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
}

#[tokio::test]
async fn second_start_is_rejected() {
    let t = TestScanner::new(&["AAA"]).await;
    mount_chart(&t.server, "AAA", quiet_body()).await;

    let scheduler = ScanScheduler::new(t.scanner.clone(), 120).unwrap();
    scheduler.start().await.unwrap();
    assert!(scheduler.start().await.is_err());
    assert_eq!(t.metrics.scans_total.get(), 1);

    scheduler.stop().await;
}

#[tokio::test]
async fn stop_ends_the_loop() {
    let t = TestScanner::new(&["AAA"]).await;
    mount_chart(&t.server, "AAA", quiet_body()).await;

    let scheduler = ScanScheduler::new(t.scanner.clone(), 120).unwrap();
    scheduler.start().await.unwrap();
    scheduler.stop().await;

    assert!(!scheduler.is_running().await);
    // Snapshot from the initial scan stays published.
    assert_eq!(t.store.current().await.len(), 1);
}

#[tokio::test]
async fn failed_initial_scan_still_starts_loop() {
    let t = TestScanner::new(&["AAA"]).await;

    let scheduler = ScanScheduler::new(t.scanner.clone(), 120).unwrap();
    scheduler.start().await.unwrap();

    let snapshot = t.store.current().await;
    assert!(snapshot.get("AAA").unwrap().is_error());
    assert!(scheduler.is_running().await);

    scheduler.stop().await;
}
