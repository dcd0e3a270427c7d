//! Single-slot store for the latest published scan snapshot

use crate::models::signal::ScanSnapshot;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Slot {
    snapshot: ScanSnapshot,
    published_at: Option<DateTime<Utc>>,
}

/// Shared handle; clones point at the same slot.
///
/// Publishing replaces the whole snapshot under the write lock and reads
/// copy the whole snapshot under the read lock, so a reader sees either the
/// previous or the new snapshot, never a mix.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    slot: Arc<RwLock<Slot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn publish(&self, snapshot: ScanSnapshot) {
        let mut slot = self.slot.write().await;
        slot.snapshot = snapshot;
        slot.published_at = Some(Utc::now());
    }

    /// Copy of the latest snapshot; empty before the first publish.
    pub async fn current(&self) -> ScanSnapshot {
        self.slot.read().await.snapshot.clone()
    }

    pub async fn published_at(&self) -> Option<DateTime<Utc>> {
        self.slot.read().await.published_at
    }
}
