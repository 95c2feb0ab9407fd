use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest tolerated distance between the local node and the canonical chain, applied to both
/// block height and beacon slot.
pub const DEFAULT_SYNC_THRESHOLD: u64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Healthy,
    Unhealthy,
}

impl SyncStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, SyncStatus::Healthy)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncStatus::Healthy => write!(f, "healthy"),
            SyncStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Point-in-time progress of the local node next to the canonical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncSnapshot {
    pub local_block: u64,
    pub remote_block: u64,
    pub local_slot: u64,
    pub remote_slot: u64,
}

impl SyncSnapshot {
    pub fn block_distance(&self) -> u64 {
        self.local_block.abs_diff(self.remote_block)
    }

    pub fn slot_distance(&self) -> u64 {
        self.local_slot.abs_diff(self.remote_slot)
    }

    pub fn evaluate(&self, threshold: u64) -> SyncStatus {
        evaluate(
            self.local_block,
            self.remote_block,
            self.local_slot,
            self.remote_slot,
            threshold,
        )
    }
}

/// Returns [`SyncStatus::Healthy`] iff both the block height and the beacon slot are within
/// `threshold` of their canonical counterparts.
pub fn evaluate(
    local_block: u64,
    remote_block: u64,
    local_slot: u64,
    remote_slot: u64,
    threshold: u64,
) -> SyncStatus {
    if local_block.abs_diff(remote_block) <= threshold
        && local_slot.abs_diff(remote_slot) <= threshold
    {
        SyncStatus::Healthy
    } else {
        SyncStatus::Unhealthy
    }
}
