//! Display-state derivation for the two health indicators.
//!
//! Both indicators are pure functions of the snapshot and are recomputed on
//! every render.

use serde::Serialize;

use super::format::from_now;

const UNHEALTHY_TOOLTIP: &str = "An unhealthy status will result from byzantine conditions on the network. Users should not transact on the network until the byzantine conditions are cleared.";

const SYNCING_TOOLTIP: &str = "A syncing status indicates that the Watcher is still syncing with the rootchain. Transactions will not be reflected so users will not be allowed to make new transactions.";

/// Colour class of a status circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Healthy,
    Unhealthy,
}

/// Health of the child chain as reported by the Watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChainHealth {
    Healthy,
    /// The Watcher reported byzantine conditions.
    Unhealthy,
}

impl ChainHealth {
    pub fn from_byzantine(byzantine_chain: bool) -> Self {
        if byzantine_chain {
            ChainHealth::Unhealthy
        } else {
            ChainHealth::Healthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChainHealth::Healthy => "Healthy",
            ChainHealth::Unhealthy => "Unhealthy",
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            ChainHealth::Healthy => Indicator::Healthy,
            ChainHealth::Unhealthy => Indicator::Unhealthy,
        }
    }

    /// Explanation shown on hover. Empty while healthy.
    pub fn tooltip(&self) -> String {
        match self {
            ChainHealth::Healthy => String::new(),
            ChainHealth::Unhealthy => UNHEALTHY_TOOLTIP.to_string(),
        }
    }
}

/// Sync state of the Watcher relative to the root chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WatcherStatus {
    Connected,
    /// Sync lag is above the configured threshold.
    Syncing,
}

impl WatcherStatus {
    /// A lag equal to the threshold still counts as connected.
    pub fn from_lag(last_sync: f64, sync_threshold: f64) -> Self {
        if last_sync > sync_threshold {
            WatcherStatus::Syncing
        } else {
            WatcherStatus::Connected
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatcherStatus::Connected => "Connected",
            WatcherStatus::Syncing => "Syncing",
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self {
            WatcherStatus::Connected => Indicator::Healthy,
            WatcherStatus::Syncing => Indicator::Unhealthy,
        }
    }

    /// Explanation shown on hover, naming how long ago the last root-chain
    /// block was seen. Empty while connected.
    pub fn tooltip(&self, last_seen_block: i64, now: i64) -> String {
        match self {
            WatcherStatus::Connected => String::new(),
            WatcherStatus::Syncing => format!(
                "{} Last synced rootchain block was {}.",
                SYNCING_TOOLTIP,
                from_now(last_seen_block, now)
            ),
        }
    }
}
