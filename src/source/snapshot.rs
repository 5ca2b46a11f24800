//! Shared type for status snapshots.
//!
//! A snapshot is the wallet's view of the Watcher at one point in time. It is
//! produced elsewhere (the wallet polls the Watcher) and only displayed here.

use serde::{Deserialize, Deserializer, Serialize};

/// The four values the status panel is derived from.
///
/// Field names match the wallet's status store (`watcherConnection`,
/// `byzantineChain`, `lastSync`, `lastSeenBlock`). A missing or `null` field
/// reads as false or zero, so a partial snapshot still renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusSnapshot {
    /// Whether the Watcher service is reachable.
    #[serde(deserialize_with = "null_as_default")]
    pub watcher_connection: bool,

    /// Whether the network currently reports byzantine conditions.
    #[serde(deserialize_with = "null_as_default")]
    pub byzantine_chain: bool,

    /// Seconds elapsed since the Watcher last synced with the root chain.
    #[serde(deserialize_with = "null_as_default")]
    pub last_sync: f64,

    /// Unix timestamp (seconds) of the last root-chain block the Watcher saw.
    #[serde(deserialize_with = "null_as_default")]
    pub last_seen_block: i64,
}

/// The wallet store writes unset values as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "watcherConnection": true,
            "byzantineChain": false,
            "lastSync": 12.5,
            "lastSeenBlock": 1690000000
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.watcher_connection);
        assert!(!snapshot.byzantine_chain);
        assert_eq!(snapshot.last_sync, 12.5);
        assert_eq!(snapshot.last_seen_block, 1_690_000_000);
    }

    #[test]
    fn test_missing_fields_are_falsy() {
        let snapshot: StatusSnapshot = serde_json::from_str(r#"{"byzantineChain": true}"#).unwrap();
        assert!(snapshot.byzantine_chain);
        assert!(!snapshot.watcher_connection);
        assert_eq!(snapshot.last_sync, 0.0);
        assert_eq!(snapshot.last_seen_block, 0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"lastSync": 3, "eventsPending": 7}"#).unwrap();
        assert_eq!(snapshot.last_sync, 3.0);
    }

    #[test]
    fn test_null_fields_are_falsy() {
        let json = r#"{
            "watcherConnection": true,
            "byzantineChain": null,
            "lastSync": null,
            "lastSeenBlock": null
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.watcher_connection);
        assert!(!snapshot.byzantine_chain);
        assert_eq!(snapshot.last_sync, 0.0);
        assert_eq!(snapshot.last_seen_block, 0);
    }
}
