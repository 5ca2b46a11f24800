//! The status panel render tree.
//!
//! [`PanelView::build`] turns a snapshot plus configuration into everything
//! the panel shows. Widgets in [`crate::ui`] only draw what is in here.

use serde::{Deserialize, Serialize};

use super::format::truncate_middle;
use super::status::{ChainHealth, Indicator, WatcherStatus};
use crate::source::StatusSnapshot;

/// Repository linked from the panel footer.
pub const REPOSITORY_URL: &str = "https://github.com/omisego/react-starter-kit";

/// Alt text of the network logo.
pub const LOGO_ALT: &str = "omg-network";

/// Characters of the contract address kept on each side of the ellipsis.
const ADDRESS_FRONT: usize = 10;
const ADDRESS_BACK: usize = 4;

/// Static configuration the panel is rendered against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Sync lag (seconds) above which the Watcher is reported as syncing.
    #[serde(rename = "check_sync_interval")]
    pub sync_threshold: f64,
    pub watcher_url: String,
    pub block_explorer_url: String,
    /// Address of the Plasma Framework contract.
    #[serde(rename = "plasma_contract_address")]
    pub contract_address: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            sync_threshold: 10.0,
            watcher_url: "http://localhost:7534".to_string(),
            block_explorer_url: "http://localhost:4000".to_string(),
            contract_address: "0x0000000000000000000000000000000000000000".to_string(),
        }
    }
}

/// One status indicator: label, hover text and circle colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorView {
    pub label: String,
    /// Empty when there is nothing to explain.
    pub tooltip: String,
    pub indicator: Indicator,
}

/// Right-hand side of an info row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RowValue {
    Indicator(IndicatorView),
    Blank,
    /// Copies the full value to the clipboard when activated.
    Copy(String),
    /// Opens the URL when activated.
    ExternalLink(String),
}

impl RowValue {
    /// Tooltip text of an indicator, empty for every other value.
    pub fn tooltip(&self) -> &str {
        match self {
            RowValue::Indicator(view) => &view.tooltip,
            _ => "",
        }
    }
}

/// A row of the info list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub title: String,
    pub value: RowValue,
}

impl InfoRow {
    /// Name used in feedback messages ("Copied Watcher URL").
    pub fn name(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.title)
    }
}

/// Static link rendered under the info list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub url: String,
}

/// The network logo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Logo {
    pub alt: String,
}

/// Complete render tree of the status panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub logo: Logo,
    pub rows: Vec<InfoRow>,
    pub footer: FooterLink,
}

impl PanelView {
    /// Number of rows in the info list.
    pub const ROW_COUNT: usize = 5;

    /// Build the panel for `snapshot` as seen at `now` (Unix seconds).
    pub fn build(snapshot: &StatusSnapshot, config: &PanelConfig, now: i64) -> Self {
        let watcher = WatcherStatus::from_lag(snapshot.last_sync, config.sync_threshold);
        let chain = ChainHealth::from_byzantine(snapshot.byzantine_chain);

        let watcher_view = IndicatorView {
            label: watcher.label().to_string(),
            tooltip: watcher.tooltip(snapshot.last_seen_block, now),
            indicator: watcher.indicator(),
        };

        let network_value = if snapshot.watcher_connection {
            RowValue::Indicator(IndicatorView {
                label: chain.label().to_string(),
                tooltip: chain.tooltip(),
                indicator: chain.indicator(),
            })
        } else {
            RowValue::Blank
        };

        let rows = vec![
            InfoRow {
                header: None,
                title: "Watcher Status".to_string(),
                value: RowValue::Indicator(watcher_view),
            },
            InfoRow {
                header: None,
                title: "Network Status".to_string(),
                value: network_value,
            },
            InfoRow {
                header: Some("Plasma Framework Address".to_string()),
                title: truncate_middle(&config.contract_address, ADDRESS_FRONT, ADDRESS_BACK, "..."),
                value: RowValue::Copy(config.contract_address.clone()),
            },
            InfoRow {
                header: Some("Watcher URL".to_string()),
                title: config.watcher_url.clone(),
                value: RowValue::Copy(config.watcher_url.clone()),
            },
            InfoRow {
                header: Some("Block Explorer".to_string()),
                title: config.block_explorer_url.clone(),
                value: RowValue::ExternalLink(config.block_explorer_url.clone()),
            },
        ];

        Self {
            logo: Logo {
                alt: LOGO_ALT.to_string(),
            },
            rows,
            footer: FooterLink {
                label: "GitHub".to_string(),
                url: REPOSITORY_URL.to_string(),
            },
        }
    }

    /// Indicator of the Watcher Status row.
    pub fn watcher(&self) -> Option<&IndicatorView> {
        self.indicator_at(0)
    }

    /// Indicator of the Network Status row, absent while the Watcher is unreachable.
    pub fn network(&self) -> Option<&IndicatorView> {
        self.indicator_at(1)
    }

    fn indicator_at(&self, index: usize) -> Option<&IndicatorView> {
        match self.rows.get(index).map(|row| &row.value) {
            Some(RowValue::Indicator(view)) => Some(view),
            _ => None,
        }
    }
}
