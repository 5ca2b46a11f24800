//! Panel settings loading.
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `PLASMA_STATUS_*` environment variables, then command-line
//! [`Overrides`].
//!
//! ```toml
//! check_sync_interval = 30
//! watcher_url = "https://watcher-info.ropsten.v1.omg.network"
//! block_explorer_url = "https://blockexplorer.ropsten.v1.omg.network"
//! plasma_contract_address = "0x96d5d8bc539694e5fa1ec0dab0e6327ca9e680f9"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use tracing::info;

use crate::data::PanelConfig;

/// Prefix of environment variables that override config keys.
pub const ENV_PREFIX: &str = "PLASMA_STATUS";

/// Load the panel configuration from defaults, an optional file and the
/// environment.
pub fn load(path: Option<&Path>) -> Result<PanelConfig> {
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(path: Option<&Path>, env: Environment) -> Result<PanelConfig> {
    let defaults = PanelConfig::default();

    let mut builder = Config::builder()
        .set_default("check_sync_interval", defaults.sync_threshold)?
        .set_default("watcher_url", defaults.watcher_url)?
        .set_default("block_explorer_url", defaults.block_explorer_url)?
        .set_default("plasma_contract_address", defaults.contract_address)?;

    if let Some(path) = path {
        info!("Loading configuration from {}", path.display());
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(env.try_parsing(true))
        .build()
        .context("Failed to build configuration")?;

    let panel: PanelConfig = config
        .try_deserialize()
        .context("Invalid panel configuration")?;

    info!(
        "Sync threshold {}s, watcher {}",
        panel.sync_threshold, panel.watcher_url
    );
    Ok(panel)
}

/// Values given on the command line. Each one that is set replaces the
/// loaded setting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub sync_threshold: Option<f64>,
    pub watcher_url: Option<String>,
    pub block_explorer_url: Option<String>,
    pub contract_address: Option<String>,
}

impl Overrides {
    pub fn apply(self, mut config: PanelConfig) -> PanelConfig {
        if let Some(threshold) = self.sync_threshold {
            config.sync_threshold = threshold;
        }
        if let Some(url) = self.watcher_url {
            config.watcher_url = url;
        }
        if let Some(url) = self.block_explorer_url {
            config.block_explorer_url = url;
        }
        if let Some(address) = self.contract_address {
            config.contract_address = address;
        }
        config
    }
}
