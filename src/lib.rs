//! # plasma-status
//!
//! A terminal status panel for a Plasma wallet: Watcher sync health,
//! network (byzantine) health, and the addresses the wallet talks to.
//!
//! The panel only displays state. Something else (the wallet, a script
//! polling the Watcher) publishes [`StatusSnapshot`]s; the panel derives two
//! indicators from them and renders them next to the configured Plasma
//! Framework address, Watcher URL and block explorer link.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(PanelView)    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | StreamSource | ChannelSource  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, row selection, copy/open actions
//! - **[`source`]**: Snapshot delivery ([`DataSource`] trait) from a file,
//!   a byte stream, or an in-process channel
//! - **[`data`]**: Pure derivation of the render tree ([`PanelView`])
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`actions`]**: Clipboard (OSC 52) and browser side effects
//! - **[`settings`]**: Layered configuration ([`PanelConfig`])
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll a snapshot file written by the wallet
//! plasma-status --file status.json --config plasma.toml
//!
//! # Pipe newline-delimited snapshots
//! my-watcher-poller | plasma-status --stdin
//! ```
//!
//! ### As a library
//!
//! ```
//! use plasma_status::{App, ChannelSource, PanelConfig, StatusSnapshot};
//!
//! let (tx, source) = ChannelSource::create("wallet store");
//! let mut app = App::new(Box::new(source), PanelConfig::default());
//!
//! tx.send(StatusSnapshot { watcher_connection: true, last_sync: 42.0, ..Default::default() })
//!     .unwrap();
//! app.reload_data();
//! assert_eq!(app.view().watcher().unwrap().label, "Syncing");
//! ```
//!
//! ### Rendering without a terminal
//!
//! ```
//! use plasma_status::{PanelConfig, PanelView, StatusSnapshot};
//!
//! let snapshot = StatusSnapshot { byzantine_chain: true, watcher_connection: true, ..Default::default() };
//! let view = PanelView::build(&snapshot, &PanelConfig::default(), 1_700_000_000);
//! assert_eq!(view.network().unwrap().label, "Unhealthy");
//! ```

pub mod actions;
pub mod app;
pub mod data;
pub mod events;
pub mod logging;
pub mod settings;
pub mod source;
pub mod ui;

pub use app::App;
pub use data::{ChainHealth, Indicator, PanelConfig, PanelView, RowValue, WatcherStatus};
pub use source::{ChannelSource, DataSource, FileSource, StatusSnapshot, StreamSource};
