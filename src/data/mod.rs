//! Display models derived from status snapshots.
//!
//! ## Submodules
//!
//! - [`format`]: Address truncation and relative-time phrases
//! - [`status`]: The two health indicators ([`ChainHealth`], [`WatcherStatus`])
//! - [`panel`]: The render tree ([`PanelView`]) and its [`PanelConfig`]
//!
//! ## Data Flow
//!
//! ```text
//! StatusSnapshot + PanelConfig + now
//!        │
//!        ▼
//! PanelView::build()
//!        │
//!        ├──▶ WatcherStatus / ChainHealth (labels, tooltips, circles)
//!        │
//!        └──▶ InfoRow × 5 + FooterLink
//! ```

pub mod format;
pub mod panel;
pub mod status;

pub use panel::{FooterLink, IndicatorView, InfoRow, Logo, PanelConfig, PanelView, RowValue};
pub use status::{ChainHealth, Indicator, WatcherStatus};
