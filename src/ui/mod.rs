//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`panel`]: Info list, tooltip pane and footer link
//! - [`common`]: Logo bar, status bar, help overlay
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Logo bar (common::render_header)     │
//! ├──────────────────────────────────────┤
//! │ Info list (panel)                    │
//! │   Watcher Status    Connected ●      │
//! │   Network Status    Healthy ●        │
//! │   ...                                │
//! ├──────────────────────────────────────┤
//! │ Tooltip of the selected row (panel)  │
//! ├──────────────────────────────────────┤
//! │ Footer link (panel)                  │
//! │ Status bar (common)                  │
//! └──────────────────────────────────────┘
//!         ↑
//!    Help overlay rendered on top
//! ```

pub mod common;
pub mod panel;
pub mod theme;

pub use panel::PanelLayout;
pub use theme::Theme;

use ratatui::Frame;

use crate::app::App;

/// Draw the whole panel for the current app state.
///
/// Returns the layout that was drawn, for mouse hit-testing. When the
/// terminal is too small only a notice is drawn and there is no layout, so
/// clicks cannot reach rows that are not on screen.
pub fn draw(frame: &mut Frame, app: &App) -> Option<PanelLayout> {
    let area = frame.area();

    if area.width < common::MIN_WIDTH || area.height < common::MIN_HEIGHT {
        common::render_too_small(frame, area);
        return None;
    }

    let view = app.view();
    let layout = PanelLayout::split(area);

    common::render_header(frame, app, &view, layout.logo);
    panel::render(frame, app, &view, &layout);
    common::render_status_bar(frame, app, layout.status);

    if app.show_help {
        common::render_help(frame, app, area);
    }

    Some(layout)
}
