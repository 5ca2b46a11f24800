//! Application state and interaction logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use crate::actions::{BrowserOpener, Clipboard, LinkOpener, Osc52Clipboard};
use crate::data::{PanelConfig, PanelView, RowValue};
use crate::source::{DataSource, StatusSnapshot};
use crate::ui::Theme;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Index of each row in the info list.
pub const CONTRACT_ROW: usize = 2;
pub const WATCHER_URL_ROW: usize = 3;
pub const EXPLORER_ROW: usize = 4;

/// Main application state.
#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub show_help: bool,
    /// Whether the tooltip pane is shown.
    pub show_tooltip: bool,

    source: Box<dyn DataSource>,
    pub snapshot: Option<StatusSnapshot>,
    pub last_updated: Option<Instant>,
    pub load_error: Option<String>,
    pub config: PanelConfig,

    pub selected_row: usize,

    clipboard: Box<dyn Clipboard>,
    opener: Box<dyn LinkOpener>,

    pub theme: Theme,

    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App reading from `source`, copying through OSC 52 and
    /// opening links in the system browser.
    pub fn new(source: Box<dyn DataSource>, config: PanelConfig) -> Self {
        Self::with_actions(
            source,
            config,
            Box::new(Osc52Clipboard::stdout()),
            Box::new(BrowserOpener),
        )
    }

    /// Create a new App with custom clipboard and link handlers.
    pub fn with_actions(
        source: Box<dyn DataSource>,
        config: PanelConfig,
        clipboard: Box<dyn Clipboard>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            show_tooltip: true,
            source,
            snapshot: None,
            last_updated: None,
            load_error: None,
            config,
            selected_row: 0,
            clipboard,
            opener,
            theme: Theme::dark(),
            status_message: None,
        }
    }

    /// Replace the theme (e.g. with [`Theme::auto_detect`]).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for a new snapshot.
    ///
    /// Returns true if a new snapshot was received. A source error is kept
    /// for the status bar and the last good snapshot stays on screen.
    pub fn reload_data(&mut self) -> bool {
        let received = match self.source.poll() {
            Some(snapshot) => {
                self.snapshot = Some(snapshot);
                self.last_updated = Some(Instant::now());
                true
            }
            None => false,
        };

        let error = self.source.error().map(str::to_string);
        if error.is_some() && error != self.load_error {
            warn!("{}: {}", self.source.description(), error.as_deref().unwrap_or_default());
        }
        self.load_error = error;
        received
    }

    /// Build the panel for the current snapshot at the current wall clock.
    pub fn view(&self) -> PanelView {
        self.view_at(chrono::Utc::now().timestamp())
    }

    /// Build the panel for the current snapshot at `now` (Unix seconds).
    ///
    /// Before the first snapshot arrives the default snapshot is used, so
    /// the panel reads "Connected" with a blank network status.
    pub fn view_at(&self, now: i64) -> PanelView {
        let default = StatusSnapshot::default();
        let snapshot = self.snapshot.as_ref().unwrap_or(&default);
        PanelView::build(snapshot, &self.config, now)
    }

    /// Move selection down by one row.
    pub fn select_next(&mut self) {
        self.selected_row = (self.selected_row + 1).min(PanelView::ROW_COUNT - 1);
    }

    /// Move selection up by one row.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_row = PanelView::ROW_COUNT - 1;
    }

    /// Select a row by index, ignoring indices past the end.
    pub fn select(&mut self, row: usize) {
        if row < PanelView::ROW_COUNT {
            self.selected_row = row;
        }
    }

    /// Perform the action of the selected row.
    pub fn activate_selected(&mut self) {
        self.activate(self.selected_row);
    }

    /// Perform the action of the given row: copy its value or open its link.
    ///
    /// Indicator and blank rows have no action.
    pub fn activate(&mut self, row: usize) {
        let view = self.view();
        let Some(entry) = view.rows.get(row) else {
            return;
        };

        let message = match &entry.value {
            RowValue::Copy(text) => match self.clipboard.copy(text) {
                Ok(()) => {
                    info!("Copied {}", entry.name());
                    format!("Copied {}", entry.name())
                }
                Err(e) => format!("Copy failed: {}", e),
            },
            RowValue::ExternalLink(url) => match self.opener.open(url) {
                Ok(()) => {
                    info!("Opened {}", url);
                    format!("Opened {}", entry.name())
                }
                Err(e) => format!("Open failed: {}", e),
            },
            RowValue::Indicator(_) | RowValue::Blank => return,
        };
        self.set_status_message(message);
    }

    /// Open the repository link in the footer.
    pub fn open_footer_link(&mut self) {
        let footer = self.view().footer;
        let message = match self.opener.open(&footer.url) {
            Ok(()) => format!("Opened {}", footer.label),
            Err(e) => format!("Open failed: {}", e),
        };
        self.set_status_message(message);
    }

    /// Tooltip of the selected row, if it has one.
    pub fn selected_tooltip(&self, view: &PanelView) -> Option<String> {
        let tooltip = view.rows.get(self.selected_row)?.value.tooltip();
        if tooltip.is_empty() {
            None
        } else {
            Some(tooltip.to_string())
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_tooltip(&mut self) {
        self.show_tooltip = !self.show_tooltip;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Write the current panel as pretty JSON. A path of `-` writes to stdout.
    pub fn export_view(&self, path: &Path) -> Result<()> {
        export_view(&self.view(), path)
    }
}

/// Write `view` as pretty JSON to `path`, or to stdout when `path` is `-`.
pub fn export_view(view: &PanelView, path: &Path) -> Result<()> {
    use std::io::Write;

    let json = serde_json::to_string_pretty(view)?;
    if path == Path::new("-") {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", json)?;
    } else {
        std::fs::write(path, json)?;
    }
    Ok(())
}
