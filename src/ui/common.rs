//! Common UI components.
//!
//! This module contains the logo bar, status bar, help overlay and the
//! undersized-terminal notice.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::PanelView;

/// Minimum terminal size for a usable panel.
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 18;

/// Render the logo bar with the overall status at a glance.
pub fn render_header(frame: &mut Frame, app: &App, view: &PanelView, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " ◉ OMG NETWORK ",
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::raw(app.source_description().to_string()),
    ];

    for indicator in [view.watcher(), view.network()].into_iter().flatten() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("●", app.theme.indicator_style(indicator.indicator)));
        spans.push(Span::raw(format!(" {}", indicator.label)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status bar at the bottom.
///
/// Shows time since the last snapshot and the available controls. Temporary
/// status messages and source errors take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else if let Some(updated) = app.last_updated {
        format!(
            " Updated {:.1}s ago | ↑↓:select Enter:action c/w:copy o/g:open ?:help q:quit",
            updated.elapsed().as_secs_f64()
        )
    } else {
        " Waiting for status... | q:quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(app.theme.highlight).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(" Navigation", bold)]),
        Line::from("  ↑/↓ k/j     Select row"),
        Line::from("  Home/End    First/last row"),
        Line::from("  Enter       Copy or open row"),
        Line::from("  t           Toggle tooltip"),
        Line::from(""),
        Line::from(vec![Span::styled(" Actions", bold)]),
        Line::from("  c         Copy contract address"),
        Line::from("  w         Copy Watcher URL"),
        Line::from("  o         Open block explorer"),
        Line::from("  g         Open GitHub"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  r         Reload"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render the notice shown when the terminal is below the minimum size.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let height = 5u16.min(area.height);
    let centered = Rect::new(
        area.x,
        area.y + (area.height.saturating_sub(height)) / 2,
        area.width,
        height,
    );
    frame.render_widget(paragraph, centered);
}
