//! Status panel rendering.
//!
//! Draws the info list, the tooltip pane for the selected row and the
//! footer link from a [`PanelView`].

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{InfoRow, PanelView, RowValue};

/// Every info row is two lines: header, then title and value.
pub const ROW_HEIGHT: u16 = 2;

/// Screen areas of the panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub logo: Rect,
    pub list: Rect,
    pub tooltip: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl PanelLayout {
    /// Split the terminal area into panel sections.
    pub fn split(area: Rect) -> Self {
        let list_height = ROW_HEIGHT * PanelView::ROW_COUNT as u16 + 2;
        let chunks = Layout::vertical([
            Constraint::Length(1),           // Logo bar
            Constraint::Length(list_height), // Info list
            Constraint::Min(3),              // Tooltip
            Constraint::Length(1),           // Footer link
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

        Self {
            logo: chunks[0],
            list: chunks[1],
            tooltip: chunks[2],
            footer: chunks[3],
            status: chunks[4],
        }
    }

    /// Info row under screen row `y`, if any.
    pub fn row_at(&self, y: u16) -> Option<usize> {
        let first = self.list.y + 1;
        let last = self.list.y + self.list.height.saturating_sub(1);
        if y < first || y >= last {
            return None;
        }
        let row = ((y - first) / ROW_HEIGHT) as usize;
        (row < PanelView::ROW_COUNT).then_some(row)
    }
}

/// Render the info list, tooltip pane and footer.
pub fn render(frame: &mut Frame, app: &App, view: &PanelView, layout: &PanelLayout) {
    render_list(frame, app, view, layout.list);
    render_tooltip(frame, app, view, layout.tooltip);
    render_footer(frame, app, view, layout.footer);
}

fn render_list(frame: &mut Frame, app: &App, view: &PanelView, area: Rect) {
    let rows: Vec<Row> = view.rows.iter().map(|row| info_row(app, row)).collect();

    let widths = [Constraint::Fill(3), Constraint::Fill(2)];

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .title(" Status ")
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row.min(view.rows.len().saturating_sub(1))));

    frame.render_stateful_widget(table, area, &mut state);
}

fn info_row<'a>(app: &App, row: &'a InfoRow) -> Row<'a> {
    let value = value_line(app, &row.value);

    let (label, value) = match &row.header {
        Some(header) => (
            Text::from(vec![
                Line::from(Span::styled(header.as_str(), app.theme.header)),
                Line::from(row.title.as_str()),
            ]),
            Text::from(vec![Line::default(), value]),
        ),
        None => (Text::from(Line::from(row.title.as_str())), Text::from(value)),
    };

    Row::new(vec![Cell::from(label), Cell::from(value)]).height(ROW_HEIGHT)
}

fn value_line<'a>(app: &App, value: &'a RowValue) -> Line<'a> {
    match value {
        RowValue::Indicator(indicator) => Line::from(vec![
            Span::raw(indicator.label.as_str()),
            Span::raw(" "),
            Span::styled("●", app.theme.indicator_style(indicator.indicator)),
        ]),
        RowValue::Blank => Line::default(),
        RowValue::Copy(_) => Line::from(Span::styled("⧉ Copy", app.theme.link)),
        RowValue::ExternalLink(_) => Line::from(Span::styled("↗ Open", app.theme.link)),
    }
}

fn render_tooltip(frame: &mut Frame, app: &App, view: &PanelView, area: Rect) {
    if !app.show_tooltip {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let text = app.selected_tooltip(view).unwrap_or_default();
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, view: &PanelView, area: Rect) {
    let line = Line::from(vec![
        Span::raw(format!(" {}: ", view.footer.label)),
        Span::styled(view.footer.url.as_str(), app.theme.link),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_at() {
        let layout = PanelLayout::split(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.logo.height, 1);
        assert_eq!(layout.list.y, 1);
        assert_eq!(layout.list.height, 12);

        // Top border
        assert_eq!(layout.row_at(1), None);
        assert_eq!(layout.row_at(2), Some(0));
        assert_eq!(layout.row_at(3), Some(0));
        assert_eq!(layout.row_at(4), Some(1));
        assert_eq!(layout.row_at(11), Some(4));
        // Bottom border and below
        assert_eq!(layout.row_at(12), None);
        assert_eq!(layout.row_at(20), None);
    }

    #[test]
    fn test_layout_fills_area() {
        let layout = PanelLayout::split(Rect::new(0, 0, 60, 18));
        assert_eq!(layout.tooltip.height, 3);
        assert_eq!(layout.footer.y, 16);
        assert_eq!(layout.status.y, 17);
    }
}
