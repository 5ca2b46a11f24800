use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, CONTRACT_ROW, EXPLORER_ROW, WATCHER_URL_ROW};
use crate::ui::PanelLayout;

/// File written by the in-app export key.
pub const EXPORT_FILE: &str = "status_export.json";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),

        // Row shortcuts
        KeyCode::Char('c') => app.activate(CONTRACT_ROW),
        KeyCode::Char('w') => app.activate(WATCHER_URL_ROW),
        KeyCode::Char('o') => app.activate(EXPLORER_ROW),
        KeyCode::Char('g') => app.open_footer_link(),

        KeyCode::Char('r') => {
            app.reload_data();
        }
        KeyCode::Char('t') => app.toggle_tooltip(),
        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_view(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events. Hovering selects a row, which shows its tooltip.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, layout: &PanelLayout) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Moved => {
            if let Some(row) = layout.row_at(mouse.row) {
                app.select(row);
            }
        }

        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(row) = layout.row_at(mouse.row) {
                app.select(row);
                app.activate(row);
            } else if mouse.row == layout.footer.y {
                app.open_footer_link();
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit() {
        let (_tx, mut app, _) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let (_tx, mut app, _) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_navigation_keys() {
        let (_tx, mut app, _) = test_app();
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.selected_row, 2);

        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.selected_row, 1);

        handle_key_event(&mut app, key(KeyCode::End));
        assert_eq!(app.selected_row, EXPLORER_ROW);
        handle_key_event(&mut app, key(KeyCode::Home));
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_shortcut_keys() {
        let (_tx, mut app, recorder) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('c')));
        handle_key_event(&mut app, key(KeyCode::Char('w')));
        handle_key_event(&mut app, key(KeyCode::Char('o')));
        handle_key_event(&mut app, key(KeyCode::Char('g')));

        assert_eq!(
            *recorder.copied.lock().unwrap(),
            vec![app.config.contract_address.clone(), app.config.watcher_url.clone()]
        );
        assert_eq!(
            *recorder.opened.lock().unwrap(),
            vec![
                app.config.block_explorer_url.clone(),
                crate::data::panel::REPOSITORY_URL.to_string()
            ]
        );
        // Shortcuts do not move the selection
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_enter_activates_selected() {
        let (_tx, mut app, recorder) = test_app();
        app.select(WATCHER_URL_ROW);
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(recorder.copied.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_tooltip() {
        let (_tx, mut app, _) = test_app();
        assert!(app.show_tooltip);
        handle_key_event(&mut app, key(KeyCode::Char('t')));
        assert!(!app.show_tooltip);
    }

    #[test]
    fn test_mouse_hover_selects_row() {
        let (_tx, mut app, recorder) = test_app();
        let layout = PanelLayout::split(Rect::new(0, 0, 80, 24));

        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 4), &layout);
        assert_eq!(app.selected_row, 1);

        // Hover outside the list keeps the selection
        handle_mouse_event(&mut app, mouse(MouseEventKind::Moved, 0), &layout);
        assert_eq!(app.selected_row, 1);
        assert!(recorder.copied.lock().unwrap().is_empty());
    }

    #[test]
    fn test_mouse_click_activates_row() {
        let (_tx, mut app, recorder) = test_app();
        let layout = PanelLayout::split(Rect::new(0, 0, 80, 24));

        // Row 2 (contract address) spans screen rows 6-7
        handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 7), &layout);
        assert_eq!(app.selected_row, CONTRACT_ROW);
        assert_eq!(recorder.copied.lock().unwrap().len(), 1);

        handle_mouse_event(
            &mut app,
            mouse(MouseEventKind::Down(MouseButton::Left), layout.footer.y),
            &layout,
        );
        assert_eq!(recorder.opened.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_mouse_scroll() {
        let (_tx, mut app, _) = test_app();
        let layout = PanelLayout::split(Rect::new(0, 0, 80, 24));

        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0), &layout);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollDown, 0), &layout);
        handle_mouse_event(&mut app, mouse(MouseEventKind::ScrollUp, 0), &layout);
        assert_eq!(app.selected_row, 1);
    }
}
