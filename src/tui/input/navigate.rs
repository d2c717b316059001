use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterMode;
use crate::tui::app::App;

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Esc) => cancel_drag(app),

        // Cursor
        (_, KeyCode::Down | KeyCode::Char('j')) => move_cursor(app, 1),
        (_, KeyCode::Up | KeyCode::Char('k')) => move_cursor(app, -1),
        (_, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => {
            app.cursor = app.list.visible().len().saturating_sub(1);
        }

        // Task actions
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => {
            if let Some(task) = app.cursor_task() {
                toggle_task(app, task.id);
            }
        }
        (_, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(task) = app.cursor_task() {
                remove_task(app, task.id);
            }
        }
        (_, KeyCode::Char('C')) => clear_all(app),
        (_, KeyCode::Char('a') | KeyCode::Char('+')) => toggle_add_form(app),

        // Filters
        (_, KeyCode::Char('f')) => app.show_filters = !app.show_filters,
        (_, KeyCode::Char('1')) => set_filter(app, FilterMode::All),
        (_, KeyCode::Char('2')) => set_filter(app, FilterMode::Active),
        (_, KeyCode::Char('3')) => set_filter(app, FilterMode::Completed),
        (_, KeyCode::Tab) => {
            let next = app.list.filter().next();
            set_filter(app, next);
        }
        _ => {}
    }
}
