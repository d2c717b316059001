use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::tui::app::{App, Mode};
use crate::util::unicode::prev_grapheme_boundary;

/// Keys while the add-task form has focus
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Backspace) => pop_grapheme(&mut app.add_buffer),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.add_buffer.clear(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            app.add_buffer.push(c);
        }
        _ => {}
    }
}

/// Add the buffered text as a task. Blank input leaves the form open.
fn submit(app: &mut App) {
    match app.list.add(&app.add_buffer) {
        Some(id) => {
            app.add_buffer.clear();
            app.mode = Mode::Navigate;
            app.move_cursor_to(id);
        }
        None => debug!("ignoring blank task text"),
    }
}

/// Remove the last user-perceived character
fn pop_grapheme(buffer: &mut String) {
    if let Some(idx) = prev_grapheme_boundary(buffer, buffer.len()) {
        buffer.truncate(idx);
    }
}
