use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::model::{FilterMode, TaskId};
use crate::tui::app::{App, Mode};

/// Fold `Char(lower) + SHIFT` (kitty-style reporting) into `Char(UPPER)`
pub(super) fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Move the cursor by `delta` rows, clamped to the visible list
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let count = app.list.visible().len();
    if count == 0 {
        return;
    }
    let new_cursor = (app.cursor as i64 + delta as i64).clamp(0, count as i64 - 1);
    app.cursor = new_cursor as usize;
}

pub(super) fn toggle_task(app: &mut App, id: TaskId) {
    if app.list.toggle(id) {
        // The task may have left the current filter
        app.clamp_cursor();
    }
}

pub(super) fn remove_task(app: &mut App, id: TaskId) {
    if app.list.remove(id) {
        app.clamp_cursor();
    }
}

pub(super) fn clear_all(app: &mut App) {
    if app.list.is_empty() {
        return;
    }
    let count = app.list.len();
    app.list.clear();
    app.cursor = 0;
    app.scroll_offset = 0;
    app.status_message = Some(format!(
        "cleared {} task{}",
        count,
        if count == 1 { "" } else { "s" }
    ));
}

/// Switch filter, keeping the cursor on the same task when it stays visible
pub(super) fn set_filter(app: &mut App, mode: FilterMode) {
    let prev = app.cursor_task().map(|t| t.id);
    app.list.set_filter(mode);
    match prev {
        Some(id) if app.list.visible().iter().any(|t| t.id == id) => app.move_cursor_to(id),
        _ => app.cursor = 0,
    }
    app.clamp_cursor();
}

pub(super) fn toggle_add_form(app: &mut App) {
    app.mode = match app.mode {
        Mode::Navigate => Mode::Add,
        Mode::Add => Mode::Navigate,
    };
    debug!(mode = ?app.mode, "add form toggled");
}

/// Abandon any drag in progress
pub fn cancel_drag(app: &mut App) {
    if app.list.drag().is_dragging() {
        app.list.end_drag();
    }
}
