mod add;
mod common;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

// Submodules reach each other's helpers via `use super::*;`
#[allow(unused_imports)]
use add::*;
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use navigate::*;

pub use common::cancel_drag;
pub use mouse::handle_mouse;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
    }
}
