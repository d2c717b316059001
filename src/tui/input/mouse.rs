use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::tui::app::{App, Mode};
use crate::tui::render::task_list::{RowRegion, row_region};

use super::*;

/// Handle a mouse event against the hit areas of the last draw
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.status_message = None;
            handle_press(app, pos);
        }
        MouseEventKind::Drag(MouseButton::Left) => handle_drag_motion(app, pos),
        MouseEventKind::Up(MouseButton::Left) => handle_release(app, pos),
        MouseEventKind::ScrollDown => move_cursor(app, 1),
        MouseEventKind::ScrollUp => move_cursor(app, -1),
        _ => {}
    }
}

/// Visible row index under `pos`, if it lands on a task
fn row_at(app: &App, pos: Position) -> Option<usize> {
    let area = app.hit_areas.list?;
    if !area.contains(pos) {
        return None;
    }
    let row = app.scroll_offset + (pos.y - area.y) as usize;
    (row < app.list.visible().len()).then_some(row)
}

fn hit(area: Option<Rect>, pos: Position) -> bool {
    area.is_some_and(|a| a.contains(pos))
}

fn handle_press(app: &mut App, pos: Position) {
    if hit(app.hit_areas.add_toggle, pos) {
        toggle_add_form(app);
        return;
    }
    if hit(app.hit_areas.clear_all, pos) {
        clear_all(app);
        return;
    }
    if hit(app.hit_areas.filters_toggle, pos) {
        app.show_filters = !app.show_filters;
        return;
    }
    let filter_hit = app
        .hit_areas
        .filters
        .iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(mode, _)| *mode);
    if let Some(mode) = filter_hit {
        set_filter(app, mode);
        return;
    }

    let (Some(area), Some(row)) = (app.hit_areas.list, row_at(app, pos)) else {
        return;
    };
    let Some(task) = app.list.visible().into_iter().nth(row) else {
        return;
    };
    match row_region(area, pos.x) {
        RowRegion::Checkbox => toggle_task(app, task.id),
        RowRegion::Delete => remove_task(app, task.id),
        RowRegion::Body => {
            app.cursor = row;
            if app.mode == Mode::Navigate && app.list.start_drag(task.id) {
                debug!(id = %task.id, row, "press on row");
            }
        }
    }
}

fn handle_drag_motion(app: &mut App, pos: Position) {
    if !app.list.drag().is_dragging() {
        return;
    }
    match row_at(app, pos) {
        Some(row) if app.list.drag().hover() != Some(row) => app.list.hover_enter(row),
        Some(_) => {}
        None => {
            if app.list.drag().hover().is_some() {
                app.list.hover_leave();
            }
        }
    }
}

fn handle_release(app: &mut App, pos: Position) {
    let Some(dragged) = app.list.drag().dragged() else {
        return;
    };
    let moved = match row_at(app, pos) {
        Some(row) => app.list.drop_at(row),
        None => false,
    };
    // A drop outside the list, or one that changed nothing, still ends the gesture
    app.list.end_drag();

    if moved {
        if let Some(task) = app.list.store().get(dragged) {
            app.status_message = Some(format!("moved \"{}\"", task.text));
        }
        app.move_cursor_to(dragged);
    }
    app.clamp_cursor();
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;

    use crate::model::FilterMode;
    use crate::tui::app::{App, Mode};
    use crate::tui::input::handle_mouse;
    use crate::tui::render;
    use crate::tui::render::test_helpers::*;

    // 40x12 with filters shown: list rows are y=5..=10, status at y=11
    const LIST_Y: u16 = 5;

    fn draw(app: &mut App) {
        render_to_string(40, 12, |frame, _| render::render(frame, app));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
        draw(app);
    }

    fn press(app: &mut App, column: u16, row: u16) {
        mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
    }

    fn drag_to(app: &mut App, row: u16) {
        mouse(app, MouseEventKind::Drag(MouseButton::Left), 20, row);
    }

    fn release(app: &mut App, row: u16) {
        mouse(app, MouseEventKind::Up(MouseButton::Left), 20, row);
    }

    fn names(tasks: Vec<crate::model::Task>) -> Vec<String> {
        tasks.into_iter().map(|t| t.text).collect()
    }

    fn setup(texts: &[&str]) -> App {
        let mut app = app_with(texts);
        draw(&mut app);
        app
    }

    #[test]
    fn test_drag_down_and_drop() {
        let mut app = setup(&["A", "B", "C"]);
        press(&mut app, 20, LIST_Y);
        assert!(app.list.drag().is_dragging());

        drag_to(&mut app, LIST_Y + 2);
        assert_eq!(names(app.list.visible()), vec!["B", "C", "A"]);
        // Nothing committed yet
        assert_eq!(names(app.list.tasks().to_vec()), vec!["A", "B", "C"]);

        release(&mut app, LIST_Y + 2);
        assert!(!app.list.drag().is_dragging());
        assert_eq!(names(app.list.tasks().to_vec()), vec!["B", "C", "A"]);
        assert_eq!(app.cursor, 2);
        assert_eq!(app.status_message.as_deref(), Some("moved \"A\""));
    }

    #[test]
    fn test_release_outside_list_cancels() {
        let mut app = setup(&["A", "B", "C"]);
        press(&mut app, 20, LIST_Y + 2);
        drag_to(&mut app, LIST_Y);
        assert_eq!(names(app.list.visible()), vec!["C", "A", "B"]);

        // Leaving the list keeps the preview
        drag_to(&mut app, 0);
        assert_eq!(app.list.drag().hover(), None);
        assert!(app.list.drag().has_preview());

        release(&mut app, 0);
        assert!(!app.list.drag().is_dragging());
        assert_eq!(names(app.list.tasks().to_vec()), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_release_below_last_row_cancels() {
        let mut app = setup(&["A", "B"]);
        press(&mut app, 20, LIST_Y);
        drag_to(&mut app, LIST_Y + 1);
        release(&mut app, LIST_Y + 4);
        assert_eq!(names(app.list.tasks().to_vec()), vec!["A", "B"]);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_click_without_motion_changes_nothing() {
        let mut app = setup(&["A", "B"]);
        press(&mut app, 20, LIST_Y + 1);
        release(&mut app, LIST_Y + 1);
        assert_eq!(names(app.list.tasks().to_vec()), vec!["A", "B"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_drag_under_filter_keeps_hidden_tasks() {
        // a is completed and hidden under Active
        let mut app = setup(&["x", "a", "y", "z"]);
        let a = app.list.tasks()[1].id;
        app.list.toggle(a);
        app.list.set_filter(FilterMode::Active);
        draw(&mut app);

        press(&mut app, 20, LIST_Y + 2);
        drag_to(&mut app, LIST_Y);
        release(&mut app, LIST_Y);
        assert_eq!(names(app.list.tasks().to_vec()), vec!["z", "x", "a", "y"]);
    }

    #[test]
    fn test_checkbox_and_delete_regions() {
        let mut app = setup(&["A", "B"]);
        press(&mut app, 5, LIST_Y);
        assert!(app.list.tasks()[0].completed);
        assert!(!app.list.drag().is_dragging());

        press(&mut app, 38, LIST_Y + 1);
        assert_eq!(names(app.list.tasks().to_vec()), vec!["A"]);
    }

    #[test]
    fn test_action_row_and_filters() {
        let mut app = setup(&["A", "B"]);
        // Filter labels on row 4: All at col 2, Active at col 12
        press(&mut app, 14, 4);
        assert_eq!(app.list.filter(), FilterMode::Active);

        // Clear All on the action row
        press(&mut app, 30, 2);
        assert!(app.list.is_empty());

        // "[+] add task"
        press(&mut app, 3, 2);
        assert_eq!(app.mode, Mode::Add);

        // Collapse the filter panel
        press(&mut app, 3, 3);
        assert!(!app.show_filters);
    }

    #[test]
    fn test_clear_all_with_add_form_open() {
        let mut app = setup(&["A", "B"]);
        press(&mut app, 3, 2);
        assert_eq!(app.mode, Mode::Add);

        press(&mut app, 30, 2);
        assert!(app.list.is_empty());
        assert_eq!(app.mode, Mode::Add);
    }

    #[test]
    fn test_scroll_moves_cursor() {
        let mut app = setup(&["A", "B", "C"]);
        mouse(&mut app, MouseEventKind::ScrollDown, 20, LIST_Y);
        mouse(&mut app, MouseEventKind::ScrollDown, 20, LIST_Y);
        assert_eq!(app.cursor, 2);
        mouse(&mut app, MouseEventKind::ScrollUp, 20, LIST_Y);
        assert_eq!(app.cursor, 1);
    }
}
