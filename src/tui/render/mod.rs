pub mod action_row;
pub mod filter_bar;
pub mod header;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, HitAreas};

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let filter_height = if app.show_filters { 2 } else { 1 };

    // Layout: header (2) | actions (1) | filters (1-2) | list | status row (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(filter_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    // Sub-renderers record their clickable regions afresh each frame
    app.hit_areas = HitAreas::default();

    header::render_header(frame, app, chunks[0]);
    action_row::render_action_row(frame, app, chunks[1]);
    filter_bar::render_filter_bar(frame, app, chunks[2]);
    task_list::render_task_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);
}
