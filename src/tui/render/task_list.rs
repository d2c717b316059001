use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

// Row layout: `▎ ⠿ [x] text ... × `
const CHECKBOX_COL: u16 = 4;
const CHECKBOX_WIDTH: u16 = 3;
const TEXT_COL: usize = 8;
const DELETE_MARKER: &str = " \u{00D7} ";

/// Which part of a task row a column falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRegion {
    Checkbox,
    Delete,
    /// Grip handle and text; pressing here starts a drag
    Body,
}

/// Classify a screen column within a task row of `area`
pub fn row_region(area: Rect, column: u16) -> RowRegion {
    let x = column.saturating_sub(area.x);
    let delete_start = area.width.saturating_sub(display_width(DELETE_MARKER) as u16);
    if (CHECKBOX_COL..CHECKBOX_COL + CHECKBOX_WIDTH).contains(&x) {
        RowRegion::Checkbox
    } else if has_delete_marker(area.width as usize) && x >= delete_start {
        RowRegion::Delete
    } else {
        RowRegion::Body
    }
}

/// Rows too narrow for text and the marker leave the marker out
fn has_delete_marker(width: usize) -> bool {
    width >= TEXT_COL + display_width(DELETE_MARKER)
}

/// Render the visible (filtered, possibly previewed) task rows
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.list.visible();
    app.hit_areas.list = Some(area);

    if tasks.is_empty() {
        let msg = match app.list.filter() {
            crate::model::FilterMode::All => " No tasks".to_string(),
            mode => format!(" No tasks in {}", mode),
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor in view
    let visible_height = area.height as usize;
    app.cursor = app.cursor.min(tasks.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor.saturating_sub(visible_height.saturating_sub(1));
    }
    // Don't leave blank rows at the bottom after tasks disappear
    app.scroll_offset = app
        .scroll_offset
        .min(tasks.len().saturating_sub(visible_height));

    let scroll = app.scroll_offset;
    let end = tasks.len().min(scroll + visible_height);
    let dragged = app.list.drag().dragged();
    let hover = app.list.drag().hover();

    let lines: Vec<Line> = tasks[scroll..end]
        .iter()
        .zip(scroll..end)
        .map(|(task, row)| {
            let is_dragged = dragged == Some(task.id);
            let highlight = if is_dragged {
                RowHighlight::Dragged
            } else if hover == Some(row) {
                RowHighlight::Hovered
            } else if row == app.cursor && dragged.is_none() {
                RowHighlight::Cursor
            } else {
                RowHighlight::None
            };
            render_task_line(app, task, highlight, area.width as usize)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowHighlight {
    None,
    Cursor,
    Dragged,
    Hovered,
}

fn render_task_line<'a>(
    app: &App,
    task: &Task,
    highlight: RowHighlight,
    width: usize,
) -> Line<'a> {
    let theme = &app.theme;
    let row_bg: Color = match highlight {
        RowHighlight::None => theme.background,
        RowHighlight::Cursor => theme.selection_bg,
        RowHighlight::Dragged => theme.drag_bg,
        RowHighlight::Hovered => theme.hover_bg,
    };
    let base = Style::default().bg(row_bg);

    let mut spans: Vec<Span> = Vec::new();

    // Column 0: cursor / drag marker
    match highlight {
        RowHighlight::Cursor => spans.push(Span::styled(
            "\u{258E}",
            base.fg(theme.selection_border),
        )),
        RowHighlight::Dragged => spans.push(Span::styled("\u{258E}", base.fg(theme.purple))),
        RowHighlight::Hovered => spans.push(Span::styled("\u{258E}", base.fg(theme.highlight))),
        RowHighlight::None => spans.push(Span::styled(" ", base)),
    }

    let grip_fg = if highlight == RowHighlight::Dragged {
        theme.purple
    } else {
        theme.dim
    };
    spans.push(Span::styled(" \u{283F} ", base.fg(grip_fg)));

    let (checkbox, checkbox_fg) = if task.completed {
        ("[x]", theme.green)
    } else {
        ("[ ]", theme.text)
    };
    spans.push(Span::styled(checkbox, base.fg(checkbox_fg)));
    spans.push(Span::styled(" ", base));

    let text_room = width.saturating_sub(TEXT_COL + display_width(DELETE_MARKER));
    let text = truncate_to_width(&task.text, text_room);
    let mut text_style = if task.completed {
        base.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT)
    } else {
        base.fg(theme.text)
    };
    if highlight == RowHighlight::Dragged {
        text_style = text_style.add_modifier(Modifier::ITALIC);
    } else if highlight == RowHighlight::Cursor && !task.completed {
        text_style = text_style.fg(theme.text_bright);
    }
    let text_width = display_width(&text);
    spans.push(Span::styled(text, text_style));

    let padding = text_room.saturating_sub(text_width);
    spans.push(Span::styled(" ".repeat(padding), base));
    if has_delete_marker(width) {
        spans.push(Span::styled(DELETE_MARKER, base.fg(theme.red)));
    }

    Line::from(spans)
}
