use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

const NAVIGATE_HINTS: &str = "a add  space toggle  d delete  f filters  q quit";
const ADD_HINTS: &str = "Enter add  Esc close";
const DRAG_HINT: &str = "release to drop, release off the list to cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let hint = if app.list.drag().is_dragging() {
        Some(DRAG_HINT)
    } else if app.show_key_hints {
        Some(match app.mode {
            Mode::Navigate => NAVIGATE_HINTS,
            Mode::Add => ADD_HINTS,
        })
    } else {
        None
    };

    if let Some(hint) = hint {
        let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        let hint_width = display_width(hint) + 1;
        if content_width + hint_width <= width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(
                hint,
                Style::default().fg(app.theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
