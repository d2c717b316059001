use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

const CLEAR_LABEL: &str = " Clear All ";

/// Add-form toggle (or the open form itself) and the Clear All control
pub fn render_action_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    let show_clear = !app.list.is_empty();
    let clear_width = if show_clear { display_width(CLEAR_LABEL) + 1 } else { 0 };

    match app.mode {
        Mode::Navigate => {
            let toggle = Span::styled(
                "[+] add task",
                Style::default().fg(app.theme.purple).bg(bg),
            );
            app.hit_areas.add_toggle = Some(Rect::new(
                area.x + 1,
                area.y,
                display_width(&toggle.content) as u16,
                1,
            ));
            spans.push(toggle);
        }
        Mode::Add => {
            spans.push(Span::styled(
                "[x]",
                Style::default()
                    .fg(app.theme.red)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
            app.hit_areas.add_toggle = Some(Rect::new(area.x + 1, area.y, 3, 1));
            spans.push(Span::styled(" ", Style::default().bg(bg)));

            // Keep the tail of long input visible next to the cursor, with
            // at least one column before Clear All
            let room = width.saturating_sub(7 + clear_width);
            if app.add_buffer.is_empty() {
                spans.push(Span::styled(
                    truncate_to_width("Add a new task...", room),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            } else {
                spans.push(Span::styled(
                    tail_to_width(&app.add_buffer, room).to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
            }
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }

    if show_clear {
        let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
        if used + clear_width <= width {
            let padding = width - used - clear_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            app.hit_areas.clear_all = Some(Rect::new(
                area.x + (used + padding) as u16,
                area.y,
                display_width(CLEAR_LABEL) as u16,
                1,
            ));
            spans.push(Span::styled(
                CLEAR_LABEL,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
