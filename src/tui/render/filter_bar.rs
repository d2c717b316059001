use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;
use crate::util::unicode::display_width;

/// Collapsible filter panel: a header row, then one label per mode with
/// its count
pub fn render_filter_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let arrow = if app.show_filters { "\u{25BE}" } else { "\u{25B8}" };
    let header = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(arrow, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(" Filters", Style::default().fg(app.theme.text).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);
    app.hit_areas.filters_toggle = Some(rows[0]);

    if !app.show_filters || rows[1].height == 0 {
        return;
    }

    let counts = app.list.counts();
    let current = app.list.filter();
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut col = 1usize;
    for mode in FilterMode::ALL {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        col += 1;

        let label = format!(" {} ({}) ", mode.label(), counts.get(mode));
        let label_width = display_width(&label);
        let style = if mode == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        if col + label_width <= rows[1].width as usize {
            app.hit_areas.filters.push((
                mode,
                Rect::new(rows[1].x + col as u16, rows[1].y, label_width as u16, 1),
            ));
        }
        spans.push(Span::styled(label, style));
        col += label_width;
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        rows[1],
    );
}
