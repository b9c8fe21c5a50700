//! Main-screen header: logo, title, subtitle, status indicator.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{spinner_char, COLOR_DIM, COLOR_HEADER, COLOR_LOADING, COLOR_READY};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    // Title on the left, status indicator on the right of the first row.
    let status_width = 20u16.min(area.width / 3);
    let title_area = Rect::new(area.x, area.y, area.width.saturating_sub(status_width), area.height);
    let status_area = Rect::new(
        area.x + area.width.saturating_sub(status_width),
        area.y,
        status_width,
        1,
    );

    let title = Line::from(vec![
        Span::styled("  ✦ ", Style::default().fg(COLOR_HEADER)),
        Span::styled(
            "Nexora AI",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let subtitle = Line::from(Span::styled(
        "    Your study companion for planning, writing, and research",
        Style::default().fg(COLOR_DIM),
    ));

    frame.render_widget(Paragraph::new(vec![title, subtitle]), title_area);
    frame.render_widget(Paragraph::new(status_line(app)).right_aligned(), status_area);
}

/// `● Ready to help` or a spinner while a request is in flight.
pub fn status_line(app: &App) -> Line<'static> {
    if app.session.loading {
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char(app.tick_count)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled("Processing...", Style::default().fg(COLOR_LOADING)),
        ])
    } else {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(COLOR_READY)),
            Span::styled("Ready to help", Style::default().fg(COLOR_DIM)),
        ])
    }
}
