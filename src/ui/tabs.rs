//! Mode tab bar.
//!
//! Horizontal selector over the three modes with a `▶` marker on the
//! active tab and the active mode's description underneath.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::modes::Mode;
use crate::ui::theme::COLOR_DIM;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![tab_line(app.session.mode)];
    lines.push(Line::from(Span::styled(
        format!("    {}", app.session.mode.spec().description),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

/// The selector line with every mode title, active one marked.
pub fn tab_line(active: Mode) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw("  ")];

    for (idx, mode) in Mode::ALL.iter().enumerate() {
        let spec = mode.spec();
        if *mode == active {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(spec.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                spec.title.to_string(),
                Style::default()
                    .fg(spec.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(
                spec.title.to_string(),
                Style::default().fg(COLOR_DIM),
            ));
        }
        if idx < Mode::ALL.len() - 1 {
            spans.push(Span::raw("    "));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_titles_present() {
        let text = text_of(&tab_line(Mode::Plan));
        assert!(text.contains("Smart Planner"));
        assert!(text.contains("Blog Writer"));
        assert!(text.contains("Market Research"));
    }

    #[test]
    fn test_marker_precedes_active_tab() {
        let text = text_of(&tab_line(Mode::Blog));
        let marker = text.find('▶').unwrap();
        let blog = text.find("Blog Writer").unwrap();
        let plan = text.find("Smart Planner").unwrap();
        assert!(marker < blog);
        assert!(marker > plan);
    }
}
