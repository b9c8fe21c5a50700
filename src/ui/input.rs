//! Input section: text field with character counter, submit state line,
//! and the example prompts for the active mode.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::session::MAX_INPUT_CHARS;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Bordered input field; the counter sits in the bottom-right border.
pub fn render_field(frame: &mut Frame, app: &App, area: Rect) {
    let spec = app.session.mode.spec();
    let counter = format!("{}/{}", app.session.char_count(), MAX_INPUT_CHARS);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title_bottom(Line::from(Span::styled(
            counter,
            Style::default().fg(COLOR_DIM),
        )).right_aligned());

    let inner_line = if app.session.input.is_empty() {
        // Placeholder with a leading cursor cell.
        Line::from(vec![
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(spec.placeholder, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        input_with_cursor(&app.session.input, app.cursor)
    };

    // Keep the cursor visible when the input is wider than the field.
    let inner_width = area.width.saturating_sub(2) as usize;
    let hscroll = app.cursor.saturating_sub(inner_width.saturating_sub(1)) as u16;

    frame.render_widget(
        Paragraph::new(inner_line).scroll((0, hscroll)).block(block),
        area,
    );
}

/// Input text with a reversed cell marking the cursor.
fn input_with_cursor(input: &str, cursor: usize) -> Line<'static> {
    let chars: Vec<char> = input.chars().collect();
    let before: String = chars[..cursor.min(chars.len())].iter().collect();
    let at: String = chars
        .get(cursor)
        .map(|c| c.to_string())
        .unwrap_or_else(|| " ".to_string());
    let after: String = if cursor + 1 <= chars.len() {
        chars[(cursor + 1).min(chars.len())..].iter().collect()
    } else {
        String::new()
    };

    Line::from(vec![
        Span::styled(before, Style::default().fg(COLOR_ACCENT)),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::styled(after, Style::default().fg(COLOR_ACCENT)),
    ])
}

/// `[ Generate {title} ]`, dimmed while disabled.
pub fn render_submit(frame: &mut Frame, app: &App, area: Rect) {
    let spec = app.session.mode.spec();
    let label = if app.session.loading {
        "  Processing...".to_string()
    } else {
        format!("  [ Generate {} ]  (enter)", spec.title)
    };
    let style = if app.session.can_submit() {
        Style::default()
            .fg(spec.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
}

/// Example prompts, the highlighted one marked with `▸`.
pub fn render_examples(frame: &mut Frame, app: &App, area: Rect) {
    let spec = app.session.mode.spec();
    let mut lines = vec![Line::from(Span::styled(
        "  Try these examples (↑/↓, enter on empty input):",
        Style::default().fg(COLOR_DIM),
    ))];

    for (i, example) in spec.examples.iter().enumerate() {
        let selected = app.example_cursor == Some(i);
        let (marker, style) = if selected {
            (
                "  ▸ ",
                Style::default()
                    .fg(spec.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("    ", Style::default().fg(COLOR_DIM))
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled((*example).to_string(), style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
