//! UI rendering for the Nexora TUI.
//!
//! Two screens: the landing splash and the main view (header, mode tabs,
//! input with counter, example prompts, output region, footer). A
//! transient notice replaces the footer hints while present.

mod header;
mod input;
mod landing;
mod results;
mod tabs;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, NoticeKind, Screen};
use theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Landing => landing::render(frame, app),
        Screen::Main => render_main(frame, app),
    }
}

fn render_main(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(2), // tabs
            Constraint::Length(3), // input field
            Constraint::Length(1), // submit state
            Constraint::Length(5), // examples
            Constraint::Min(5),    // output region
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    header::render(frame, app, chunks[0]);
    tabs::render(frame, app, chunks[1]);
    input::render_field(frame, app, chunks[2]);
    input::render_submit(frame, app, chunks[3]);
    input::render_examples(frame, app, chunks[4]);
    results::render(frame, app, chunks[5]);
    render_footer(frame, app, chunks[6]);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => COLOR_SUCCESS,
                NoticeKind::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(
                format!("  {}", notice.text),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            "  tab mode · ↑↓ examples · enter submit · ctrl+y copy · ctrl+e export · ctrl+c quit",
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
