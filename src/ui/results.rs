//! Output region: loading indicator, error region, or rendered result.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::markdown;
use crate::ui::theme::{
    spinner_char, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_LOADING,
};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.session.loading {
        render_loading(frame, app, area);
    } else if let Some(error) = &app.session.error {
        render_error(frame, error, area);
    } else if let Some(result) = &app.session.result {
        render_result(frame, app, result, area);
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  Results will appear here.",
                Style::default().fg(COLOR_DIM),
            ))),
            area,
        );
    }
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char(app.tick_count)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(
                "Processing your request...",
                Style::default()
                    .fg(COLOR_LOADING)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
        Line::from(Span::styled(
            "Please wait while we generate your content.",
            Style::default().fg(COLOR_DIM),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_error(frame: &mut Frame, error: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(Span::styled(
            " Error ",
            Style::default()
                .fg(COLOR_ERROR)
                .add_modifier(Modifier::BOLD),
        ));
    let lines = vec![
        Line::from(Span::styled(
            "Something went wrong",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(COLOR_ERROR),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_result(frame: &mut Frame, app: &App, result: &str, area: Rect) {
    let spec = app.session.mode.spec();
    let title = format!(" {} Results ", spec.title);

    let mut header_extra = String::new();
    if let Some(at) = app.result_generated_at {
        header_extra = format!(" Generated on {} ", at.format("%Y-%m-%d"));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            title,
            Style::default()
                .fg(spec.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .title(Line::from(Span::styled(
            header_extra,
            Style::default().fg(COLOR_DIM),
        )).right_aligned())
        .title_bottom(Line::from(Span::styled(
            " ctrl+y copy · ctrl+e export · pgup/pgdn scroll ",
            Style::default().fg(COLOR_DIM),
        )).right_aligned());

    let lines = markdown::terminal::render(&markdown::parse(result));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.result_scroll, 0)),
        area,
    );
}
