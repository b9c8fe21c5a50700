//! Terminal renderer: document model to styled ratatui lines.
//!
//! Pure mapping from semantic blocks to `Line`s; wrapping to the viewport
//! is left to the `Paragraph` widget at draw time.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::styles::{
    wrap_osc8_hyperlink, STYLE_CODE_BLOCK, STYLE_H1, STYLE_H2, STYLE_H3, STYLE_INLINE_CODE,
    STYLE_LINK, STYLE_QUOTE,
};
use super::{Block, Document, InlineRun};

/// Render a document to styled lines, blocks separated by blank lines.
pub fn render(doc: &Document) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for block in &doc.blocks {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        match block {
            Block::Heading { level, runs } => {
                let style = heading_style(*level);
                lines.extend(runs_to_lines(runs, style, ""));
            }
            Block::Paragraph { runs } => {
                lines.extend(runs_to_lines(runs, Style::default(), ""));
            }
            Block::List {
                ordered,
                start,
                items,
            } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}. ", start + i as u64)
                    } else {
                        "• ".to_string()
                    };
                    let mut item_lines = runs_to_lines(item, Style::default(), &marker);
                    lines.append(&mut item_lines);
                }
            }
            Block::BlockQuote { lines: quote_lines } => {
                for quoted in quote_lines {
                    for mut line in runs_to_lines(quoted, STYLE_QUOTE, "") {
                        line.spans.insert(0, Span::styled("▌ ", STYLE_QUOTE));
                        lines.push(line);
                    }
                }
            }
            Block::CodeBlock { text, .. } => {
                for code_line in text.split('\n') {
                    lines.push(Line::from(Span::styled(
                        code_line.to_string(),
                        STYLE_CODE_BLOCK,
                    )));
                }
            }
        }
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn heading_style(level: u8) -> Style {
    match level {
        1 => STYLE_H1,
        2 => STYLE_H2,
        3 => STYLE_H3,
        // Deeper levels are not part of the styled set.
        _ => Style::default(),
    }
}

/// Convert inline runs to one or more lines, honoring explicit breaks.
/// The marker prefixes the first line; continuation lines are indented to
/// align under it.
fn runs_to_lines(runs: &[InlineRun], base: Style, marker: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    if !marker.is_empty() {
        spans.push(Span::raw(marker.to_string()));
    }
    let indent = " ".repeat(marker.chars().count());

    for run in runs {
        if run.is_line_break() {
            lines.push(Line::from(std::mem::take(&mut spans)));
            if !indent.is_empty() {
                spans.push(Span::raw(indent.clone()));
            }
            continue;
        }
        spans.push(run_to_span(run, base));
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn run_to_span(run: &InlineRun, base: Style) -> Span<'static> {
    let mut style = base;
    let mut text = run.text.clone();

    if run.code {
        style = style.patch(STYLE_INLINE_CODE);
    }
    if let Some(url) = &run.link {
        style = style.patch(STYLE_LINK);
        text = wrap_osc8_hyperlink(url, &text);
    }
    if run.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if run.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }

    Span::styled(text, style)
}
