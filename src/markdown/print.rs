//! Print renderer: document model to plain wrapped lines for export.
//!
//! The print variant drops terminal styling and lays blocks out as plain
//! text tagged with a [`PrintStyle`], which the PDF writer maps to fonts
//! and sizes. Link destinations are made explicit (`text (url)`) since
//! paper has no hover.

use unicode_width::UnicodeWidthStr;

use super::{Block, Document, InlineRun};

/// Style class of one laid-out line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStyle {
    /// Heading with its level (1-3 map to decreasing sizes).
    Heading(u8),
    /// Regular body text.
    Body,
    /// Monospaced code.
    Code,
}

/// One laid-out line of the print variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintLine {
    pub text: String,
    pub style: PrintStyle,
}

impl PrintLine {
    fn new(text: impl Into<String>, style: PrintStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", PrintStyle::Body)
    }
}

/// Lay out a document as plain lines wrapped to `width` columns.
pub fn layout(doc: &Document, width: usize) -> Vec<PrintLine> {
    let width = width.max(16);
    let mut lines: Vec<PrintLine> = Vec::new();

    for block in &doc.blocks {
        if !lines.is_empty() {
            lines.push(PrintLine::blank());
        }
        match block {
            Block::Heading { level, runs } => {
                for part in break_runs(runs) {
                    for wrapped in wrap_text(&part, width) {
                        lines.push(PrintLine::new(wrapped, PrintStyle::Heading(*level)));
                    }
                }
            }
            Block::Paragraph { runs } => {
                for part in break_runs(runs) {
                    for wrapped in wrap_text(&part, width) {
                        lines.push(PrintLine::new(wrapped, PrintStyle::Body));
                    }
                }
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
                    push_prefixed(&mut lines, item, &marker, width);
                }
            }
            Block::BlockQuote { lines: quoted } => {
                for line in quoted {
                    push_prefixed(&mut lines, line, "> ", width);
                }
            }
            Block::CodeBlock { text, .. } => {
                for code_line in text.split('\n') {
                    // Hard-split: code must not be reflowed.
                    let mut rest = code_line;
                    loop {
                        let (head, tail) = split_at_width(rest, width);
                        lines.push(PrintLine::new(head, PrintStyle::Code));
                        if tail.is_empty() {
                            break;
                        }
                        rest = tail;
                    }
                }
            }
        }
    }

    lines
}

/// Join runs into display text, splitting on explicit line breaks.
fn break_runs(runs: &[InlineRun]) -> Vec<String> {
    let mut parts = vec![String::new()];
    for run in runs {
        if run.is_line_break() {
            parts.push(String::new());
            continue;
        }
        let last = parts.last_mut().expect("parts never empty");
        match &run.link {
            Some(url) if url != &run.text => {
                last.push_str(&format!("{} ({})", run.text, url));
            }
            _ => last.push_str(&run.text),
        }
    }
    parts.retain(|p| !p.is_empty());
    parts
}

/// Wrap prefixed content with continuation lines indented under the prefix.
fn push_prefixed(lines: &mut Vec<PrintLine>, runs: &[InlineRun], prefix: &str, width: usize) {
    let indent = " ".repeat(prefix.chars().count());
    let inner_width = width.saturating_sub(prefix.chars().count()).max(8);
    let mut first = true;
    for part in break_runs(runs) {
        for wrapped in wrap_text(&part, inner_width) {
            let lead = if first { prefix } else { &indent };
            lines.push(PrintLine::new(format!("{lead}{wrapped}"), PrintStyle::Body));
            first = false;
        }
    }
}

/// Greedy word wrap on display width; overlong words are hard-split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let current_width = UnicodeWidthStr::width(current.as_str());

        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
            } else {
                // Hard-split a word wider than the line.
                let mut rest = word;
                loop {
                    let (head, tail) = split_at_width(rest, width);
                    if tail.is_empty() {
                        current.push_str(head);
                        break;
                    }
                    out.push(head.to_string());
                    rest = tail;
                }
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
            } else {
                let mut rest = word;
                loop {
                    let (head, tail) = split_at_width(rest, width);
                    if tail.is_empty() {
                        current.push_str(head);
                        break;
                    }
                    out.push(head.to_string());
                    rest = tail;
                }
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Split a string at the last char boundary fitting in `width` columns.
fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = UnicodeWidthStr::width(ch.encode_utf8(&mut [0u8; 4]) as &str);
        if used + w > width && idx > 0 {
            return text.split_at(idx);
        }
        used += w;
    }
    (text, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse;

    #[test]
    fn test_heading_line_tagged_with_level() {
        let lines = layout(&parse("## Section"), 80);
        assert_eq!(lines[0].style, PrintStyle::Heading(2));
        assert_eq!(lines[0].text, "Section");
    }

    #[test]
    fn test_paragraph_wraps_at_width() {
        let text = "word ".repeat(30);
        let lines = layout(&parse(&text), 20);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.text.as_str()) <= 20);
        }
    }

    #[test]
    fn test_list_marker_and_continuation_indent() {
        let lines = layout(
            &parse("- a rather long list item that will certainly wrap"),
            24,
        );
        assert!(lines[0].text.starts_with("• "));
        assert!(lines[1].text.starts_with("  "));
    }

    #[test]
    fn test_ordered_numbering_respects_start() {
        let lines = layout(&parse("5. five\n6. six"), 40);
        assert!(lines.iter().any(|l| l.text.starts_with("5. ")));
        assert!(lines.iter().any(|l| l.text.starts_with("6. ")));
    }

    #[test]
    fn test_quote_prefix() {
        let lines = layout(&parse("> be kind"), 40);
        assert!(lines.iter().any(|l| l.text.starts_with("> ")));
    }

    #[test]
    fn test_code_not_reflowed() {
        let lines = layout(&parse("```\n    indented code\n```"), 80);
        let code: Vec<_> = lines
            .iter()
            .filter(|l| l.style == PrintStyle::Code)
            .collect();
        assert_eq!(code.len(), 1);
        assert_eq!(code[0].text, "    indented code");
    }

    #[test]
    fn test_link_destination_made_explicit() {
        let lines = layout(&parse("[docs](https://example.com)"), 80);
        assert!(lines
            .iter()
            .any(|l| l.text.contains("docs (https://example.com)")));
    }

    #[test]
    fn test_wrap_text_hard_splits_long_word() {
        let wrapped = wrap_text("abcdefghijklmnop", 5);
        assert!(wrapped.len() >= 3);
        assert!(wrapped.iter().all(|l| l.chars().count() <= 5));
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
