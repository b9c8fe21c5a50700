//! Markdown document model and parser.
//!
//! [`parse`] turns a markdown string into a [`Document`] of semantic blocks
//! containing styled inline runs. The model carries no terminal or layout
//! types, so the mapping from markdown constructs to semantic elements can
//! be unit-tested on its own; the [`terminal`] and [`print`] renderers then
//! turn a document into styled ratatui lines or plain paginated text.
//!
//! Mapped constructs: headings (levels 1-3 get distinct terminal styles),
//! paragraphs, ordered/unordered lists, bold, italic, links, blockquotes,
//! inline code, and fenced code blocks. Anything else degrades to its plain
//! text content. Incomplete markdown parses without error.

mod styles;
pub mod print;
pub mod terminal;

pub use styles::wrap_osc8_hyperlink;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// A parsed markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// One semantic block element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with its level (1-6) and inline content.
    Heading { level: u8, runs: Vec<InlineRun> },
    /// Plain paragraph.
    Paragraph { runs: Vec<InlineRun> },
    /// Ordered or unordered list. Nested lists are flattened into their
    /// parent's item sequence.
    List {
        ordered: bool,
        start: u64,
        items: Vec<Vec<InlineRun>>,
    },
    /// Block quote, one entry per quoted line/paragraph.
    BlockQuote { lines: Vec<Vec<InlineRun>> },
    /// Fenced or indented code block, whitespace preserved.
    CodeBlock {
        language: Option<String>,
        text: String,
    },
}

/// A contiguous piece of inline text with uniform styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    /// Destination URL when this run is link text.
    pub link: Option<String>,
}

impl InlineRun {
    /// Unstyled text run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            code: false,
            link: None,
        }
    }

    /// A forced line break inside a block.
    pub fn line_break() -> Self {
        Self::plain("\n")
    }

    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }
}

impl Document {
    /// All text content with styling stripped, blocks joined by newlines.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if !out.is_empty() {
                out.push('\n');
            }
            match block {
                Block::Heading { runs, .. } | Block::Paragraph { runs } => {
                    push_runs(&mut out, runs);
                }
                Block::List { items, .. } => {
                    for (i, item) in items.iter().enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        push_runs(&mut out, item);
                    }
                }
                Block::BlockQuote { lines } => {
                    for (i, line) in lines.iter().enumerate() {
                        if i > 0 {
                            out.push('\n');
                        }
                        push_runs(&mut out, line);
                    }
                }
                Block::CodeBlock { text, .. } => out.push_str(text),
            }
        }
        out
    }
}

fn push_runs(out: &mut String, runs: &[InlineRun]) {
    for run in runs {
        out.push_str(&run.text);
    }
}

/// Bookkeeping for one (possibly nested) list being parsed.
struct ListCtx {
    ordered: bool,
    start: u64,
    items: Vec<Vec<InlineRun>>,
}

/// Parser state walked over pulldown-cmark events.
#[derive(Default)]
struct ParseState {
    blocks: Vec<Block>,
    runs: Vec<InlineRun>,
    bold: u32,
    italic: u32,
    links: Vec<String>,
    heading: Option<u8>,
    quote_depth: u32,
    quote_lines: Vec<Vec<InlineRun>>,
    code: Option<(Option<String>, String)>,
    lists: Vec<ListCtx>,
}

impl ParseState {
    fn style_run(&self, text: String) -> InlineRun {
        InlineRun {
            text,
            bold: self.bold > 0,
            italic: self.italic > 0,
            code: false,
            link: self.links.last().cloned(),
        }
    }

    /// Move pending runs to wherever the current container wants them.
    fn flush_runs(&mut self) {
        if self.runs.is_empty() {
            return;
        }
        let runs = std::mem::take(&mut self.runs);
        if self.quote_depth > 0 {
            self.quote_lines.push(runs);
        } else if let Some(list) = self.lists.last_mut() {
            list.items.push(runs);
        } else {
            self.blocks.push(Block::Paragraph { runs });
        }
    }
}

/// Parse markdown into a [`Document`].
pub fn parse(text: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut st = ParseState::default();

    for event in Parser::new_ext(text, options) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => {
                    st.flush_runs();
                    st.heading = Some(level as u8);
                }
                Tag::Paragraph => {}
                Tag::Strong => st.bold += 1,
                Tag::Emphasis => st.italic += 1,
                Tag::Link { dest_url, .. } => st.links.push(dest_url.to_string()),
                Tag::List(start) => {
                    st.flush_runs();
                    st.lists.push(ListCtx {
                        ordered: start.is_some(),
                        start: start.unwrap_or(1),
                        items: Vec::new(),
                    });
                }
                Tag::Item => {}
                Tag::BlockQuote { .. } => {
                    st.flush_runs();
                    st.quote_depth += 1;
                }
                Tag::CodeBlock(kind) => {
                    st.flush_runs();
                    let language = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    st.code = Some((language, String::new()));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Heading(_) => {
                    let level = st.heading.take().unwrap_or(1);
                    let runs = std::mem::take(&mut st.runs);
                    if !runs.is_empty() {
                        st.blocks.push(Block::Heading { level, runs });
                    }
                }
                TagEnd::Paragraph => {
                    if st.quote_depth > 0 {
                        let runs = std::mem::take(&mut st.runs);
                        if !runs.is_empty() {
                            st.quote_lines.push(runs);
                        }
                    } else if !st.lists.is_empty() {
                        // Loose list item with multiple paragraphs: keep
                        // accumulating, separated by a break.
                        if !st.runs.is_empty() {
                            st.runs.push(InlineRun::line_break());
                        }
                    } else {
                        let runs = std::mem::take(&mut st.runs);
                        if !runs.is_empty() {
                            st.blocks.push(Block::Paragraph { runs });
                        }
                    }
                }
                TagEnd::Strong => st.bold = st.bold.saturating_sub(1),
                TagEnd::Emphasis => st.italic = st.italic.saturating_sub(1),
                TagEnd::Link => {
                    st.links.pop();
                }
                TagEnd::Item => {
                    let mut runs = std::mem::take(&mut st.runs);
                    while runs.last().is_some_and(InlineRun::is_line_break) {
                        runs.pop();
                    }
                    if !runs.is_empty() {
                        if let Some(list) = st.lists.last_mut() {
                            list.items.push(runs);
                        } else {
                            st.blocks.push(Block::Paragraph { runs });
                        }
                    }
                }
                TagEnd::List(_) => {
                    if let Some(done) = st.lists.pop() {
                        if let Some(parent) = st.lists.last_mut() {
                            parent.items.extend(done.items);
                        } else if !done.items.is_empty() {
                            st.blocks.push(Block::List {
                                ordered: done.ordered,
                                start: done.start,
                                items: done.items,
                            });
                        }
                    }
                }
                TagEnd::BlockQuote { .. } => {
                    if !st.runs.is_empty() {
                        let runs = std::mem::take(&mut st.runs);
                        st.quote_lines.push(runs);
                    }
                    st.quote_depth = st.quote_depth.saturating_sub(1);
                    if st.quote_depth == 0 {
                        let lines = std::mem::take(&mut st.quote_lines);
                        if !lines.is_empty() {
                            st.blocks.push(Block::BlockQuote { lines });
                        }
                    }
                }
                TagEnd::CodeBlock => {
                    if let Some((language, mut text)) = st.code.take() {
                        if text.ends_with('\n') {
                            text.pop();
                        }
                        st.blocks.push(Block::CodeBlock { language, text });
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some((_, buf)) = st.code.as_mut() {
                    buf.push_str(&text);
                } else {
                    let run = st.style_run(text.to_string());
                    st.runs.push(run);
                }
            }
            Event::Code(code) => {
                st.runs.push(InlineRun {
                    text: code.to_string(),
                    bold: st.bold > 0,
                    italic: st.italic > 0,
                    code: true,
                    link: st.links.last().cloned(),
                });
            }
            Event::SoftBreak | Event::HardBreak => {
                st.runs.push(InlineRun::line_break());
            }
            // Rules, tables, raw HTML and other unmapped constructs fall
            // back to whatever Text events they contain.
            _ => {}
        }
    }

    // Tolerate truncated input: close whatever was left open.
    if let Some((language, mut text)) = st.code.take() {
        if text.ends_with('\n') {
            text.pop();
        }
        st.blocks.push(Block::CodeBlock { language, text });
    }
    st.flush_runs();

    Document { blocks: st.blocks }
}
