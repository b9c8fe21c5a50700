//! Style constants and OSC 8 hyperlink helper for terminal rendering.

use ratatui::style::{Color, Modifier, Style};

/// Level-1 headings - cyan, bold, underlined.
pub const STYLE_H1: Style = Style::new()
    .fg(Color::Cyan)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::UNDERLINED);

/// Level-2 headings - cyan and bold.
pub const STYLE_H2: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Level-3 headings - cyan.
pub const STYLE_H3: Style = Style::new().fg(Color::Cyan);

/// Code blocks - gray/dim, whitespace preserved by the renderer.
pub const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);

/// Inline code - cyan.
pub const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);

/// Links - blue and underlined.
pub const STYLE_LINK: Style = Style::new()
    .fg(Color::Blue)
    .add_modifier(Modifier::UNDERLINED);

/// Blockquote text - dim italic.
pub const STYLE_QUOTE: Style = Style::new()
    .fg(Color::Gray)
    .add_modifier(Modifier::ITALIC);

/// Wrap text in an OSC 8 hyperlink escape sequence.
///
/// Format: `ESC ] 8 ; ; url BEL text ESC ] 8 ; ; BEL`. Supporting terminals
/// make the text clickable and open the URL externally; others print the
/// text unchanged.
pub fn wrap_osc8_hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x07{text}\x1b]8;;\x07")
}
