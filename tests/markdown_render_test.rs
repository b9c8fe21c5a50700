//! Markdown construct mapping, from raw string to styled terminal lines.

use nexora::markdown::{self, terminal};
use ratatui::style::{Color, Modifier};

fn rendered_text(input: &str) -> String {
    terminal::render(&markdown::parse(input))
        .iter()
        .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
        .collect()
}

#[test]
fn full_construct_set_renders() {
    let input = "\
# Plan

A paragraph with **bold**, `code`, and [a link](https://example.com).

## Steps

1. First step
2. Second step

- bullet one
- bullet two

> Stay focused.

```sh
echo done
```";
    let text = rendered_text(input);

    assert!(text.contains("Plan"));
    assert!(text.contains("bold"));
    assert!(text.contains("code"));
    assert!(text.contains("a link"));
    assert!(text.contains("1. First step"));
    assert!(text.contains("2. Second step"));
    assert!(text.contains("• bullet one"));
    assert!(text.contains("▌ Stay focused."));
    assert!(text.contains("echo done"));
}

#[test]
fn heading_hello_is_styled_top_level() {
    let lines = terminal::render(&markdown::parse("# Hello"));
    assert_eq!(lines.len(), 1);
    let span = &lines[0].spans[0];
    assert_eq!(span.content, "Hello");
    assert_eq!(span.style.fg, Some(Color::Cyan));
    assert!(span.style.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn links_carry_osc8_escapes() {
    let lines = terminal::render(&markdown::parse("[docs](https://example.com/d)"));
    let content: String = lines
        .iter()
        .flat_map(|l| l.spans.iter().map(|s| s.content.as_ref()))
        .collect();
    assert!(content.contains("\x1b]8;;https://example.com/d\x07docs\x1b]8;;\x07"));
}

#[test]
fn unmapped_constructs_fall_back_to_text() {
    // Strikethrough and inline HTML are outside the mapped set; their text
    // content must still come through unstyled rather than vanish.
    let text = rendered_text("~~gone~~ still here");
    assert!(text.contains("gone"));
    assert!(text.contains("still here"));
}

#[test]
fn streaming_fragments_render_without_panic() {
    for fragment in ["# He", "**bol", "```rust\nfn ma", "1. ite"] {
        let _ = rendered_text(fragment);
    }
}
