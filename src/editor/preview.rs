//! Markdown-like preview transform.
//!
//! Only a fixed set of line prefixes are understood: ATX headings, task list
//! items, bullets and blockquotes. The document itself is never modified; the
//! transform produces styled spans for display only.

use super::settings::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

const TASK_OPEN: &str = "- [ ] ";
const TASK_DONE: [&str; 2] = ["- [x] ", "- [X] "];
const BULLET: &str = "- ";
const QUOTE: &str = "> ";

/// Rewrite one logical line for preview.
pub fn transform(line: &str, base: Style, theme: &Theme) -> Vec<Span<'static>> {
    if let Some(title) = heading(line) {
        return vec![Span::styled(
            title.to_string(),
            base.add_modifier(Modifier::BOLD),
        )];
    }

    let indent_len = line.len() - line.trim_start().len();
    let (indent, mut rest) = line.split_at(indent_len);
    let mut spans = Vec::new();
    if !indent.is_empty() {
        spans.push(Span::styled(indent.to_string(), base));
    }

    if let Some(quoted) = rest.strip_prefix(QUOTE) {
        spans.push(Span::styled("▏", theme.quote));
        rest = quoted;
    }

    if let Some(item) = rest.strip_prefix(TASK_OPEN) {
        spans.push(Span::styled("◯ ", base));
        rest = item;
    } else if let Some(item) = TASK_DONE.iter().find_map(|m| rest.strip_prefix(m)) {
        spans.push(Span::styled("⬤ ", base));
        rest = item;
    } else if let Some(item) = rest.strip_prefix(BULLET) {
        spans.push(Span::styled("• ", base));
        rest = item;
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), base));
    }
    spans
}

/// `# Title` through `###### Title`, marker must start the line.
fn heading(line: &str) -> Option<&str> {
    let level = line.chars().take_while(|&c| c == '#').count();
    match (1..=6).contains(&level) {
        true => line[level..].strip_prefix(' '),
        false => None,
    }
}
