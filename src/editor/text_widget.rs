//! Line renderer: lays out one logical line as wrapped physical rows.
//!
//! Each physical row is `<gutter><2 spaces><text><fill>`. The gutter holds
//! the right-aligned line number on the first row and the wrap glyph on
//! continuation rows. Text is cut into chunks of `usable` characters where
//! `usable = cols - padding - 2`.
//!
//! Widths are counted in visible characters. Styles live in the spans and
//! never take up columns, so preview styling does not shift the layout.

use super::preview;
use super::settings::Settings;
use super::types::Mode;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Columns between the gutter and the text
const GUTTER_GAP: usize = 2;

/// Everything about the viewport a line needs to lay itself out.
#[derive(Debug, Clone, Copy)]
pub struct LineLayout<'a> {
    /// Viewport width
    pub cols: usize,
    /// Digits of the largest visible line number
    pub padding: usize,
    pub mode: Mode,
    pub settings: &'a Settings,
}

/// One logical line after layout.
#[derive(Debug, Clone, Default)]
pub struct RenderedLine {
    pub rows: Vec<Line<'static>>,
    /// `(row within this line, screen column)` of the cursor, 0-based
    pub cursor: Option<(usize, usize)>,
}

impl LineLayout<'_> {
    /// Width available for text on every physical row. Never 0, so a tiny
    /// viewport still makes progress.
    pub fn usable_width(&self) -> usize {
        self.cols.saturating_sub(self.padding + GUTTER_GAP).max(1)
    }

    /// Screen column of the first text character.
    pub fn text_start(&self) -> usize {
        self.padding + GUTTER_GAP
    }

    /// Physical rows `render` emits for `text`, without building them.
    pub fn row_count(&self, text: &str, cursor_col: Option<usize>) -> usize {
        let width: usize = match self.mode {
            Mode::PreviewRendering => preview::transform(text, Style::default(), &self.settings.theme)
                .iter()
                .map(|span| span.content.chars().count())
                .sum(),
            _ => text.chars().count(),
        };
        let usable = self.usable_width();
        let rows = width.div_ceil(usable).max(1);
        match (self.mode, cursor_col) {
            (Mode::PreviewRendering, _) | (_, None) => rows,
            (_, Some(col)) => rows.max(col / usable + 1),
        }
    }

    /// Lay out `text` (logical line number `number`, 1-based).
    ///
    /// `cursor_col` is the cursor column when the cursor is on this line.
    /// No cursor is reported in preview.
    pub fn render(&self, text: &str, number: usize, cursor_col: Option<usize>) -> RenderedLine {
        let theme = &self.settings.theme;
        let highlight = cursor_col.is_some()
            && matches!(self.mode, Mode::Editing | Mode::ExitConfirmation);
        let (number_style, text_style) = match highlight {
            true => (theme.selected_number, theme.selected_text),
            false => (theme.line_number, theme.line_text),
        };

        let cells: Vec<(char, Style)> = match self.mode {
            Mode::PreviewRendering => preview::transform(text, text_style, theme)
                .iter()
                .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
                .collect(),
            _ => text.chars().map(|c| (c, text_style)).collect(),
        };

        let usable = self.usable_width();
        let mut chunks: Vec<&[(char, Style)]> = match cells.is_empty() {
            true => vec![cells.as_slice()],
            false => cells.chunks(usable).collect(),
        };

        let cursor = match (self.mode, cursor_col) {
            (Mode::PreviewRendering, _) | (_, None) => None,
            (_, Some(col)) => {
                let row = col / usable;
                // Cursor past the last full chunk needs a row of its own
                if row == chunks.len() {
                    chunks.push(&[]);
                }
                Some((row, self.text_start() + col % usable))
            }
        };

        let glyph = self.settings.wrap_glyph.glyph().to_string();
        let rows = chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                let gutter = match i {
                    0 => format!("{:>width$}", number, width = self.padding),
                    _ => format!("{:>width$}", glyph, width = self.padding),
                };
                let mut spans = vec![
                    Span::styled(gutter, number_style),
                    Span::styled(" ".repeat(GUTTER_GAP), text_style),
                ];
                spans.extend(group_spans(chunk));
                let fill = usable.saturating_sub(chunk.len());
                if fill > 0 {
                    spans.push(Span::styled(" ".repeat(fill), text_style));
                }
                Line::from(spans)
            })
            .collect();

        RenderedLine { rows, cursor }
    }
}

/// Merge runs of equally styled characters into spans.
fn group_spans(cells: &[(char, Style)]) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut current = String::new();
    let mut current_style = None;

    for &(c, style) in cells {
        if current_style != Some(style) {
            if let Some(prev) = current_style {
                spans.push(Span::styled(std::mem::take(&mut current), prev));
            }
            current_style = Some(style);
        }
        current.push(c);
    }
    if let Some(style) = current_style {
        spans.push(Span::styled(current, style));
    }
    spans
}

/// Visible characters of a row (gutter included)
pub fn row_text(row: &Line<'_>) -> String {
    row.spans.iter().map(|span| span.content.as_ref()).collect()
}
