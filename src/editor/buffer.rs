//! The text buffer model: document, dual-coordinate cursor and scroll offset.
//!
//! The document is kept as one `String`. Logical lines are never stored; they
//! are derived by splitting on `\n` whenever they are needed, so the two can
//! never disagree.
//!
//! The cursor is tracked twice: as `(row, col)` for rendering and vertical
//! movement, and as an absolute character `offset` for splicing. Every
//! mutation finishes with exactly one of [`TextBuffer::sync_offset_from_row_col`]
//! or [`TextBuffer::sync_row_col_from_offset`], which are the only places the
//! two representations are reconciled.
//!
//! All columns and offsets count `char`s, never bytes.

/// Cursor position in both coordinate systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    /// Absolute character offset into the document
    pub offset: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    pub(super) text: String,
    pub(super) cursor: Cursor,
    /// Index of the first logical line shown in the viewport
    pub(super) scroll: usize,
}

impl TextBuffer {
    /// Create a buffer holding `text` with the cursor at the very start.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: Cursor::default(),
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Logical lines. Always at least one, joining them with `\n` gives back
    /// the document.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }

    /// Length of a logical line in characters, 0 past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.text
            .split('\n')
            .nth(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Place the cursor at `(row, col)`, clamped to the document.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.line_count() - 1);
        self.cursor.row = row;
        self.cursor.col = col.min(self.line_len(row));
        self.sync_offset_from_row_col();
    }

    /// Recompute `offset` from `(row, col)`.
    pub fn sync_offset_from_row_col(&mut self) {
        let before: usize = self
            .text
            .split('\n')
            .take(self.cursor.row)
            .map(|line| line.chars().count() + 1)
            .sum();
        self.cursor.offset = before + self.cursor.col;
    }

    /// Recompute `(row, col)` from `offset`.
    pub fn sync_row_col_from_offset(&mut self) {
        let mut row = 0;
        let mut col = 0;
        for ch in self.text.chars().take(self.cursor.offset) {
            match ch {
                '\n' => {
                    row += 1;
                    col = 0;
                }
                _ => col += 1,
            }
        }
        self.cursor.row = row;
        self.cursor.col = col;
    }

    /// Adjust the scroll offset so the cursor row is one of the `text_rows`
    /// visible logical lines.
    pub fn scroll_into_view(&mut self, text_rows: usize) {
        let text_rows = text_rows.max(1);
        if self.cursor.row < self.scroll {
            self.scroll = self.cursor.row;
        } else if self.cursor.row >= self.scroll + text_rows {
            self.scroll = self.cursor.row + 1 - text_rows;
        }
    }

    /// Scroll down by one logical line, never past the cursor row.
    pub fn scroll_line_down(&mut self) {
        if self.scroll < self.cursor.row {
            self.scroll += 1;
        }
    }

    pub(super) fn char_index_to_byte_index(s: &str, char_idx: usize) -> usize {
        s.char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(s.len())
    }
}
