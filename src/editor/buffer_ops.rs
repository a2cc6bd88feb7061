//! Editing operations on the text buffer.
//!
//! Every operation splices the document at the cursor offset, moves the
//! offset, and then rebuilds `(row, col)` with `sync_row_col_from_offset`.
//! Operations that can be no-ops return `false` without touching anything.

use super::buffer::TextBuffer;

/// Soft tab width. Tab inserts spaces up to the next multiple of this and
/// backspace removes a full aligned run of them.
pub const TAB_WIDTH: usize = 4;

impl TextBuffer {
    /// Insert `c` at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let byte = Self::char_index_to_byte_index(&self.text, self.cursor.offset);
        self.text.insert(byte, c);
        self.cursor.offset += 1;
        self.sync_row_col_from_offset();
    }

    /// Split the current line at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert spaces up to the next multiple of [`TAB_WIDTH`].
    pub fn insert_tab(&mut self) {
        let spaces = TAB_WIDTH - self.cursor.col % TAB_WIDTH;
        let byte = Self::char_index_to_byte_index(&self.text, self.cursor.offset);
        self.text.insert_str(byte, &" ".repeat(spaces));
        self.cursor.offset += spaces;
        self.sync_row_col_from_offset();
    }

    /// Delete backwards from the cursor.
    ///
    /// A full soft tab (four spaces ending on a tab stop) goes in one step,
    /// otherwise one character. At column 0 this joins the line onto the
    /// previous one. Returns `false` at the start of the document.
    pub fn backspace(&mut self) -> bool {
        if self.cursor.offset == 0 {
            return false;
        }

        let count = match self.at_soft_tab_stop() {
            true => TAB_WIDTH,
            false => 1,
        };

        let start = Self::char_index_to_byte_index(&self.text, self.cursor.offset - count);
        let end = Self::char_index_to_byte_index(&self.text, self.cursor.offset);
        self.text.replace_range(start..end, "");
        self.cursor.offset -= count;
        self.sync_row_col_from_offset();
        true
    }

    /// True when the cursor sits on a positive tab stop preceded by a run of
    /// [`TAB_WIDTH`] spaces.
    fn at_soft_tab_stop(&self) -> bool {
        let col = self.cursor.col;
        if col == 0 || col % TAB_WIDTH != 0 {
            return false;
        }

        let lines = self.lines();
        lines[self.cursor.row]
            .chars()
            .skip(col - TAB_WIDTH)
            .take(TAB_WIDTH)
            .all(|c| c == ' ')
    }
}
