//! Cursor movement operations for the text buffer.

use super::buffer::TextBuffer;
use crate::logging;

impl TextBuffer {
    // ==================== Vertical ====================

    /// Move one logical line up, scrolling by at most one line.
    pub fn move_up(&mut self, text_rows: usize) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.clamp_col_to_line();
            self.sync_offset_from_row_col();
        }
        self.scroll_into_view(text_rows);
        self.log_move("up");
    }

    /// Move one logical line down, scrolling by at most one line.
    pub fn move_down(&mut self, text_rows: usize) {
        if self.cursor.row + 1 < self.line_count() {
            self.cursor.row += 1;
            self.clamp_col_to_line();
            self.sync_offset_from_row_col();
        }
        self.scroll_into_view(text_rows);
        self.log_move("down");
    }

    /// When the destination line is shorter than the column, land on its last
    /// character (or column 0 for an empty line).
    fn clamp_col_to_line(&mut self) {
        let len = self.line_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len.saturating_sub(1);
        }
    }

    // ==================== Horizontal ====================

    /// Move one character left. Stops at column 0.
    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            self.sync_offset_from_row_col();
        }
        self.log_move("left");
    }

    /// Move one character right. Stops at the end of the line.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.row) {
            self.cursor.col += 1;
            self.sync_offset_from_row_col();
        }
        self.log_move("right");
    }

    fn log_move(&self, direction: &str) {
        if logging::log_movement() {
            log::debug!(
                "move_{}: cursor={:?}, scroll={}",
                direction,
                self.cursor,
                self.scroll
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::editor::buffer::{Cursor, TextBuffer};

    #[test]
    fn test_move_down_clamps_to_last_char() {
        let mut buffer = TextBuffer::new("hello world\nhi\n");
        buffer.set_cursor(0, 8);

        buffer.move_down(10);
        assert_eq!(buffer.cursor(), Cursor { row: 1, col: 1, offset: 13 });

        buffer.move_down(10);
        assert_eq!(buffer.cursor(), Cursor { row: 2, col: 0, offset: 15 });

        // Last line, nothing below
        buffer.move_down(10);
        assert_eq!(buffer.cursor().row, 2);
    }

    #[test]
    fn test_move_up_keeps_column_that_fits() {
        let mut buffer = TextBuffer::new("abcdef\nxyz");
        buffer.set_cursor(1, 3);

        // Column equal to the target length is not clamped
        buffer.move_up(10);
        assert_eq!(buffer.cursor(), Cursor { row: 0, col: 3, offset: 3 });

        buffer.move_up(10);
        assert_eq!(buffer.cursor().row, 0);
    }

    #[test]
    fn test_end_of_line_clamps_when_moving_to_shorter_line() {
        let mut buffer = TextBuffer::new("xyz\nabcdef");
        buffer.set_cursor(1, 6);
        buffer.move_up(10);
        assert_eq!(buffer.cursor(), Cursor { row: 0, col: 2, offset: 2 });
    }

    #[test]
    fn test_horizontal_moves_stay_on_line() {
        let mut buffer = TextBuffer::new("ab\ncd");
        buffer.set_cursor(1, 0);

        buffer.move_left();
        assert_eq!(buffer.cursor(), Cursor { row: 1, col: 0, offset: 3 });

        buffer.move_right();
        buffer.move_right();
        buffer.move_right();
        assert_eq!(buffer.cursor(), Cursor { row: 1, col: 2, offset: 5 });
    }

    #[test]
    fn test_vertical_scrolls_one_line_at_a_time() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut buffer = TextBuffer::new(text);

        for _ in 0..5 {
            buffer.move_down(5);
        }
        assert_eq!(buffer.cursor().row, 5);
        assert_eq!(buffer.scroll(), 1);

        buffer.move_down(5);
        assert_eq!(buffer.scroll(), 2);

        for _ in 0..4 {
            buffer.move_up(5);
        }
        assert_eq!(buffer.cursor().row, 2);
        assert_eq!(buffer.scroll(), 2);

        buffer.move_up(5);
        assert_eq!(buffer.scroll(), 1);
    }
}
