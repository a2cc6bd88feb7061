//! Frame compositor.
//!
//! Turns editor state into a full screen of physical rows: visible logical
//! lines through the line renderer, `~` filler below the document, and a
//! mode-dependent footer on the last row.

use crate::editor::{Editor, LineLayout, Mode, Settings};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
    Frame,
};

const PREVIEW_BANNER: &str = " PREVIEW  ctrl-p/esc: back to editing";
const EXIT_PROMPT: &str = " Do you want to save changes? (y/n)";

/// A complete screen, top to bottom.
#[derive(Debug, Clone, Default)]
pub struct ComposedFrame {
    pub rows: Vec<Line<'static>>,
    /// Where the terminal cursor goes; `None` hides it
    pub cursor: Option<Position>,
}

/// Lay out the whole viewport for the current editor state.
pub fn compose(editor: &Editor, settings: &Settings, size: Size) -> ComposedFrame {
    let height = size.height as usize;
    let cols = size.width as usize;
    if height == 0 {
        return ComposedFrame::default();
    }
    let text_rows = height - 1;

    let buffer = &editor.buffer;
    let lines = buffer.lines();
    let cursor = buffer.cursor();
    let scroll = buffer.scroll().min(lines.len() - 1);
    let layout = line_layout(editor, settings, size);

    let mut rows: Vec<Line<'static>> = Vec::with_capacity(height);
    let mut cursor_position = None;

    for (row, text) in lines.iter().enumerate().skip(scroll) {
        if rows.len() >= text_rows {
            break;
        }

        let cursor_col = (row == cursor.row).then_some(cursor.col);
        let rendered = layout.render(text, row + 1, cursor_col);

        if let Some((line_row, col)) = rendered.cursor {
            let y = rows.len() + line_row;
            if y < text_rows {
                cursor_position = Some(Position::new(col as u16, y as u16));
            }
        }

        let room = text_rows - rows.len();
        rows.extend(rendered.rows.into_iter().take(room));
    }

    while rows.len() < text_rows {
        rows.push(padded(
            vec![Span::styled("~", settings.theme.empty_line)],
            cols,
            settings.theme.empty_line,
        ));
    }

    rows.push(footer(editor, settings, cols));

    ComposedFrame {
        rows,
        cursor: match editor.mode {
            Mode::Editing | Mode::ExitConfirmation => cursor_position,
            Mode::SavingPrompt | Mode::PreviewRendering => None,
        },
    }
}

/// Keep the cursor's physical row above the footer.
///
/// The buffer scrolls by logical lines. Wrapped lines above the cursor can
/// still push it off screen, so scroll on one line at a time until it fits.
pub fn scroll_into_view(editor: &mut Editor, settings: &Settings, size: Size) {
    let text_rows = (size.height as usize).saturating_sub(1).max(1);
    editor.buffer.scroll_into_view(text_rows);

    while editor.buffer.scroll() < editor.buffer.cursor().row
        && cursor_screen_row(editor, settings, size) >= text_rows
    {
        editor.buffer.scroll_line_down();
    }
}

/// Row of the cursor counted from the top of the text area.
fn cursor_screen_row(editor: &Editor, settings: &Settings, size: Size) -> usize {
    let layout = line_layout(editor, settings, size);
    let buffer = &editor.buffer;
    let cursor = buffer.cursor();
    let above: usize = buffer.lines()[buffer.scroll()..cursor.row]
        .iter()
        .map(|text| layout.row_count(text, None))
        .sum();
    match editor.mode {
        Mode::PreviewRendering => above,
        _ => above + cursor.col / layout.usable_width(),
    }
}

/// Gutter padding is the digit count of the largest visible line number.
fn line_layout<'a>(editor: &Editor, settings: &'a Settings, size: Size) -> LineLayout<'a> {
    let text_rows = (size.height as usize).saturating_sub(1);
    let line_count = editor.buffer.line_count();
    let scroll = editor.buffer.scroll().min(line_count - 1);
    LineLayout {
        cols: size.width as usize,
        padding: digits(line_count.min(scroll + text_rows.max(1))),
        mode: editor.mode,
        settings,
    }
}

fn footer(editor: &Editor, settings: &Settings, cols: usize) -> Line<'static> {
    let theme = &settings.theme;
    match editor.mode {
        Mode::SavingPrompt => padded(
            vec![
                Span::styled(format!(" Save as: {}", editor.save_path), theme.selected_text),
                Span::styled(" ", theme.selected_text.add_modifier(Modifier::REVERSED)),
            ],
            cols,
            theme.selected_text,
        ),
        Mode::PreviewRendering => padded(
            vec![Span::styled(
                PREVIEW_BANNER,
                theme.status_line.add_modifier(Modifier::BOLD),
            )],
            cols,
            theme.status_line,
        ),
        Mode::ExitConfirmation => padded(
            vec![Span::styled(EXIT_PROMPT, theme.selected_text)],
            cols,
            theme.selected_text,
        ),
        Mode::Editing => {
            let cursor = editor.buffer.cursor();
            let left = format!(" {} lines", editor.buffer.line_count());
            let right = format!("{}:{} ", cursor.row + 1, cursor.col + 1);
            let gap = cols
                .saturating_sub(left.chars().count() + right.chars().count())
                .max(1);
            Line::from(vec![Span::styled(
                format!("{}{}{}", left, " ".repeat(gap), right),
                theme.status_line,
            )])
        }
    }
}

/// Pad `spans` with `style`d spaces out to `cols`.
fn padded(mut spans: Vec<Span<'static>>, cols: usize, style: Style) -> Line<'static> {
    let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let fill = cols.saturating_sub(used);
    if fill > 0 {
        spans.push(Span::styled(" ".repeat(fill), style));
    }
    Line::from(spans)
}

fn digits(n: usize) -> usize {
    n.max(1).to_string().len()
}

/// Copies composed rows into the ratatui buffer.
struct FrameWidget<'a> {
    frame: &'a ComposedFrame,
}

impl Widget for FrameWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, row) in self.frame.rows.iter().take(area.height as usize).enumerate() {
            buf.set_line(area.x, area.y + i as u16, row, area.width);
        }
    }
}

pub fn draw(frame: &mut Frame, composed: &ComposedFrame) {
    frame.render_widget(FrameWidget { frame: composed }, frame.area());
    if let Some(position) = composed.cursor {
        frame.set_cursor_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::text_widget::row_text;

    fn size(width: u16, height: u16) -> Size {
        Size { width, height }
    }

    fn texts(frame: &ComposedFrame) -> Vec<String> {
        frame.rows.iter().map(row_text).collect()
    }

    #[test]
    fn test_empty_document_frame() {
        let editor = Editor::new("");
        let frame = compose(&editor, &Settings::default(), size(12, 4));

        assert_eq!(
            texts(&frame),
            vec![
                "1           ".to_string(),
                "~           ".to_string(),
                "~           ".to_string(),
                " 1 lines 1:1 ".to_string(),
            ]
        );
        assert_eq!(frame.cursor, Some(Position::new(3, 0)));
    }

    #[test]
    fn test_status_line_is_right_aligned() {
        let mut editor = Editor::new("one\ntwo");
        editor.buffer.set_cursor(1, 2);
        let frame = compose(&editor, &Settings::default(), size(20, 3));

        assert_eq!(row_text(&frame.rows[2]), " 2 lines        2:3 ");
    }

    #[test]
    fn test_every_row_fills_the_width() {
        let editor = Editor::new("short\n".repeat(3));
        let frame = compose(&editor, &Settings::default(), size(30, 8));

        assert_eq!(frame.rows.len(), 8);
        for row in &frame.rows {
            assert_eq!(row.width(), 30);
        }
    }

    #[test]
    fn test_cursor_below_wrapped_line() {
        let mut editor = Editor::new(format!("{}\nsecond", "w".repeat(15)));
        editor.buffer.set_cursor(1, 4);
        // usable = 10 - 1 - 2 = 7, first line takes 3 rows
        let frame = compose(&editor, &Settings::default(), size(10, 6));

        assert_eq!(frame.cursor, Some(Position::new(7, 3)));
        assert!(row_text(&frame.rows[3]).starts_with("2  second"));
    }

    #[test]
    fn test_wrapped_line_truncated_at_footer() {
        let mut editor = Editor::new("x".repeat(100));
        editor.buffer.set_cursor(0, 90);
        let frame = compose(&editor, &Settings::default(), size(10, 4));

        assert_eq!(frame.rows.len(), 4);
        // cursor row was cut off
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn test_scroll_offset_picks_first_line() {
        let text = (1..=30).map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n");
        let mut editor = Editor::new(text);
        for _ in 0..12 {
            editor.buffer.move_down(5);
        }
        let frame = compose(&editor, &Settings::default(), size(20, 6));

        assert_eq!(editor.buffer.scroll(), 8);
        assert!(row_text(&frame.rows[0]).starts_with(" 9  line 9"));
        assert!(row_text(&frame.rows[4]).starts_with("13  line 13"));
        assert_eq!(frame.cursor, Some(Position::new(4, 4)));
    }

    #[test]
    fn test_save_prompt_footer() {
        let mut editor = Editor::new("abc");
        editor.set_mode(Mode::SavingPrompt);
        editor.save_path.push_str("out.txt");
        let frame = compose(&editor, &Settings::default(), size(30, 3));

        let footer = &frame.rows[2];
        assert!(row_text(footer).starts_with(" Save as: out.txt "));
        assert!(footer.spans[1].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn test_preview_footer_and_transform() {
        let mut editor = Editor::new("- [ ] task");
        editor.set_mode(Mode::PreviewRendering);
        let frame = compose(&editor, &Settings::default(), size(40, 3));

        assert!(row_text(&frame.rows[0]).starts_with("1  ◯ task"));
        assert!(row_text(&frame.rows[2]).starts_with(PREVIEW_BANNER));
        assert_eq!(frame.cursor, None);
    }

    #[test]
    fn test_exit_confirmation_footer() {
        let mut editor = Editor::new("abc");
        editor.buffer.set_cursor(0, 3);
        editor.set_mode(Mode::ExitConfirmation);
        let frame = compose(&editor, &Settings::default(), size(40, 3));

        assert!(row_text(&frame.rows[2]).starts_with(EXIT_PROMPT));
        // The cursor stays where the user left it while the question is asked
        assert_eq!(frame.cursor, Some(Position::new(6, 0)));
    }

    #[test]
    fn test_cursor_stays_visible_below_wrapped_lines() {
        let mut editor = Editor::new(vec!["w".repeat(15); 6].join("\n"));
        let settings = Settings::default();
        let viewport = size(10, 6);
        // 5 text rows, usable = 10 - 1 - 2 = 7, every line takes 3 rows
        for _ in 0..3 {
            editor.buffer.move_down(5);
        }
        assert_eq!(editor.buffer.scroll(), 0);

        scroll_into_view(&mut editor, &settings, viewport);
        let frame = compose(&editor, &settings, viewport);

        assert_eq!(editor.buffer.scroll(), 2);
        assert!(row_text(&frame.rows[3]).starts_with("4  wwwwwww"));
        assert_eq!(frame.cursor, Some(Position::new(3, 3)));
    }

    #[test]
    fn test_scroll_into_view_leaves_fitting_frames_alone() {
        let mut editor = Editor::new("one\ntwo\nthree");
        editor.buffer.set_cursor(2, 0);

        scroll_into_view(&mut editor, &Settings::default(), size(20, 5));

        assert_eq!(editor.buffer.scroll(), 0);
    }

    #[test]
    fn test_zero_height_viewport() {
        let editor = Editor::new("abc");
        let frame = compose(&editor, &Settings::default(), size(40, 0));
        assert!(frame.rows.is_empty());
    }
}
