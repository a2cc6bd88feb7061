//! Input state machine.
//!
//! Every key is dispatched on `(mode, key)`. Only `Editing` reaches the text
//! buffer; the other modes either collect a save path, wait for a y/n answer
//! or ignore input altogether. Keys without an entry are dropped.

use crate::editor::file_ops;
use crate::editor::{Direction, Editor, Exit, Key, Mode, Transition};
use crate::error::Result;
use crate::logging;

/// Handle one key. `text_rows` is the number of rows available for text,
/// used to keep the cursor line scrolled into view.
///
/// Errors only come from writing the document in the save prompt.
pub fn handle_input(editor: &mut Editor, key: Key, text_rows: usize) -> Result<Transition> {
    if logging::log_keys() {
        log::debug!("key {:?} in {}", key, editor.mode.name());
    }

    match (editor.mode, key) {
        // ==================== Editing ====================
        (Mode::Editing, Key::Escape) => match editor.buffer.is_empty() {
            true => return Ok(Transition::Exit(Exit::Discarded)),
            false => editor.set_mode(Mode::ExitConfirmation),
        },
        (Mode::Editing, Key::Ctrl('s')) => editor.set_mode(Mode::SavingPrompt),
        (Mode::Editing, Key::Ctrl('p')) => editor.set_mode(Mode::PreviewRendering),
        (Mode::Editing, Key::Char(c)) => editor.buffer.insert_char(c),
        (Mode::Editing, Key::Enter) => editor.buffer.insert_newline(),
        (Mode::Editing, Key::Tab) => editor.buffer.insert_tab(),
        (Mode::Editing, Key::Backspace) => {
            editor.buffer.backspace();
        }
        (Mode::Editing, Key::Arrow(direction)) => match direction {
            Direction::Up => editor.buffer.move_up(text_rows),
            Direction::Down => editor.buffer.move_down(text_rows),
            Direction::Left => editor.buffer.move_left(),
            Direction::Right => editor.buffer.move_right(),
        },

        // ==================== Exit confirmation ====================
        (Mode::ExitConfirmation, Key::Char('y')) => editor.set_mode(Mode::SavingPrompt),
        (Mode::ExitConfirmation, Key::Char('n')) => {
            return Ok(Transition::Exit(Exit::Discarded));
        }
        (Mode::ExitConfirmation, _) => editor.set_mode(Mode::Editing),

        // ==================== Save prompt ====================
        (Mode::SavingPrompt, Key::Escape) => editor.set_mode(Mode::Editing),
        (Mode::SavingPrompt, Key::Enter) => return save(editor),
        // Keep the typed path shell-safe
        (Mode::SavingPrompt, Key::Char(' ')) => editor.save_path.push_str("\\ "),
        (Mode::SavingPrompt, Key::Char(c)) => editor.save_path.push(c),
        (Mode::SavingPrompt, Key::Backspace) => {
            editor.save_path.pop();
        }

        // ==================== Preview ====================
        (Mode::PreviewRendering, Key::Ctrl('p') | Key::Escape) => editor.set_mode(Mode::Editing),

        _ => {}
    }

    if editor.mode == Mode::Editing {
        editor.buffer.scroll_into_view(text_rows);
    }
    Ok(Transition::Continue)
}

/// Write the document to the typed path. An empty path keeps the prompt open.
fn save(editor: &mut Editor) -> Result<Transition> {
    if editor.save_path.is_empty() {
        return Ok(Transition::Continue);
    }

    let path = file_ops::expand_path(&editor.save_path);
    if let Err(e) = file_ops::write_document(&path, editor.buffer.text()) {
        log::error!("{}", e);
        return Err(e);
    }

    log::info!(
        "Saved {} bytes to {}",
        editor.buffer.text().len(),
        path.display()
    );
    Ok(Transition::Exit(Exit::Saved(path)))
}
