//! Core Editor struct and initialization.

use super::{Mode, TextBuffer};

/// The main editor state: the document and the input mode around it.
///
/// Only the input state machine in `keybindings` mutates an `Editor`.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub buffer: TextBuffer,
    pub mode: Mode,
    /// Destination typed in the save prompt, empty outside of it
    pub save_path: String,
}

impl Editor {
    /// Create a new editor instance over `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: TextBuffer::new(text),
            mode: Mode::Editing,
            save_path: String::new(),
        }
    }

    /// Switch modes. Leaving the save prompt drops the typed path.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        log::info!("mode {} -> {}", self.mode.name(), mode.name());
        if self.mode == Mode::SavingPrompt {
            self.save_path.clear();
        }
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_starts_editing() {
        let editor = Editor::new("abc");
        assert_eq!(editor.mode, Mode::Editing);
        assert_eq!(editor.buffer.text(), "abc");
        assert!(editor.save_path.is_empty());
    }

    #[test]
    fn test_leaving_save_prompt_clears_path() {
        let mut editor = Editor::new("abc");
        editor.set_mode(Mode::SavingPrompt);
        editor.save_path.push_str("out.txt");

        editor.set_mode(Mode::Editing);
        assert!(editor.save_path.is_empty());
    }
}
