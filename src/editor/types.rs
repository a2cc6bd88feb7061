//! Type definitions for the editor.
//!
//! - Input mode (`Mode`)
//! - Logical key events (`Key`, `Direction`) decoded from terminal events
//! - Session outcomes (`Transition`, `Exit`)

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

/// The active input mode. Exactly one is active at a time and only
/// `Editing` lets keys reach the text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    /// Collecting a destination path for the save
    SavingPrompt,
    /// Read-only Markdown-like rendering
    PreviewRendering,
    /// "Do you want to save changes? (y/n)"
    ExitConfirmation,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Editing => "editing",
            Mode::SavingPrompt => "saving",
            Mode::PreviewRendering => "preview",
            Mode::ExitConfirmation => "exit-confirmation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A logical key event, independent of how the terminal encoded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character, including space
    Char(char),
    Backspace,
    Enter,
    Escape,
    Tab,
    Arrow(Direction),
    /// Control held with a letter, always lowercase (`Ctrl('s')`)
    Ctrl(char),
}

impl Key {
    /// Decode a crossterm key event.
    ///
    /// Returns `None` for release/repeat events and for keys the editor has no
    /// use for (function keys, Alt chords, ...).
    pub fn from_event(event: KeyEvent) -> Option<Key> {
        // Windows reports both press and release
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let plain = event.modifiers == KeyModifiers::NONE;

        match event.code {
            // Terminals send Ctrl-h as 0x08, which is backspace
            KeyCode::Char('h') if event.modifiers == KeyModifiers::CONTROL => Some(Key::Backspace),
            KeyCode::Char(c) if event.modifiers == KeyModifiers::CONTROL => {
                Some(Key::Ctrl(c.to_ascii_lowercase()))
            }
            KeyCode::Char(c)
                if (plain || event.modifiers == KeyModifiers::SHIFT) && !c.is_control() =>
            {
                Some(Key::Char(c))
            }
            KeyCode::Backspace if plain => Some(Key::Backspace),
            KeyCode::Enter if plain => Some(Key::Enter),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Tab if plain => Some(Key::Tab),
            KeyCode::Up => Some(Key::Arrow(Direction::Up)),
            KeyCode::Down => Some(Key::Arrow(Direction::Down)),
            KeyCode::Left => Some(Key::Arrow(Direction::Left)),
            KeyCode::Right => Some(Key::Arrow(Direction::Right)),
            _ => None,
        }
    }
}

/// What the session loop should do after a key has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Exit(Exit),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// The document was written to this path
    Saved(PathBuf),
    /// The user left without saving
    Discarded,
}
