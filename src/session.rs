//! Session loop and terminal ownership.
//!
//! One pass of the loop: query the viewport, compose a frame, draw it, block
//! on the next key, feed it to the state machine. Nothing runs in between, so
//! every frame reflects exactly the state left by the previous key.

use crate::editor::{Editor, Exit, Key, Settings, Transition};
use crate::error::Result;
use crate::{keybindings, ui};
use ratatui::backend::Backend;
use ratatui::crossterm::event::{self, Event};
use ratatui::{DefaultTerminal, Terminal};
use std::io;

/// Where keys come from.
pub trait KeySource {
    /// Block until the next input. `Ok(None)` means nothing for the state
    /// machine (resize, unbound key) but the screen should be redrawn.
    fn next_key(&mut self) -> io::Result<Option<Key>>;
}

/// Keys read from the real terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Option<Key>> {
        match event::read()? {
            Event::Key(event) => Ok(Key::from_event(event)),
            _ => Ok(None),
        }
    }
}

/// Raw mode and the alternate screen for as long as this value lives.
///
/// Dropping it restores the terminal, so every way out of the session
/// (return, `?`, panic through ratatui's hook) leaves the shell usable.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init()?;
        log::debug!("entered raw mode");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        match ratatui::try_restore() {
            Ok(()) => log::debug!("restored terminal"),
            Err(e) => log::error!("Failed to restore terminal: {}", e),
        }
    }
}

/// Run the editor until the state machine asks to exit.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    editor: &mut Editor,
    settings: &Settings,
    keys: &mut impl KeySource,
) -> Result<Exit> {
    loop {
        let size = terminal.size()?;
        let text_rows = (size.height as usize).saturating_sub(1);
        // The viewport may have shrunk since the last key
        ui::scroll_into_view(editor, settings, size);

        let composed = ui::compose(editor, settings, size);
        terminal.draw(|frame| ui::draw(frame, &composed))?;

        let Some(key) = keys.next_key()? else {
            continue;
        };

        match keybindings::handle_input(editor, key, text_rows)? {
            Transition::Continue => {}
            Transition::Exit(exit) => {
                log::info!("exit: {:?}", exit);
                return Ok(exit);
            }
        }
    }
}
