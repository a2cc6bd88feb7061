//! scratchpad - a small full-screen terminal text editor.
//!
//! The crate is split the way the session flows:
//! - [`editor`] owns the document, cursor, mode and settings
//! - [`ui`] composes a frame of physical rows from editor state
//! - [`keybindings`] is the input state machine
//! - [`session`] ties the terminal, the compositor and the state machine together

pub mod editor;
pub mod error;
pub mod keybindings;
pub mod logging;
pub mod session;
pub mod ui;

pub use error::{Error, Result};
