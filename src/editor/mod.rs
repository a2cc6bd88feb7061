//! Editor module for scratchpad.
//!
//! This module contains the core Editor struct and all supporting types
//! organized into submodules for maintainability.

pub mod buffer;
pub mod buffer_ops;
pub mod core;
pub mod file_ops;
pub mod movement;
pub mod preview;
pub mod settings;
pub mod text_widget;
pub mod types;

// Re-export commonly used types
pub use buffer::{Cursor, TextBuffer};
pub use self::core::Editor;
pub use settings::{Settings, Theme, WrapGlyph};
pub use text_widget::{LineLayout, RenderedLine};
pub use types::{Direction, Exit, Key, Mode, Transition};
