//! Input Module
//!
//! Maps the terminal keyboard onto the notes keypad.

pub mod keymap;
pub mod modes;
pub mod text_buffer;

// Re-exports
pub use keymap::Action;
pub use modes::{InputMode, ModeState};
pub use text_buffer::{handle_text_key, TextBuffer};
