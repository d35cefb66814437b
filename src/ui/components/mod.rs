//! UI Components
//!
//! TUI widgets for the notes editor.

pub mod dialogs;
pub mod display;
pub mod export_dialog;
pub mod input_field;
pub mod keypad;
pub mod layout;
pub mod scroll;
pub mod statusline;

// Re-exports
pub use dialogs::{ConfirmDialog, HelpPopup};
pub use display::NoteDisplay;
pub use export_dialog::{ExportDialog, ExportDialogWidget};
pub use keypad::Keypad;
pub use scroll::ScrollState;
pub use statusline::{HelpBar, MessageType, StatusLine};
