//! Notes Engine
//!
//! Keystroke-driven editing of numbered timestamp entries: the document
//! buffer, its grammar, the undo history and export normalisation.

pub mod buffer;
pub mod export;
pub mod grammar;
pub mod history;
pub mod key;
pub mod normalize;
pub mod session;
pub mod transducer;

use thiserror::Error;

// Re-exports
pub use buffer::Document;
pub use export::ExportFormat;
pub use history::History;
pub use key::{Connector, Key, Symbol};
pub use normalize::normalize;
pub use session::{Session, Surface};

#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Malformed document at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type NotesResult<T> = Result<T, NotesError>;
