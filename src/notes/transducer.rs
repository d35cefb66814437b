//! Input Transducer
//!
//! Computes the next document from the current one and a single key. Keys
//! the grammar rejects produce `None` and leave the document as it was.

use super::buffer::Document;
use super::grammar::{self, SegmentState};
use super::key::{Key, Symbol};
use super::normalize::normalize;

/// Applies an editing key. History and export keys are not edits and
/// always yield `None`.
pub fn apply(doc: &Document, key: Key) -> Option<Document> {
    match key {
        Key::Symbol(symbol) => type_symbol(doc, symbol),
        Key::Backspace => backspace(doc),
        Key::Clear => clear(doc),
        Key::Ok => confirm(doc),
        Key::Enter => enter(doc),
        Key::Undo | Key::Redo | Key::Copy | Key::Export => None,
    }
}

fn type_symbol(doc: &Document, symbol: Symbol) -> Option<Document> {
    let edit = grammar::accept(doc.state(), symbol)?;
    let mut text = edit.apply(doc.as_str());

    let line_start = text.rfind('\n').map_or(0, |i| i + 1);
    if let Some(fill) = grammar::auto_format(grammar::classify(&text[line_start..])) {
        text.push_str(fill);
    }

    Some(Document::from_trusted(text))
}

/// Never reaches past the `(` opening the current data line
fn backspace(doc: &Document) -> Option<Document> {
    if doc.data_line() == "(" {
        return None;
    }
    let mut text = doc.as_str().to_string();
    text.pop();
    Some(Document::from_trusted(text))
}

fn clear(doc: &Document) -> Option<Document> {
    if doc.data_line() == "(" {
        return None;
    }
    Some(Document::from_trusted(format!("{}(", doc.head())))
}

fn confirm(doc: &Document) -> Option<Document> {
    let edit = grammar::confirm(doc.state())?;
    Some(Document::from_trusted(edit.apply(doc.as_str())))
}

fn enter(doc: &Document) -> Option<Document> {
    if doc.data_line() == "(" {
        return remove_empty_entry(doc);
    }

    let state = doc.state();
    if !grammar::can_finish(state) {
        return None;
    }
    debug_assert_ne!(state, SegmentState::Invalid);

    let next = doc.entry_number() + 1;
    Some(Document::from_trusted(format!("{}\n\n{next})\n(", normalize(doc))))
}

/// Drops the blank separator, header and data line of an untouched entry
fn remove_empty_entry(doc: &Document) -> Option<Document> {
    let number = doc.entry_number();
    if number <= 1 {
        return None;
    }
    let suffix = format!("\n\n{number})\n(");
    let text = doc.as_str().strip_suffix(suffix.as_str())?;
    Some(Document::from_trusted(text.to_string()))
}
