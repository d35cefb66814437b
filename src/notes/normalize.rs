//! Export Normalization
//!
//! Turns the live document, which may end in an open segment or a dangling
//! connector, into finished text. Only the data line can be unfinished, so
//! only the data line is touched.

use super::buffer::Document;
use super::grammar::{self, SegmentState};
use super::key::is_connector;

pub fn normalize(doc: &Document) -> String {
    format!("{}{}", doc.head(), normalize_line(doc.data_line()))
}

/// Finishes a single data line
///
/// - `...),(` / `...)+` → `...)`
/// - `(09:5` → `(09:05)`
/// - `(09:05` → `(09:05)`
pub fn normalize_line(line: &str) -> String {
    if let Some(stripped) = strip_dangling_connector(line) {
        return stripped.to_string();
    }

    match grammar::classify(line) {
        SegmentState::MinutePartial => grammar::pad_last_digit(line, ")"),
        SegmentState::MinuteDone => format!("{line})"),
        _ => line.to_string(),
    }
}

fn strip_dangling_connector(line: &str) -> Option<&str> {
    let rest = line.strip_suffix('(').unwrap_or(line);
    let stripped = rest.strip_suffix(is_connector)?;
    stripped.ends_with(')').then_some(stripped)
}
