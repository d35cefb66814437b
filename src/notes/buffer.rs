//! Document Buffer
//!
//! The whole note as one immutable text value:
//!
//! ```text
//! 1)
//! (09:05)+(10:30)
//!
//! 2)
//! (11:4
//! ```
//!
//! Entries are a header line `N)` followed by a data line; entries are
//! separated by one blank line. Only the last data line is ever edited.

use std::fmt;

use super::grammar::{self, SegmentState};
use super::{NotesError, NotesResult};

/// Text of a fresh session
pub const MINIMAL: &str = "1)\n(";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    text: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self { text: MINIMAL.to_string() }
    }

    /// Builds a document from canonical text, checking every entry.
    pub fn from_text(text: &str) -> NotesResult<Self> {
        validate(text)?;
        Ok(Self { text: text.to_string() })
    }

    /// Wraps text produced by the transducer, which keeps the grammar intact
    pub(crate) fn from_trusted(text: String) -> Self {
        debug_assert!(validate(&text).is_ok(), "transducer produced malformed text: {text:?}");
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_minimal(&self) -> bool {
        self.text == MINIMAL
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.text.split('\n')
    }

    /// Everything up to and including the last line break
    pub fn head(&self) -> &str {
        self.text.rfind('\n').map_or("", |i| &self.text[..=i])
    }

    /// The line being edited
    pub fn data_line(&self) -> &str {
        self.text.rfind('\n').map_or(self.text.as_str(), |i| &self.text[i + 1..])
    }

    /// Trailing segment of the data line, e.g. `(12:3`
    pub fn last_segment(&self) -> &str {
        grammar::last_segment(self.data_line())
    }

    pub fn state(&self) -> SegmentState {
        grammar::classify(self.data_line())
    }

    /// Number in the header of the current entry
    pub fn entry_number(&self) -> usize {
        self.lines()
            .rev()
            .nth(1)
            .and_then(parse_header)
            .unwrap_or(1)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

pub fn parse_header(line: &str) -> Option<usize> {
    let digits = line.strip_suffix(')')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn malformed(line: usize, reason: impl Into<String>) -> NotesError {
    NotesError::Malformed { line: line + 1, reason: reason.into() }
}

fn validate(text: &str) -> NotesResult<()> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut i = 0;
    let mut expected = 1;

    loop {
        let header = lines.get(i).ok_or_else(|| malformed(i, "missing entry header"))?;
        if parse_header(header) != Some(expected) {
            return Err(malformed(i, format!("expected header {expected}), found {header:?}")));
        }

        let data = lines.get(i + 1).ok_or_else(|| malformed(i + 1, "missing data line"))?;
        let is_last = i + 2 == lines.len();
        grammar::check_data_line(data, is_last).map_err(|reason| malformed(i + 1, reason))?;

        if is_last {
            return Ok(());
        }
        if lines.get(i + 2) != Some(&"") {
            return Err(malformed(i + 2, "entries must be separated by a blank line"));
        }

        i += 3;
        expected += 1;
    }
}
