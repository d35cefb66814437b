//! Entry Grammar
//!
//! A data line is a run of `(HH:MM)` segments joined by connectors. Only the
//! last segment may still be open. The state of that trailing segment decides
//! which symbol may be appended next and what gets filled in automatically.
//!
//! ```text
//!  Detached --(--> Empty --d--> HourPartial --d--> HourDone --:--> MinuteEmpty
//!                                   |                              |
//!                                   ok (pad, ":")                  d
//!                                                                  v
//!  Closed <--)-- MinuteDone <--d-- MinutePartial --)/ok (pad)--> Closed / Empty
//!    |
//!    +--connector--> Detached
//! ```

use super::key::{is_connector, Symbol};

/// State of the trailing segment of a data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// The line is empty or ends with a connector
    Detached,
    /// `(`
    Empty,
    /// `(H`
    HourPartial,
    /// `(HH`
    HourDone,
    /// `(HH:`
    MinuteEmpty,
    /// `(HH:M`
    MinutePartial,
    /// `(HH:MM`
    MinuteDone,
    /// `(HH:MM)`
    Closed,
    /// Trailing text that does not follow the grammar
    Invalid,
}

/// Text change produced by an accepted key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Append the character as typed
    Append(char),
    /// Zero-pad the single trailing digit, then append the suffix
    PadThenAppend(&'static str),
}

impl Edit {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Append(c) => {
                let mut out = String::with_capacity(text.len() + 1);
                out.push_str(text);
                out.push(*c);
                out
            }
            Self::PadThenAppend(suffix) => pad_last_digit(text, suffix),
        }
    }
}

/// Inserts a `0` before the last character of `text` and appends `suffix`
pub fn pad_last_digit(text: &str, suffix: &str) -> String {
    let split = text.len().saturating_sub(1);
    let (head, last) = text.split_at(split);
    format!("{head}0{last}{suffix}")
}

/// Tail of the line after the last connector
pub fn last_segment(line: &str) -> &str {
    line.rfind(is_connector).map_or(line, |i| &line[i + 1..])
}

pub fn classify(line: &str) -> SegmentState {
    match line.chars().last() {
        None => SegmentState::Detached,
        Some(c) if is_connector(c) => SegmentState::Detached,
        Some(')') if is_closed_segment(last_segment(line)) => SegmentState::Closed,
        Some(_) => classify_open(last_segment(line)),
    }
}

fn classify_open(segment: &str) -> SegmentState {
    let Some(rest) = segment.strip_prefix('(') else {
        return SegmentState::Invalid;
    };
    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (rest, None),
    };

    if !all_digits(hours) {
        return SegmentState::Invalid;
    }

    match (hours.len(), minutes) {
        (0, None) => SegmentState::Empty,
        (1, None) => SegmentState::HourPartial,
        (2, None) => SegmentState::HourDone,
        (2, Some(m)) if all_digits(m) => match m.len() {
            0 => SegmentState::MinuteEmpty,
            1 => SegmentState::MinutePartial,
            2 => SegmentState::MinuteDone,
            _ => SegmentState::Invalid,
        },
        _ => SegmentState::Invalid,
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// True for exactly `(HH:MM)`
pub fn is_closed_segment(segment: &str) -> bool {
    let b = segment.as_bytes();
    b.len() == 7
        && b[0] == b'('
        && b[1].is_ascii_digit()
        && b[2].is_ascii_digit()
        && b[3] == b':'
        && b[4].is_ascii_digit()
        && b[5].is_ascii_digit()
        && b[6] == b')'
}

/// Decides whether `symbol` may follow a segment in `state`
pub fn accept(state: SegmentState, symbol: Symbol) -> Option<Edit> {
    use SegmentState::*;

    let c = symbol.as_char();
    match (state, symbol) {
        (Empty | HourPartial | MinuteEmpty | MinutePartial, Symbol::Digit(d)) if d < 10 => Some(Edit::Append(c)),
        (HourDone, Symbol::Colon) => Some(Edit::Append(c)),
        (MinutePartial, Symbol::Close) => Some(Edit::PadThenAppend(")")),
        (MinuteDone, Symbol::Close) => Some(Edit::Append(c)),
        (Closed, Symbol::Connector(_)) => Some(Edit::Append(c)),
        (Detached, Symbol::Open) => Some(Edit::Append(c)),
        _ => None,
    }
}

/// The `ok` action: finalize a one-digit hour or minute field
pub fn confirm(state: SegmentState) -> Option<Edit> {
    match state {
        SegmentState::HourPartial => Some(Edit::PadThenAppend(":")),
        SegmentState::MinutePartial => Some(Edit::PadThenAppend("),(")),
        _ => None,
    }
}

/// Text filled in after a symbol lands in `state`
pub fn auto_format(state: SegmentState) -> Option<&'static str> {
    match state {
        SegmentState::HourDone => Some(":"),
        SegmentState::MinuteDone => Some("),("),
        _ => None,
    }
}

/// Whether an entry ending in `state` can be normalized into closed segments
pub fn can_finish(state: SegmentState) -> bool {
    matches!(
        state,
        SegmentState::Detached
            | SegmentState::Empty
            | SegmentState::MinutePartial
            | SegmentState::MinuteDone
            | SegmentState::Closed
    )
}

/// Checks a whole data line. Completed entries must consist of closed
/// segments only; the current entry may end in an open segment.
pub fn check_data_line(line: &str, allow_open: bool) -> Result<(), String> {
    if !line.starts_with('(') {
        return Err(format!("data line must start with '(': {line:?}"));
    }

    let segments: Vec<&str> = line.split(is_connector).collect();
    let (last, earlier) = segments
        .split_last()
        .ok_or_else(|| "empty data line".to_string())?;

    if let Some(bad) = earlier.iter().find(|s| !is_closed_segment(s)) {
        return Err(format!("segment {bad:?} is not a closed (HH:MM)"));
    }

    if is_closed_segment(last) {
        return Ok(());
    }
    if !allow_open {
        return Err(format!("completed entry ends with open segment {last:?}"));
    }
    match classify(line) {
        SegmentState::Invalid => Err(format!("segment {last:?} does not follow (HH:MM)")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::key::Connector;

    #[test]
    fn test_classify_states() {
        assert_eq!(classify(""), SegmentState::Detached);
        assert_eq!(classify("(12:34)+"), SegmentState::Detached);
        assert_eq!(classify("("), SegmentState::Empty);
        assert_eq!(classify("(12:34),("), SegmentState::Empty);
        assert_eq!(classify("(1"), SegmentState::HourPartial);
        assert_eq!(classify("(12"), SegmentState::HourDone);
        assert_eq!(classify("(12:"), SegmentState::MinuteEmpty);
        assert_eq!(classify("(12:3"), SegmentState::MinutePartial);
        assert_eq!(classify("(12:34"), SegmentState::MinuteDone);
        assert_eq!(classify("(12:34)"), SegmentState::Closed);
        assert_eq!(classify("(12:34)-(01:02)"), SegmentState::Closed);
    }

    #[test]
    fn test_classify_invalid() {
        assert_eq!(classify("(123"), SegmentState::Invalid);
        assert_eq!(classify("(12:345"), SegmentState::Invalid);
        assert_eq!(classify("(1:2"), SegmentState::Invalid);
        assert_eq!(classify("12"), SegmentState::Invalid);
        assert_eq!(classify("(1)"), SegmentState::Invalid);
    }

    #[test]
    fn test_colon_only_after_two_hour_digits() {
        assert!(accept(SegmentState::HourDone, Symbol::Colon).is_some());
        for state in [SegmentState::Empty, SegmentState::HourPartial, SegmentState::MinuteEmpty, SegmentState::Closed] {
            assert_eq!(accept(state, Symbol::Colon), None);
        }
    }

    #[test]
    fn test_close_pads_single_minute_digit() {
        assert_eq!(accept(SegmentState::MinutePartial, Symbol::Close), Some(Edit::PadThenAppend(")")));
        assert_eq!(accept(SegmentState::MinuteDone, Symbol::Close), Some(Edit::Append(')')));
        assert_eq!(accept(SegmentState::MinuteEmpty, Symbol::Close), None);
        assert_eq!(accept(SegmentState::HourDone, Symbol::Close), None);
    }

    #[test]
    fn test_connectors_only_after_closed_segment() {
        for connector in Connector::ALL {
            let symbol = Symbol::Connector(connector);
            assert!(accept(SegmentState::Closed, symbol).is_some());
            assert_eq!(accept(SegmentState::Empty, symbol), None);
            assert_eq!(accept(SegmentState::Detached, symbol), None);
            assert_eq!(accept(SegmentState::MinuteDone, symbol), None);
        }
    }

    #[test]
    fn test_open_only_when_detached() {
        assert!(accept(SegmentState::Detached, Symbol::Open).is_some());
        assert_eq!(accept(SegmentState::Empty, Symbol::Open), None);
        assert_eq!(accept(SegmentState::Closed, Symbol::Open), None);
        assert_eq!(accept(SegmentState::HourPartial, Symbol::Open), None);
    }

    #[test]
    fn test_third_digit_rejected() {
        assert_eq!(accept(SegmentState::HourDone, Symbol::Digit(5)), None);
        assert_eq!(accept(SegmentState::MinuteDone, Symbol::Digit(5)), None);
        assert_eq!(accept(SegmentState::Closed, Symbol::Digit(5)), None);
        assert_eq!(accept(SegmentState::Detached, Symbol::Digit(5)), None);
    }

    #[test]
    fn test_out_of_range_digit_rejected() {
        assert_eq!(accept(SegmentState::Empty, Symbol::Digit(9)), Some(Edit::Append('9')));
        assert_eq!(accept(SegmentState::Empty, Symbol::Digit(10)), None);
        assert_eq!(accept(SegmentState::MinutePartial, Symbol::Digit(255)), None);
    }

    #[test]
    fn test_confirm_rejected_on_fresh_segment() {
        assert_eq!(confirm(SegmentState::Empty), None);
        assert_eq!(confirm(SegmentState::Closed), None);
        assert_eq!(confirm(SegmentState::HourPartial), Some(Edit::PadThenAppend(":")));
        assert_eq!(confirm(SegmentState::MinutePartial), Some(Edit::PadThenAppend("),(")));
    }

    #[test]
    fn test_pad_last_digit() {
        assert_eq!(pad_last_digit("(09:5", ")"), "(09:05)");
        assert_eq!(pad_last_digit("(7", ":"), "(07:");
    }

    #[test]
    fn test_check_data_line() {
        assert!(check_data_line("(09:05)+(10:00)", false).is_ok());
        assert!(check_data_line("(09:05),(1", true).is_ok());
        assert!(check_data_line("(09:05),(1", false).is_err());
        assert!(check_data_line("(9:05)", true).is_err());
        assert!(check_data_line("", true).is_err());
        assert!(check_data_line("(12:34)5", true).is_err());
    }
}
