//! Key Vocabulary
//!
//! Symbols that can be typed into a data line and the control actions of
//! the keypad.

use std::fmt;
use std::str::FromStr;

use super::NotesError;

/// Connector joining two closed segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    Plus,
    Minus,
    Comma,
}

impl Connector {
    pub const ALL: [Connector; 3] = [Self::Plus, Self::Minus, Self::Comma];

    pub fn as_char(&self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Comma => ',',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }
}

pub fn is_connector(c: char) -> bool {
    Connector::from_char(c).is_some()
}

/// A character that may be appended to the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Digit(u8),
    Colon,
    Open,
    Close,
    Connector(Connector),
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or(char::REPLACEMENT_CHARACTER),
            Self::Colon => ':',
            Self::Open => '(',
            Self::Close => ')',
            Self::Connector(c) => c.as_char(),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self::Digit(c as u8 - b'0')),
            ':' => Some(Self::Colon),
            '(' => Some(Self::Open),
            ')' => Some(Self::Close),
            _ => Connector::from_char(c).map(Self::Connector),
        }
    }
}

/// Every event the keypad can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Symbol(Symbol),
    Backspace,
    Clear,
    Enter,
    Ok,
    Undo,
    Redo,
    Copy,
    Export,
}

impl Key {
    pub fn digit(d: u8) -> Self {
        debug_assert!(d < 10, "not a decimal digit: {d}");
        Self::Symbol(Symbol::Digit(d))
    }

    /// Glyph shown on the visual keypad
    pub fn label(&self) -> String {
        match self {
            Self::Symbol(s) => s.as_char().to_string(),
            Self::Backspace => "⌫".into(),
            Self::Clear => "C".into(),
            Self::Enter => "⏎".into(),
            Self::Ok => "ok".into(),
            Self::Undo => "undo".into(),
            Self::Redo => "redo".into(),
            Self::Copy => "copy".into(),
            Self::Export => "export".into(),
        }
    }
}

impl FromStr for Key {
    type Err = NotesError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name {
            "backspace" => Self::Backspace,
            "clear" | "c" => Self::Clear,
            "enter" => Self::Enter,
            "ok" => Self::Ok,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "copy" => Self::Copy,
            "export" | "download" => Self::Export,
            _ => {
                let mut chars = name.chars();
                match (chars.next().and_then(Symbol::from_char), chars.next()) {
                    (Some(symbol), None) => Self::Symbol(symbol),
                    _ => return Err(NotesError::UnknownKey(name.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => write!(f, "{}", s.as_char()),
            Self::Backspace => f.write_str("backspace"),
            Self::Clear => f.write_str("clear"),
            Self::Enter => f.write_str("enter"),
            Self::Ok => f.write_str("ok"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::Copy => f.write_str("copy"),
            Self::Export => f.write_str("export"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbol_names() {
        assert_eq!("7".parse::<Key>().unwrap(), Key::digit(7));
        assert_eq!(":".parse::<Key>().unwrap(), Key::Symbol(Symbol::Colon));
        assert_eq!("+".parse::<Key>().unwrap(), Key::Symbol(Symbol::Connector(Connector::Plus)));
        assert_eq!(")".parse::<Key>().unwrap(), Key::Symbol(Symbol::Close));
    }

    #[test]
    fn test_parse_action_names() {
        assert_eq!("backspace".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("c".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("download".parse::<Key>().unwrap(), Key::Export);
        assert_eq!("ok".parse::<Key>().unwrap(), Key::Ok);
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!("x".parse::<Key>(), Err(NotesError::UnknownKey(_))));
        assert!(matches!("12".parse::<Key>(), Err(NotesError::UnknownKey(_))));
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not a decimal digit")]
    fn test_digit_out_of_range() {
        Key::digit(10);
    }

    #[test]
    fn test_out_of_range_digit_symbol_has_no_glyph() {
        assert_eq!(Symbol::Digit(7).as_char(), '7');
        assert_eq!(Symbol::Digit(250).as_char(), char::REPLACEMENT_CHARACTER);
    }

    #[test]
    fn test_display_matches_parse() {
        for key in [Key::digit(0), Key::Enter, Key::Redo, Key::Symbol(Symbol::Open)] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
    }
}
