//! Input Modes
//!
//! The keypad is the normal mode; popups take the keyboard while open.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Keypad,
    Export,
    Confirm,
    Help,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Keypad => "KEYPAD",
            Self::Export => "EXPORT",
            Self::Confirm => "CONFIRM",
            Self::Help => "HELP",
        }
    }

    /// Whether the keypad and mouse reach the notes
    pub fn is_keypad(&self) -> bool {
        matches!(self, Self::Keypad)
    }
}

/// Mode state with associated data
#[derive(Debug, Clone, Default)]
pub struct ModeState {
    pub mode: InputMode,
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_keypad(&mut self) {
        self.mode = InputMode::Keypad;
    }

    pub fn to_export(&mut self) {
        self.mode = InputMode::Export;
    }

    pub fn to_confirm(&mut self) {
        self.mode = InputMode::Confirm;
    }

    pub fn to_help(&mut self) {
        self.mode = InputMode::Help;
    }
}
