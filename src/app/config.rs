use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::notes::{ExportFormat, NotesError, NotesResult};

pub struct AppConfig {
    pub export_dir: PathBuf,
    pub export_format: ExportFormat,
    pub copied_indicator_timeout: Duration,
    pub message_timeout: Duration,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let export_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("timenotes");

        Self {
            export_dir,
            export_format: ExportFormat::Text,
            copied_indicator_timeout: Duration::from_secs(2),
            message_timeout: Duration::from_secs(5),
            log_dir,
        }
    }
}

/// Optional overrides read from `config.json`
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    export_dir: Option<PathBuf>,
    export_format: Option<ExportFormat>,
    copied_indicator_secs: Option<u64>,
    message_timeout_secs: Option<u64>,
    log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("timenotes").join("config.json"))
    }

    /// Defaults overridden by the user's config file, if there is one
    pub fn load() -> NotesResult<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> NotesResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&raw)
            .map_err(|e| NotesError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(Self::default().apply(file))
    }

    fn apply(mut self, file: ConfigFile) -> Self {
        if let Some(dir) = file.export_dir {
            self.export_dir = dir;
        }
        if let Some(format) = file.export_format {
            self.export_format = format;
        }
        if let Some(secs) = file.copied_indicator_secs {
            self.copied_indicator_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = file.message_timeout_secs {
            self.message_timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = file.log_dir {
            self.log_dir = dir;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub enum PendingAction {
    Quit,
}

impl PendingAction {
    pub fn confirm_message(&self) -> &'static str {
        match self {
            Self::Quit => "Quit? Notes are not saved between sessions.",
        }
    }
}
