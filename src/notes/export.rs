//! Export notes to a file.
//!
//! The content is always the plain normalized text; the format only picks
//! the file extension so word processors open the file directly.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NotesResult;

/// File type offered by the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text (`.txt`)
    #[default]
    Text,
    /// Word processor (`.doc`), still plain text inside
    Doc,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Doc => "doc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Plain Text (.txt)",
            Self::Doc => "Word Document (.doc)",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Text => Self::Doc,
            Self::Doc => Self::Text,
        }
    }
}

/// `timenotes_<YYYY-MM-DD>.<ext>`
pub fn default_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!("timenotes_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

pub fn default_export_path(dir: &Path, date: NaiveDate, format: ExportFormat) -> PathBuf {
    dir.join(default_file_name(date, format))
}

/// Swaps a known export extension on `path` for the one of `format`
pub fn with_format_extension(path: &str, format: ExportFormat) -> String {
    let base = path
        .strip_suffix(".txt")
        .or_else(|| path.strip_suffix(".doc"))
        .unwrap_or(path);
    format!("{}.{}", base, format.extension())
}

fn ensure_parent_dir(output_path: &Path) -> NotesResult<()> {
    let Some(parent) = output_path.parent() else {
        return Ok(());
    };

    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }

    std::fs::create_dir_all(parent)?;
    Ok(())
}

pub fn export_to_file(content: &str, output_path: &Path) -> NotesResult<()> {
    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, content)?;
    Ok(())
}
