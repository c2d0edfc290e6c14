use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::core::errors::{PixlockError, Result};

/// A file the user picked for upload, with the metadata the
/// validation rules and the multipart request need.
///
/// Built once per invocation; nothing about it is persisted.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    /// File name as sent in the multipart part (no directory components).
    pub name: String,
    pub size: u64,
    /// MIME type guessed from the extension, e.g. "image/png".
    /// Falls back to "application/octet-stream" for unknown extensions.
    pub mime: String,
    pub modified: Option<DateTime<Local>>,
}

impl SelectedFile {
    /// Stat the file and capture its upload metadata.
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path).map_err(|_| PixlockError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        if !meta.is_file() {
            return Err(PixlockError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let modified = meta.modified().ok().map(DateTime::<Local>::from);

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: meta.len(),
            mime,
            modified,
        })
    }

    /// Read the file contents for upload.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }

    /// True if the file name carries the given extension (case-insensitive).
    pub fn has_extension(&self, ext: &str) -> bool {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
            .unwrap_or(false)
    }
}

/// Format a byte count as a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}
