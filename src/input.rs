//! Input discovery and reading.
//!
//! The `--input` argument is a glob pattern (`ChatExport/messages*.html`).
//! Matches come back in the glob matcher's order, which is alphabetical per
//! directory level, so repeated runs see files in the same order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ParseErrorKind, Result, TgpackError};

/// Expands `pattern` into the list of matching files.
///
/// Directories matched by the pattern are ignored. No match is not an
/// error: the run then produces an empty corpus.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|e| TgpackError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            TgpackError::read(path, e.into())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        log::warn!("No files match '{}'", pattern);
    }
    Ok(files)
}

/// Reads one export file as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| TgpackError::read(path, e))?;
    String::from_utf8(bytes).map_err(|e| {
        TgpackError::telegram_html_parse(
            ParseErrorKind::Encoding(format!("file is not valid UTF-8: {}", e.utf8_error())),
            Some(path.to_path_buf()),
        )
    })
}

/// Reads every file, keeping the given order.
pub fn read_documents(paths: &[PathBuf]) -> Result<Vec<(PathBuf, String)>> {
    paths
        .iter()
        .map(|path| read_document(path).map(|html| (path.clone(), html)))
        .collect()
}
