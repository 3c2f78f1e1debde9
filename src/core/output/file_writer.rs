//! Append-mode file destination.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Appends `content` to the file at `path`, creating it if needed.
///
/// The content is written with a single `write_all`; earlier content in the
/// file is kept, so repeated runs accumulate.
pub fn append_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}
