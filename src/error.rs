//! Unified error types for tgpack.
//!
//! Every fallible operation in the crate returns [`TgpackError`]. The variants
//! follow the run's failure taxonomy:
//!
//! - **Configuration**: an odd `--replace` list, a bad glob pattern
//! - **Input format**: unreadable files, malformed timestamps, missing fields
//! - **Output**: the destination cannot be written
//!
//! Service messages without a body are *not* errors; the extractor skips them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tgpack operations.
///
/// # Example
///
/// ```rust
/// use tgpack::error::Result;
/// use tgpack::Message;
///
/// fn load() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TgpackError>;

/// The error type for all tgpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TgpackError {
    /// An I/O error without file context, typically while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// An input file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that failed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An export document is malformed.
    ///
    /// Aborts the whole run: a partially merged corpus is worse than no output.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g. "Telegram HTML")
        format: &'static str,
        /// What went wrong
        #[source]
        source: ParseErrorKind,
        /// The offending file, if known
        path: Option<PathBuf>,
    },

    /// The `--replace` list has an odd number of names.
    #[error(
        "Rename list must contain (from, to) pairs, got {count} name(s). If you are using the replace option, please pass an even number of names"
    )]
    InvalidRenameTable {
        /// Number of tokens supplied
        count: usize,
    },

    /// The input glob pattern is invalid.
    #[error("Invalid input pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Description from the glob matcher
        message: String,
    },

    /// An unknown output format was requested.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of parse errors found inside an export document.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// A date field's title attribute does not match the timestamp format.
    #[error("invalid timestamp '{value}' in message #{index}: {source}")]
    Timestamp {
        /// The raw attribute text
        value: String,
        /// Zero-based position of the message node in the document
        index: usize,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A required field (date, date title, sender name) is missing.
    #[error("message #{index} has no {field}")]
    MissingField {
        /// Which field is missing
        field: &'static str,
        /// Zero-based position of the message node in the document
        index: usize,
    },

    /// The file is not valid UTF-8 text.
    #[error("{0}")]
    Encoding(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TgpackError {
    /// Creates a parse error for the Telegram HTML format.
    pub fn telegram_html_parse(source: ParseErrorKind, path: Option<PathBuf>) -> Self {
        TgpackError::Parse {
            format: "Telegram HTML",
            source,
            path,
        }
    }

    /// Creates a read error for an input file.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TgpackError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid rename table error.
    pub fn invalid_rename_table(count: usize) -> Self {
        TgpackError::InvalidRenameTable { count }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TgpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error (with or without file context).
    pub fn is_io(&self) -> bool {
        matches!(self, TgpackError::Io(_) | TgpackError::Read { .. })
    }

    /// Returns `true` if this is a document parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, TgpackError::Parse { .. })
    }

    /// Returns `true` if this error comes from invalid run configuration.
    ///
    /// Configuration errors are raised before any input is read.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TgpackError::InvalidRenameTable { .. }
                | TgpackError::InvalidPattern { .. }
                | TgpackError::InvalidFormat { .. }
        )
    }
}
