//! Parser trait for chat export files.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tgpack::parser::Parser;
//! use tgpack::parsers::TelegramHtmlParser;
//!
//! let parser = TelegramHtmlParser::new();
//! let messages = parser.parse(Path::new("ChatExport/messages.html"))?;
//! # Ok::<(), tgpack::TgpackError>(())
//! ```

use std::path::Path;

use crate::Message;
use crate::error::Result;

/// Parses one export document into messages, in document order.
///
/// Implementations must not carry state between calls: each document is
/// parsed independently.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`TgpackError::Read`](crate::TgpackError::Read) if the file
    /// cannot be read and [`TgpackError::Parse`](crate::TgpackError::Parse)
    /// if its content is malformed.
    fn parse(&self, path: &Path) -> Result<Vec<Message>>;

    /// Parses export content already in memory.
    fn parse_str(&self, content: &str) -> Result<Vec<Message>>;

    /// Convenience wrapper accepting a `&str` path.
    fn parse_file(&self, path: &str) -> Result<Vec<Message>> {
        self.parse(Path::new(path))
    }
}
