//! # tgpack
//!
//! Convert Telegram Desktop HTML chat exports into one chronologically
//! ordered log.
//!
//! ## Overview
//!
//! An HTML export is split over `messages.html`, `messages2.html`, ... Each
//! file is extracted on its own: message nodes are found, messages without
//! text are dropped, and "joined" messages (consecutive messages whose markup
//! omits the sender) are attributed to the previous sender of the same file.
//! An optional rename table normalizes sender names. All files are then
//! merged and stable-sorted by timestamp, and rendered once as JSON or as
//! text lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use tgpack::prelude::*;
//!
//! let html = r#"
//!   <div class="message default clearfix">
//!     <div class="pull_right date details" title="01.01.2020 10:00:00"></div>
//!     <div class="from_name">Dave</div>
//!     <div class="text">Hi</div>
//!   </div>
//!   <div class="message default clearfix joined">
//!     <div class="pull_right date details" title="01.01.2020 10:00:05"></div>
//!     <div class="text">Me again</div>
//!   </div>"#;
//!
//! let config = TelegramHtmlConfig::new()
//!     .with_renames(RenameTable::new().with_rename("Dave", "David"));
//! let parser = TelegramHtmlParser::with_config(config);
//!
//! let messages = process_strs(&parser, [html])?;
//! let text = to_format_string(&messages, OutputFormat::Plain)?;
//! assert_eq!(text, "David: Hi\nDavid: Me again\n");
//! # Ok::<(), tgpack::TgpackError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`message`] - [`Message`] record and its renderings
//! - [`core`] - sender resolution, corpus merge, pipeline, writers
//! - [`dom`] - document query traits and the `scraper` adapter
//! - [`parsers`] - [`TelegramHtmlParser`](parsers::TelegramHtmlParser)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and rendering
//! - [`config`] - selectors, timestamp format, renames
//! - [`error`] - [`TgpackError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod dom;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod input;
pub mod message;
pub mod parser;
pub mod parsers;

// Re-export the main types at the crate root for convenience
pub use error::{Result, TgpackError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use tgpack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::config::TelegramHtmlConfig;
    pub use crate::core::{
        Corpus, ProcessingStats, RenameTable, SenderResolver, process_documents, process_strs,
    };
    pub use crate::error::{Result, TgpackError};
    pub use crate::format::{OutputFormat, append_to_format, to_format_string, write_to_format};
    pub use crate::message::StructuredMessage;
    pub use crate::parser::Parser;
    pub use crate::parsers::TelegramHtmlParser;
}
