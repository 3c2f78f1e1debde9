//! Configuration for Telegram HTML extraction.
//!
//! The defaults match the markup produced by Telegram Desktop's
//! "Export chat history" in HTML mode. Every selector can be overridden for
//! exports from slightly different client versions.
//!
//! # Example
//!
//! ```rust
//! use tgpack::config::TelegramHtmlConfig;
//! use tgpack::core::resolver::RenameTable;
//! use tgpack::parsers::TelegramHtmlParser;
//!
//! let config = TelegramHtmlConfig::new()
//!     .with_renames(RenameTable::new().with_rename("Dave", "David"));
//!
//! let parser = TelegramHtmlParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::resolver::RenameTable;
use crate::dom::ClassSelector;
use crate::message::EXPORT_TIMESTAMP_FORMAT;

/// Configuration for Telegram HTML export parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramHtmlConfig {
    /// Selector for candidate message nodes (default: `.message.default`)
    pub message_selector: ClassSelector,

    /// Class marking a message whose sender is omitted (default: `joined`)
    pub joined_class: String,

    /// Selector for the body text field (default: `.text`)
    pub text_selector: ClassSelector,

    /// Selector for the date field (default: `.date`)
    pub date_selector: ClassSelector,

    /// Attribute of the date field holding the full timestamp (default: `title`)
    pub date_attribute: String,

    /// Selector for the sender name field (default: `.from_name`)
    pub sender_selector: ClassSelector,

    /// chrono format of the date attribute (default: `%d.%m.%Y %H:%M:%S`)
    pub timestamp_format: String,

    /// Sender renames applied during extraction (default: none)
    pub renames: RenameTable,
}

impl Default for TelegramHtmlConfig {
    fn default() -> Self {
        Self {
            message_selector: ClassSelector::new(["message", "default"]),
            joined_class: "joined".to_string(),
            text_selector: ClassSelector::new(["text"]),
            date_selector: ClassSelector::new(["date"]),
            date_attribute: "title".to_string(),
            sender_selector: ClassSelector::new(["from_name"]),
            timestamp_format: EXPORT_TIMESTAMP_FORMAT.to_string(),
            renames: RenameTable::new(),
        }
    }
}

impl TelegramHtmlConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sender rename table.
    #[must_use]
    pub fn with_renames(mut self, renames: RenameTable) -> Self {
        self.renames = renames;
        self
    }

    /// Sets the message node selector.
    #[must_use]
    pub fn with_message_selector(mut self, selector: ClassSelector) -> Self {
        self.message_selector = selector;
        self
    }

    /// Sets the class that marks joined messages.
    #[must_use]
    pub fn with_joined_class(mut self, class: impl Into<String>) -> Self {
        self.joined_class = class.into();
        self
    }

    /// Sets the body text selector.
    #[must_use]
    pub fn with_text_selector(mut self, selector: ClassSelector) -> Self {
        self.text_selector = selector;
        self
    }

    /// Sets the date field selector.
    #[must_use]
    pub fn with_date_selector(mut self, selector: ClassSelector) -> Self {
        self.date_selector = selector;
        self
    }

    /// Sets the sender name selector.
    #[must_use]
    pub fn with_sender_selector(mut self, selector: ClassSelector) -> Self {
        self.sender_selector = selector;
        self
    }

    /// Sets the timestamp format and the attribute it is read from.
    #[must_use]
    pub fn with_timestamp(mut self, attribute: impl Into<String>, format: impl Into<String>) -> Self {
        self.date_attribute = attribute.into();
        self.timestamp_format = format.into();
        self
    }
}
