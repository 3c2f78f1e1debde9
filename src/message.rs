//! The normalized chat message record.
//!
//! Every message node extracted from a Telegram HTML export becomes a
//! [`Message`]: a naive timestamp, the effective sender name, and the trimmed
//! body text. Records are immutable once built and render into five forms:
//!
//! | Method | Output |
//! |--------|--------|
//! | [`to_log_line`](Message::to_log_line) | `[2020-01-01T10:00:00] Alice: Hello` |
//! | [`to_structured`](Message::to_structured) | `{"date": ..., "sender": ..., "message": ...}` |
//! | [`to_plain_line`](Message::to_plain_line) | `Alice: Hello` |
//! | [`to_markup_line`](Message::to_markup_line) | `<b>Alice</b>: Hello` |
//! | [`body`](Message::body) | `Hello` |
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tgpack::Message;
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "Hello");
//!
//! assert_eq!(msg.to_log_line(), "[2020-01-01T10:00:00] Alice: Hello");
//! assert_eq!(msg.to_markup_line(), "<b>Alice</b>: Hello");
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the `title` attribute on a Telegram export's date field.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// ISO-8601 format used in every rendered output.
pub const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single chat message recovered from an export.
///
/// Timestamps carry no timezone: an export is assumed to use one implicit
/// local zone throughout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    timestamp: NaiveDateTime,
    sender: String,
    body: String,
}

impl Message {
    /// Creates a message. No validation is done; the extractor guarantees
    /// its inputs.
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns when the message was sent.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the effective (post-rename) sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the trimmed message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp formatted as ISO-8601 without offset.
    pub fn iso_timestamp(&self) -> String {
        self.timestamp.format(ISO_TIMESTAMP_FORMAT).to_string()
    }

    // =========================================================================
    // Renderings
    // =========================================================================

    /// `[ISO-8601] sender: body`
    pub fn to_log_line(&self) -> String {
        format!("[{}] {}: {}", self.iso_timestamp(), self.sender, self.body)
    }

    /// The record form used by structured (JSON) output.
    pub fn to_structured(&self) -> StructuredMessage {
        StructuredMessage {
            date: self.iso_timestamp(),
            sender: self.sender.clone(),
            message: self.body.clone(),
        }
    }

    /// `sender: body`
    pub fn to_plain_line(&self) -> String {
        format!("{}: {}", self.sender, self.body)
    }

    /// `<b>sender</b>: body`
    ///
    /// Neither sender nor body is HTML-escaped.
    pub fn to_markup_line(&self) -> String {
        format!("<b>{}</b>: {}", self.sender, self.body)
    }
}

/// One element of the structured (JSON array) output.
///
/// ```json
/// {"date": "2020-01-01T10:00:00", "sender": "Alice", "message": "Hello"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredMessage {
    /// ISO-8601 timestamp
    pub date: String,
    /// Effective sender name
    pub sender: String,
    /// Trimmed body text
    pub message: String,
}

impl From<&Message> for StructuredMessage {
    fn from(msg: &Message) -> Self {
        msg.to_structured()
    }
}
