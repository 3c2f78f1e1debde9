//! Telegram Desktop HTML export parser.
//!
//! Telegram writes an HTML export as one or more `messagesN.html` files. Each
//! message is a `div.message.default` node:
//!
//! ```html
//! <div class="message default clearfix" id="message42">
//!   <div class="body">
//!     <div class="pull_right date details" title="01.01.2020 10:00:00">10:00</div>
//!     <div class="from_name">Alice</div>
//!     <div class="text">Hello</div>
//!   </div>
//! </div>
//! <div class="message default clearfix joined" id="message43">
//!   <div class="body">
//!     <div class="pull_right date details" title="01.01.2020 10:00:05">10:00</div>
//!     <div class="text">Consecutive message, sender omitted</div>
//!   </div>
//! </div>
//! ```
//!
//! Nodes without a `.text` field (photos, stickers, service notices) are
//! skipped. `joined` nodes take the sender of the previous message in the
//! same file.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::Message;
use crate::config::TelegramHtmlConfig;
use crate::core::resolver::SenderResolver;
use crate::dom::{ExportDocument, ExportNode, parse_html};
use crate::error::{ParseErrorKind, Result, TgpackError};
use crate::parser::Parser;

/// Parser for Telegram HTML exports.
#[derive(Debug, Clone, Default)]
pub struct TelegramHtmlParser {
    config: TelegramHtmlConfig,
}

impl TelegramHtmlParser {
    /// Creates a parser with the default Telegram Desktop selectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TelegramHtmlConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &TelegramHtmlConfig {
        &self.config
    }

    /// Extracts the messages of one parsed document, in node order.
    ///
    /// A fresh [`SenderResolver`] is used, so joined messages never inherit a
    /// sender from another document. `on_record` sees every accepted message
    /// as it is built (used for verbose output). `path` only labels errors.
    ///
    /// # Errors
    ///
    /// Returns [`TgpackError::Parse`] if a message with a body has no date,
    /// an unparsable date, or (unless joined) no sender field.
    pub fn extract<D, F>(&self, document: &D, path: Option<&Path>, mut on_record: F) -> Result<Vec<Message>>
    where
        D: ExportDocument,
        F: FnMut(&Message),
    {
        let config = &self.config;
        let fail = |kind: ParseErrorKind| TgpackError::telegram_html_parse(kind, path.map(Path::to_path_buf));

        let mut resolver = SenderResolver::new(&config.renames);
        let mut messages = Vec::new();
        let mut skipped = 0usize;

        for (index, node) in document
            .select_all(&config.message_selector)
            .into_iter()
            .enumerate()
        {
            let Some(body) = node.select_first(&config.text_selector) else {
                skipped += 1;
                continue;
            };

            let date = node
                .select_first(&config.date_selector)
                .ok_or_else(|| fail(ParseErrorKind::MissingField { field: "date", index }))?;
            let raw_date = date.attr(&config.date_attribute).ok_or_else(|| {
                fail(ParseErrorKind::MissingField {
                    field: "date title",
                    index,
                })
            })?;
            let timestamp = NaiveDateTime::parse_from_str(raw_date.trim(), &config.timestamp_format)
                .map_err(|source| {
                    fail(ParseErrorKind::Timestamp {
                        value: raw_date.to_string(),
                        index,
                        source,
                    })
                })?;

            let raw_name = if node.has_class(&config.joined_class) {
                None
            } else {
                let name = node.select_first(&config.sender_selector).ok_or_else(|| {
                    fail(ParseErrorKind::MissingField {
                        field: "sender name",
                        index,
                    })
                })?;
                Some(name.trimmed_text())
            };
            let sender = resolver.resolve(raw_name.as_deref());

            let message = Message::new(timestamp, sender, body.trimmed_text());
            on_record(&message);
            messages.push(message);
        }

        if skipped > 0 {
            log::debug!(
                "{}: skipped {} message(s) without text",
                path.map(|p| p.display().to_string()).unwrap_or_else(|| "<input>".into()),
                skipped
            );
        }

        Ok(messages)
    }

    /// Parses HTML content and extracts its messages.
    pub fn parse_str_with<F>(&self, html: &str, path: Option<&Path>, on_record: F) -> Result<Vec<Message>>
    where
        F: FnMut(&Message),
    {
        let document = parse_html(html);
        self.extract(&document, path, on_record)
    }
}

impl Parser for TelegramHtmlParser {
    fn name(&self) -> &'static str {
        "Telegram HTML"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let html = fs::read_to_string(path).map_err(|e| TgpackError::read(path, e))?;
        self.parse_str_with(&html, Some(path), |_| {})
    }

    fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.parse_str_with(content, None, |_| {})
    }
}
