//! Chat export parsers.
//!
//! - [`TelegramHtmlParser`] - Telegram Desktop HTML exports (`messages*.html`)

mod telegram_html;

pub use telegram_html::TelegramHtmlParser;
