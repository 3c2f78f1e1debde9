//! Output encodings and the single render entry point.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tgpack::Message;
//! use tgpack::format::{OutputFormat, to_format_string};
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let messages = vec![Message::new(ts, "Bob", "Hi")];
//!
//! let text = to_format_string(&messages, OutputFormat::Log)?;
//! assert_eq!(text, "[2020-01-01T10:00:00] Bob: Hi\n");
//! # Ok::<(), tgpack::TgpackError>(())
//! ```

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::output::{append_to_file, to_json, to_lines};
use crate::error::{Result, TgpackError};

/// Output encoding for a converted corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One JSON array of `{date, sender, message}` objects (default)
    #[default]
    Structured,

    /// `[ISO-8601] sender: body` per line
    Log,

    /// `sender: body` per line
    Plain,

    /// `<b>sender</b>: body` per line
    Markup,

    /// `body` per line
    BodyOnly,
}

impl OutputFormat {
    /// Returns all accepted names, including the command-line aliases.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "structured",
            "json",
            "log",
            "text",
            "plain",
            "markup",
            "html",
            "body-only",
            "message",
        ]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Structured => write!(f, "JSON"),
            OutputFormat::Log => write!(f, "Text log"),
            OutputFormat::Plain => write!(f, "Plain"),
            OutputFormat::Markup => write!(f, "HTML"),
            OutputFormat::BodyOnly => write!(f, "Messages only"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = TgpackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "structured" | "json" => Ok(OutputFormat::Structured),
            "log" | "text" => Ok(OutputFormat::Log),
            "plain" => Ok(OutputFormat::Plain),
            "markup" | "html" => Ok(OutputFormat::Markup),
            "body-only" | "message" => Ok(OutputFormat::BodyOnly),
            _ => Err(TgpackError::invalid_format(
                "output",
                format!(
                    "Unknown format: '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Renders messages in the given format.
pub fn to_format_string(messages: &[Message], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Structured => to_json(messages),
        OutputFormat::Log => Ok(to_lines(messages, Message::to_log_line)),
        OutputFormat::Plain => Ok(to_lines(messages, Message::to_plain_line)),
        OutputFormat::Markup => Ok(to_lines(messages, Message::to_markup_line)),
        OutputFormat::BodyOnly => Ok(to_lines(messages, |m| m.body().to_string())),
    }
}

/// Renders messages and writes them to `writer` in one call.
pub fn write_to_format<W: Write>(messages: &[Message], writer: &mut W, format: OutputFormat) -> Result<()> {
    let rendered = to_format_string(messages, format)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Renders messages and appends them to the file at `path`.
///
/// Rendering happens before the file is opened, so a rendering error leaves
/// the destination untouched.
pub fn append_to_format(messages: &[Message], path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let rendered = to_format_string(messages, format)?;
    append_to_file(path, &rendered)
}
