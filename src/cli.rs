//! Command-line interface definition using clap.
//!
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - the `--format` names (`text|json|plain|html|message`)

use clap::{Parser, ValueEnum};

use crate::config::TelegramHtmlConfig;
use crate::core::resolver::RenameTable;
use crate::error::Result;

/// Parse Telegram HTML chat logs exported by the desktop client.
#[derive(Parser, Debug, Clone)]
#[command(name = "tgpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tgpack -i 'ChatExport/messages*.html'
    tgpack -i 'ChatExport/*.html' -o chat.txt -f text
    tgpack -i 'ChatExport/*.html' -f plain -r Dave David 'Old Nick' Nick
    tgpack -i 'ChatExport/*.html' -f message -v")]
pub struct Args {
    /// Glob pattern selecting the exported HTML files
    #[arg(short, long, value_name = "PATTERN")]
    pub input: String,

    /// Output file, opened in append mode
    #[arg(short, long, default_value = "./output")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print every extracted message to stdout
    #[arg(short, long)]
    pub verbose: bool,

    /// Sender renames as pairs: FROM TO [FROM TO ...]
    #[arg(short, long, num_args = 0.., value_name = "NAME")]
    pub replace: Vec<String>,
}

impl Args {
    /// Builds the extraction config, validating the rename list.
    ///
    /// # Errors
    ///
    /// Returns [`TgpackError::InvalidRenameTable`](crate::TgpackError::InvalidRenameTable)
    /// for an odd number of `--replace` names.
    pub fn to_config(&self) -> Result<TelegramHtmlConfig> {
        let renames = RenameTable::from_flat(self.replace.iter().cloned())?;
        Ok(TelegramHtmlConfig::new().with_renames(renames))
    }
}

/// Output format names accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// `[date] sender: message` lines
    Text,

    /// JSON array of {date, sender, message} (default)
    #[default]
    Json,

    /// `sender: message` lines
    Plain,

    /// `<b>sender</b>: message` lines
    Html,

    /// Message text only, one per line
    Message,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Message => "message",
        };
        f.write_str(name)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Log,
            OutputFormat::Json => crate::format::OutputFormat::Structured,
            OutputFormat::Plain => crate::format::OutputFormat::Plain,
            OutputFormat::Html => crate::format::OutputFormat::Markup,
            OutputFormat::Message => crate::format::OutputFormat::BodyOnly,
        }
    }
}
