//! Output writers.
//!
//! - [`to_json`] - structured output, one JSON array of `{date, sender, message}`
//! - [`to_lines`] - newline-terminated lines, one per message
//! - [`append_to_file`] - appends a rendered string to a destination file
//!
//! Renderers build the whole output in memory first, so a failure never
//! leaves a half-written destination behind.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tgpack::Message;
//! use tgpack::core::output::{to_json, to_lines};
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let messages = vec![Message::new(ts, "Alice", "Hello!")];
//!
//! let json = to_json(&messages)?;
//! assert!(json.starts_with('['));
//!
//! let text = to_lines(&messages, Message::to_plain_line);
//! assert_eq!(text, "Alice: Hello!\n");
//! # Ok::<(), tgpack::TgpackError>(())
//! ```

mod file_writer;
mod json_writer;
mod lines_writer;

pub use file_writer::append_to_file;
pub use json_writer::{from_json, to_json};
pub use lines_writer::to_lines;
