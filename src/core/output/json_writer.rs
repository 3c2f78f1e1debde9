//! Structured (JSON array) output.

use crate::Message;
use crate::error::Result;
use crate::message::StructuredMessage;

/// Converts messages to a single JSON array.
///
/// # Format
/// ```json
/// [{"date":"2020-01-01T10:00:00","sender":"Alice","message":"Hello"}]
/// ```
///
/// No trailing newline is written: the output is one JSON document.
pub fn to_json(messages: &[Message]) -> Result<String> {
    let records: Vec<StructuredMessage> = messages.iter().map(Message::to_structured).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parses structured output back into records.
pub fn from_json(json: &str) -> Result<Vec<StructuredMessage>> {
    Ok(serde_json::from_str(json)?)
}
