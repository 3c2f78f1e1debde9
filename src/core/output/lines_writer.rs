//! Line-oriented output (log, plain, markup and message-only formats).

use crate::Message;

/// Renders one line per message, each terminated by `\n`.
///
/// An empty slice gives an empty string.
pub fn to_lines<F>(messages: &[Message], render: F) -> String
where
    F: Fn(&Message) -> String,
{
    let mut out = String::new();
    for msg in messages {
        out.push_str(&render(msg));
        out.push('\n');
    }
    out
}
