//! End-to-end conversion of a set of export documents.

use std::path::{Path, PathBuf};

use super::corpus::Corpus;
use crate::Message;
use crate::error::Result;
use crate::parsers::TelegramHtmlParser;

/// Counters for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Documents extracted
    pub documents: usize,
    /// Messages in the final corpus
    pub messages: usize,
}

impl ProcessingStats {
    /// Average messages per document, 0.0 for an empty run.
    pub fn messages_per_document(&self) -> f64 {
        if self.documents == 0 {
            return 0.0;
        }
        self.messages as f64 / self.documents as f64
    }
}

/// Extracts every document and returns the merged, time-ordered corpus.
///
/// `documents` yields `(path, html)` pairs in discovery order; the path only
/// labels log lines and errors. Each document gets its own sender resolver.
/// `on_record` sees every accepted message in extraction order, before
/// sorting.
///
/// # Errors
///
/// Stops at the first malformed document; nothing is returned for the
/// documents already extracted.
pub fn process_documents<I, P, S, F>(
    parser: &TelegramHtmlParser,
    documents: I,
    mut on_record: F,
) -> Result<(Vec<Message>, ProcessingStats)>
where
    I: IntoIterator<Item = (P, S)>,
    P: AsRef<Path>,
    S: AsRef<str>,
    F: FnMut(&Message),
{
    let mut corpus = Corpus::new();
    let mut stats = ProcessingStats::default();

    for (path, html) in documents {
        let path = path.as_ref();
        let messages = parser.parse_str_with(html.as_ref(), Some(path), &mut on_record)?;
        log::debug!("{}: {} message(s)", path.display(), messages.len());
        corpus.add(messages);
        stats.documents += 1;
    }

    let messages = corpus.into_sorted();
    stats.messages = messages.len();
    Ok((messages, stats))
}

/// Convenience for in-memory inputs without paths.
pub fn process_strs<'a>(
    parser: &TelegramHtmlParser,
    documents: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Message>> {
    let labelled = documents
        .into_iter()
        .enumerate()
        .map(|(i, html)| (PathBuf::from(format!("<document {}>", i + 1)), html));
    process_documents(parser, labelled, |_| {}).map(|(messages, _)| messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(entries: &[(&str, Option<&str>, &str)]) -> String {
        let mut html = String::from("<html><body><div class=\"history\">");
        for (title, sender, text) in entries {
            let joined = if sender.is_none() { " joined" } else { "" };
            html.push_str(&format!(
                "<div class=\"message default clearfix{joined}\"><div class=\"body\">\
                 <div class=\"pull_right date details\" title=\"{title}\">x</div>"
            ));
            if let Some(name) = sender {
                html.push_str(&format!("<div class=\"from_name\">{name}</div>"));
            }
            html.push_str(&format!("<div class=\"text\">{text}</div></div></div>"));
        }
        html.push_str("</div></body></html>");
        html
    }

    #[test]
    fn test_stats_ratio() {
        let stats = ProcessingStats {
            documents: 2,
            messages: 5,
        };
        assert!((stats.messages_per_document() - 2.5).abs() < f64::EPSILON);
        assert!(ProcessingStats::default().messages_per_document().abs() < f64::EPSILON);
    }

    #[test]
    fn test_documents_merged_by_time() {
        let a = doc(&[("01.01.2020 10:00:00", Some("A"), "from file a")]);
        let b = doc(&[("01.01.2020 09:00:00", Some("B"), "from file b")]);
        let (messages, stats) =
            process_documents(&TelegramHtmlParser::new(), [("a.html", &a), ("b.html", &b)], |_| {})
                .unwrap();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.messages, 2);
        assert_eq!(messages[0].sender(), "B");
        assert_eq!(messages[1].sender(), "A");
    }

    #[test]
    fn test_resolver_resets_per_document() {
        let a = doc(&[("01.01.2020 10:00:00", Some("Alice"), "a")]);
        let b = doc(&[("01.01.2020 11:00:00", None, "b")]);
        let messages = process_strs(&TelegramHtmlParser::new(), [a.as_str(), b.as_str()]).unwrap();
        assert_eq!(messages[1].sender(), "");
    }

    #[test]
    fn test_error_names_document() {
        let bad = doc(&[("not a date", Some("A"), "x")]);
        let err = process_documents(&TelegramHtmlParser::new(), [("export/bad.html", bad)], |_| {})
            .unwrap_err();
        assert!(err.to_string().contains("export/bad.html"));
    }

    #[test]
    fn test_no_documents() {
        let (messages, stats) = process_documents(
            &TelegramHtmlParser::new(),
            Vec::<(PathBuf, String)>::new(),
            |_| {},
        )
        .unwrap();
        assert!(messages.is_empty());
        assert_eq!(stats, ProcessingStats::default());
    }
}
