//! Multi-document message aggregation.

use crate::Message;

/// Collects messages from every export document and orders them by time.
///
/// Documents must be added in discovery order: the sort is stable, so
/// messages with equal timestamps keep the order in which they were added.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tgpack::Message;
/// use tgpack::core::Corpus;
///
/// let at = |h| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
///
/// let mut corpus = Corpus::new();
/// corpus.add(vec![Message::new(at(10), "A", "later")]);
/// corpus.add(vec![Message::new(at(9), "B", "earlier")]);
///
/// let sorted = corpus.finalize();
/// assert_eq!(sorted[0].sender(), "B");
/// ```
#[derive(Debug, Default)]
pub struct Corpus {
    messages: Vec<Message>,
    sorted: bool,
}

impl Corpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one document's messages.
    pub fn add(&mut self, messages: impl IntoIterator<Item = Message>) {
        let before = self.messages.len();
        self.messages.extend(messages);
        if self.messages.len() != before {
            self.sorted = false;
        }
    }

    /// Sorts by timestamp (stable) and returns the ordered messages.
    ///
    /// Calling it again without adding anything returns the same order.
    pub fn finalize(&mut self) -> &[Message] {
        if !self.sorted {
            self.messages.sort_by_key(Message::timestamp);
            self.sorted = true;
        }
        &self.messages
    }

    /// Consumes the corpus, returning the sorted messages.
    pub fn into_sorted(mut self) -> Vec<Message> {
        self.finalize();
        self.messages
    }

    /// Number of messages collected so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no messages were collected.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
