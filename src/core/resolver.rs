//! Sender identity resolution.
//!
//! Telegram's HTML export omits the sender on "joined" messages, i.e. the
//! second and later messages of a run from the same person. [`SenderResolver`]
//! carries the last effective sender forward through one document so those
//! messages can be attributed, and applies the optional [`RenameTable`].
//!
//! # Example
//!
//! ```
//! use tgpack::core::resolver::{RenameTable, SenderResolver};
//!
//! let renames = RenameTable::new().with_rename("Alice", "Alicia");
//! let mut resolver = SenderResolver::new(&renames);
//!
//! assert_eq!(resolver.resolve(Some("Alice")), "Alicia");
//! assert_eq!(resolver.resolve(None), "Alicia");
//! assert_eq!(resolver.resolve(Some("Bob")), "Bob");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TgpackError};

/// Ordered list of `(from, to)` sender renames.
///
/// Lookups return the first entry whose `from` matches, so duplicate `from`
/// names are allowed and the earliest one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTable {
    pairs: Vec<(String, String)>,
}

impl RenameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a flat `[from, to, from, to, ...]` list, as given
    /// on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`TgpackError::InvalidRenameTable`] when the list has an odd
    /// number of names.
    ///
    /// ```
    /// use tgpack::core::resolver::RenameTable;
    ///
    /// let table = RenameTable::from_flat(["Dave", "David"]).unwrap();
    /// assert_eq!(table.lookup("Dave"), Some("David"));
    ///
    /// assert!(RenameTable::from_flat(["Dave"]).is_err());
    /// ```
    pub fn from_flat<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.len() % 2 != 0 {
            return Err(TgpackError::invalid_rename_table(tokens.len()));
        }

        let mut iter = tokens.into_iter();
        let mut pairs = Vec::new();
        while let (Some(from), Some(to)) = (iter.next(), iter.next()) {
            pairs.push((from, to));
        }
        Ok(Self { pairs })
    }

    /// Appends a rename. Earlier entries keep priority.
    #[must_use]
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.pairs.push((from.into(), to.into()));
        self
    }

    /// Returns the replacement for `name` from the first matching entry.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(from, _)| from == name)
            .map(|(_, to)| to.as_str())
    }

    /// Number of `(from, to)` entries.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no renames are configured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the entries in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(from, to)| (from.as_str(), to.as_str()))
    }
}

/// Resolves the effective sender for each message of one document.
///
/// Create a new resolver for every document; the carried sender must never
/// leak from one export file into the next.
#[derive(Debug)]
pub struct SenderResolver<'a> {
    renames: &'a RenameTable,
    last_sender: String,
}

impl<'a> SenderResolver<'a> {
    /// Creates a resolver with an empty carried sender.
    pub fn new(renames: &'a RenameTable) -> Self {
        Self {
            renames,
            last_sender: String::new(),
        }
    }

    /// Returns the effective sender for a message.
    ///
    /// - `None` (a joined message) yields the carried sender, which is empty
    ///   if no explicit sender has been seen yet in this document.
    /// - `Some(name)` yields `name`, replaced through the rename table.
    ///
    /// Either way the result becomes the new carried sender.
    pub fn resolve(&mut self, raw_name: Option<&str>) -> String {
        if let Some(name) = raw_name {
            let effective = self.renames.lookup(name).unwrap_or(name);
            self.last_sender = effective.to_string();
        }
        self.last_sender.clone()
    }

    /// The sender a joined message would currently inherit.
    pub fn last_sender(&self) -> &str {
        &self.last_sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_pairs() {
        let table = RenameTable::from_flat(vec!["a", "b", "c", "d"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("a"), Some("b"));
        assert_eq!(table.lookup("c"), Some("d"));
        assert_eq!(table.lookup("b"), None);
    }

    #[test]
    fn test_from_flat_empty_is_valid() {
        let table = RenameTable::from_flat(Vec::<String>::new()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_flat_odd_is_rejected() {
        let err = RenameTable::from_flat(["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, TgpackError::InvalidRenameTable { count: 3 }));
    }

    #[test]
    fn test_duplicate_from_first_wins() {
        let table = RenameTable::from_flat(["Ann", "Anna", "Ann", "Annie"]).unwrap();
        assert_eq!(table.lookup("Ann"), Some("Anna"));
    }

    #[test]
    fn test_joined_before_any_sender_is_empty() {
        let table = RenameTable::new();
        let mut resolver = SenderResolver::new(&table);
        assert_eq!(resolver.resolve(None), "");
        assert_eq!(resolver.last_sender(), "");
    }

    #[test]
    fn test_joined_inherits_explicit() {
        let table = RenameTable::new();
        let mut resolver = SenderResolver::new(&table);
        assert_eq!(resolver.resolve(Some("Dave")), "Dave");
        assert_eq!(resolver.resolve(None), "Dave");
        assert_eq!(resolver.resolve(None), "Dave");
    }

    #[test]
    fn test_rename_carries_forward() {
        let table = RenameTable::new().with_rename("Alice", "Alicia");
        let mut resolver = SenderResolver::new(&table);
        let senders: Vec<String> = [Some("Alice"), None, Some("Alice")]
            .into_iter()
            .map(|raw| resolver.resolve(raw))
            .collect();
        assert_eq!(senders, ["Alicia", "Alicia", "Alicia"]);
    }

    #[test]
    fn test_joined_is_not_renamed_again() {
        // Chained renames apply once, to the explicit name only.
        let table = RenameTable::new()
            .with_rename("A", "B")
            .with_rename("B", "C");
        let mut resolver = SenderResolver::new(&table);
        assert_eq!(resolver.resolve(Some("A")), "B");
        assert_eq!(resolver.resolve(None), "B");
        assert_eq!(resolver.resolve(Some("B")), "C");
    }

    #[test]
    fn test_iter_preserves_order() {
        let table = RenameTable::new().with_rename("x", "1").with_rename("y", "2");
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, [("x", "1"), ("y", "2")]);
    }
}
