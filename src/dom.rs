//! Read-only querying of a parsed export document.
//!
//! The extractor only needs a handful of operations: find every message
//! node, find the first descendant field of a node, read an attribute, read
//! trimmed text, and test a class. [`ExportDocument`] and [`ExportNode`]
//! capture exactly that, so extraction can run against `scraper` trees in
//! production and small hand-built trees in tests.
//!
//! All selectors used by Telegram's export are compound class selectors
//! (`.message.default`, `.from_name`), modelled by [`ClassSelector`].

use std::fmt;
use std::str::FromStr;

use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

use crate::error::TgpackError;

/// A compound class selector such as `.message.default`.
///
/// A node matches when it carries every listed class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassSelector {
    classes: Vec<String>,
}

impl ClassSelector {
    /// Builds a selector requiring all of `classes`.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// The required class names.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if the given class set satisfies this selector.
    pub fn matches<'c>(&self, node_classes: impl IntoIterator<Item = &'c str>) -> bool {
        let present: Vec<&str> = node_classes.into_iter().collect();
        self.classes
            .iter()
            .all(|required| present.contains(&required.as_str()))
    }
}

impl FromStr for ClassSelector {
    type Err = TgpackError;

    /// Parses `.a.b` notation. Anything but dot-separated class names is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || {
            TgpackError::invalid_format(
                "selector",
                format!("'{}' is not a class selector like '.message.default'", s),
            )
        };

        let rest = trimmed.strip_prefix('.').ok_or_else(invalid)?;
        let classes: Vec<&str> = rest.split('.').collect();
        if classes
            .iter()
            .any(|c| c.is_empty() || c.chars().any(|ch| ch.is_whitespace() || "#[]>:,".contains(ch)))
        {
            return Err(invalid());
        }
        Ok(Self::new(classes))
    }
}

impl TryFrom<String> for ClassSelector {
    type Error = TgpackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClassSelector> for String {
    fn from(selector: ClassSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for ClassSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

/// A node of an export document.
pub trait ExportNode: Sized {
    /// First descendant (excluding the node itself) matching `selector`, in
    /// document order.
    fn select_first(&self, selector: &ClassSelector) -> Option<Self>;

    /// Value of attribute `name`, if present.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated descendant text, trimmed.
    fn trimmed_text(&self) -> String;

    /// Returns `true` if the node's own class list contains `class`.
    fn has_class(&self, class: &str) -> bool;
}

/// A parsed export document.
pub trait ExportDocument {
    /// Node handle borrowed from the document.
    type Node<'a>: ExportNode
    where
        Self: 'a;

    /// Every node matching `selector`, in document order.
    fn select_all(&self, selector: &ClassSelector) -> Vec<Self::Node<'_>>;
}

// ============================================================================
// scraper adapter
// ============================================================================

/// Parses an HTML string into a queryable document.
///
/// html5ever recovers from malformed markup, so this never fails; a broken
/// export simply yields fewer message nodes.
pub fn parse_html(html: &str) -> Html {
    Html::parse_document(html)
}

impl ExportNode for ElementRef<'_> {
    fn select_first(&self, selector: &ClassSelector) -> Option<Self> {
        self.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el.value().classes()))
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn trimmed_text(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().classes().any(|c| c == class)
    }
}

impl ExportDocument for Html {
    type Node<'a> = ElementRef<'a>;

    fn select_all(&self, selector: &ClassSelector) -> Vec<ElementRef<'_>> {
        self.root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| selector.matches(el.value().classes()))
            .collect()
    }
}
