//! # Text Normalizer
//!
//! Whitespace collapsing and the canonical empty-text marker `{text: ""}`.
//! The marker is used wherever the rich-text model needs a placeholder child
//! (void nodes) or a seed for a text run.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A plain string run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Text {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Nodes that may be a text run.
///
/// Implemented by both trees so empty-marker handling is written once.
pub trait Textual {
    fn as_text(&self) -> Option<&Text>;

    fn is_empty_text(&self) -> bool {
        self.as_text().is_some_and(Text::is_empty)
    }
}

impl Textual for Text {
    fn as_text(&self) -> Option<&Text> {
        Some(self)
    }
}

fn whitespace_run() -> &'static Regex {
    static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

/// Collapses every maximal whitespace run to a single ASCII space.
///
/// Leading and trailing whitespace is collapsed but not trimmed.
pub fn normalize(raw: &str) -> Text {
    Text::new(normalize_str(raw))
}

pub fn normalize_str(raw: &str) -> String {
    whitespace_run().replace_all(raw, " ").into_owned()
}

/// Normalized and trimmed; the form used for display strings.
pub fn normalize_display(raw: &str) -> String {
    normalize_str(raw).trim().to_string()
}

/// The canonical empty-text marker.
pub fn empty_text() -> Text {
    Text::default()
}

/// True iff `node` is textual and its string is exactly empty.
pub fn is_empty_text<N: Textual>(node: &N) -> bool {
    node.is_empty_text()
}

/// Drops every empty-text marker from a sibling sequence (not recursive).
pub fn strip_empty_text<N: Textual>(nodes: impl IntoIterator<Item = N>) -> Vec<N> {
    nodes.into_iter().filter(|n| !n.is_empty_text()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("abc", "abc")]
    #[case("a  b", "a b")]
    #[case("  leading", " leading")]
    #[case("trailing \n\t", "trailing ")]
    #[case("line\nbreak\r\nand\ttab", "line break and tab")]
    #[case("non\u{a0}\u{2003}breaking", "non breaking")]
    fn normalize_collapses_whitespace_runs(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), Text::new(expected));
    }

    #[test]
    fn display_form_is_trimmed() {
        assert_eq!(normalize_display("  Johann \n Wolfgang  "), "Johann Wolfgang");
    }

    #[test]
    fn empty_marker_is_recognized() {
        assert!(is_empty_text(&empty_text()));
        assert!(!is_empty_text(&Text::new(" ")));
    }

    #[test]
    fn strip_removes_only_empty_markers() {
        let nodes = vec![Text::new(""), Text::new("a"), Text::new(""), Text::new(" ")];
        assert_eq!(strip_empty_text(nodes), vec![Text::new("a"), Text::new(" ")]);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(once.as_str()), once);
        }

        #[test]
        fn normalize_leaves_no_double_whitespace(s in "[a-z \t\n]{0,40}") {
            let out = normalize(&s);
            prop_assert!(!out.as_str().contains("  "));
            prop_assert!(!out.as_str().contains(['\t', '\n']));
        }
    }
}
