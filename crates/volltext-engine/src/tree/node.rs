use serde::{Deserialize, Serialize};

use crate::text::{Text, Textual, empty_text};

use super::{attributes::Attributes, tags::Tag};

/// A node of the annotated tree: a text node or an element.
///
/// Serializes as `{"text": "..."}` or
/// `{"data_origin": "...", "data_<name>": "...", "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotatedNode {
    Element(Element),
    Text(Text),
}

/// An origin-tagged element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "data_origin")]
    pub origin: String,
    #[serde(flatten)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<AnnotatedNode>,
}

impl AnnotatedNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Text::new(text))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenation of every text descendant in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text.as_str()),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl Textual for AnnotatedNode {
    fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl From<Element> for AnnotatedNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for AnnotatedNode {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl Element {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// The canonical linebreak: `lb` with a single empty-text child.
    pub fn linebreak() -> Self {
        Self::new(Tag::LINEBREAK).with_child(empty_text())
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<AnnotatedNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Text::new(text))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn has_origin(&self, origin: &str) -> bool {
        self.origin == origin
    }

    /// True if the only child is the empty-text marker.
    pub fn has_only_empty_text(&self) -> bool {
        matches!(self.children.as_slice(), [only] if only.is_empty_text())
    }

    /// Concatenation of every text descendant in document order.
    pub fn text_content(&self) -> String {
        self.children.iter().map(AnnotatedNode::text_content).collect()
    }
}
