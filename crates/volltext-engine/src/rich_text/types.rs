use serde::{Deserialize, Serialize};

use crate::{
    text::{Text, Textual, empty_text},
    tree::{
        Attr, Element, TermKind,
        tags::{Rend, Tag},
    },
};

use super::kind::ElementKind;

/// Common surface of every rich-text element: its origin tag and kind.
pub trait RichElement {
    /// The rich-text origin tag, as looked up by [`ElementKind::of`].
    fn origin(&self) -> &'static str;
    fn kind(&self) -> ElementKind;
}

/// The document root: a void container owning the paragraph list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volltext {
    pub paragraphs: Vec<Block>,
    pub children: Vec<Text>,
}

impl Volltext {
    pub const ORIGIN: &'static str = "volltext";

    pub fn new(paragraphs: Vec<Block>) -> Self {
        Self {
            paragraphs,
            children: vec![empty_text()],
        }
    }
}

/// A paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub children: Vec<Child>,
}

impl Block {
    pub const ORIGIN: &'static str = "paragraph";

    /// A paragraph holding one empty text run.
    pub fn empty() -> Self {
        Self {
            children: vec![Child::Text(empty_text())],
        }
    }

    pub fn new(children: Vec<Child>) -> Self {
        Self { children }
    }
}

/// Sequence element produced by inverting the root: paragraphs padded with
/// text positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RootChild {
    Text(Text),
    Block(Block),
}

impl Textual for RootChild {
    fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Block(_) => None,
        }
    }
}

/// Child of a paragraph or formatting span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(Text),
    Inline(InlineNode),
}

impl Child {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(Text::new(text))
    }
}

impl Textual for Child {
    fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Inline(_) => None,
        }
    }
}

impl From<InlineNode> for Child {
    fn from(node: InlineNode) -> Self {
        Self::Inline(node)
    }
}

impl From<Text> for Child {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// The three inline kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineNode {
    Box(BoxNode),
    Referenz(Referenz),
    Formatierung(Formatierung),
}

/// Opaque chip retaining an annotated subtree verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxNode {
    #[serde(rename = "box")]
    pub source: Element,
    pub content: String,
    pub children: Vec<Text>,
}

impl BoxNode {
    pub const ORIGIN: &'static str = "box";
}

/// Authority link, external link or classified-subject link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referenz {
    pub kind: ReferenzKind,
    pub content: String,
    /// Opaque identifier handed to the reference-resolution collaborator.
    pub identifier: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "box")]
    pub source: Element,
    pub children: Vec<Text>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenzKind {
    Person,
    Place,
    Organisation,
    Link,
    Term(TermKind),
}

impl ReferenzKind {
    /// Annotated-tree tag; also the rich-text origin.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Person => Tag::PERS_NAME,
            Self::Place => Tag::PLACE_NAME,
            Self::Organisation => Tag::ORG_NAME,
            Self::Link => Tag::REF,
            Self::Term(_) => Tag::TERM,
        }
    }

    /// Attribute holding the identifier for this kind.
    pub fn identifier_attribute(self) -> &'static str {
        match self {
            Self::Person | Self::Place | Self::Organisation => Attr::REF,
            Self::Link => Attr::TARGET,
            Self::Term(_) => Attr::ID,
        }
    }
}

/// Editable formatting span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatierung {
    pub kind: FormatierungKind,
    /// The span's element with its children removed.
    #[serde(rename = "box")]
    pub source: Element,
    pub children: Vec<Child>,
    /// The span had no content when it was read, so inverting it empty is
    /// not an edit.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub source_was_empty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatierungKind {
    Author,
    Title,
    Incipit,
    Explicit,
    Quote,
    Superscript,
    Subscript,
}

impl FormatierungKind {
    pub fn origin(self) -> &'static str {
        match self {
            Self::Superscript => Rend::SUPERSCRIPT,
            Self::Subscript => Rend::SUBSCRIPT,
            other => other.tag(),
        }
    }

    /// Annotated-tree tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Author => Tag::AUTHOR,
            Self::Title => Tag::TITLE,
            Self::Incipit => Tag::INCIPIT,
            Self::Explicit => Tag::EXPLICIT,
            Self::Quote => Tag::QUOTE,
            Self::Superscript | Self::Subscript => Tag::HI,
        }
    }

    /// `data_rend` value required on the element, if any.
    pub fn rend(self) -> Option<&'static str> {
        match self {
            Self::Superscript => Some(Rend::SUPERSCRIPT),
            Self::Subscript => Some(Rend::SUBSCRIPT),
            _ => None,
        }
    }
}

impl RichElement for Volltext {
    fn origin(&self) -> &'static str {
        Self::ORIGIN
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Box
    }
}

impl RichElement for Block {
    fn origin(&self) -> &'static str {
        Self::ORIGIN
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Block
    }
}

impl RichElement for BoxNode {
    fn origin(&self) -> &'static str {
        Self::ORIGIN
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Box
    }
}

impl RichElement for Referenz {
    fn origin(&self) -> &'static str {
        self.kind.tag()
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Referenz
    }
}

impl RichElement for Formatierung {
    fn origin(&self) -> &'static str {
        self.kind.origin()
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Formatierung
    }
}

impl RichElement for InlineNode {
    fn origin(&self) -> &'static str {
        match self {
            Self::Box(node) => node.origin(),
            Self::Referenz(node) => node.origin(),
            Self::Formatierung(node) => node.origin(),
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            Self::Box(node) => node.kind(),
            Self::Referenz(node) => node.kind(),
            Self::Formatierung(node) => node.kind(),
        }
    }
}
