use crate::rich_text::InlineNode;

/// A caret inside a paragraph-level text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    pub paragraph: usize,
    /// Index of the text child within the paragraph.
    pub child: usize,
    /// Byte offset within that text child.
    pub offset: usize,
}

impl TextPosition {
    pub fn new(paragraph: usize, child: usize, offset: usize) -> Self {
        Self {
            paragraph,
            child,
            offset,
        }
    }
}

/// Address of a paragraph-level child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePath {
    pub paragraph: usize,
    pub child: usize,
}

impl NodePath {
    pub fn new(paragraph: usize, child: usize) -> Self {
        Self { paragraph, child }
    }
}

/// Field edits for a referenz; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenzUpdate {
    pub content: Option<String>,
    pub identifier: Option<String>,
    /// `Some(None)` clears the role.
    pub role: Option<Option<String>>,
}

/// Commands that can be applied to an editing session
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    InsertText {
        at: TextPosition,
        text: String,
    },
    SplitParagraph {
        at: TextPosition,
    },
    MergeWithNext {
        paragraph: usize,
    },
    InsertInline {
        at: TextPosition,
        node: InlineNode,
    },
    RemoveInline {
        at: NodePath,
    },
    UpdateReferenz {
        at: NodePath,
        update: ReferenzUpdate,
    },
}
