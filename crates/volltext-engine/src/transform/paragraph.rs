//! Paragraph transformation: segments a flat sibling sequence into paragraphs.
//!
//! Each sibling is classified into one of three transitions:
//!
//! | Transition      | Trigger                   | Effect                                   |
//! |-----------------|---------------------------|------------------------------------------|
//! | `Text`          | text node                 | append to the open text run              |
//! | `NewParagraph`  | plain `lb` void element   | close the paragraph, open a fresh one    |
//! | `InlineElement` | anything else             | inline-transform, then open a new run    |
//!
//! `k` linebreaks always yield `k + 1` paragraphs. Inversion flattens the
//! paragraphs and puts a canonical `lb` between consecutive ones.

use crate::{
    error::SerializationError,
    rich_text::{Block, Child, RootChild},
    tree::{AnnotatedNode, Element, classify::is_linebreak},
};

use super::{inline, run::ChildRun};

#[derive(Debug)]
enum Transition {
    Text(String),
    NewParagraph,
    InlineElement(Element),
}

impl Transition {
    fn of(node: AnnotatedNode) -> Self {
        if is_linebreak(&node) {
            return Self::NewParagraph;
        }
        match node {
            AnnotatedNode::Text(text) => Self::Text(text.text),
            AnnotatedNode::Element(element) => Self::InlineElement(element),
        }
    }
}

/// Fold state: closed paragraphs plus the paragraph being filled.
pub(crate) struct ParagraphBuilder {
    paragraphs: Vec<Block>,
    current: ChildRun,
}

impl ParagraphBuilder {
    /// Starts with one open, empty paragraph.
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            current: ChildRun::new(),
        }
    }

    pub(crate) fn push(&mut self, node: AnnotatedNode) {
        match Transition::of(node) {
            Transition::Text(text) => self.current.push_text(&text),
            Transition::NewParagraph => self.flush_paragraph(),
            Transition::InlineElement(element) => {
                self.current.push_inline(inline::transform(element));
            }
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.paragraphs
    }

    fn flush_paragraph(&mut self) {
        let run = std::mem::replace(&mut self.current, ChildRun::new());
        self.paragraphs.push(Block::new(run.finish()));
    }
}

pub fn transform(siblings: Vec<AnnotatedNode>) -> Vec<Block> {
    let mut builder = ParagraphBuilder::new();
    for node in siblings {
        builder.push(node);
    }
    builder.finish()
}

/// Flattens paragraphs, inserting a canonical linebreak between consecutive
/// ones. Text positions between paragraphs pass through as text nodes.
pub fn invert(nodes: &[RootChild], errors: &mut Vec<SerializationError>) -> Vec<AnnotatedNode> {
    let mut out = Vec::new();
    let mut seen_paragraph = false;
    for node in nodes {
        match node {
            RootChild::Text(text) => out.push(AnnotatedNode::Text(text.clone())),
            RootChild::Block(block) => {
                if seen_paragraph {
                    out.push(AnnotatedNode::Element(Element::linebreak()));
                }
                seen_paragraph = true;
                out.extend(invert_children(&block.children, errors));
            }
        }
    }
    out
}

pub(crate) fn invert_children(
    children: &[Child],
    errors: &mut Vec<SerializationError>,
) -> Vec<AnnotatedNode> {
    children
        .iter()
        .map(|child| match child {
            Child::Text(text) => AnnotatedNode::Text(text.clone()),
            Child::Inline(node) => AnnotatedNode::Element(inline::invert(node, errors)),
        })
        .collect()
}
