//! Formatierung conversion: author, title, incipit, explicit, quotation and
//! super/subscript spans.
//!
//! Unlike box and referenz, a formatting span keeps editable children. Its
//! element is retained without children; inversion puts the edited children
//! back.

use crate::{
    error::{SerializationError, record},
    rich_text::{Child, Formatierung, FormatierungKind},
    text::Textual,
    tree::{
        AnnotatedNode, Attr, Element,
        tags::{Rend, Tag},
    },
};

use super::{inline, run::ChildRun};

/// The formatting kind of `element`, if it is one.
pub fn classify(element: &Element) -> Option<FormatierungKind> {
    match element.origin.as_str() {
        Tag::AUTHOR => Some(FormatierungKind::Author),
        Tag::TITLE => Some(FormatierungKind::Title),
        Tag::INCIPIT => Some(FormatierungKind::Incipit),
        Tag::EXPLICIT => Some(FormatierungKind::Explicit),
        Tag::QUOTE => Some(FormatierungKind::Quote),
        Tag::HI => match element.attr(Attr::REND) {
            Some(Rend::SUPERSCRIPT) => Some(FormatierungKind::Superscript),
            Some(Rend::SUBSCRIPT) => Some(FormatierungKind::Subscript),
            _ => None,
        },
        _ => None,
    }
}

pub fn transform(element: Element, kind: FormatierungKind) -> Formatierung {
    let Element {
        origin,
        attributes,
        children,
    } = element;

    let mut run = ChildRun::new();
    for child in children {
        match child {
            AnnotatedNode::Text(text) => run.push_text(text.as_str()),
            AnnotatedNode::Element(element) => run.push_inline(inline::transform_nested(element)),
        }
    }

    let children = run.finish();
    Formatierung {
        kind,
        source: Element {
            origin,
            attributes,
            children: Vec::new(),
        },
        source_was_empty: children.iter().all(Child::is_empty_text),
        children,
    }
}

pub fn invert(node: &Formatierung, errors: &mut Vec<SerializationError>) -> Element {
    let mut element = node.source.clone();
    element.origin = node.kind.tag().to_string();
    if let Some(rend) = node.kind.rend() {
        element.attributes.set(Attr::REND, rend);
    }

    element.children = node
        .children
        .iter()
        .filter(|child| !child.is_empty_text())
        .map(|child| match child {
            Child::Text(text) => AnnotatedNode::Text(text.clone()),
            Child::Inline(inline_node) => AnnotatedNode::Element(inline::invert(inline_node, errors)),
        })
        .collect();

    if element.children.is_empty() && !node.source_was_empty {
        record(
            errors,
            SerializationError::EmptyFormatierung {
                origin: element.origin.clone(),
            },
        );
    }
    element
}
