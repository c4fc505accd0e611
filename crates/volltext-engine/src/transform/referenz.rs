//! Referenz conversion: authority names, external links and classified terms.
//!
//! The forward direction lifts identifier, role and display text into
//! first-class fields and keeps the element as the retained subtree. The
//! inverse merges edited fields back onto a copy of that subtree.

use crate::{
    error::{SerializationError, record},
    rich_text::{Referenz, ReferenzKind},
    text::{empty_text, normalize, normalize_display},
    tree::{
        AnnotatedNode, Attr, Element,
        classify::{is_link_element, is_normdatum_element, term_kind},
        tags::Tag,
    },
};

use super::boxed::display_text;

/// The referenz kind of `element`, if it is one.
pub fn classify(element: &Element) -> Option<ReferenzKind> {
    if is_normdatum_element(element) {
        return match element.origin.as_str() {
            Tag::PERS_NAME => Some(ReferenzKind::Person),
            Tag::PLACE_NAME => Some(ReferenzKind::Place),
            Tag::ORG_NAME => Some(ReferenzKind::Organisation),
            _ => None,
        };
    }
    if is_link_element(element) {
        return Some(ReferenzKind::Link);
    }
    term_kind(element).map(ReferenzKind::Term)
}

pub fn transform(element: Element, kind: ReferenzKind) -> Referenz {
    let identifier = element
        .attr(kind.identifier_attribute())
        .map(str::to_string);
    let role = element.attr(Attr::ROLE).map(str::to_string);
    Referenz {
        kind,
        content: display_text(&element),
        identifier,
        role,
        source: element,
        children: vec![empty_text()],
    }
}

pub fn invert(node: &Referenz, errors: &mut Vec<SerializationError>) -> Element {
    let mut element = node.source.clone();
    element.origin = node.kind.tag().to_string();
    if let ReferenzKind::Term(term) = node.kind {
        element.attributes.set(Attr::TYPE, term.as_type());
    }

    let attribute = node.kind.identifier_attribute();
    match node.identifier.as_deref() {
        Some(id) if !id.trim().is_empty() => element.attributes.set(attribute, id),
        _ => record(
            errors,
            SerializationError::MissingIdentifier {
                origin: element.origin.clone(),
                attribute: attribute.to_string(),
            },
        ),
    }

    match node.role.as_deref() {
        Some(role) => element.attributes.set(Attr::ROLE, role),
        None => {
            element.attributes.remove(Attr::ROLE);
        }
    }

    merge_content(&mut element, &node.content, errors);
    element
}

/// Writes edited display text back into the children where that is lossless.
fn merge_content(element: &mut Element, content: &str, errors: &mut Vec<SerializationError>) {
    let edited = normalize_display(content);
    if edited == display_text(element) {
        return;
    }
    if edited.is_empty() {
        record(
            errors,
            SerializationError::EmptyContent {
                origin: element.origin.clone(),
            },
        );
        return;
    }
    if element.children.iter().all(AnnotatedNode::is_text) {
        element.children = vec![AnnotatedNode::Text(normalize(&edited))];
    } else {
        record(
            errors,
            SerializationError::StructuredContentEdited {
                origin: element.origin.clone(),
                content: edited,
            },
        );
    }
}
