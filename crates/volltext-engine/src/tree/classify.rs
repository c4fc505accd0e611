//! # Node Classifier
//!
//! Total predicates over annotated-tree nodes. None of them fail: an
//! unrecognized node answers `false` everywhere, which the inline
//! transformation treats as "fall back to box".

use serde::{Deserialize, Serialize};

use super::{
    attributes::Attr,
    node::{AnnotatedNode, Element},
    tags::{Tag, TermType},
};

/// Sub-classification of a well-formed `term` by its `data_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TermKind {
    /// `textLang`: identifies the language of a text.
    Language,
    /// `origPlace`: identifies the place a manuscript was made.
    OriginPlace,
}

impl TermKind {
    pub fn from_type(value: &str) -> Option<Self> {
        match value {
            TermType::LANGUAGE => Some(Self::Language),
            TermType::ORIGIN_PLACE => Some(Self::OriginPlace),
            _ => None,
        }
    }

    pub fn as_type(self) -> &'static str {
        match self {
            Self::Language => TermType::LANGUAGE,
            Self::OriginPlace => TermType::ORIGIN_PLACE,
        }
    }
}

pub fn is_text(node: &AnnotatedNode) -> bool {
    node.is_text()
}

/// Allow-listed self-closing tag whose sole child is the empty-text marker.
pub fn is_void_element(element: &Element) -> bool {
    Tag::VOID.contains(&element.origin.as_str()) && element.has_only_empty_text()
}

/// A void `lb` without attributes: the paragraph separator.
///
/// Attributed linebreaks are not separators; they are boxed so their
/// attributes survive the round trip.
pub fn is_linebreak(node: &AnnotatedNode) -> bool {
    node.as_element().is_some_and(|element| {
        element.has_origin(Tag::LINEBREAK)
            && element.attributes.is_empty()
            && is_void_element(element)
    })
}

pub fn is_inline_element(element: &Element) -> bool {
    Tag::INLINE.contains(&element.origin.as_str())
}

/// Carries a well-formed `(id, type)` pair; `ref` and `key` must be
/// non-blank when present.
pub fn is_term_element(element: &Element) -> bool {
    let attrs = &element.attributes;
    element.has_origin(Tag::TERM)
        && attrs.get_non_blank(Attr::ID).is_some()
        && attrs.get_non_blank(Attr::TYPE).is_some()
        && [Attr::REF, Attr::KEY]
            .iter()
            .all(|name| !attrs.contains(name) || attrs.get_non_blank(name).is_some())
}

/// The recognized kind of a well-formed term.
pub fn term_kind(element: &Element) -> Option<TermKind> {
    if !is_term_element(element) {
        return None;
    }
    element.attr(Attr::TYPE).and_then(TermKind::from_type)
}

/// Person, place or organisation name with a non-blank `ref`.
pub fn is_normdatum_element(element: &Element) -> bool {
    Tag::NORMDATUM.contains(&element.origin.as_str())
        && element.attributes.get_non_blank(Attr::REF).is_some()
}

/// `ref` element with a non-blank `target`.
pub fn is_link_element(element: &Element) -> bool {
    element.has_origin(Tag::REF) && element.attributes.get_non_blank(Attr::TARGET).is_some()
}
