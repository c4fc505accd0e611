//! # Transformations
//!
//! Annotated tree → paragraph list → document root, and back.
//!
//! ## Modules
//!
//! - **`boxed`**: opaque fallback; exact inverse
//! - **`referenz`**: authority names, links and classified terms
//! - **`formatierung`**: editable formatting spans
//! - **`inline`**: dispatch of one element to the converters above
//! - **`paragraph`**: the segmentation fold splitting at linebreaks
//! - **`volltext`**: wrapping the paragraph list in the void root
//!
//! ## Failure model
//!
//! `transform` is total: whatever the classifier does not recognize is boxed.
//! `invert` never aborts; reconciliation conflicts are collected into
//! [`Inverted::errors`] while a best-effort element is emitted.
//!
//! ## Round-trip law
//!
//! `strip_empty_text(invert(transform(xs)).value) == canonical_form(&xs)`.
//! The canonical form applies the declared normalization only: whitespace
//! collapsing, merging of adjacent text nodes and removal of empty-text
//! markers, at paragraph level and inside formatting spans.

pub mod boxed;
pub mod formatierung;
pub mod inline;
pub mod paragraph;
pub mod referenz;
mod run;
pub mod volltext;

use serde::Serialize;

use crate::{
    error::SerializationError,
    rich_text::{RootChild, Volltext},
    text::{Text, Textual, normalize_str, strip_empty_text},
    tree::{AnnotatedNode, Element, classify::is_linebreak},
};

use inline::InlineClass;

/// Inversion result plus the non-fatal conflicts met on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inverted<T> {
    pub value: T,
    pub errors: Vec<SerializationError>,
}

impl<T> Inverted<T> {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Inverted<U> {
        Inverted {
            value: f(self.value),
            errors: self.errors,
        }
    }
}

/// Annotated siblings → editable document root.
pub fn transform(siblings: Vec<AnnotatedNode>) -> Volltext {
    volltext::transform(paragraph::transform(siblings))
}

/// Editable document root → annotated siblings, empty markers included.
pub fn invert(root: &Volltext) -> Inverted<Vec<AnnotatedNode>> {
    let padded: Vec<RootChild> = volltext::invert(root);
    let mut errors = Vec::new();
    let value = paragraph::invert(&padded, &mut errors);
    if !errors.is_empty() {
        log::info!("inverted with {} serialization error(s)", errors.len());
    }
    Inverted { value, errors }
}

/// Transforms the children of a hosting element.
pub fn transform_host(host: &Element) -> Volltext {
    transform(host.children.clone())
}

/// Replaces the children of `host` with the inverted root, empty markers
/// stripped.
pub fn invert_into_host(host: &mut Element, root: &Volltext) -> Vec<SerializationError> {
    let Inverted { value, errors } = invert(root);
    host.children = strip_empty_text(value);
    errors
}

/// Transforms and inverts, stripping empty markers.
pub fn round_trip(siblings: &[AnnotatedNode]) -> Inverted<Vec<AnnotatedNode>> {
    invert(&transform(siblings.to_vec())).map(strip_empty_text)
}

/// The form a sibling sequence takes after a round trip.
pub fn canonical_form(siblings: &[AnnotatedNode]) -> Vec<AnnotatedNode> {
    canonical_run(siblings, false)
}

fn canonical_run(nodes: &[AnnotatedNode], in_span: bool) -> Vec<AnnotatedNode> {
    let mut out: Vec<AnnotatedNode> = Vec::new();
    let mut open = String::new();
    let flush = |open: &mut String, out: &mut Vec<AnnotatedNode>| {
        if !open.is_empty() {
            out.push(AnnotatedNode::Text(Text::new(normalize_str(open))));
            open.clear();
        }
    };

    for node in nodes {
        match node {
            AnnotatedNode::Text(text) => open.push_str(text.as_str()),
            AnnotatedNode::Element(element) => {
                flush(&mut open, &mut out);
                let is_span = !in_span
                    && !is_linebreak(node)
                    && matches!(inline::classify(element), InlineClass::Formatierung(_));
                if is_span {
                    let mut span = element.clone();
                    span.children = canonical_run(&element.children, true);
                    out.push(AnnotatedNode::Element(span));
                } else {
                    out.push(node.clone());
                }
            }
        }
    }
    flush(&mut open, &mut out);
    out.retain(|n| !n.is_empty_text());
    out
}
