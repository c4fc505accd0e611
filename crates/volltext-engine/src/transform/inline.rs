//! Inline transformation: routes one element to the box, referenz or
//! formatierung converter.
//!
//! Forward dispatch runs the classifier; inversion dispatches on the
//! rich-text variant, which already encodes that decision.

use log::debug;

use crate::{
    error::SerializationError,
    rich_text::{FormatierungKind, InlineNode, ReferenzKind},
    tree::{Element, classify::is_inline_element},
};

use super::{boxed, formatierung, referenz};

/// Outcome of classifying an element for the inline transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineClass {
    Box,
    Referenz(ReferenzKind),
    Formatierung(FormatierungKind),
}

pub fn classify(element: &Element) -> InlineClass {
    if !is_inline_element(element) {
        return InlineClass::Box;
    }
    if let Some(kind) = referenz::classify(element) {
        return InlineClass::Referenz(kind);
    }
    if let Some(kind) = formatierung::classify(element) {
        return InlineClass::Formatierung(kind);
    }
    InlineClass::Box
}

pub fn transform(element: Element) -> InlineNode {
    match classify(&element) {
        InlineClass::Referenz(kind) => InlineNode::Referenz(referenz::transform(element, kind)),
        InlineClass::Formatierung(kind) => {
            InlineNode::Formatierung(formatierung::transform(element, kind))
        }
        InlineClass::Box => {
            debug!("boxing <{}>", element.origin);
            InlineNode::Box(boxed::transform(element))
        }
    }
}

/// Transformation inside a formatting span, where spans do not nest.
pub(crate) fn transform_nested(element: Element) -> InlineNode {
    match classify(&element) {
        InlineClass::Referenz(kind) => InlineNode::Referenz(referenz::transform(element, kind)),
        InlineClass::Formatierung(_) | InlineClass::Box => {
            debug!("boxing nested <{}>", element.origin);
            InlineNode::Box(boxed::transform(element))
        }
    }
}

pub fn invert(node: &InlineNode, errors: &mut Vec<SerializationError>) -> Element {
    match node {
        InlineNode::Box(b) => boxed::invert(b),
        InlineNode::Referenz(r) => referenz::invert(r, errors),
        InlineNode::Formatierung(f) => formatierung::invert(f, errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{AnnotatedNode, TermKind};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Element::new("persName").with_attr("ref", "gnd:1"), InlineClass::Referenz(ReferenzKind::Person))]
    #[case(Element::new("persName"), InlineClass::Box)]
    #[case(Element::new("placeName").with_attr("ref", "gnd:2"), InlineClass::Referenz(ReferenzKind::Place))]
    #[case(Element::new("ref").with_attr("target", "https://example.org"), InlineClass::Referenz(ReferenzKind::Link))]
    #[case(Element::new("ref"), InlineClass::Box)]
    #[case(
        Element::new("term").with_attr("id", "t").with_attr("type", "textLang"),
        InlineClass::Referenz(ReferenzKind::Term(TermKind::Language))
    )]
    #[case(Element::new("term").with_attr("id", "t").with_attr("type", "material"), InlineClass::Box)]
    #[case(Element::new("title"), InlineClass::Formatierung(FormatierungKind::Title))]
    #[case(Element::new("hi").with_attr("rend", "italic"), InlineClass::Box)]
    #[case(Element::new("note"), InlineClass::Box)]
    #[case(Element::new("locus"), InlineClass::Box)]
    #[case(Element::new("table"), InlineClass::Box)]
    #[case(Element::new("lb").with_attr("n", "3").with_child(AnnotatedNode::text("")), InlineClass::Box)]
    fn dispatch(#[case] element: Element, #[case] expected: InlineClass) {
        assert_eq!(classify(&element), expected);
    }

    #[test]
    fn unknown_elements_round_trip_through_box() {
        let table = Element::new("table")
            .with_attr("rows", "2")
            .with_child(Element::new("row").with_text("a"));
        let node = transform(table.clone());
        assert!(matches!(node, InlineNode::Box(_)));
        assert_eq!(invert(&node, &mut Vec::new()), table);
    }

    #[test]
    fn nested_dispatch_boxes_formatting() {
        assert!(matches!(
            transform_nested(Element::new("title").with_text("x")),
            InlineNode::Box(_)
        ));
        assert!(matches!(
            transform_nested(Element::new("orgName").with_attr("ref", "gnd:3")),
            InlineNode::Referenz(_)
        ));
    }
}
