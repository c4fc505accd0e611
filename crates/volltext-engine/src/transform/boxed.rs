//! Box transformation: the universal fallback.
//!
//! Any element can be boxed, so the forward transformation is total. The
//! inverse hands back the stored subtree untouched.

use crate::{
    rich_text::BoxNode,
    text::{empty_text, normalize_display},
    tree::Element,
};

/// Display string of a subtree: every text descendant in document order,
/// whitespace collapsed and trimmed.
pub fn display_text(element: &Element) -> String {
    normalize_display(&element.text_content())
}

pub fn transform(element: Element) -> BoxNode {
    BoxNode {
        content: display_text(&element),
        source: element,
        children: vec![empty_text()],
    }
}

pub fn invert(node: &BoxNode) -> Element {
    node.source.clone()
}
