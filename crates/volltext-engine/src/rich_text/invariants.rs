use std::fmt;

use crate::text::Text;

use super::{
    kind::is_valid_block,
    types::{BoxNode, Child, InlineNode, Referenz, RichElement, Volltext},
};

/// Address of a node: paragraph index followed by child indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(pub Vec<usize>);

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("root children must be a single empty text")]
    RootShape,
    #[error("void <{origin}> at {path} must have exactly one empty text child")]
    VoidShape { path: Path, origin: &'static str },
    #[error("consecutive text runs at {path}")]
    ConsecutiveText { path: Path },
    #[error("inline <{origin}> at {path} is not bordered by text")]
    UnborderedInline { path: Path, origin: &'static str },
    #[error("formatting span nested in formatting span at {path}")]
    NestedFormatierung { path: Path },
    #[error("paragraph at {path} is not a valid block")]
    InvalidBlock { path: Path },
}

/// Every model invariant breach under `root`.
pub fn violations(root: &Volltext) -> Vec<Violation> {
    let mut out = Vec::new();
    if !is_void_shape(&root.children) {
        out.push(Violation::RootShape);
    }
    for (index, block) in root.paragraphs.iter().enumerate() {
        if !matches!(is_valid_block(block), Ok(true)) {
            out.push(Violation::InvalidBlock {
                path: Path(vec![index]),
            });
        }
        check_children(&block.children, vec![index], false, &mut out);
    }
    out
}

/// Validates model invariants.
///
/// # Panics
/// Panics listing every violation if any invariant is broken.
pub fn check(root: &Volltext) {
    let found = violations(root);
    assert!(
        found.is_empty(),
        "rich-text invariants violated:\n{}",
        found
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    );
}

fn is_void_shape(children: &[Text]) -> bool {
    matches!(children, [only] if only.is_empty())
}

fn check_children(children: &[Child], at: Vec<usize>, in_span: bool, out: &mut Vec<Violation>) {
    let path = |i: usize| {
        let mut p = at.clone();
        p.push(i);
        Path(p)
    };

    for (i, pair) in children.windows(2).enumerate() {
        if matches!(pair, [Child::Text(_), Child::Text(_)]) {
            out.push(Violation::ConsecutiveText { path: path(i + 1) });
        }
    }

    for (i, child) in children.iter().enumerate() {
        let Child::Inline(node) = child else {
            continue;
        };
        let before = i.checked_sub(1).and_then(|j| children.get(j));
        let after = children.get(i + 1);
        if !matches!(before, Some(Child::Text(_))) || !matches!(after, Some(Child::Text(_))) {
            out.push(Violation::UnborderedInline {
                path: path(i),
                origin: node.origin(),
            });
        }
        match node {
            InlineNode::Box(BoxNode { children, .. })
            | InlineNode::Referenz(Referenz { children, .. }) => {
                if node.kind().is_void() && !is_void_shape(children) {
                    out.push(Violation::VoidShape {
                        path: path(i),
                        origin: node.origin(),
                    });
                }
            }
            InlineNode::Formatierung(f) => {
                if in_span {
                    out.push(Violation::NestedFormatierung { path: path(i) });
                }
                check_children(&f.children, path(i).0, true, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rich_text::types::{Block, BoxNode, Formatierung, FormatierungKind},
        text::empty_text,
        tree::Element,
    };

    fn chip() -> InlineNode {
        InlineNode::Box(BoxNode {
            source: Element::new("note"),
            content: String::new(),
            children: vec![empty_text()],
        })
    }

    #[test]
    fn empty_root_is_valid() {
        assert!(violations(&Volltext::new(vec![Block::empty()])).is_empty());
    }

    #[test]
    fn consecutive_text_is_reported() {
        let root = Volltext::new(vec![Block::new(vec![Child::text("a"), Child::text("b")])]);
        assert_eq!(
            violations(&root),
            vec![Violation::ConsecutiveText {
                path: Path(vec![0, 1])
            }]
        );
    }

    #[test]
    fn inline_must_be_bordered_by_text() {
        let root = Volltext::new(vec![Block::new(vec![chip().into(), Child::text("")])]);
        assert_eq!(
            violations(&root),
            vec![Violation::UnborderedInline {
                path: Path(vec![0, 0]),
                origin: "box"
            }]
        );
    }

    #[test]
    fn void_children_must_be_the_empty_marker() {
        let mut node = chip();
        if let InlineNode::Box(b) = &mut node {
            b.children = vec![Text::new("x")];
        }
        let root = Volltext::new(vec![Block::new(vec![
            Child::text(""),
            node.into(),
            Child::text(""),
        ])]);
        let found = violations(&root);
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0], Violation::VoidShape { .. }));
    }

    #[test]
    fn nested_formatierung_is_reported() {
        let inner = InlineNode::Formatierung(Formatierung {
            kind: FormatierungKind::Title,
            source: Element::new("title"),
            children: vec![Child::text("Faust")],
            source_was_empty: false,
        });
        let outer = InlineNode::Formatierung(Formatierung {
            kind: FormatierungKind::Quote,
            source: Element::new("quote"),
            children: vec![Child::text(""), inner.into(), Child::text("")],
            source_was_empty: false,
        });
        let root = Volltext::new(vec![Block::new(vec![
            Child::text(""),
            outer.into(),
            Child::text(""),
        ])]);
        assert_eq!(
            violations(&root),
            vec![Violation::NestedFormatierung {
                path: Path(vec![0, 1, 1])
            }]
        );
    }

    #[test]
    #[should_panic(expected = "rich-text invariants violated")]
    fn check_panics_on_violation() {
        let mut root = Volltext::new(vec![Block::empty()]);
        root.children.clear();
        check(&root);
    }
}
