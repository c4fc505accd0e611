use std::ops::Range;

use log::debug;

use crate::{
    error::VolltextError,
    rich_text::{
        Block, Child, ElementKind, InlineNode, RichElement, Volltext,
        invariants::{self, Violation},
    },
    text::{Text, strip_empty_text},
    transform::{self, Inverted},
    tree::AnnotatedNode,
};

use super::{
    commands::{Cmd, NodePath, ReferenzUpdate, TextPosition},
    patch::Patch,
};

/// Why a command was rejected. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no paragraph {0}")]
    NoSuchParagraph(usize),
    #[error("paragraph {paragraph} has no child {child}")]
    NoSuchChild { paragraph: usize, child: usize },
    #[error("child {child} of paragraph {paragraph} is not a text run")]
    NotText { paragraph: usize, child: usize },
    #[error("child {child} of paragraph {paragraph} is not an inline node")]
    NotInline { paragraph: usize, child: usize },
    #[error("child {child} of paragraph {paragraph} is not a referenz")]
    NotReferenz { paragraph: usize, child: usize },
    #[error("offset {offset} is not a character boundary in a run of {len} bytes")]
    BadOffset { offset: usize, len: usize },
    #[error("paragraph {0} has no next paragraph")]
    NoNextParagraph(usize),
    #[error("<{origin}> is not an inline {kind:?} node")]
    NotInlineKind {
        origin: &'static str,
        kind: ElementKind,
    },
    #[error("inline node rejected: {0}")]
    InvalidInline(Violation),
    #[error("root rejected: {0}")]
    InvalidRoot(Violation),
    #[error(transparent)]
    Fatal(#[from] VolltextError),
}

type Applied = Result<(Range<usize>, Option<TextPosition>), EditError>;

/// One editing session over a document root.
///
/// Every accepted command keeps the model invariants and bumps the version.
#[derive(Debug, Clone)]
pub struct EditSession {
    root: Volltext,
    version: u64,
}

impl EditSession {
    /// Opens a session on the transformed annotated siblings.
    pub fn open(siblings: Vec<AnnotatedNode>) -> Self {
        Self {
            root: transform::transform(siblings),
            version: 0,
        }
    }

    /// Opens a session on an existing root, which must keep the model
    /// invariants.
    pub fn from_root(root: Volltext) -> Result<Self, EditError> {
        if let Some(violation) = invariants::violations(&root).into_iter().next() {
            return Err(EditError::InvalidRoot(violation));
        }
        Ok(Self { root, version: 0 })
    }

    pub fn root(&self) -> &Volltext {
        &self.root
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        debug!("applying {cmd:?}");
        let (changed, caret) = match cmd {
            Cmd::InsertText { at, text } => self.insert_text(at, &text),
            Cmd::SplitParagraph { at } => self.split_paragraph(at),
            Cmd::MergeWithNext { paragraph } => self.merge_with_next(paragraph),
            Cmd::InsertInline { at, node } => self.insert_inline(at, node),
            Cmd::RemoveInline { at } => self.remove_inline(at),
            Cmd::UpdateReferenz { at, update } => self.update_referenz(at, update),
        }?;
        self.version += 1;
        debug_assert!(invariants::violations(&self.root).is_empty());
        Ok(Patch {
            changed,
            caret,
            version: self.version,
        })
    }

    /// Inverts the session's root; empty markers are stripped.
    pub fn commit(&self) -> Inverted<Vec<AnnotatedNode>> {
        transform::invert(&self.root).map(strip_empty_text)
    }

    fn insert_text(&mut self, at: TextPosition, text: &str) -> Applied {
        self.text_at(at)?.text.insert_str(at.offset, text);
        let caret = TextPosition::new(at.paragraph, at.child, at.offset + text.len());
        Ok((at.paragraph..at.paragraph + 1, Some(caret)))
    }

    fn split_paragraph(&mut self, at: TextPosition) -> Applied {
        let right = self.text_at(at)?.text.split_off(at.offset);
        let block = &mut self.root.paragraphs[at.paragraph];
        let mut tail = block.children.split_off(at.child + 1);
        tail.insert(0, Child::Text(Text::new(right)));
        self.root
            .paragraphs
            .insert(at.paragraph + 1, Block::new(tail));
        let caret = TextPosition::new(at.paragraph + 1, 0, 0);
        Ok((at.paragraph..at.paragraph + 2, Some(caret)))
    }

    fn merge_with_next(&mut self, paragraph: usize) -> Applied {
        let count = self.root.paragraphs.len();
        if paragraph >= count {
            return Err(EditError::NoSuchParagraph(paragraph));
        }
        if paragraph + 1 == count {
            return Err(EditError::NoNextParagraph(paragraph));
        }
        let next = self.root.paragraphs.remove(paragraph + 1);
        let children = &mut self.root.paragraphs[paragraph].children;
        let seam = children.len();
        children.extend(next.children);
        let caret = merge_adjacent_text(children, seam)
            .map(|offset| TextPosition::new(paragraph, seam - 1, offset));
        Ok((paragraph..paragraph + 1, caret))
    }

    fn insert_inline(&mut self, at: TextPosition, node: InlineNode) -> Applied {
        self.text_at(at)?;
        ensure_inline(node.origin(), node.kind())?;
        validate_inline(&node)?;
        let right = self.text_at(at)?.text.split_off(at.offset);
        let children = &mut self.root.paragraphs[at.paragraph].children;
        children.splice(
            at.child + 1..at.child + 1,
            [Child::Inline(node), Child::Text(Text::new(right))],
        );
        let caret = TextPosition::new(at.paragraph, at.child + 2, 0);
        Ok((at.paragraph..at.paragraph + 1, Some(caret)))
    }

    fn remove_inline(&mut self, at: NodePath) -> Applied {
        let children = &mut self.paragraph_mut(at.paragraph)?.children;
        match children.get(at.child) {
            Some(Child::Inline(_)) => {}
            Some(Child::Text(_)) => {
                return Err(EditError::NotInline {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
            None => {
                return Err(EditError::NoSuchChild {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
        }
        children.remove(at.child);
        let caret = merge_adjacent_text(children, at.child)
            .map(|offset| TextPosition::new(at.paragraph, at.child - 1, offset));
        Ok((at.paragraph..at.paragraph + 1, caret))
    }

    fn update_referenz(&mut self, at: NodePath, update: ReferenzUpdate) -> Applied {
        let children = &mut self.paragraph_mut(at.paragraph)?.children;
        let referenz = match children.get_mut(at.child) {
            Some(Child::Inline(InlineNode::Referenz(referenz))) => referenz,
            Some(_) => {
                return Err(EditError::NotReferenz {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
            None => {
                return Err(EditError::NoSuchChild {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
        };

        let ReferenzUpdate {
            content,
            identifier,
            role,
        } = update;
        if let Some(content) = content {
            referenz.content = content;
        }
        if let Some(identifier) = identifier {
            referenz.identifier = Some(identifier);
        }
        if let Some(role) = role {
            referenz.role = role;
        }
        Ok((at.paragraph..at.paragraph + 1, None))
    }

    fn paragraph_mut(&mut self, index: usize) -> Result<&mut Block, EditError> {
        self.root
            .paragraphs
            .get_mut(index)
            .ok_or(EditError::NoSuchParagraph(index))
    }

    /// The text run at `at`, with `at.offset` checked against it.
    fn text_at(&mut self, at: TextPosition) -> Result<&mut Text, EditError> {
        let block = self.paragraph_mut(at.paragraph)?;
        let run = match block.children.get_mut(at.child) {
            Some(Child::Text(run)) => run,
            Some(Child::Inline(_)) => {
                return Err(EditError::NotText {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
            None => {
                return Err(EditError::NoSuchChild {
                    paragraph: at.paragraph,
                    child: at.child,
                });
            }
        };
        if !run.text.is_char_boundary(at.offset) {
            return Err(EditError::BadOffset {
                offset: at.offset,
                len: run.text.len(),
            });
        }
        Ok(run)
    }
}

/// The vocabulary must list `origin` as an inline tag of `kind`.
fn ensure_inline(origin: &'static str, kind: ElementKind) -> Result<(), EditError> {
    let listed = ElementKind::of(origin)?;
    if listed != kind || !listed.is_inline() {
        return Err(EditError::NotInlineKind { origin, kind });
    }
    Ok(())
}

/// Rejects inline nodes that would break the model inside a paragraph.
fn validate_inline(node: &InlineNode) -> Result<(), EditError> {
    let scratch = Volltext::new(vec![Block::new(vec![
        Child::text(""),
        Child::Inline(node.clone()),
        Child::text(""),
    ])]);
    match invariants::violations(&scratch).into_iter().next() {
        Some(violation) => Err(EditError::InvalidInline(violation)),
        None => Ok(()),
    }
}

/// Joins `children[index - 1]` and `children[index]` when both are text.
///
/// Returns the byte offset of the seam within the joined run.
fn merge_adjacent_text(children: &mut Vec<Child>, index: usize) -> Option<usize> {
    if index == 0 || index >= children.len() {
        return None;
    }
    if !matches!(
        (&children[index - 1], &children[index]),
        (Child::Text(_), Child::Text(_))
    ) {
        return None;
    }
    let Child::Text(right) = children.remove(index) else {
        return None;
    };
    let Child::Text(left) = &mut children[index - 1] else {
        return None;
    };
    let seam = left.text.len();
    left.text.push_str(&right.text);
    Some(seam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::SerializationError,
        rich_text::invariants::check,
        transform::inline,
        tree::Element,
    };
    use pretty_assertions::assert_eq;

    fn t(s: &str) -> AnnotatedNode {
        AnnotatedNode::text(s)
    }

    fn lb() -> AnnotatedNode {
        Element::linebreak().into()
    }

    fn goethe() -> Element {
        Element::new("persName")
            .with_attr("ref", "gnd:118540238")
            .with_text("Goethe")
    }

    fn letter() -> Vec<AnnotatedNode> {
        vec![t("Brief an "), goethe().into(), t(", Weimar"), lb(), t("1799")]
    }

    #[test]
    fn untouched_session_commits_the_input() {
        let session = EditSession::open(letter());
        let committed = session.commit();
        assert!(committed.is_clean());
        assert_eq!(committed.value, letter());
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn insert_text_moves_caret_and_bumps_version() {
        let mut session = EditSession::open(letter());
        let patch = session
            .apply(Cmd::InsertText {
                at: TextPosition::new(1, 0, 4),
                text: "-12".to_string(),
            })
            .unwrap();
        assert_eq!(patch.changed, 1..2);
        assert_eq!(patch.caret, Some(TextPosition::new(1, 0, 7)));
        assert_eq!(patch.version, 1);
        assert_eq!(session.commit().value.last(), Some(&t("1799-12")));
    }

    #[test]
    fn split_then_merge_restores_the_root() {
        let mut session = EditSession::open(letter());
        let before = session.root().clone();

        let patch = session
            .apply(Cmd::SplitParagraph {
                at: TextPosition::new(0, 0, 5),
            })
            .unwrap();
        assert_eq!(patch.changed, 0..2);
        assert_eq!(session.root().paragraphs.len(), 3);
        check(session.root());
        assert_eq!(
            session.commit().value[..3].to_vec(),
            vec![t("Brief"), lb(), t(" an ")]
        );

        let patch = session.apply(Cmd::MergeWithNext { paragraph: 0 }).unwrap();
        assert_eq!(patch.caret, Some(TextPosition::new(0, 0, 5)));
        assert_eq!(session.root(), &before);
        assert_eq!(session.version(), 2);
    }

    #[test]
    fn split_at_end_of_run_opens_empty_paragraph() {
        let mut session = EditSession::open(vec![t("Weimar")]);
        session
            .apply(Cmd::SplitParagraph {
                at: TextPosition::new(0, 0, 6),
            })
            .unwrap();
        assert_eq!(session.root().paragraphs[1], Block::empty());
        check(session.root());
    }

    #[test]
    fn insert_and_remove_inline() {
        let mut session = EditSession::open(vec![t("Brief an Weimar")]);
        let node = inline::transform(goethe());

        let patch = session
            .apply(Cmd::InsertInline {
                at: TextPosition::new(0, 0, 9),
                node,
            })
            .unwrap();
        assert_eq!(patch.caret, Some(TextPosition::new(0, 2, 0)));
        check(session.root());
        assert_eq!(
            session.commit().value,
            vec![t("Brief an "), goethe().into(), t("Weimar")]
        );

        let patch = session
            .apply(Cmd::RemoveInline {
                at: NodePath::new(0, 1),
            })
            .unwrap();
        assert_eq!(patch.caret, Some(TextPosition::new(0, 0, 9)));
        assert_eq!(session.commit().value, vec![t("Brief an Weimar")]);
    }

    #[test]
    fn nested_formatting_is_rejected() {
        let mut title = inline::transform(Element::new("title").with_text("Faust"));
        if let InlineNode::Formatierung(span) = &mut title {
            span.children = vec![
                Child::text(""),
                Child::Inline(inline::transform(Element::new("quote").with_text("x"))),
                Child::text(""),
            ];
        }
        let mut session = EditSession::open(vec![t("a")]);
        let before = session.root().clone();

        let err = session
            .apply(Cmd::InsertInline {
                at: TextPosition::new(0, 0, 0),
                node: title,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            EditError::InvalidInline(Violation::NestedFormatierung { .. })
        ));
        assert_eq!(session.root(), &before);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn update_referenz_fields_reach_the_tree() {
        let mut session = EditSession::open(letter());
        session
            .apply(Cmd::UpdateReferenz {
                at: NodePath::new(0, 1),
                update: ReferenzUpdate {
                    content: Some("J. W. Goethe".to_string()),
                    role: Some(Some("recipient".to_string())),
                    ..Default::default()
                },
            })
            .unwrap();
        let committed = session.commit();
        assert!(committed.is_clean());
        assert_eq!(
            committed.value[1],
            AnnotatedNode::from(
                Element::new("persName")
                    .with_attr("ref", "gnd:118540238")
                    .with_attr("role", "recipient")
                    .with_text("J. W. Goethe")
            )
        );
    }

    #[test]
    fn blank_identifier_surfaces_on_commit() {
        let mut session = EditSession::open(letter());
        session
            .apply(Cmd::UpdateReferenz {
                at: NodePath::new(0, 1),
                update: ReferenzUpdate {
                    identifier: Some("  ".to_string()),
                    ..Default::default()
                },
            })
            .unwrap();
        let committed = session.commit();
        assert_eq!(committed.value, letter());
        assert_eq!(
            committed.errors,
            vec![SerializationError::MissingIdentifier {
                origin: "persName".to_string(),
                attribute: "ref".to_string(),
            }]
        );
    }

    #[test]
    fn rejected_commands() {
        let mut session = EditSession::open(letter());
        assert_eq!(
            session.apply(Cmd::MergeWithNext { paragraph: 1 }),
            Err(EditError::NoNextParagraph(1))
        );
        assert_eq!(
            session.apply(Cmd::MergeWithNext { paragraph: 7 }),
            Err(EditError::NoSuchParagraph(7))
        );
        assert_eq!(
            session.apply(Cmd::RemoveInline {
                at: NodePath::new(0, 0)
            }),
            Err(EditError::NotInline {
                paragraph: 0,
                child: 0
            })
        );
        assert_eq!(
            session.apply(Cmd::SplitParagraph {
                at: TextPosition::new(0, 1, 0)
            }),
            Err(EditError::NotText {
                paragraph: 0,
                child: 1
            })
        );
        assert_eq!(
            session.apply(Cmd::UpdateReferenz {
                at: NodePath::new(0, 2),
                update: ReferenzUpdate::default(),
            }),
            Err(EditError::NotReferenz {
                paragraph: 0,
                child: 2
            })
        );
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn from_root_accepts_a_transformed_root() {
        let session = EditSession::from_root(transform::transform(letter())).unwrap();
        assert_eq!(session.commit().value, letter());
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn from_root_rejects_a_broken_root() {
        let root = Volltext::new(vec![Block::new(vec![Child::text("a"), Child::text("b")])]);
        assert!(matches!(
            EditSession::from_root(root),
            Err(EditError::InvalidRoot(Violation::ConsecutiveText { .. }))
        ));
    }

    #[test]
    fn unknown_origin_is_fatal() {
        assert_eq!(
            ensure_inline("hi", ElementKind::Formatierung),
            Err(EditError::Fatal(VolltextError::UnknownOrigin("hi".to_string())))
        );
    }

    #[test]
    fn only_inline_kinds_are_inserted() {
        assert_eq!(ensure_inline("persName", ElementKind::Referenz), Ok(()));
        assert_eq!(ensure_inline("box", ElementKind::Box), Ok(()));
        assert_eq!(
            ensure_inline("paragraph", ElementKind::Block),
            Err(EditError::NotInlineKind {
                origin: "paragraph",
                kind: ElementKind::Block
            })
        );
        assert_eq!(
            ensure_inline("title", ElementKind::Referenz),
            Err(EditError::NotInlineKind {
                origin: "title",
                kind: ElementKind::Referenz
            })
        );
    }

    #[test]
    fn offset_must_be_a_char_boundary() {
        let mut session = EditSession::open(vec![t("Müller")]);
        assert_eq!(
            session.apply(Cmd::InsertText {
                at: TextPosition::new(0, 0, 2),
                text: "x".to_string(),
            }),
            Err(EditError::BadOffset { offset: 2, len: 7 })
        );
    }
}
