use crate::{
    rich_text::{Child, InlineNode},
    text::{Text, empty_text, normalize_str},
};

/// Child list under construction; always ends with an open text run.
///
/// Text is appended raw to the open run and normalized when the run is
/// sealed, so whitespace split across adjacent text nodes still collapses.
/// Every inline node is followed by a fresh empty run, which keeps inline
/// nodes bordered by text and never yields two adjacent runs.
#[derive(Debug)]
pub(crate) struct ChildRun {
    sealed: Vec<Child>,
    open: String,
}

impl ChildRun {
    pub(crate) fn new() -> Self {
        Self {
            sealed: Vec::new(),
            open: String::new(),
        }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.open.push_str(text);
    }

    pub(crate) fn push_inline(&mut self, node: InlineNode) {
        self.seal();
        self.sealed.push(Child::Inline(node));
    }

    pub(crate) fn finish(mut self) -> Vec<Child> {
        self.seal();
        self.sealed
    }

    fn seal(&mut self) {
        let raw = std::mem::take(&mut self.open);
        let text = if raw.is_empty() {
            empty_text()
        } else {
            Text::new(normalize_str(&raw))
        };
        self.sealed.push(Child::Text(text));
    }
}
