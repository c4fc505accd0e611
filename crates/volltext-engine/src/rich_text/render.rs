//! Interface for presentation layers.
//!
//! A renderer receives one callback per node kind. Void kinds (box,
//! referenz) get a single call; formatting spans bracket their children.
//! The plain-text renderer here backs the CLI preview.

use crate::text::Text;

use super::types::{
    Block, BoxNode, Child, Formatierung, FormatierungKind, InlineNode, Referenz, Volltext,
};

pub trait Renderer {
    fn paragraph_start(&mut self, _block: &Block) {}
    fn paragraph_end(&mut self, _block: &Block) {}
    fn text(&mut self, text: &Text);
    fn boxed(&mut self, node: &BoxNode);
    fn referenz(&mut self, node: &Referenz);
    fn formatierung_start(&mut self, _node: &Formatierung) {}
    fn formatierung_end(&mut self, _node: &Formatierung) {}
}

/// Walks `root` in document order, driving `renderer`.
pub fn render<R: Renderer + ?Sized>(root: &Volltext, renderer: &mut R) {
    for block in &root.paragraphs {
        renderer.paragraph_start(block);
        render_children(&block.children, renderer);
        renderer.paragraph_end(block);
    }
}

fn render_children<R: Renderer + ?Sized>(children: &[Child], renderer: &mut R) {
    for child in children {
        match child {
            Child::Text(text) => renderer.text(text),
            Child::Inline(node) => render_inline(node, renderer),
        }
    }
}

fn render_inline<R: Renderer + ?Sized>(node: &InlineNode, renderer: &mut R) {
    match node {
        InlineNode::Box(b) => renderer.boxed(b),
        InlineNode::Referenz(r) => renderer.referenz(r),
        InlineNode::Formatierung(f) => {
            renderer.formatierung_start(f);
            render_children(&f.children, renderer);
            renderer.formatierung_end(f);
        }
    }
}

/// One line per paragraph; boxes as `[content]`, quotations in quotes,
/// super/subscript as `^{..}` / `_{..}`.
#[derive(Debug, Default)]
pub struct PlainTextRenderer {
    lines: Vec<String>,
    current: String,
}

impl PlainTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl Renderer for PlainTextRenderer {
    fn paragraph_start(&mut self, _block: &Block) {
        self.current.clear();
    }

    fn paragraph_end(&mut self, _block: &Block) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn text(&mut self, text: &Text) {
        self.current.push_str(text.as_str());
    }

    fn boxed(&mut self, node: &BoxNode) {
        self.current.push('[');
        self.current.push_str(&node.content);
        self.current.push(']');
    }

    fn referenz(&mut self, node: &Referenz) {
        self.current.push_str(&node.content);
    }

    fn formatierung_start(&mut self, node: &Formatierung) {
        match node.kind {
            FormatierungKind::Quote => self.current.push('"'),
            FormatierungKind::Superscript => self.current.push_str("^{"),
            FormatierungKind::Subscript => self.current.push_str("_{"),
            _ => {}
        }
    }

    fn formatierung_end(&mut self, node: &Formatierung) {
        match node.kind {
            FormatierungKind::Quote => self.current.push('"'),
            FormatierungKind::Superscript | FormatierungKind::Subscript => self.current.push('}'),
            _ => {}
        }
    }
}
