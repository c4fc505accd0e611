//! Volltext transformation: the single void document root.

use crate::{
    rich_text::{Block, RootChild, Volltext},
    text::empty_text,
};

pub fn transform(blocks: Vec<Block>) -> Volltext {
    Volltext::new(blocks)
}

/// The paragraph list, starting and ending with a text position.
pub fn invert(root: &Volltext) -> Vec<RootChild> {
    let mut out = Vec::with_capacity(root.paragraphs.len() + 2);
    out.push(RootChild::Text(empty_text()));
    out.extend(root.paragraphs.iter().cloned().map(RootChild::Block));
    out.push(RootChild::Text(empty_text()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rich_text::Child;

    #[test]
    fn root_is_void_with_paragraphs() {
        let root = transform(vec![Block::empty(), Block::new(vec![Child::text("a")])]);
        assert_eq!(root.children, vec![empty_text()]);
        assert_eq!(root.paragraphs.len(), 2);
    }

    #[test]
    fn inversion_pads_with_text_positions() {
        let root = transform(vec![Block::empty()]);
        assert_eq!(
            invert(&root),
            vec![
                RootChild::Text(empty_text()),
                RootChild::Block(Block::empty()),
                RootChild::Text(empty_text()),
            ]
        );
    }
}
