//! # Element-Kind Discriminator
//!
//! Fixed lookup from every rich-text origin tag to one of four kinds. The
//! transformation layer uses it to pick an inverter; the editing surface uses
//! it to decide void/inline/block behavior. Nothing else about a node may
//! influence those decisions.

use serde::Serialize;

use crate::error::VolltextError;

use super::types::{Block, Child, RichElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Box,
    Block,
    Referenz,
    Formatierung,
}

/// The complete rich-text vocabulary.
pub const VOCABULARY: &[(&str, ElementKind)] = &[
    ("paragraph", ElementKind::Block),
    ("volltext", ElementKind::Box),
    ("box", ElementKind::Box),
    ("persName", ElementKind::Referenz),
    ("placeName", ElementKind::Referenz),
    ("orgName", ElementKind::Referenz),
    ("ref", ElementKind::Referenz),
    ("term", ElementKind::Referenz),
    ("author", ElementKind::Formatierung),
    ("title", ElementKind::Formatierung),
    ("incipit", ElementKind::Formatierung),
    ("explicit", ElementKind::Formatierung),
    ("quote", ElementKind::Formatierung),
    ("superscript", ElementKind::Formatierung),
    ("subscript", ElementKind::Formatierung),
];

impl ElementKind {
    /// Looks up the kind of a rich-text origin tag.
    ///
    /// An unknown tag means the vocabulary and the code producing rich-text
    /// nodes are out of sync; callers should abort.
    pub fn of(origin: &str) -> Result<Self, VolltextError> {
        VOCABULARY
            .iter()
            .find(|(tag, _)| *tag == origin)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| VolltextError::UnknownOrigin(origin.to_string()))
    }

    pub fn is_void(self) -> bool {
        matches!(self, Self::Box | Self::Referenz)
    }

    pub fn is_inline(self) -> bool {
        self.is_void() || matches!(self, Self::Formatierung)
    }
}

pub fn is_inline(origin: &str) -> Result<bool, VolltextError> {
    Ok(ElementKind::of(origin)?.is_inline())
}

/// A block is valid iff its kind is `block` and every child is text or inline.
pub fn is_valid_block(block: &Block) -> Result<bool, VolltextError> {
    if ElementKind::of(block.origin())? != ElementKind::Block {
        return Ok(false);
    }
    for child in &block.children {
        if let Child::Inline(node) = child
            && !is_inline(node.origin())?
        {
            return Ok(false);
        }
    }
    Ok(true)
}
