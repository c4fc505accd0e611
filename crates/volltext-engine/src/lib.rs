//! # volltext-engine
//!
//! Bidirectional transformation between annotated manuscript-description trees
//! and the flat rich-text model manipulated by the editor.
//!
//! ## Modules
//!
//! - **`text`**: whitespace normalization and the canonical empty-text marker
//! - **`tree`**: the annotated tree (origin-tagged elements with `data_` attributes)
//!   and the classifier predicates over it
//! - **`rich_text`**: the closed rich-text model, the element-kind discriminator,
//!   model invariants and the renderer interface
//! - **`transform`**: box, inline, paragraph and volltext transformations and
//!   their inverses
//! - **`editing`**: an editing session applying commands to a rich-text root
//!
//! ## Round trip
//!
//! ```rust
//! use volltext_engine::{text::strip_empty_text, transform, tree::{AnnotatedNode, Element}};
//!
//! let siblings = vec![
//!     AnnotatedNode::text("Brief an "),
//!     Element::new("persName")
//!         .with_attr("ref", "https://d-nb.info/gnd/118540238")
//!         .with_text("Goethe")
//!         .into(),
//!     AnnotatedNode::from(Element::linebreak()),
//!     AnnotatedNode::text("Weimar"),
//! ];
//!
//! let root = transform::transform(siblings.clone());
//! assert_eq!(root.paragraphs.len(), 2);
//!
//! let inverted = transform::invert(&root);
//! assert!(inverted.errors.is_empty());
//! assert_eq!(strip_empty_text(inverted.value), siblings);
//! ```

pub mod editing;
pub mod error;
pub mod rich_text;
pub mod text;
pub mod transform;
pub mod tree;

// Re-export key types for easier usage
pub use editing::{Cmd, EditError, EditSession, Patch};
pub use error::{SerializationError, VolltextError};
pub use rich_text::{
    Block, BoxNode, Child, ElementKind, Formatierung, FormatierungKind, InlineNode, Referenz,
    ReferenzKind, RootChild, Volltext,
};
pub use text::Text;
pub use transform::Inverted;
pub use tree::{AnnotatedNode, Attributes, Element};
