//! # Editing Session
//!
//! Applies editor commands to a rich-text root and commits the result back
//! to the annotated tree.
//!
//! ## Principles
//!
//! - **Command-based editing**: every edit is a [`Cmd`]; applying it yields a
//!   [`Patch`] naming the changed paragraphs and the new caret
//! - **Invariants hold between commands**: a command either leaves a valid
//!   model or is rejected with an [`EditError`] and no change
//! - **Addressing**: nodes are addressed by paragraph index and child index;
//!   text positions add a byte offset into a text run
//!
//! ## Usage Pattern
//!
//! ```rust
//! use volltext_engine::editing::*;
//! use volltext_engine::tree::{AnnotatedNode, Element};
//!
//! let mut session = EditSession::open(vec![
//!     AnnotatedNode::text("Papier, "),
//!     Element::new("locus").with_text("1r").into(),
//! ]);
//!
//! let patch = session
//!     .apply(Cmd::SplitParagraph { at: TextPosition::new(0, 0, 7) })
//!     .unwrap();
//! assert_eq!(patch.version, 1);
//!
//! let committed = session.commit();
//! assert!(committed.errors.is_empty());
//! assert_eq!(committed.value.len(), 4);
//! ```

pub mod commands;
pub mod patch;
pub mod session;

pub use commands::{Cmd, NodePath, ReferenzUpdate, TextPosition};
pub use patch::Patch;
pub use session::{EditError, EditSession};
