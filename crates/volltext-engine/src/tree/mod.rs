//! # Annotated Tree
//!
//! The persisted document's node graph: text nodes and origin-tagged elements
//! with ordered `data_`-prefixed attributes and children of arbitrary depth.
//!
//! ## Modules
//!
//! - **`node`**: `AnnotatedNode` and `Element`
//! - **`attributes`**: ordered attribute map with prefixed keys and typed accessors
//! - **`tags`**: origin tags the classifier knows about
//! - **`classify`**: pure predicates (void, inline, term, normdatum, ...)
//!
//! No tag is structurally privileged: any element may appear wherever a child
//! is expected. Only the classifier gives tags meaning.

pub mod attributes;
pub mod classify;
pub mod node;
pub mod tags;

pub use attributes::{Attr, Attributes};
pub use classify::TermKind;
pub use node::{AnnotatedNode, Element};
