//! # Rich-Text Model
//!
//! The closed model the editor manipulates: a `Volltext` root holding
//! paragraphs (`Block`) whose children are text runs and three inline kinds.
//!
//! ## Modules
//!
//! - **`types`**: the node types (`Volltext`, `Block`, `BoxNode`, `Referenz`,
//!   `Formatierung`) and their child enums
//! - **`kind`**: the element-kind discriminator over rich-text origin tags
//! - **`invariants`**: shape checks (void children, no consecutive text, ...)
//! - **`render`**: the interface a presentation layer implements, plus a
//!   plain-text preview
//!
//! ## Key Invariants
//!
//! - `BoxNode` and `Referenz` children are exactly `[{text: ""}]`
//! - paragraphs never nest, formatting spans never nest
//! - no two adjacent text runs; every inline node is bordered by text

pub mod invariants;
pub mod kind;
pub mod render;
pub mod types;

pub use kind::ElementKind;
pub use render::{PlainTextRenderer, Renderer, render};
pub use types::{
    Block, BoxNode, Child, Formatierung, FormatierungKind, InlineNode, Referenz, ReferenzKind,
    RichElement, RootChild, Volltext,
};
