use super::commands::TextPosition;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Paragraph indices, in the edited root, whose content changed.
    pub changed: std::ops::Range<usize>,
    pub caret: Option<TextPosition>,
    pub version: u64,
}
