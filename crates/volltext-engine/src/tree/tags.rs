//! Origin tags of the annotated tree that carry meaning for the classifier.
//!
//! All tag strings live here; classifier and converters refer to these
//! constants and never spell a tag themselves.

pub struct Tag;

impl Tag {
    pub const LINEBREAK: &'static str = "lb";
    pub const PAGE_BREAK: &'static str = "pb";
    pub const COLUMN_BREAK: &'static str = "cb";

    pub const PERS_NAME: &'static str = "persName";
    pub const PLACE_NAME: &'static str = "placeName";
    pub const ORG_NAME: &'static str = "orgName";
    pub const LOCUS: &'static str = "locus";
    pub const QUOTE: &'static str = "quote";
    pub const TITLE: &'static str = "title";
    pub const NOTE: &'static str = "note";
    pub const INDEX: &'static str = "index";
    pub const TERM: &'static str = "term";
    pub const REF: &'static str = "ref";
    pub const AUTHOR: &'static str = "author";
    pub const INCIPIT: &'static str = "incipit";
    pub const EXPLICIT: &'static str = "explicit";
    pub const HI: &'static str = "hi";

    /// Self-closing semantic tags.
    pub const VOID: &'static [&'static str] = &[Self::LINEBREAK, Self::PAGE_BREAK, Self::COLUMN_BREAK];

    /// Tags that render inline relative to surrounding text.
    pub const INLINE: &'static [&'static str] = &[
        Self::PERS_NAME,
        Self::PLACE_NAME,
        Self::ORG_NAME,
        Self::LOCUS,
        Self::QUOTE,
        Self::TITLE,
        Self::NOTE,
        Self::INDEX,
        Self::TERM,
        Self::REF,
        Self::AUTHOR,
        Self::INCIPIT,
        Self::EXPLICIT,
        Self::HI,
    ];

    /// Authority-linkable tags.
    pub const NORMDATUM: &'static [&'static str] =
        &[Self::PERS_NAME, Self::PLACE_NAME, Self::ORG_NAME];
}

/// `data_rend` values of `hi` that make it a formatting span.
pub struct Rend;

impl Rend {
    pub const SUPERSCRIPT: &'static str = "superscript";
    pub const SUBSCRIPT: &'static str = "subscript";
}

/// `data_type` values of `term` that the classifier recognizes.
pub struct TermType;

impl TermType {
    pub const LANGUAGE: &'static str = "textLang";
    pub const ORIGIN_PLACE: &'static str = "origPlace";
}
