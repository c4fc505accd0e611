use serde::Serialize;

/// Fatal errors: the rich-text vocabulary and its consumers disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VolltextError {
    #[error("unknown rich-text origin tag: {0}")]
    UnknownOrigin(String),
}

/// A reconciliation conflict found while inverting an edited node.
///
/// Recorded in the accumulator threaded through inversion; the inverter
/// substitutes a best-effort element and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "error", rename_all = "camelCase")]
pub enum SerializationError {
    #[error("<{origin}> has no {attribute} identifier; kept the previous value")]
    MissingIdentifier { origin: String, attribute: String },
    #[error("<{origin}> has structured content; edited text {content:?} was not applied")]
    StructuredContentEdited { origin: String, content: String },
    #[error("<{origin}> has an empty display text; kept the previous content")]
    EmptyContent { origin: String },
    #[error("formatting span <{origin}> has no content")]
    EmptyFormatierung { origin: String },
}

impl SerializationError {
    pub fn origin(&self) -> &str {
        match self {
            Self::MissingIdentifier { origin, .. }
            | Self::StructuredContentEdited { origin, .. }
            | Self::EmptyContent { origin }
            | Self::EmptyFormatierung { origin } => origin,
        }
    }
}

/// Pushes onto the accumulator, logging as it goes.
pub(crate) fn record(errors: &mut Vec<SerializationError>, error: SerializationError) {
    log::warn!("serialization conflict: {error}");
    errors.push(error);
}
