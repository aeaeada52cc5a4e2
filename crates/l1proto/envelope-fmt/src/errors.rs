use thiserror::Error;

/// Reasons a script does not contain an inscription envelope.
///
/// None of these are faults, they explain why [`crate::parser::extract_envelope`]
/// returned `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeParseError {
    /// No `ord` marker push anywhere in the script.
    #[error("no ord marker found in script")]
    MissingMarker,

    /// The marker is not directly followed by `OP_1`.
    #[error("missing OP_1 protocol id at offset {offset}")]
    MissingProtocolId {
        /// Offset where the protocol id was expected.
        offset: usize,
    },

    /// The content type push is not followed by `OP_0`.
    #[error("missing OP_0 separator at offset {offset}")]
    MissingSeparator {
        /// Offset where the separator was expected.
        offset: usize,
    },

    /// The content push is absent, malformed or zero length.
    #[error("envelope content is empty")]
    EmptyContent,
}

/// Errors that can occur while building inscription envelope scripts.
#[derive(Debug, Error)]
pub enum EnvelopeBuildError {
    /// An envelope must carry some content.
    #[error("envelope content is empty")]
    EmptyContent,

    /// A field larger than a PUSHDATA2 can describe, the parser could not
    /// read it back.
    #[error("{len} byte push exceeds the {max} byte limit", max = u16::MAX)]
    PushTooLarge {
        /// Size of the rejected field.
        len: usize,
    },

    /// Failed to convert the content type into `PushBytesBuf`.
    #[error("failed to convert content type to push bytes buffer")]
    ContentTypeConversion,

    /// Failed to convert the content into `PushBytesBuf`.
    #[error("failed to convert content to push bytes buffer")]
    ContentConversion,

    /// Failed to convert a prefix push into `PushBytesBuf`.
    #[error("failed to convert {len} byte prefix push to push bytes buffer")]
    PrefixConversion {
        /// Size of the push that failed to convert.
        len: usize,
    },

    /// The prefix pushes contain `ord` marker bytes, the parser would stop
    /// there instead of at the envelope.
    #[error("prefix contains an ord marker at offset {offset}")]
    PrefixContainsMarker {
        /// Offset of the first marker in the built script.
        offset: usize,
    },
}
