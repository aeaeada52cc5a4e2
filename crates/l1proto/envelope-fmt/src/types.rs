use serde::Serialize;

/// Marker bytes identifying an inscription envelope.
pub const ORD_MARKER: &[u8; 3] = b"ord";

/// Length of the marker push, i.e. the push opcode followed by [`ORD_MARKER`].
pub const MARKER_PUSH_LEN: usize = 1 + ORD_MARKER.len();

/// Opcode pushing the marker, `OP_PUSHBYTES_3`.
pub const MARKER_PUSH_OPCODE: u8 = 0x03;

/// Protocol id opcode that must directly follow the marker, `OP_1`.
pub const PROTOCOL_ID_OPCODE: u8 = 0x51;

/// Separator opcode between the content type and the content, `OP_0`.
pub const SEPARATOR_OPCODE: u8 = 0x00;

/// An inscription extracted from a script.
///
/// The content is never empty, the parser refuses to construct an envelope
/// otherwise. The content type may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Envelope {
    content_type: String,
    content: String,
}

impl Envelope {
    pub(crate) fn new(content_type: String, content: String) -> Self {
        debug_assert!(!content.is_empty(), "envelope: empty content");
        Self {
            content_type,
            content,
        }
    }

    /// Gets the content type, possibly empty.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Gets the content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Splits the envelope into `(content_type, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.content_type, self.content)
    }
}
