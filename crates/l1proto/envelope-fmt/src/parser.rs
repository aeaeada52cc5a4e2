use bitcoin::Script;
use tracing::{debug, trace};

use crate::{
    errors::EnvelopeParseError,
    push::read_push_or_empty,
    types::{
        Envelope, MARKER_PUSH_LEN, MARKER_PUSH_OPCODE, ORD_MARKER, PROTOCOL_ID_OPCODE,
        SEPARATOR_OPCODE,
    },
};

/// Finds the offset of the first `OP_PUSHBYTES_3 "ord"` marker push.
pub fn find_marker(script: &[u8]) -> Option<usize> {
    script
        .windows(MARKER_PUSH_LEN)
        .position(|w| w[0] == MARKER_PUSH_OPCODE && w[1..] == ORD_MARKER[..])
}

/// Extracts the inscription envelope from raw script bytes, if there is one.
///
/// The script is scanned for:
///
/// ```text
/// <push "ord"> OP_1 <push content_type> OP_0 <push content>
/// ```
///
/// starting at the first marker. Anything else before the marker, like
/// signatures and pubkeys in a scriptSig, is ignored.
pub fn extract_envelope(script: &[u8]) -> Option<Envelope> {
    parse_envelope(script)
        .inspect_err(|e| debug!(%e, script_len = script.len(), "no inscription envelope"))
        .ok()
}

/// Same as [`extract_envelope`], over a [`Script`].
pub fn extract_envelope_from_script(script: &Script) -> Option<Envelope> {
    extract_envelope(script.as_bytes())
}

/// Parses the inscription envelope from raw script bytes.
///
/// Malformed or truncated pushes are read as empty pushes that consume
/// nothing. An empty content type is accepted, an empty content is not.
///
/// # Errors
///
/// Returns [`EnvelopeParseError`] describing the first step at which the
/// script stopped looking like an envelope.
pub fn parse_envelope(script: &[u8]) -> Result<Envelope, EnvelopeParseError> {
    let ord_offset = find_marker(script).ok_or(EnvelopeParseError::MissingMarker)?;
    trace!(ord_offset, "found ord marker");

    let mut offset = ord_offset + MARKER_PUSH_LEN;
    if script.get(offset) != Some(&PROTOCOL_ID_OPCODE) {
        return Err(EnvelopeParseError::MissingProtocolId { offset });
    }
    offset += 1;

    let (content_type, next) = read_push_or_empty(script, offset);
    offset = next;

    if script.get(offset) != Some(&SEPARATOR_OPCODE) {
        return Err(EnvelopeParseError::MissingSeparator { offset });
    }
    offset += 1;

    let (content, _) = read_push_or_empty(script, offset);
    if content.is_empty() {
        return Err(EnvelopeParseError::EmptyContent);
    }

    Ok(Envelope::new(
        String::from_utf8_lossy(content_type).into_owned(),
        String::from_utf8_lossy(content).into_owned(),
    ))
}
