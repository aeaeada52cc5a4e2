use bitcoin::{
    ScriptBuf,
    blockdata::script,
    opcodes::{
        OP_0,
        all::{OP_PUSHDATA1, OP_PUSHNUM_1},
    },
    script::PushBytesBuf,
};

use crate::{errors::EnvelopeBuildError, parser::find_marker, types::ORD_MARKER};

/// Largest push the parser can read back, the PUSHDATA2 limit.
const MAX_ENVELOPE_PUSH: usize = u16::MAX as usize;

/// Builds a script containing only an inscription envelope.
///
/// Creates a script with the structure:
/// ```text
/// <push "ord"> OP_1 <push content_type> OP_0 <push content>
/// ```
///
/// Each push uses the smallest encoding that fits.
///
/// # Errors
///
/// Returns [`EnvelopeBuildError`] if `content` is empty, or if either field is
/// too large for the parser to read back.
pub fn build_envelope_script(
    content_type: &[u8],
    content: &[u8],
) -> Result<ScriptBuf, EnvelopeBuildError> {
    build_envelope_container(&[], content_type, content)
}

/// Builds a scriptSig-like script with arbitrary pushes ahead of the envelope.
///
/// Creates a script with the structure:
/// ```text
/// <prefix_0>
/// ...
/// <prefix_n>
/// <push "ord"> OP_1 <push content_type> OP_0 <push content>
/// ```
///
/// The prefix usually holds the signature and pubkey that make the input
/// spendable.
///
/// # Errors
///
/// Returns [`EnvelopeBuildError`] if a prefix push cannot be converted to a
/// `PushBytesBuf`, if the prefix bytes contain a marker push that the parser
/// would stop at first, or for the same reasons as [`build_envelope_script`].
pub fn build_envelope_container(
    prefix: &[Vec<u8>],
    content_type: &[u8],
    content: &[u8],
) -> Result<ScriptBuf, EnvelopeBuildError> {
    let mut builder = script::Builder::new();

    for push in prefix {
        let push_bytes = PushBytesBuf::try_from(push.clone())
            .map_err(|_| EnvelopeBuildError::PrefixConversion { len: push.len() })?;
        builder = builder.push_slice(push_bytes);
    }

    let envelope_start = builder.len();
    let script = push_envelope(builder, content_type, content)?.into_script();

    // The parser takes the first marker in the script, which has to be ours.
    match find_marker(script.as_bytes()) {
        Some(offset) if offset == envelope_start => Ok(script),
        found => Err(EnvelopeBuildError::PrefixContainsMarker {
            offset: found.unwrap_or(envelope_start),
        }),
    }
}

/// Helper function to add the envelope opcodes and fields to a builder.
fn push_envelope(
    mut builder: script::Builder,
    content_type: &[u8],
    content: &[u8],
) -> Result<script::Builder, EnvelopeBuildError> {
    if content.is_empty() {
        return Err(EnvelopeBuildError::EmptyContent);
    }

    for field in [content_type, content] {
        if field.len() > MAX_ENVELOPE_PUSH {
            return Err(EnvelopeBuildError::PushTooLarge { len: field.len() });
        }
    }

    let content_type_bytes = PushBytesBuf::try_from(content_type.to_vec())
        .map_err(|_| EnvelopeBuildError::ContentTypeConversion)?;
    let content_bytes = PushBytesBuf::try_from(content.to_vec())
        .map_err(|_| EnvelopeBuildError::ContentConversion)?;

    builder = builder.push_slice(ORD_MARKER).push_opcode(OP_PUSHNUM_1);

    // A minimal empty push is OP_0, which would read back as the separator.
    builder = if content_type.is_empty() {
        builder.push_opcode(OP_PUSHDATA1).push_opcode(OP_0)
    } else {
        builder.push_slice(content_type_bytes)
    };

    builder = builder.push_opcode(OP_0).push_slice(content_bytes);

    Ok(builder)
}
