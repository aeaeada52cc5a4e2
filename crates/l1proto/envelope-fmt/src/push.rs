//! Decoding of single data pushes out of raw script bytes.
//!
//! Only the push forms that inscription envelopes use are recognized:
//!
//! ```text
//! 0x01..=0x4b   direct push, the opcode is the length
//! 0x4c          OP_PUSHDATA1, 1 byte length
//! 0x4d          OP_PUSHDATA2, 2 byte little-endian length
//! ```
//!
//! Anything else, `OP_0` and `OP_PUSHDATA4` included, is not a push here.

use tracing::trace;

/// `OP_PUSHBYTES_1`
const DIRECT_PUSH_MIN: u8 = 0x01;
/// `OP_PUSHBYTES_75`
const DIRECT_PUSH_MAX: u8 = 0x4b;
/// `OP_PUSHDATA1`
const PUSHDATA1: u8 = 0x4c;
/// `OP_PUSHDATA2`
const PUSHDATA2: u8 = 0x4d;

/// A push decoded at some offset of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushRef<'b> {
    /// The pushed bytes.
    payload: &'b [u8],

    /// Offset of the first byte after the push.
    next_offset: usize,
}

impl<'b> PushRef<'b> {
    /// Gets the pushed bytes.
    pub fn payload(&self) -> &'b [u8] {
        self.payload
    }

    /// Gets the offset just past the push.
    pub fn next_offset(&self) -> usize {
        self.next_offset
    }
}

/// Decodes the push whose opcode is at `offset`.
///
/// Returns `None` if `offset` is out of range, the opcode is not a
/// recognized push, or the length field or payload would run past the end
/// of `script`. Never reads out of bounds, whatever the length fields say.
pub fn decode_push(script: &[u8], offset: usize) -> Option<PushRef<'_>> {
    let opcode = *script.get(offset)?;

    let (len, data_start) = match opcode {
        DIRECT_PUSH_MIN..=DIRECT_PUSH_MAX => (opcode as usize, offset.checked_add(1)?),
        PUSHDATA1 => {
            let len_at = offset.checked_add(1)?;
            (*script.get(len_at)? as usize, offset.checked_add(2)?)
        }
        PUSHDATA2 => {
            let len_at = offset.checked_add(1)?;
            let len_bytes = script.get(len_at..len_at.checked_add(2)?)?;
            let len = u16::from_le_bytes([len_bytes[0], len_bytes[1]]);
            (len as usize, offset.checked_add(3)?)
        }
        _ => {
            trace!(offset, opcode, "not a push opcode");
            return None;
        }
    };

    let data_end = data_start.checked_add(len)?;
    let Some(payload) = script.get(data_start..data_end) else {
        trace!(offset, len, script_len = script.len(), "push runs past end of script");
        return None;
    };

    Some(PushRef {
        payload,
        next_offset: data_end,
    })
}

/// Decodes the push at `offset`, treating anything undecodable as an empty
/// push that consumes nothing.
///
/// Returns the payload and the offset to continue from.
pub fn read_push_or_empty(script: &[u8], offset: usize) -> (&[u8], usize) {
    match decode_push(script, offset) {
        Some(push) => (push.payload, push.next_offset),
        None => (&[][..], offset),
    }
}
