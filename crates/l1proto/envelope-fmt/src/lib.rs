//! Inscription envelope format utilities.
//!
//! This crate provides functionality for finding and building the inscription
//! envelopes that get embedded in a transaction input's scriptSig.
//!
//! # Envelope Structure
//!
//! An envelope has the following structure:
//! ```text
//! <push "ord"> OP_1 <push content_type> OP_0 <push content>
//! ```
//!
//! It may be preceded by anything, typically the signature and pubkey that
//! make the input spendable. Pushes may be direct, `OP_PUSHDATA1` or
//! `OP_PUSHDATA2`. Scripts are untrusted, nothing in here ever reads past the
//! end of the buffer whatever the length fields claim.
//!
//! # Examples
//!
//! Extracting an envelope:
//! ```
//! use zerd_envelope_fmt::parser::extract_envelope;
//!
//! let script = envelope_bytes();
//! let env = extract_envelope(&script).unwrap();
//! assert_eq!(env.content_type(), "text/plain");
//! assert_eq!(env.content(), "hello");
//! # fn envelope_bytes() -> Vec<u8> {
//! #     let mut v = vec![0x03, b'o', b'r', b'd', 0x51, 0x0a];
//! #     v.extend_from_slice(b"text/plain");
//! #     v.extend_from_slice(&[0x00, 0x05]);
//! #     v.extend_from_slice(b"hello");
//! #     v
//! # }
//! ```
//!
//! Building one:
//! ```
//! use zerd_envelope_fmt::builder::build_envelope_container;
//!
//! let sig = vec![0x30; 71];
//! let pubkey = vec![0x02; 33];
//! let script = build_envelope_container(&[sig, pubkey], b"text/plain", b"hello").unwrap();
//! ```

/// Inscription envelope builder utilities.
pub mod builder;

/// Error types for envelope operations.
pub mod errors;

/// Inscription envelope parser utilities.
pub mod parser;

pub mod push;

mod types;

pub use types::{
    Envelope, MARKER_PUSH_LEN, MARKER_PUSH_OPCODE, ORD_MARKER, PROTOCOL_ID_OPCODE,
    SEPARATOR_OPCODE,
};
