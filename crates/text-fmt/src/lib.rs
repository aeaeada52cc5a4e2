//! This crate contains the logic for turning hex-encoded inscription data into
//! text and classifying what that text is.

mod classify;
mod encoding;
mod error;
mod hex_text;

pub use classify::{
    ContentFormat, DecodedContent, classify, decode_inscription_content, describe_plain_content,
    inspect_content,
};
pub use encoding::TextEncoding;
pub use error::{TextFmtError, TextFmtResult};
pub use hex_text::{decode_hex, hex_to_text, looks_like_hex, strip_hex_input};
