use std::{fmt, str};

use serde::Serialize;

use crate::error::TextFmtError;

/// Text encodings decoded bytes can be interpreted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TextEncoding {
    /// UTF-8.
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,

    /// 7-bit ASCII.
    #[serde(rename = "ascii")]
    Ascii,

    /// ISO-8859-1, every byte maps to the code point of the same value.
    #[serde(rename = "latin-1")]
    Latin1,

    /// Little-endian UTF-16.
    #[serde(rename = "utf-16-le")]
    Utf16Le,

    /// Big-endian UTF-16.
    #[serde(rename = "utf-16-be")]
    Utf16Be,
}

impl TextEncoding {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin-1",
            Self::Utf16Le => "utf-16-le",
            Self::Utf16Be => "utf-16-be",
        }
    }

    /// Decodes `bytes`, replacing each invalid sequence with U+FFFD.
    pub fn decode_lossy(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Ascii => bytes
                .iter()
                .map(|&b| {
                    if b.is_ascii() {
                        b as char
                    } else {
                        char::REPLACEMENT_CHARACTER
                    }
                })
                .collect(),
            Self::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Self::Utf16Le => decode_utf16_lossy(bytes, u16::from_le_bytes),
            Self::Utf16Be => decode_utf16_lossy(bytes, u16::from_be_bytes),
        }
    }
}

fn decode_utf16_lossy(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let trailing = !chunks.remainder().is_empty();

    let units = chunks.map(|c| unit([c[0], c[1]]));
    let mut out: String = char::decode_utf16(units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    if trailing {
        out.push(char::REPLACEMENT_CHARACTER);
    }
    out
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for TextEncoding {
    type Err = TextFmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(Self::Latin1),
            "utf-16-le" | "utf-16le" | "utf16le" => Ok(Self::Utf16Le),
            "utf-16-be" | "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            _ => Err(TextFmtError::UnknownEncoding(s.to_owned())),
        }
    }
}
