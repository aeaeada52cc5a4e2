//! Classification of inscription content.

use serde::Serialize;
use tracing::debug;

use crate::{
    encoding::TextEncoding,
    hex_text::{hex_to_text, looks_like_hex},
};

/// Prefixes of tagged proverb text.
const STS_PREFIXES: [&str; 2] = ["STS|", "STM-"];

/// Prefix of format-marked text.
const RPP_V1_PREFIX: &str = "rpp-v1";

/// Recognized textual formats of decoded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFormat {
    /// Tagged proverb text, `STS|...` or `STM-...`.
    Sts,

    /// Text carrying the `rpp-v1` format marker.
    RppV1,

    /// Anything else.
    Plain,
}

impl ContentFormat {
    /// Returns the string representation used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sts => "sts",
            Self::RppV1 => "rpp-v1",
            Self::Plain => "plain",
        }
    }
}

/// Classifies decoded text by its prefix.
pub fn classify(text: &str) -> ContentFormat {
    if STS_PREFIXES.iter().any(|p| text.starts_with(*p)) {
        ContentFormat::Sts
    } else if text.starts_with(RPP_V1_PREFIX) {
        ContentFormat::RppV1
    } else {
        ContentFormat::Plain
    }
}

/// Result of decoding inscription content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedContent {
    /// If the content could be decoded.
    pub decoded: bool,

    /// The decoded text, empty if decoding failed.
    pub text: String,

    /// The hex the text was decoded from, if it was hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_hex: Option<String>,

    /// Encoding the hex was decoded with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<TextEncoding>,

    /// Format of the text, if decoding succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ContentFormat>,

    /// Why decoding failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decodes hex inscription content as UTF-8 text and classifies it.
///
/// Never fails, a decode error is reported in the returned value.
pub fn decode_inscription_content(hex_content: &str) -> DecodedContent {
    let encoding = TextEncoding::Utf8;
    let mut result = DecodedContent {
        decoded: false,
        text: String::new(),
        raw_hex: Some(hex_content.to_owned()),
        encoding: Some(encoding),
        format: None,
        error: None,
    };

    match hex_to_text(hex_content, encoding) {
        Ok(text) => {
            result.decoded = true;
            result.format = Some(classify(&text));
            result.text = text;
        }
        Err(e) => {
            debug!(%e, "inscription content is not decodable hex");
            result.error = Some(match std::error::Error::source(&e) {
                Some(source) => format!("{e}: {source}"),
                None => e.to_string(),
            });
        }
    }

    result
}

/// Describes inscription content that is already plain text.
///
/// Only the `STS|` prefix is recognized on this path.
pub fn describe_plain_content(text: &str) -> DecodedContent {
    let format = if text.starts_with(STS_PREFIXES[0]) {
        ContentFormat::Sts
    } else {
        ContentFormat::Plain
    };

    DecodedContent {
        decoded: true,
        text: text.to_owned(),
        raw_hex: None,
        encoding: None,
        format: Some(format),
        error: None,
    }
}

/// Decodes inscription content if it looks like hex, otherwise describes it
/// as plain text.
pub fn inspect_content(content: &str) -> DecodedContent {
    if looks_like_hex(content) {
        decode_inscription_content(content)
    } else {
        describe_plain_content(content)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("STS|proverb"), ContentFormat::Sts);
        assert_eq!(classify("STM-0001 proverb"), ContentFormat::Sts);
        assert_eq!(classify("rpp-v1|data"), ContentFormat::RppV1);
        assert_eq!(classify("sts|lowercase"), ContentFormat::Plain);
        assert_eq!(classify(""), ContentFormat::Plain);
    }

    #[test]
    fn test_decode_sts_hex() {
        // "STS|wisdom"
        let res = decode_inscription_content("5354537c776973646f6d");
        assert!(res.decoded);
        assert_eq!(res.text, "STS|wisdom");
        assert_eq!(res.format, Some(ContentFormat::Sts));
        assert_eq!(res.error, None);
    }

    #[test]
    fn test_decode_prefixed_hex() {
        // "rpp-v1"
        let res = decode_inscription_content("0x7270702d7631");
        assert_eq!(res.text, "rpp-v1");
        assert_eq!(res.format, Some(ContentFormat::RppV1));
        assert_eq!(res.raw_hex.as_deref(), Some("0x7270702d7631"));
    }

    #[test]
    fn test_decode_bad_hex_reports_error() {
        let res = decode_inscription_content("0xnope");
        assert!(!res.decoded);
        assert!(res.text.is_empty());
        assert_eq!(res.format, None);
        let error = res.error.unwrap();
        assert!(error.starts_with("invalid hex string: "));
        assert_eq!(error.matches("invalid hex string").count(), 1);
    }

    #[test]
    fn test_inspect_content_picks_path() {
        let res = inspect_content("STM-1 not hex");
        // The plain path only knows about STS|.
        assert_eq!(res.format, Some(ContentFormat::Plain));
        assert_eq!(res.raw_hex, None);

        let res = inspect_content("STS|plain text");
        assert_eq!(res.format, Some(ContentFormat::Sts));

        let res = inspect_content("53544d2d31");
        assert_eq!(res.text, "STM-1");
        assert_eq!(res.format, Some(ContentFormat::Sts));
    }

    #[test]
    fn test_serialize() {
        let res = inspect_content("68 69");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({
                "decoded": true,
                "text": "hi",
                "raw_hex": "68 69",
                "encoding": "utf-8",
                "format": "plain",
            })
        );

        let res = describe_plain_content("hello");
        assert_eq!(
            serde_json::to_value(&res).unwrap(),
            json!({ "decoded": true, "text": "hello", "format": "plain" })
        );
    }
}
