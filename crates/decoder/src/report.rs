use serde::Serialize;
use tracing::{debug, info};
use zerd_envelope_fmt::{Envelope, errors::EnvelopeParseError, parser::parse_envelope};
use zerd_text_fmt::{DecodedContent, TextEncoding, decode_hex, hex_to_text, inspect_content};

use crate::error::DecoderResult;

/// Result of decoding a hex string straight to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexReport {
    /// The input, as given.
    pub hex: String,

    /// The decoded text.
    pub decoded: String,

    /// Encoding used to decode.
    pub encoding: TextEncoding,
}

/// An inscription found in a scriptSig, with its content decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InscriptionReport {
    /// Content type from the envelope, possibly empty.
    pub content_type: String,

    /// Raw content from the envelope.
    pub content: String,

    /// The content, hex-decoded if it looked like hex, and classified.
    pub decoded: DecodedContent,
}

impl From<Envelope> for InscriptionReport {
    fn from(env: Envelope) -> Self {
        let (content_type, content) = env.into_parts();
        let decoded = inspect_content(&content);
        Self {
            content_type,
            content,
            decoded,
        }
    }
}

/// Outcome of looking for an inscription in a scriptSig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSigOutcome {
    /// An envelope was found.
    Found(InscriptionReport),

    /// No envelope, and the reason the parser gave up.
    NotFound(EnvelopeParseError),
}

impl ScriptSigOutcome {
    /// Returns the report if an inscription was found.
    pub fn found(self) -> Option<InscriptionReport> {
        match self {
            Self::Found(report) => Some(report),
            Self::NotFound(_) => None,
        }
    }

    /// Returns if an inscription was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Decodes a hex string to text in the given encoding.
///
/// # Errors
///
/// Returns [`crate::DecoderError::Text`] if `hex` is not valid hex.
pub fn decode_hex_report(hex: &str, encoding: TextEncoding) -> DecoderResult<HexReport> {
    let decoded = hex_to_text(hex, encoding)?;
    debug!(%encoding, text_len = decoded.len(), "decoded hex text");
    Ok(HexReport {
        hex: hex.to_owned(),
        decoded,
        encoding,
    })
}

/// Decodes scriptSig hex and looks for an inscription envelope in it.
///
/// Not finding one is a normal outcome and not an error.
///
/// # Errors
///
/// Returns [`crate::DecoderError::Text`] if `script_sig_hex` is not valid hex.
pub fn decode_script_sig(script_sig_hex: &str) -> DecoderResult<ScriptSigOutcome> {
    let script = decode_hex(script_sig_hex)?;

    let outcome = match parse_envelope(&script) {
        Ok(env) => {
            let report = InscriptionReport::from(env);
            info!(
                content_type = %report.content_type,
                format = report.decoded.format.map(|f| f.as_str()),
                "found inscription"
            );
            ScriptSigOutcome::Found(report)
        }
        Err(reason) => {
            debug!(%reason, script_len = script.len(), "no inscription in scriptSig");
            ScriptSigOutcome::NotFound(reason)
        }
    };

    Ok(outcome)
}

/// Serializes a report as indented JSON.
///
/// # Errors
///
/// Returns [`crate::DecoderError::Json`] if serialization fails.
pub fn to_pretty_json<T: Serialize>(report: &T) -> DecoderResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
