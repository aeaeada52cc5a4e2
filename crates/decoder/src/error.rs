use thiserror::Error;
use zerd_text_fmt::TextFmtError;

/// Errors from decoding hex input into reports.
#[derive(Debug, Error)]
pub enum DecoderError {
    /// The input could not be decoded as hex text.
    #[error(transparent)]
    Text(#[from] TextFmtError),

    /// A report could not be serialized.
    #[error("serializing report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wrapper result type.
pub type DecoderResult<T> = Result<T, DecoderError>;
