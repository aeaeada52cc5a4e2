use thiserror::Error;

/// Errors for decoding hex-encoded text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TextFmtError {
    /// Input had an odd length or non-hex characters.
    #[error("invalid hex string")]
    InvalidHex(#[from] hex::FromHexError),

    /// The requested text encoding is not supported.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Wrapper result type.
pub type TextFmtResult<T> = Result<T, TextFmtError>;
