//! Report assembly for the `zerd-decode` tool.
//!
//! Two modes are supported: decoding a hex string straight to text, and
//! pulling an inscription envelope out of a scriptSig and decoding its content.

// Only the `zerd-decode` binary uses these.
use anyhow as _;
use clap as _;
use tracing_subscriber as _;

#[cfg(test)]
use hex as _;
#[cfg(test)]
use proptest as _;

mod error;
mod report;

pub use error::{DecoderError, DecoderResult};
pub use report::{
    HexReport, InscriptionReport, ScriptSigOutcome, decode_hex_report, decode_script_sig,
    to_pretty_json,
};
